//! Copy history domain module

mod entry;
mod log;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use entry::{HistoryEntry, DISPLAY_TEXT_LIMIT};
pub use log::HistoryLog;

/// Number of entries kept when nothing else is configured
pub const DEFAULT_HISTORY_CAP: usize = 5;

/// Subscription plan, which bounds how large the history may grow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
}

impl Plan {
    /// Largest history cap allowed on this plan
    pub const fn ceiling(&self) -> usize {
        match self {
            Self::Free => 5,
            Self::Pro => 50,
        }
    }

    /// Clamp a requested cap into `1..=ceiling`
    pub fn clamp_cap(&self, requested: usize) -> usize {
        requested.clamp(1, self.ceiling())
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_plan_caps_at_five() {
        assert_eq!(Plan::Free.clamp_cap(20), 5);
        assert_eq!(Plan::Free.clamp_cap(3), 3);
    }

    #[test]
    fn pro_plan_allows_larger_history() {
        assert_eq!(Plan::Pro.clamp_cap(20), 20);
        assert_eq!(Plan::Pro.clamp_cap(500), 50);
    }

    #[test]
    fn zero_cap_is_raised_to_one() {
        assert_eq!(Plan::Free.clamp_cap(0), 1);
    }
}
