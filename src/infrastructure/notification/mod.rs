//! Notification infrastructure module
//!
//! Desktop notifications through notify-rust.

mod notify_rust;

pub use notify_rust::NotifyRustNotifier;

use crate::application::ports::{Notifier, SilentNotifier};

/// Create the notifier for this run: desktop notifications when enabled,
/// otherwise one that shows nothing.
pub fn create_notifier(enabled: bool) -> Box<dyn Notifier> {
    if enabled {
        Box::new(NotifyRustNotifier::new())
    } else {
        Box::new(SilentNotifier)
    }
}
