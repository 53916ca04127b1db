//! Desktop notifications through notify-rust

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// Copy confirmations are short-lived
const DISPLAY_MS: u32 = 2_000;

/// Shows copy and clear results as desktop notifications
pub struct NotifyRustNotifier {
    app_name: String,
}

impl NotifyRustNotifier {
    pub fn new() -> Self {
        Self {
            app_name: "clip".to_string(),
        }
    }

    fn build(&self, title: &str, message: &str, icon: NotificationIcon) -> Notification {
        let mut notification = Notification::new();
        notification
            .appname(&self.app_name)
            .summary(title)
            .body(message)
            .icon(icon.icon_name())
            .timeout(Timeout::Milliseconds(DISPLAY_MS));
        notification
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let notification = self.build(title, message, icon);

        // show() blocks on the notification server
        tokio::task::spawn_blocking(move || {
            notification
                .show()
                .map(drop)
                .map_err(|e| NotificationError::SendFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("notification task failed: {}", e)))?
    }
}
