mod inmemory;
mod logging;
mod webhook;

pub use inmemory::InMemoryNotificationSink;
pub use logging::LogNotificationSink;
use note_reminders_domain::ReminderNotification;
pub use webhook::WebhookNotificationSink;

/// Renders user visible notifications.
///
/// Delivery is fire-and-forget: callers log a failure and move on, there
/// is no retry.
#[async_trait::async_trait]
pub trait INotificationSink: Send + Sync {
    async fn notify(&self, notification: &ReminderNotification) -> anyhow::Result<()>;
}
