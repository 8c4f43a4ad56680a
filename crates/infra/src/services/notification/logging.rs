use super::INotificationSink;
use note_reminders_domain::ReminderNotification;
use tracing::info;

/// Writes notifications to the log. Used when no webhook is configured
pub struct LogNotificationSink;

#[async_trait::async_trait]
impl INotificationSink for LogNotificationSink {
    async fn notify(&self, notification: &ReminderNotification) -> anyhow::Result<()> {
        info!(
            trigger_id = %notification.trigger_id,
            channel_id = %notification.channel_id,
            link = %notification.action.to_uri(),
            "{}: {}",
            notification.title,
            notification.body
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use note_reminders_domain::ID;

    #[tokio::test]
    async fn logging_never_fails() {
        let notification = ReminderNotification::new(
            ID::new(3),
            "reminders".into(),
            "Reminder fired".into(),
            String::new(),
            ID::new(7),
        );
        assert!(LogNotificationSink.notify(&notification).await.is_ok());
    }
}
