use super::INotificationSink;
use note_reminders_domain::ReminderNotification;
use std::sync::Mutex;

/// Keeps every delivered notification in memory
#[derive(Default)]
pub struct InMemoryNotificationSink {
    notifications: Mutex<Vec<ReminderNotification>>,
    failing: bool,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Default::default()
    }

    /// A sink where every delivery fails
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn notifications(&self) -> Vec<ReminderNotification> {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait::async_trait]
impl INotificationSink for InMemoryNotificationSink {
    async fn notify(&self, notification: &ReminderNotification) -> anyhow::Result<()> {
        if self.failing {
            anyhow::bail!("Notification sink is failing");
        }
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification.clone());
        Ok(())
    }
}
