use crate::shared::usecase::UseCase;
use note_reminders_domain::{ReminderNotification, ID};
use note_reminders_infra::ReminderContext;
use tracing::{error, info, warn};

/// Handles a fired alarm.
///
/// The `Reminder` is retired whatever state its record is in, then the
/// user is notified with the name the `Reminder` had at fire time. The
/// notification is sent once and never retried.
#[derive(Debug)]
pub struct SendReminderNotificationUseCase {
    pub reminder_id: ID,
    pub note_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for SendReminderNotificationUseCase {
    type Response = ReminderNotification;

    type Error = UseCaseError;

    const NAME: &'static str = "SendReminderNotification";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        info!("Reminder {} of note {} fired", self.reminder_id, self.note_id);
        let name = match ctx.repos.reminders.find(&self.reminder_id).await {
            Ok(Some(reminder)) => reminder.name,
            Ok(None) => {
                warn!("Fired reminder {} was already retired", self.reminder_id);
                String::new()
            }
            Err(e) => {
                error!("Unable to read fired reminder {}: {:?}", self.reminder_id, e);
                String::new()
            }
        };

        if let Err(e) = ctx.repos.reminders.delete(&self.reminder_id).await {
            error!("Unable to delete fired reminder {}: {:?}", self.reminder_id, e);
        }
        // A schedule that ran after the timer fired has armed it again
        if let Some(alarm_port) = &ctx.alarm_port {
            alarm_port.disarm(&self.reminder_id);
        }

        let notification = ReminderNotification::new(
            self.reminder_id,
            ctx.config.reminders_channel_id.clone(),
            ctx.config.notification_title.clone(),
            name,
            self.note_id,
        );

        match &ctx.notifications {
            Some(sink) => {
                if let Err(e) = sink.notify(&notification).await {
                    error!(
                        "Unable to notify about fired reminder {}: {:?}",
                        self.reminder_id, e
                    );
                }
            }
            None => warn!(
                "No notification facility available, reminder {} fired silently",
                self.reminder_id
            ),
        }

        Ok(notification)
    }
}
