use super::AlarmOutcome;
use crate::shared::usecase::UseCase;
use note_reminders_domain::ID;
use note_reminders_infra::ReminderContext;
use tracing::warn;

/// Disarms the alarm for a `Reminder`. The stored `Reminder` is kept,
/// deleting it is up to the caller
#[derive(Debug)]
pub struct CancelReminderUseCase {
    pub reminder_id: ID,
    pub note_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelReminderUseCase {
    type Response = AlarmOutcome;

    type Error = UseCaseError;

    const NAME: &'static str = "CancelReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        match &ctx.alarm_port {
            Some(alarm_port) => {
                alarm_port.disarm(&self.reminder_id);
                Ok(AlarmOutcome::Disarmed)
            }
            None => {
                warn!(
                    "No alarm facility available, reminder {} of note {} was not cancelled",
                    self.reminder_id, self.note_id
                );
                Ok(AlarmOutcome::PortUnavailable)
            }
        }
    }
}
