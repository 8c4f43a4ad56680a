use super::AlarmOutcome;
use crate::shared::usecase::UseCase;
use note_reminders_domain::ID;
use note_reminders_infra::{AlarmTrigger, ReminderContext};
use tracing::warn;

/// Arms the alarm for an existing `Reminder`.
///
/// Any previous arming of the same `Reminder` is disarmed first, so this
/// can be executed as many times as needed, e.g. every time the
/// `Reminder` is edited, and at most one arming is left behind.
#[derive(Debug)]
pub struct ScheduleReminderUseCase {
    pub reminder_id: ID,
    /// Epoch seconds
    pub date: i64,
    pub note_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleReminderUseCase {
    type Response = AlarmOutcome;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let alarm_port = match &ctx.alarm_port {
            Some(port) => port,
            None => {
                warn!(
                    "No alarm facility available, reminder {} was not scheduled",
                    self.reminder_id
                );
                return Ok(AlarmOutcome::PortUnavailable);
            }
        };

        alarm_port.disarm(&self.reminder_id);
        alarm_port.arm(
            AlarmTrigger {
                reminder_id: self.reminder_id,
                note_id: self.note_id,
            },
            self.date,
        );

        Ok(AlarmOutcome::Armed)
    }
}
