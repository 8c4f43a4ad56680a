use super::schedule_reminder::ScheduleReminderUseCase;
use crate::shared::usecase::{execute, UseCase};
use note_reminders_domain::ID;
use note_reminders_infra::ReminderContext;
use tracing::{error, info};

/// Brings the alarm port back in line with the store after a restart.
///
/// Every stored `Reminder` is armed again, except the ones whose date
/// passed while nothing was running to fire them. Those are deleted and
/// never fired late. Running it again when the port already matches the
/// store changes nothing.
#[derive(Debug)]
pub struct RescheduleRemindersUseCase;

#[derive(Debug, Default, PartialEq)]
pub struct RescheduleSummary {
    pub rescheduled: Vec<ID>,
    pub deleted_stale: Vec<ID>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for RescheduleRemindersUseCase {
    type Response = RescheduleSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "RescheduleReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminders = ctx
            .repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let now = ctx.sys.get_timestamp_millis();
        let mut summary = RescheduleSummary::default();

        for reminder in reminders {
            if reminder.is_stale(now) {
                if let Err(e) = ctx.repos.reminders.delete(&reminder.id).await {
                    error!("Unable to delete stale reminder {}: {:?}", reminder.id, e);
                    continue;
                }
                info!(
                    "Deleted reminder {} of note {}, it was due while nothing could fire it",
                    reminder.id, reminder.note_id
                );
                summary.deleted_stale.push(reminder.id);
            } else {
                let schedule = ScheduleReminderUseCase {
                    reminder_id: reminder.id,
                    date: reminder.date,
                    note_id: reminder.note_id,
                };
                // Cannot fail
                let _ = execute(schedule, ctx).await;
                summary.rescheduled.push(reminder.id);
            }
        }

        info!(
            "Rescheduled {} reminders and deleted {} stale reminders",
            summary.rescheduled.len(),
            summary.deleted_stale.len()
        );

        Ok(summary)
    }
}
