use super::cancel_reminder::CancelReminderUseCase;
use crate::shared::usecase::{execute, UseCase};
use note_reminders_domain::{Reminder, ID};
use note_reminders_infra::ReminderContext;

/// Disarms every `Reminder` the note has at the time of the call.
///
/// Works on a snapshot of the store: a `Reminder` created for the note
/// after the read is not cancelled. The cancelled `Reminder`s are returned
/// so that the caller can retire them.
#[derive(Debug)]
pub struct CancelNoteRemindersUseCase {
    pub note_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelNoteRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "CancelNoteReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminders = ctx
            .repos
            .reminders
            .find_by_note(&self.note_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        for reminder in &reminders {
            let cancel = CancelReminderUseCase {
                reminder_id: reminder.id,
                note_id: reminder.note_id,
            };
            // Cannot fail
            let _ = execute(cancel, ctx).await;
        }

        Ok(reminders)
    }
}
