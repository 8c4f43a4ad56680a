use super::cancel_note_reminders::{self, CancelNoteRemindersUseCase};
use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use note_reminders_api_structs::delete_note_reminders::*;
use note_reminders_domain::{Reminder, ID};
use note_reminders_infra::ReminderContext;
use tracing::error;

fn handle_error(e: UseCaseError) -> ApiError {
    match e {
        UseCaseError::StorageError => ApiError::InternalError,
    }
}

pub async fn delete_note_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = DeleteNoteRemindersUseCase {
        note_id: path_params.note_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(handle_error)
}

/// Retires every `Reminder` of a note, used when the note itself is
/// deleted. Only the `Reminder`s that were cancelled are deleted, so a
/// `Reminder` created concurrently is never left in the store without
/// being armed.
#[derive(Debug)]
pub struct DeleteNoteRemindersUseCase {
    pub note_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<cancel_note_reminders::UseCaseError> for UseCaseError {
    fn from(e: cancel_note_reminders::UseCaseError) -> Self {
        match e {
            cancel_note_reminders::UseCaseError::StorageError => Self::StorageError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteNoteRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteNoteReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let cancel = CancelNoteRemindersUseCase {
            note_id: self.note_id,
        };
        let cancelled = execute(cancel, ctx).await?;

        let mut deleted = Vec::with_capacity(cancelled.len());
        for reminder in cancelled {
            match ctx.repos.reminders.delete(&reminder.id).await {
                Ok(Some(reminder)) => deleted.push(reminder),
                // Fired after it was cancelled
                Ok(None) => (),
                Err(e) => error!("Unable to delete reminder {}: {:?}", reminder.id, e),
            }
        }

        Ok(deleted)
    }
}
