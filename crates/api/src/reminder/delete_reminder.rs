use super::cancel_reminder::CancelReminderUseCase;
use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use note_reminders_api_structs::delete_reminder::*;
use note_reminders_domain::{Reminder, ID};
use note_reminders_infra::ReminderContext;

fn handle_error(e: UseCaseError) -> ApiError {
    match e {
        UseCaseError::NotFound(reminder_id) => ApiError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
        UseCaseError::StorageError => ApiError::InternalError,
    }
}

pub async fn delete_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = DeleteReminderUseCase {
        reminder_id: path_params.reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

/// Retires a `Reminder`: the alarm is disarmed before the record is deleted
#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Ok(Some(reminder)) => reminder,
            Ok(None) => return Err(UseCaseError::NotFound(self.reminder_id)),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let cancel = CancelReminderUseCase {
            reminder_id: reminder.id,
            note_id: reminder.note_id,
        };
        // Cannot fail
        let _ = execute(cancel, ctx).await;

        // The reminder might have fired in the meantime, which retired it already
        match ctx.repos.reminders.delete(&reminder.id).await {
            Ok(Some(deleted)) => Ok(deleted),
            Ok(None) => Err(UseCaseError::NotFound(self.reminder_id)),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
