use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use note_reminders_api_structs::get_reminder::*;
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

pub async fn get_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = GetReminderUseCase {
        reminder_id: path_params.reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.reminders.find(&self.reminder_id).await {
            Ok(Some(reminder)) => Ok(reminder),
            Ok(None) => Err(UseCaseError::NotFound(self.reminder_id)),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
