use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use note_reminders_api_structs::get_note_reminders::*;
use note_reminders_domain::{Reminder, ID};
use note_reminders_infra::ReminderContext;

fn handle_error(e: UseCaseError) -> ApiError {
    match e {
        UseCaseError::StorageError => ApiError::InternalError,
    }
}

pub async fn get_note_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = GetNoteRemindersUseCase {
        note_id: path_params.note_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetNoteRemindersUseCase {
    pub note_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNoteRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetNoteReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .find_by_note(&self.note_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
