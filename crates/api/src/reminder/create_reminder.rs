use super::subscribers::ScheduleReminderOnCreated;
use crate::error::ApiError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use note_reminders_api_structs::create_reminder::*;
use note_reminders_domain::{NewReminder, Reminder, ID};
use note_reminders_infra::ReminderContext;

fn handle_error(e: UseCaseError) -> ApiError {
    match e {
        UseCaseError::InvalidDate(date) => ApiError::BadClientData(format!(
            "The provided date: {}, is not a valid epoch seconds timestamp.",
            date
        )),
        UseCaseError::StorageError => ApiError::InternalError,
    }
}

pub async fn create_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ApiError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        note_id: path_params.note_id,
        name: body.name,
        date: body.date,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

/// Stores a new `Reminder` for a note. It is armed by a subscriber once
/// it has been stored.
///
/// A date in the past is accepted, the `Reminder` then fires right away.
#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub note_id: ID,
    pub name: String,
    pub date: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidDate(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        if self.date < 0 {
            return Err(UseCaseError::InvalidDate(self.date));
        }

        let reminder = NewReminder {
            note_id: self.note_id,
            name: self.name.clone(),
            date: self.date,
        };
        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(ScheduleReminderOnCreated)]
    }
}
