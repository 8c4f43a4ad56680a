use super::subscribers::RescheduleReminderOnUpdated;
use crate::error::ApiError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use note_reminders_api_structs::update_reminder::*;
use note_reminders_domain::{Reminder, ID};
use note_reminders_infra::ReminderContext;

fn handle_error(e: UseCaseError) -> ApiError {
    match e {
        UseCaseError::NotFound(reminder_id) => ApiError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
        UseCaseError::InvalidDate(date) => ApiError::BadClientData(format!(
            "The provided date: {}, is not a valid epoch seconds timestamp.",
            date
        )),
        UseCaseError::StorageError => ApiError::InternalError,
    }
}

pub async fn update_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ApiError> {
    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id: path_params.reminder_id,
        name: body.name,
        date: body.date,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

/// Edits a stored `Reminder`. The `Reminder` is armed again for its
/// new date by a subscriber, replacing the previous arming.
#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub name: Option<String>,
    pub date: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidDate(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Ok(Some(reminder)) => reminder,
            Ok(None) => return Err(UseCaseError::NotFound(self.reminder_id)),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        if let Some(date) = self.date {
            if date < 0 {
                return Err(UseCaseError::InvalidDate(date));
            }
            reminder.date = date;
        }
        if let Some(name) = &self.name {
            reminder.name = name.clone();
        }

        match ctx.repos.reminders.save(&reminder).await {
            Ok(true) => Ok(reminder),
            // Fired or deleted after the read above
            Ok(false) => Err(UseCaseError::NotFound(self.reminder_id)),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(RescheduleReminderOnUpdated)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::test_helpers::{insert_reminder, setup, NOW};
    use note_reminders_domain::NewReminder;
    use note_reminders_infra::IReminderRepo;
    use std::sync::Arc;

    #[actix_web::main]
    #[test]
    async fn moves_the_arming_to_the_new_date() {
        let ctx = setup();
        let reminder = insert_reminder(&ctx.ctx, 3, "Pay rent", NOW + 60).await;

        let usecase = UpdateReminderUseCase {
            reminder_id: reminder.id,
            name: None,
            date: Some(NOW + 120),
        };
        let updated = execute(usecase, &ctx.ctx).await.unwrap();
        assert_eq!(updated.date, NOW + 120);
        assert_eq!(updated.name, "Pay rent");

        assert_eq!(ctx.alarm_port.armed_count(), 1);
        assert_eq!(ctx.alarm_port.armed_at(&reminder.id), Some(NOW + 120));
        assert_eq!(
            ctx.ctx.repos.reminders.find(&reminder.id).await.unwrap(),
            Some(updated)
        );
    }

    #[actix_web::main]
    #[test]
    async fn renames_reminder() {
        let ctx = setup();
        let reminder = insert_reminder(&ctx.ctx, 3, "Pay rent", NOW + 60).await;

        let usecase = UpdateReminderUseCase {
            reminder_id: reminder.id,
            name: Some("Pay the rent".into()),
            date: None,
        };
        let updated = execute(usecase, &ctx.ctx).await.unwrap();
        assert_eq!(updated.name, "Pay the rent");
        assert_eq!(updated.date, NOW + 60);
    }

    #[actix_web::main]
    #[test]
    async fn missing_reminder() {
        let ctx = setup();
        let usecase = UpdateReminderUseCase {
            reminder_id: ID::new(404),
            name: None,
            date: Some(NOW),
        };
        let res = execute(usecase, &ctx.ctx).await;
        assert!(matches!(res, Err(UseCaseError::NotFound(_))));
        assert!(ctx.alarm_port.calls().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_negative_date() {
        let ctx = setup();
        let reminder = insert_reminder(&ctx.ctx, 3, "Pay rent", NOW + 60).await;
        let usecase = UpdateReminderUseCase {
            reminder_id: reminder.id,
            name: None,
            date: Some(-10),
        };
        let res = execute(usecase, &ctx.ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidDate(-10))));
        assert_eq!(
            ctx.ctx.repos.reminders.find(&reminder.id).await.unwrap(),
            Some(reminder)
        );
    }

    /// Reads fine but every write fails
    struct ReadOnlyRepo {
        reminder: Reminder,
    }

    #[async_trait::async_trait]
    impl IReminderRepo for ReadOnlyRepo {
        async fn insert(&self, _: &NewReminder) -> anyhow::Result<Reminder> {
            anyhow::bail!("disk I/O error")
        }
        async fn save(&self, _: &Reminder) -> anyhow::Result<bool> {
            anyhow::bail!("disk I/O error")
        }
        async fn find(&self, _: &ID) -> anyhow::Result<Option<Reminder>> {
            Ok(Some(self.reminder.clone()))
        }
        async fn find_by_note(&self, _: &ID) -> anyhow::Result<Vec<Reminder>> {
            Ok(vec![self.reminder.clone()])
        }
        async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
            Ok(vec![self.reminder.clone()])
        }
        async fn delete(&self, _: &ID) -> anyhow::Result<Option<Reminder>> {
            anyhow::bail!("disk I/O error")
        }
    }

    #[actix_web::main]
    #[test]
    async fn failing_write_is_a_storage_error() {
        let mut ctx = setup();
        let reminder = insert_reminder(&ctx.ctx, 3, "Pay rent", NOW + 60).await;
        let reminder_id = reminder.id;
        ctx.ctx.repos.reminders = Arc::new(ReadOnlyRepo { reminder });

        let usecase = UpdateReminderUseCase {
            reminder_id,
            name: Some("Pay the rent".into()),
            date: None,
        };
        let res = execute(usecase, &ctx.ctx).await;
        assert!(matches!(res, Err(UseCaseError::StorageError)));
        assert!(ctx.alarm_port.calls().is_empty());
    }
}
