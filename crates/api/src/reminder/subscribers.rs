use super::{
    create_reminder::CreateReminderUseCase, schedule_reminder::ScheduleReminderUseCase,
    update_reminder::UpdateReminderUseCase,
};
use crate::shared::usecase::{execute, Subscriber};
use note_reminders_domain::Reminder;
use note_reminders_infra::ReminderContext;

pub struct ScheduleReminderOnCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateReminderUseCase> for ScheduleReminderOnCreated {
    async fn notify(&self, e: &Reminder, ctx: &ReminderContext) {
        let schedule_reminder = ScheduleReminderUseCase {
            reminder_id: e.id,
            date: e.date,
            note_id: e.note_id,
        };

        // Sideeffect, ignore result
        let _ = execute(schedule_reminder, ctx).await;
    }
}

pub struct RescheduleReminderOnUpdated;

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateReminderUseCase> for RescheduleReminderOnUpdated {
    async fn notify(&self, e: &Reminder, ctx: &ReminderContext) {
        let schedule_reminder = ScheduleReminderUseCase {
            reminder_id: e.id,
            date: e.date,
            note_id: e.note_id,
        };

        // Sideeffect, ignore result
        let _ = execute(schedule_reminder, ctx).await;
    }
}
