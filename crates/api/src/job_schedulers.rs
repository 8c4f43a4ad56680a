use crate::{
    reminder::{
        reschedule_reminders::RescheduleRemindersUseCase,
        send_reminder_notification::SendReminderNotificationUseCase,
    },
    shared::usecase::execute,
};
use note_reminders_infra::{FiredTriggerReceiver, ReminderContext};
use tracing::{info, warn};

/// Arms every stored `Reminder` again. Has to run once at startup,
/// before any request can reach the engine.
pub async fn reschedule_reminders_on_startup(ctx: &ReminderContext) {
    // On error the reminders stay stored and are recovered on the next startup
    if let Ok(summary) = execute(RescheduleRemindersUseCase, ctx).await {
        info!(
            "Recovered reminders on startup: {} rescheduled, {} stale deleted",
            summary.rescheduled.len(),
            summary.deleted_stale.len()
        );
    }
}

/// Handles every trigger the alarm port fires, each in its own task
pub fn start_fired_reminders_listener(
    ctx: ReminderContext,
    mut fired_triggers: FiredTriggerReceiver,
) {
    actix_web::rt::spawn(async move {
        while let Some(trigger) = fired_triggers.recv().await {
            let usecase = SendReminderNotificationUseCase {
                reminder_id: trigger.reminder_id,
                note_id: trigger.note_id,
            };
            let ctx = ctx.clone();
            // Fire and forget
            actix_web::rt::spawn(async move {
                let _ = execute(usecase, &ctx).await;
            });
        }
        warn!("The alarm port was dropped, no more reminders will fire");
    });
}
