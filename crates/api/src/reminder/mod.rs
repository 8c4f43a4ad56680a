pub mod cancel_note_reminders;
pub mod cancel_reminder;
mod create_reminder;
mod delete_note_reminders;
mod delete_reminder;
mod get_note_reminders;
mod get_reminder;
pub mod reschedule_reminders;
pub mod schedule_reminder;
pub mod send_reminder_notification;
mod subscribers;
mod update_reminder;

use actix_web::web;
use create_reminder::create_reminder_controller;
use delete_note_reminders::delete_note_reminders_controller;
use delete_reminder::delete_reminder_controller;
use get_note_reminders::get_note_reminders_controller;
use get_reminder::get_reminder_controller;
use update_reminder::update_reminder_controller;

/// What happened to the alarm port when an engine operation ran.
///
/// Callers are free to ignore this: an unavailable port is not an error,
/// the `Reminder` is armed again on the next startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlarmOutcome {
    Armed,
    Disarmed,
    PortUnavailable,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notes/{note_id}/reminders",
        web::post().to(create_reminder_controller),
    );
    cfg.route(
        "/notes/{note_id}/reminders",
        web::get().to(get_note_reminders_controller),
    );
    cfg.route(
        "/notes/{note_id}/reminders",
        web::delete().to(delete_note_reminders_controller),
    );

    cfg.route(
        "/reminders/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::put().to(update_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
}
