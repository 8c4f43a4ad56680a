use actix_web::{web, HttpResponse};
use note_reminders_api_structs::get_service_health::*;
use note_reminders_infra::ReminderContext;

async fn status(ctx: web::Data<ReminderContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
        alarms_available: ctx.alarm_port.is_some(),
        notifications_available: ctx.notifications.is_some(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
