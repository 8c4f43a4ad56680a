use note_reminders_api::Application;
use note_reminders_domain::NewReminder;
use note_reminders_infra::{
    Config, InMemoryNotificationSink, RealSys, ReminderContext, TokioAlarmPort,
};
use std::sync::Arc;
use tokio::runtime::Handle;

pub struct TestApp {
    pub config: Config,
    pub ctx: ReminderContext,
    pub address: String,
    pub notifications: Arc<InMemoryNotificationSink>,
}

// Launch the application as a background task
pub async fn spawn_app() -> TestApp {
    spawn_app_with_reminders(Vec::new()).await
}

/// Launches the application with `reminders` already in the store, as
/// if they were stored by a previous run
pub async fn spawn_app_with_reminders(reminders: Vec<NewReminder>) -> TestApp {
    let (alarm_port, fired_triggers) =
        TokioAlarmPort::new(Arc::new(RealSys {}), Handle::current());
    let notifications = Arc::new(InMemoryNotificationSink::new());

    let mut ctx = ReminderContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.alarm_port = Some(Arc::new(alarm_port));
    ctx.notifications = Some(notifications.clone());

    for reminder in &reminders {
        ctx.repos
            .reminders
            .insert(reminder)
            .await
            .expect("To seed reminder");
    }

    let config = ctx.config.clone();
    let application = Application::new(ctx.clone(), fired_triggers)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp {
        config,
        ctx,
        address,
        notifications,
    }
}
