mod error;
mod job_schedulers;
mod reminder;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use job_schedulers::{reschedule_reminders_on_startup, start_fired_reminders_listener};
use note_reminders_infra::{FiredTriggerReceiver, ReminderContext};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    reminder::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    /// Recovers the stored `Reminder`s before the server accepts any
    /// request, then starts handling the triggers the alarm port fires.
    pub async fn new(
        context: ReminderContext,
        fired_triggers: FiredTriggerReceiver,
    ) -> Result<Self, std::io::Error> {
        Application::start_job_schedulers(&context, fired_triggers).await;
        let (server, port) = Application::configure_server(context)?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn start_job_schedulers(context: &ReminderContext, fired_triggers: FiredTriggerReceiver) {
        reschedule_reminders_on_startup(context).await;
        start_fired_reminders_listener(context.clone(), fired_triggers);
    }

    fn configure_server(context: ReminderContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
