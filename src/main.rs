mod telemetry;

use note_reminders_api::Application;
use note_reminders_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("note_reminders_server".into(), "info".into());
    init_subscriber(subscriber)?;

    let (context, fired_triggers) = setup_context().await?;

    let app = Application::new(context, fired_triggers).await?;
    app.start().await?;
    Ok(())
}
