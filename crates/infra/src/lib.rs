mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, NotificationWebhookConfig};
use config::IN_MEMORY_DATABASE_URL;
pub use repos::{IReminderRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tokio::runtime::Handle;

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    /// `None` when the host does not provide an alarm facility.
    /// Scheduling is then a no-op
    pub alarm_port: Option<Arc<dyn IAlarmPort>>,
    /// `None` when the host cannot show notifications
    pub notifications: Option<Arc<dyn INotificationSink>>,
}

impl ReminderContext {
    /// Context where every collaborator lives in memory. The alarm port
    /// never fires by itself
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::inmemory(),
            sys: Arc::new(RealSys {}),
            alarm_port: Some(Arc::new(InMemoryAlarmPort::new())),
            notifications: Some(Arc::new(InMemoryNotificationSink::new())),
        }
    }
}

/// Will setup the infrastructure context given the environment.
///
/// Must be called from within a tokio runtime, which is where the
/// alarm timers are going to run. Triggers fired by the alarm port
/// are delivered on the returned receiver.
pub async fn setup_context() -> anyhow::Result<(ReminderContext, FiredTriggerReceiver)> {
    let config = Config::new();

    let repos = if config.database_url == IN_MEMORY_DATABASE_URL {
        Repos::create_inmemory()
    } else {
        Repos::create_sqlite(&config.database_url).await?
    };

    let sys: Arc<dyn ISys> = Arc::new(RealSys {});
    let (alarm_port, fired_triggers) = TokioAlarmPort::new(sys.clone(), Handle::current());

    let notifications: Arc<dyn INotificationSink> = match &config.notification_webhook {
        Some(webhook) => Arc::new(WebhookNotificationSink::new(webhook.clone())),
        None => Arc::new(LogNotificationSink),
    };

    let ctx = ReminderContext {
        repos,
        config,
        sys,
        alarm_port: Some(Arc::new(alarm_port)),
        notifications: Some(notifications),
    };
    Ok((ctx, fired_triggers))
}
