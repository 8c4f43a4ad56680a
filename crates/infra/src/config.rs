use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Where `Reminder`s are persisted. `memory` keeps them in process
    /// memory only, which is what the tests use
    pub database_url: String,
    /// When set, fired `Reminder`s are posted to this url instead of
    /// being written to the log
    pub notification_webhook: Option<NotificationWebhookConfig>,
    /// Title of every reminder notification
    pub notification_title: String,
    /// Channel the reminder notifications are published on
    pub reminders_channel_id: String,
}

#[derive(Debug, Clone)]
pub struct NotificationWebhookConfig {
    pub url: String,
    /// Sent in a header so that the receiver can verify the sender
    pub key: Option<String>,
    /// How long a single delivery may take before it is given up
    pub timeout: Duration,
}

pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

pub const IN_MEMORY_DATABASE_URL: &str = "memory";

impl Config {
    pub fn new() -> Self {
        let default_port = 5000;
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, default_port
                    );
                    default_port
                }
            },
            Err(_) => default_port,
        };

        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let url = "sqlite://note_reminders.db?mode=rwc".to_string();
                info!(
                    "Did not find DATABASE_URL environment variable. Falling back to: {}",
                    url
                );
                url
            }
        };

        let notification_webhook = match std::env::var("NOTIFICATION_WEBHOOK_URL") {
            Ok(url) => Some(NotificationWebhookConfig {
                url,
                key: std::env::var("NOTIFICATION_WEBHOOK_KEY").ok(),
                timeout: Duration::from_secs(webhook_timeout_secs()),
            }),
            Err(_) => {
                info!("Did not find NOTIFICATION_WEBHOOK_URL environment variable. Reminder notifications will be logged.");
                None
            }
        };

        Self {
            port,
            database_url,
            notification_webhook,
            notification_title: std::env::var("NOTIFICATION_TITLE")
                .unwrap_or_else(|_| "Reminder fired".into()),
            reminders_channel_id: std::env::var("REMINDERS_CHANNEL_ID")
                .unwrap_or_else(|_| "reminders".into()),
        }
    }

    /// Configuration that never reads the environment
    pub fn inmemory() -> Self {
        Self {
            port: 0,
            database_url: IN_MEMORY_DATABASE_URL.into(),
            notification_webhook: None,
            notification_title: "Reminder fired".into(),
            reminders_channel_id: "reminders".into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn webhook_timeout_secs() -> u64 {
    match std::env::var("NOTIFICATION_WEBHOOK_TIMEOUT_SECS") {
        Ok(secs) => match secs.parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                warn!(
                    "The given NOTIFICATION_WEBHOOK_TIMEOUT_SECS: {} is not valid, using {}.",
                    secs, DEFAULT_WEBHOOK_TIMEOUT_SECS
                );
                DEFAULT_WEBHOOK_TIMEOUT_SECS
            }
        },
        Err(_) => DEFAULT_WEBHOOK_TIMEOUT_SECS,
    }
}
