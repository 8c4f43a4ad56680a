use super::INotificationSink;
use crate::config::NotificationWebhookConfig;
use note_reminders_domain::ReminderNotification;
use reqwest::Client;

pub const WEBHOOK_KEY_HEADER: &str = "note-reminders-webhook-key";

/// Posts every notification as json to a configured url
pub struct WebhookNotificationSink {
    client: Client,
    config: NotificationWebhookConfig,
}

impl WebhookNotificationSink {
    pub fn new(config: NotificationWebhookConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl INotificationSink for WebhookNotificationSink {
    async fn notify(&self, notification: &ReminderNotification) -> anyhow::Result<()> {
        let mut req = self
            .client
            .post(&self.config.url)
            .timeout(self.config.timeout)
            .json(notification);
        if let Some(key) = &self.config.key {
            req = req.header(WEBHOOK_KEY_HEADER, key);
        }
        req.send().await?.error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use note_reminders_domain::ID;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn notification() -> ReminderNotification {
        ReminderNotification::new(
            ID::new(3),
            "reminders".into(),
            "Reminder fired".into(),
            "Water the plants".into(),
            ID::new(7),
        )
    }

    fn sink(url: String, key: Option<&str>, timeout: Duration) -> WebhookNotificationSink {
        WebhookNotificationSink::new(NotificationWebhookConfig {
            url,
            key: key.map(String::from),
            timeout,
        })
    }

    /// Accepts a single request, answers it with `status_line` and hands
    /// back the raw request
    async fn serve_once(status_line: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/notify", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..n]);
                let request = String::from_utf8_lossy(&raw).to_string();
                if let Some(head_end) = request.find("\r\n\r\n") {
                    let content_length = request[..head_end]
                        .lines()
                        .find_map(|line| {
                            let line = line.to_lowercase();
                            line.strip_prefix("content-length:")
                                .map(|len| len.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if raw.len() >= head_end + 4 + content_length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            let response = format!("{}\r\nContent-Length: 0\r\n\r\n", status_line);
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8(raw).unwrap()
        });
        (url, handle)
    }

    fn split_request(raw: &str) -> (String, serde_json::Value) {
        let head_end = raw.find("\r\n\r\n").unwrap();
        let head = raw[..head_end].to_lowercase();
        let body = serde_json::from_str(&raw[head_end + 4..]).unwrap();
        (head, body)
    }

    #[tokio::test]
    async fn posts_notification_with_key() {
        let (url, server) = serve_once("HTTP/1.1 200 OK").await;
        let sink = sink(url, Some("s3cret"), Duration::from_secs(5));

        assert!(sink.notify(&notification()).await.is_ok());

        let (head, body) = split_request(&server.await.unwrap());
        assert!(head.starts_with("post /notify http/1.1"));
        assert!(head.contains(&format!("{}: s3cret", WEBHOOK_KEY_HEADER)));
        assert!(head.contains("content-type: application/json"));
        assert_eq!(body["triggerId"], 3);
        assert_eq!(body["channelId"], "reminders");
        assert_eq!(body["title"], "Reminder fired");
        assert_eq!(body["body"], "Water the plants");
    }

    #[tokio::test]
    async fn posts_without_key_header_when_unset() {
        let (url, server) = serve_once("HTTP/1.1 200 OK").await;
        let sink = sink(url, None, Duration::from_secs(5));

        assert!(sink.notify(&notification()).await.is_ok());

        let (head, _) = split_request(&server.await.unwrap());
        assert!(!head.contains(WEBHOOK_KEY_HEADER));
    }

    #[tokio::test]
    async fn error_status_is_a_failure() {
        let (url, server) = serve_once("HTTP/1.1 500 Internal Server Error").await;
        let sink = sink(url, None, Duration::from_secs(5));

        assert!(sink.notify(&notification()).await.is_err());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn gives_up_on_a_silent_receiver() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/notify", listener.local_addr().unwrap());
        // Accepts the connection and never answers
        let _server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(60)).await;
            drop(socket);
        });
        let sink = sink(url, None, Duration::from_millis(200));

        let notification = notification();
        let res = tokio::time::timeout(Duration::from_secs(5), sink.notify(&notification)).await;
        assert!(matches!(res, Ok(Err(_))));
    }
}
