//! Bark push-notification delivery.
//!
//! Sends a title/body pair to a Bark server's `/push` endpoint for a single
//! device key. Delivery is best-effort: callers log the error and move on.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::alerts::Notifier;
use crate::error::NotifyError;

/// Public Bark server.
pub const DEFAULT_BARK_SERVER_URL: &str = "https://api.day.app";

/// Notification group shown on the receiving device.
pub const BARK_GROUP: &str = "vanguard-store";

#[derive(Clone)]
pub struct BarkNotifier {
    server_url: String,
    device_key: String,
    http: Client,
}

#[derive(Debug, Serialize)]
struct BarkPush<'a> {
    device_key: &'a str,
    title: &'a str,
    body: &'a str,
    group: &'a str,
}

#[derive(Debug, Deserialize)]
struct BarkResponse {
    code: i64,
    #[serde(default)]
    message: String,
}

impl BarkNotifier {
    pub fn new(server_url: String, device_key: String) -> Result<Self, NotifyError> {
        if device_key.trim().is_empty() {
            return Err(NotifyError::InvalidKey);
        }

        Ok(Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            device_key,
            http: Client::new(),
        })
    }

    pub fn push_url(&self) -> String {
        format!("{}/push", self.server_url)
    }
}

#[async_trait]
impl Notifier for BarkNotifier {
    async fn send(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        let payload = BarkPush {
            device_key: &self.device_key,
            title,
            body,
            group: BARK_GROUP,
        };

        let response = self.http.post(self.push_url()).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected {
                code: i64::from(status.as_u16()),
                message: format!("Bark returned HTTP {}", status),
            });
        }

        let reply = response
            .json::<BarkResponse>()
            .await
            .map_err(|err| NotifyError::transport(format!("Unreadable Bark reply: {}", err)))?;

        if reply.code != 200 {
            return Err(NotifyError::Rejected {
                code: reply.code,
                message: reply.message,
            });
        }

        Ok(())
    }

    fn notifier_name(&self) -> &str {
        "Bark"
    }
}
