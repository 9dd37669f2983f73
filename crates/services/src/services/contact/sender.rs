use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use folio_utils::clock::iso8601;

use super::types::{ContactSubmission, WebhookPayload};
use crate::services::config::WebhookConfig;

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivers accepted submissions somewhere a human will read them.
#[async_trait]
pub trait ContactSender: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<()>;
}

/// Records submissions in the server log and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSender;

#[async_trait]
impl ContactSender for LogSender {
    async fn send(&self, submission: &ContactSubmission) -> Result<()> {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            message_len = submission.message.len(),
            "Contact form submission received"
        );
        tracing::debug!("Contact message: {}", submission.message);
        Ok(())
    }
}

/// POSTs submissions as JSON to a configured URL.
pub struct WebhookSender {
    url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl WebhookSender {
    pub fn new(url: String, token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()?;

        Ok(Self { url, token, client })
    }

    pub fn from_config(config: &WebhookConfig) -> Result<Self> {
        Self::new(config.url.clone(), config.token.clone())
    }
}

#[async_trait]
impl ContactSender for WebhookSender {
    async fn send(&self, submission: &ContactSubmission) -> Result<()> {
        let payload = WebhookPayload {
            name: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
            received_at: iso8601(Utc::now()),
        };

        tracing::debug!("Forwarding contact submission to {}", self.url);

        let mut request = self.client.post(&self.url).json(&payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!("Failed to reach contact webhook: {}", e);
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("Contact webhook returned {}: {}", status, text);
            return Err(anyhow::anyhow!("Contact webhook returned {status}: {text}"));
        }

        tracing::info!("Contact submission forwarded ({})", status);
        Ok(())
    }
}
