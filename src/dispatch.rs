//! Webhook delivery.

use std::time::Duration;

use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};
use crate::slack::WebhookPayload;

/// Delivers formatted payloads to the configured incoming webhook.
///
/// Sends are strictly sequential and never batched. Delivery is fail-fast:
/// the first failed send aborts the remaining ones, so a failed run may have
/// delivered a prefix of the series — the scheduler alerts on the error and
/// the next run starts fresh.
#[derive(Debug)]
pub struct Dispatcher {
    http: reqwest::Client,
    webhook_url: Url,
}

impl Dispatcher {
    /// Creates a dispatcher posting to `webhook_url`.
    pub fn new(webhook_url: Url) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create HTTP client");

        Self { http, webhook_url }
    }

    /// Posts one message per payload, in order.
    ///
    /// An empty slice is a successful no-op: no request is made.
    pub async fn send_all(&self, payloads: &[WebhookPayload]) -> Result<()> {
        if payloads.is_empty() {
            debug!("no payloads to deliver");
            return Ok(());
        }

        for payload in payloads {
            self.send(payload).await?;
        }

        info!(count = payloads.len(), "delivered all notifications");
        Ok(())
    }

    async fn send(&self, payload: &WebhookPayload) -> Result<()> {
        let response = self
            .http
            .post(self.webhook_url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::dispatch(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::dispatch(format!("webhook returned {status}: {body}")));
        }

        debug!("delivered payload");
        Ok(())
    }
}
