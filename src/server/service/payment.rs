//! Payment-provider webhook listing.
//!
//! Lists the webhooks registered at the Revolut merchant API. Best-effort
//! single attempt: a missing key or any provider failure degrades to an
//! empty list rather than propagating.

use crate::model::payment::WebhookDto;

const REVOLUT_WEBHOOKS_URL: &str = "https://merchant.revolut.com/api/1.0/webhooks";

/// Service for read-only queries against the payment provider.
pub struct PaymentService<'a> {
    http_client: &'a reqwest::Client,
    api_key: Option<&'a str>,
}

impl<'a> PaymentService<'a> {
    /// Creates a new PaymentService instance.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `api_key` - Revolut secret API key; `None` disables the call
    pub fn new(http_client: &'a reqwest::Client, api_key: Option<&'a str>) -> Self {
        Self {
            http_client,
            api_key,
        }
    }

    /// Lists webhooks registered at the payment provider.
    ///
    /// # Returns
    /// The registered webhooks, or an empty list when no key is configured
    /// or the provider call fails.
    pub async fn list_webhooks(&self) -> Vec<WebhookDto> {
        let Some(api_key) = self.api_key else {
            return Vec::new();
        };

        match self.fetch_webhooks(api_key).await {
            Ok(webhooks) => webhooks,
            Err(err) => {
                tracing::warn!("Webhook listing failed: {}", err);
                Vec::new()
            }
        }
    }

    async fn fetch_webhooks(&self, api_key: &str) -> Result<Vec<WebhookDto>, reqwest::Error> {
        self.http_client
            .get(REVOLUT_WEBHOOKS_URL)
            .bearer_auth(api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests that a missing API key yields an empty list without any
    /// network activity.
    #[tokio::test]
    async fn no_key_returns_empty_without_network() {
        let client = reqwest::Client::new();
        let service = PaymentService::new(&client, None);

        assert!(service.list_webhooks().await.is_empty());
    }
}
