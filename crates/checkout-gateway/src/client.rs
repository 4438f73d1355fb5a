//! Crossmint Order Client
//!
//! Forwards a payment request to the Crossmint order API and relays the
//! answer. One outbound call per invocation, no retries.

use serde_json::Value;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::order::{CreateOrderBody, PaymentRequest};

/// Crossmint order API client
pub struct CrossmintClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl CrossmintClient {
    /// Create a client with the given configuration
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(GatewayConfig::from_env())
    }

    /// Get the configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Handle a raw `POST /api/create-order` body.
    ///
    /// The API secret is checked before the body is looked at, so a missing
    /// secret is reported the same way for every request.
    pub async fn create_order_from_json(&self, body: &[u8]) -> Result<Value> {
        self.config.require_api_key()?;

        let request: PaymentRequest = serde_json::from_slice(body)?;
        self.create_order(request).await
    }

    /// Create an order and return the upstream JSON untouched
    pub async fn create_order(&self, request: PaymentRequest) -> Result<Value> {
        let api_key = self.config.require_api_key()?;
        let locator = self.config.token_locator()?;
        let body = CreateOrderBody::new(locator, request);

        tracing::debug!(
            token_locator = %body.line_items[0].token_locator,
            amount = %body.line_items[0].execution_parameters.amount,
            env = %self.config.env,
            "Creating Crossmint order"
        );

        let response = self
            .http
            .post(self.config.orders_url())
            .header("x-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let data: Value = serde_json::from_slice(&bytes)?;

        if !status.is_success() {
            let err = GatewayError::upstream(status.as_u16(), data);
            tracing::warn!(status = status.as_u16(), error = %err, "Order creation rejected");
            return Err(err);
        }

        tracing::info!(
            order_id = data["order"]["orderId"].as_str().unwrap_or_default(),
            "Created order"
        );

        Ok(data)
    }
}
