//! Error Types

use thiserror::Error;

/// Result type alias for order creation
pub type Result<T> = std::result::Result<T, OrderCreationError>;

/// Message shown when the gateway gives no usable reason
pub const FAILED_TO_CREATE_ORDER: &str = "Failed to create order";

/// Order creation failure as seen by the checkout.
///
/// Configuration, upstream and network failures all collapse into one
/// human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct OrderCreationError(String);

impl OrderCreationError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self(FAILED_TO_CREATE_ORDER.into())
        } else {
            Self(message)
        }
    }

    /// Decode the body of a non-success gateway response.
    ///
    /// Uses the `error` string when there is one, otherwise the generic message.
    pub fn from_gateway_body(body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_default();

        Self::new(message)
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<serde_json::Error> for OrderCreationError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// An order update from the payment SDK that is not a JSON object
#[derive(Error, Debug)]
#[error("Malformed order update: {0}")]
pub struct OrderUpdateError(#[from] serde_json::Error);
