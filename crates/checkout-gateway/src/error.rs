//! Gateway Error Types

use serde_json::Value;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Fallback message when the upstream error body carries no `error` field
pub const FAILED_TO_CREATE_ORDER: &str = "Failed to create order";

/// Message reported for network, parse and other unexpected failures
pub const UNEXPECTED_ERROR: &str = "Unexpected error creating order";

/// Order gateway errors
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Required server configuration is missing
    #[error("Server misconfiguration: {0}")]
    Configuration(String),

    /// The order API answered with a non-success status
    #[error("Upstream error ({status}): {error}")]
    Upstream {
        status: u16,
        error: Value,
        details: Value,
    },

    /// Network failure, malformed JSON or anything else unforeseen
    #[error("Unexpected error creating order: {0}")]
    Unexpected(String),
}

impl GatewayError {
    /// Build an upstream error from the status and decoded body of a failed call.
    ///
    /// The `error` field is taken from the body when present and truthy,
    /// otherwise the generic message is used. The whole body is kept as details.
    pub fn upstream(status: u16, body: Value) -> Self {
        let error = body
            .get("error")
            .filter(|v| is_truthy(v))
            .cloned()
            .unwrap_or_else(|| Value::String(FAILED_TO_CREATE_ORDER.into()));

        Self::Upstream {
            status,
            error,
            details: body,
        }
    }

    /// HTTP status this error maps to
    pub fn status(&self) -> u16 {
        match self {
            GatewayError::Upstream { status, .. } => *status,
            GatewayError::Configuration(_) | GatewayError::Unexpected(_) => 500,
        }
    }

    /// JSON body returned to the caller
    pub fn body(&self) -> Value {
        match self {
            GatewayError::Configuration(_) => serde_json::json!({ "error": self.to_string() }),
            GatewayError::Upstream { error, details, .. } => serde_json::json!({
                "error": error,
                "details": details,
            }),
            GatewayError::Unexpected(message) => serde_json::json!({
                "error": UNEXPECTED_ERROR,
                "details": message,
            }),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Unexpected(err.to_string())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(feature = "axum-handlers")]
impl axum::response::IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

        (status, axum::Json(self.body())).into_response()
    }
}
