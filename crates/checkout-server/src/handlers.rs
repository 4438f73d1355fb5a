//! HTTP Handlers

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use checkout_gateway::GatewayError;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub crossmint_configured: bool,
    pub environment: &'static str,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let config = state.crossmint.config();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        crossmint_configured: config.is_configured(),
        environment: config.env.as_str(),
    })
}

/// `POST /api/create-order`: forward a payment request to Crossmint.
///
/// The body is taken raw so that a missing secret wins over a malformed
/// body and body parse failures surface as unexpected errors.
pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), GatewayError> {
    let data = state
        .crossmint
        .create_order_from_json(&body)
        .await
        .inspect_err(|e| match e {
            GatewayError::Configuration(_) | GatewayError::Unexpected(_) => {
                tracing::error!("Create order failed: {}", e);
            }
            GatewayError::Upstream { .. } => {}
        })?;

    Ok((StatusCode::OK, Json(data)))
}
