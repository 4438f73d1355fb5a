//! Deposit checkout server
//!
//! Serves `POST /api/create-order` and the checkout frontend.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_gateway::{CrossmintClient, API_KEY_VAR};
use checkout_server::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let crossmint = CrossmintClient::from_env();
    let config = crossmint.config();

    if config.is_configured() {
        tracing::info!(env = %config.env, "✓ Crossmint configured");
    } else {
        tracing::warn!("⚠ Crossmint not configured - order creation will fail");
        tracing::warn!("  Set {} in .env", API_KEY_VAR);
    }

    if let Err(e) = config.token_locator() {
        tracing::warn!("⚠ {}", e);
    }

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());
    let app = app(AppState::new(crossmint), &static_dir);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 checkout server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health            - Health check");
    tracing::info!("  POST /api/create-order  - Create Crossmint order");
    tracing::info!("  GET  /*                 - Frontend ({})", static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
