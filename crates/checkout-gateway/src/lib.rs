//! # checkout-gateway
//!
//! Server-side order gateway for the deposit checkout.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐  POST /api/create-order  ┌───────────┐  POST /api/2022-06-09/orders  ┌───────────┐
//! │   Browser   │─────────────────────────▶│  Gateway  │──────────────────────────────▶│ Crossmint │
//! │  (checkout) │◀─────────────────────────│           │◀──────────────────────────────│           │
//! └─────────────┘  {order, clientSecret}   └───────────┘        upstream JSON          └───────────┘
//! ```
//!
//! The gateway holds the server-side API secret, builds the single
//! stablecoin line item and relays the upstream answer:
//!
//! - success → upstream JSON, HTTP 200
//! - upstream failure → same status, `{error, details}`
//! - missing secret → HTTP 500 naming `CROSSMINT_SERVER_SIDE_API_KEY`
//! - network or parse failure → HTTP 500 `Unexpected error creating order`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_gateway::{CrossmintClient, PaymentRequest};
//!
//! let client = CrossmintClient::from_env();
//!
//! let order = client.create_order(PaymentRequest {
//!     amount: "25.00".into(),
//!     receipt_email: "buyer@example.com".into(),
//!     wallet_address: "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin".into(),
//! }).await?;
//!
//! // order["clientSecret"] unlocks the embedded checkout
//! ```

mod client;
mod config;
mod error;
mod order;

pub use client::CrossmintClient;
pub use config::{CrossmintEnv, GatewayConfig, API_KEY_VAR, API_VERSION};
pub use error::{GatewayError, Result, FAILED_TO_CREATE_ORDER, UNEXPECTED_ERROR};
pub use order::{CreateOrderBody, ExecutionMode, PaymentRequest, TokenLocator, PAYMENT_METHOD};
