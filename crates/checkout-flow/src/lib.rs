//! # checkout-flow
//!
//! Platform-neutral core of the deposit checkout.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                           CheckoutFlow                            │
//! │  ┌────────────────────┐  ┌──────────────┐  ┌──────────────────┐  │
//! │  │ CheckoutController │──│ OrderGateway │  │ CheckoutNotifier │  │
//! │  │  (state machine)   │  │  (strategy)  │  │   (callbacks)    │  │
//! │  └────────────────────┘  └──────────────┘  └──────────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller decides *when* an order is created and *which* phase
//! changes are reported; hosts (the Leptos page, tests) only forward events.
//! `CheckoutController::view` produces a render model so the rendering
//! policy can be checked without a browser.

pub mod breakdown;
pub mod controller;
pub mod error;
pub mod flow;
pub mod order;
pub mod widget;

pub use breakdown::PriceBreakdown;
pub use controller::{
    CheckoutController, CheckoutStep, CheckoutView, OrderPanel, OrderState, PhaseNotification,
};
pub use error::{OrderCreationError, OrderUpdateError, Result};
pub use flow::{CheckoutFlow, CheckoutNotifier, OrderGateway};
pub use order::{
    CheckoutInputs, CreateOrderResponse, LineItemQuote, ObservedOrder, Order, OrderPhase,
    PaymentRequest, Price,
};
pub use widget::{CheckoutAppearance, EmbeddedCheckoutProps, PaymentConfig, ThemeColors};
