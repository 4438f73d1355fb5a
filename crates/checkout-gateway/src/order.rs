//! Order Payloads
//!
//! Wire types for the inbound payment request and the outbound Crossmint
//! order-creation body.

use serde::{Deserialize, Serialize};

/// Payment method requested for card payments
pub const PAYMENT_METHOD: &str = "checkoutcom-flow";

/// Request accepted by `POST /api/create-order`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Decimal amount, forwarded untouched
    pub amount: String,

    /// Email the receipt is sent to
    pub receipt_email: String,

    /// Wallet receiving the purchased tokens
    pub wallet_address: String,
}

/// Chain + asset identifier understood by the processor.
///
/// Rendered as `chain:currency:token`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenLocator {
    pub chain: String,
    pub currency: String,
    pub token: String,
}

impl TokenLocator {
    /// Locator settling in the same asset that is purchased: the asset
    /// address fills both the currency and the destination token slots.
    pub fn single_asset(chain: &str, asset: &str) -> Self {
        Self {
            chain: chain.to_string(),
            currency: asset.to_string(),
            token: asset.to_string(),
        }
    }
}

impl std::fmt::Display for TokenLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.chain, self.currency, self.token)
    }
}

impl Serialize for TokenLocator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How the line item amount is interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionMode {
    /// The amount is what the buyer pays in
    ExactIn,
}

#[derive(Clone, Debug, Serialize)]
pub struct ExecutionParameters {
    pub mode: ExecutionMode,
    pub amount: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub token_locator: TokenLocator,
    pub execution_parameters: ExecutionParameters,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBlock {
    pub method: &'static str,
    pub receipt_email: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientBlock {
    pub wallet_address: String,
}

/// Body of the Crossmint order-creation call
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderBody {
    pub line_items: Vec<LineItem>,
    pub payment: PaymentBlock,
    pub recipient: RecipientBlock,
}

impl CreateOrderBody {
    /// Build the single-line-item order for a payment request
    pub fn new(locator: TokenLocator, request: PaymentRequest) -> Self {
        Self {
            line_items: vec![LineItem {
                token_locator: locator,
                execution_parameters: ExecutionParameters {
                    mode: ExecutionMode::ExactIn,
                    amount: request.amount,
                },
            }],
            payment: PaymentBlock {
                method: PAYMENT_METHOD,
                receipt_email: request.receipt_email,
            },
            recipient: RecipientBlock {
                wallet_address: request.wallet_address,
            },
        }
    }
}
