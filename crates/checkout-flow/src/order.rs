//! Order Model
//!
//! Inputs collected by the page, the gateway's answer, and the subset of the
//! SDK order object the checkout reads.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{OrderUpdateError, Result};

/// Values the page feeds into the checkout
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutInputs {
    pub amount: String,
    pub is_amount_valid: bool,
    pub receipt_email: String,
    pub wallet_address: String,
}

impl CheckoutInputs {
    /// Whether the amount part of the form is usable
    pub fn has_valid_amount(&self) -> bool {
        !self.amount.is_empty() && self.is_amount_valid
    }

    /// The request to send, if every input is present and the amount is valid
    pub fn payment_request(&self) -> Option<PaymentRequest> {
        if !self.has_valid_amount()
            || self.receipt_email.is_empty()
            || self.wallet_address.is_empty()
        {
            return None;
        }

        Some(PaymentRequest {
            amount: self.amount.clone(),
            receipt_email: self.receipt_email.clone(),
            wallet_address: self.wallet_address.clone(),
        })
    }
}

/// Body of `POST /api/create-order`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: String,
    pub receipt_email: String,
    pub wallet_address: String,
}

/// Successful gateway answer: `{order: {orderId}, clientSecret}`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order: CreatedOrder,
    pub client_secret: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrder {
    pub order_id: String,
}

impl CreateOrderResponse {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Credentials unlocking the embedded checkout for one order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub order_id: String,
    pub client_secret: String,
}

impl From<CreateOrderResponse> for Order {
    fn from(response: CreateOrderResponse) -> Self {
        Self {
            order_id: response.order.order_id,
            client_secret: response.client_secret,
        }
    }
}

/// Lifecycle phase reported by the payment SDK
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPhase {
    Quote,
    Payment,
    Delivery,
    Completed,
    #[serde(other)]
    Unknown,
}

/// The parts of the SDK order object the checkout looks at.
///
/// Every field decodes leniently: a field with an unexpected shape reads as
/// absent instead of discarding the whole update.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservedOrder {
    #[serde(default, deserialize_with = "lenient")]
    pub order_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub phase: Option<OrderPhase>,
    #[serde(default, deserialize_with = "lenient")]
    pub line_items: Option<Vec<ObservedLineItem>>,
}

impl ObservedOrder {
    /// Parse an order update pushed by the SDK bridge
    pub fn from_json(json: &str) -> std::result::Result<Self, OrderUpdateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Quote of the first (and only) line item
    pub fn first_quote(&self) -> Option<&LineItemQuote> {
        self.line_items
            .as_deref()
            .and_then(|items| items.first())
            .and_then(|item| item.quote.as_ref())
    }
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ObservedLineItem {
    #[serde(default, deserialize_with = "lenient")]
    pub quote: Option<LineItemQuote>,
}

/// Price quote attached to a line item
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemQuote {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub charges: Option<QuoteCharges>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_price: Option<Price>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QuoteCharges {
    #[serde(default, deserialize_with = "lenient")]
    pub unit: Option<Price>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: Decimal,
    #[serde(default)]
    pub currency: String,
}
