//! Price Breakdown
//!
//! What the buyer pays, what the quote says and the difference between them.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::order::{LineItemQuote, Price};

#[derive(Clone, Debug, PartialEq)]
pub struct PriceBreakdown {
    /// Amount typed by the buyer (zero when empty or unparseable)
    pub input_amount: Decimal,

    /// Whether the page considers the amount acceptable
    pub is_amount_valid: bool,

    /// Quote status reported by the processor, if quoted
    pub quote_status: Option<String>,

    /// Price of one unit of the purchased token
    pub unit_price: Option<Price>,

    /// Total charged, fees included
    pub total_price: Option<Price>,

    /// `total - input`, never negative
    pub fees: Option<Decimal>,
}

impl PriceBreakdown {
    pub fn compute(quote: Option<&LineItemQuote>, amount: &str, is_amount_valid: bool) -> Self {
        let input_amount = parse_amount(amount);
        let total_price = quote.and_then(|q| q.total_price.clone());

        let fees = total_price
            .as_ref()
            .filter(|_| is_amount_valid)
            .map(|total| (total.amount - input_amount).max(Decimal::ZERO));

        Self {
            input_amount,
            is_amount_valid,
            quote_status: quote.and_then(|q| q.status.clone()),
            unit_price: quote
                .and_then(|q| q.charges.as_ref())
                .and_then(|c| c.unit.clone()),
            total_price,
            fees,
        }
    }

    /// A quote has arrived for this amount
    pub fn is_quoted(&self) -> bool {
        self.is_amount_valid && self.total_price.is_some()
    }
}

/// Lenient numeric parse of the amount field
pub fn parse_amount(amount: &str) -> Decimal {
    Decimal::from_str(amount.trim()).unwrap_or(Decimal::ZERO)
}
