//! The order record consumed by matching

use common::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A limit order.
///
/// Identity is caller-supplied and opaque; the engine neither parses it nor
/// enforces global uniqueness. `quantity` is the remaining quantity and
/// shrinks as the order trades; a zero-quantity order is inert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Caller-supplied identifier
    pub id: String,
    /// Buy or sell
    pub side: Side,
    /// Limit price
    pub price: Decimal,
    /// Remaining quantity
    pub quantity: Decimal,
    /// Submission time, seconds since the Unix epoch (caller-supplied)
    pub timestamp: i64,
}

impl Order {
    /// Create a new order
    pub fn new(
        id: impl Into<String>,
        side: Side,
        price: Decimal,
        quantity: Decimal,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            side,
            price,
            quantity,
            timestamp,
        }
    }

    /// Reduce the remaining quantity after a fill
    pub fn fill(&mut self, qty: Decimal) {
        self.quantity -= qty;
    }

    /// Check if the order is completely filled
    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero()
    }
}
