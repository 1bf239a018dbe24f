//! Event records published by the engine
//!
//! Trades and fills are the source of record: the engine never drops them,
//! blocking the producer instead when a stream is at capacity.

use common::{FillStatus, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A matched execution between two orders.
///
/// The execution price is ALWAYS the resting (maker) order's price; the
/// incoming order's limit only decides whether the cross happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Pair the trade executed on
    pub pair: String,
    /// Identifier of the buy-side order
    pub buy_order_id: String,
    /// Identifier of the sell-side order
    pub sell_order_id: String,
    /// Execution price (the maker's price)
    pub price: Decimal,
    /// Executed quantity (minimum of both remainders at the crossing)
    pub quantity: Decimal,
}

impl Trade {
    /// Executed quantity times execution price
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }
}

/// A status update for one order caused by one matching event.
///
/// Quantities describe this event only: `origin_quantity` is the remaining
/// quantity immediately before the event, so
/// `origin_quantity = executed_quantity + remaining_quantity` holds within
/// every fill. Callers that need the submission-time quantity must keep it
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFill {
    /// Identifier of the order this fill describes
    pub order_id: String,
    /// Pair the order was submitted on
    pub pair: String,
    /// The order's side
    pub side: Side,
    /// Remaining quantity immediately before this event
    pub origin_quantity: Decimal,
    /// Quantity traded in this event (zero for `New`)
    pub executed_quantity: Decimal,
    /// Remaining quantity after this event
    pub remaining_quantity: Decimal,
    /// Nominal limit price of the resting order; the order's own limit for
    /// `New` fills
    pub price: Decimal,
    /// Actual execution price; zero for `New` fills. Authoritative.
    pub fill_price: Decimal,
    /// Lifecycle status after this event
    pub status: FillStatus,
    /// Engine wall clock, seconds since the Unix epoch
    pub timestamp: i64,
}

/// One matching call's output events, tagged in emission order.
///
/// Per crossing the sequence is: the trade, the resting order's fill, the
/// incoming order's fill. An order that never crossed yields a single `New`
/// fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookEvent {
    /// A matched execution
    Trade(Trade),
    /// A per-order status update
    Fill(OrderFill),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_trade_notional() {
        let trade = Trade {
            pair: "BTC-USD".to_string(),
            buy_order_id: "B-1".to_string(),
            sell_order_id: "S-1".to_string(),
            price: dec!(50000),
            quantity: dec!(0.5),
        };
        assert_eq!(trade.notional(), dec!(25000));
    }

    #[test]
    fn test_fill_serialises_canonical_status() {
        let fill = OrderFill {
            order_id: "O-1".to_string(),
            pair: "BTC-USD".to_string(),
            side: Side::Buy,
            origin_quantity: dec!(2),
            executed_quantity: dec!(1),
            remaining_quantity: dec!(1),
            price: dec!(100),
            fill_price: dec!(100),
            status: FillStatus::PartiallyFilled,
            timestamp: 1_700_000_000,
        };
        let json = serde_json::to_string(&fill).unwrap();
        assert!(json.contains("\"PARTIALLY_FILLED\""));
    }

    #[test]
    fn test_book_event_tagging() {
        let event = BookEvent::Trade(Trade {
            pair: "ETH-USD".to_string(),
            buy_order_id: "B-1".to_string(),
            sell_order_id: "S-1".to_string(),
            price: dec!(2000),
            quantity: dec!(1),
        });
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"trade\""));
    }
}
