//! Shared types for market data

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Best-price snapshot for a single pair.
///
/// Zero stands in for absent values: `best_bid` is zero when no bids rest,
/// `best_ask` is zero when no asks rest, and `vwap` is zero before the first
/// trade on the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    /// Pair identifier
    pub pair: String,
    /// Highest resting bid price
    pub best_bid: Decimal,
    /// Lowest resting ask price
    pub best_ask: Decimal,
    /// Volume-weighted average execution price
    pub vwap: Decimal,
}

/// One aggregated price tier on one side of a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthLevel {
    /// Tier price
    pub price: Decimal,
    /// Total quantity resting at this price
    pub quantity: Decimal,
    /// Number of distinct resting orders at this price
    pub order_count: usize,
}

/// Aggregated order-book depth for a single pair.
///
/// `bids` are ordered highest price first, `asks` lowest price first, each
/// truncated to the level count the broadcaster was started with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    /// Pair identifier
    pub pair: String,
    /// Bid tiers, best first
    pub bids: Vec<DepthLevel>,
    /// Ask tiers, best first
    pub asks: Vec<DepthLevel>,
    /// Snapshot time, seconds since the Unix epoch
    pub timestamp: i64,
    /// Trades executed on this pair up to the snapshot
    pub trade_count: u64,
}

impl DepthSnapshot {
    /// Highest bid price, if any bids rest.
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|level| level.price)
    }

    /// Lowest ask price, if any asks rest.
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|level| level.price)
    }

    /// Midpoint between the best prices.
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::TWO),
            _ => None,
        }
    }

    /// Best ask minus best bid.
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn level(price: Decimal, quantity: Decimal, order_count: usize) -> DepthLevel {
        DepthLevel {
            price,
            quantity,
            order_count,
        }
    }

    fn snapshot(bids: Vec<DepthLevel>, asks: Vec<DepthLevel>) -> DepthSnapshot {
        DepthSnapshot {
            pair: "BTC-USD".to_string(),
            bids,
            asks,
            timestamp: 1_700_000_000,
            trade_count: 0,
        }
    }

    #[test]
    fn test_empty_snapshot_has_no_quotes() {
        let snap = snapshot(vec![], vec![]);
        assert!(snap.best_bid().is_none());
        assert!(snap.best_ask().is_none());
        assert!(snap.mid_price().is_none());
        assert!(snap.spread().is_none());
    }

    #[test]
    fn test_derived_quotes() {
        let snap = snapshot(
            vec![
                level(dec!(100), dec!(3), 2),
                level(dec!(99), dec!(1), 1),
            ],
            vec![
                level(dec!(101), dec!(2), 1),
                level(dec!(105), dec!(4), 3),
            ],
        );
        assert_eq!(snap.best_bid(), Some(dec!(100)));
        assert_eq!(snap.best_ask(), Some(dec!(101)));
        assert_eq!(snap.mid_price(), Some(dec!(100.5)));
        assert_eq!(snap.spread(), Some(dec!(1)));
    }

    #[test]
    fn test_one_sided_book_has_no_mid() {
        let snap = snapshot(vec![level(dec!(100), dec!(1), 1)], vec![]);
        assert_eq!(snap.best_bid(), Some(dec!(100)));
        assert!(snap.mid_price().is_none());
        assert!(snap.spread().is_none());
    }

    #[test]
    fn test_price_update_serde_roundtrip() {
        let update = PriceUpdate {
            pair: "ETH-USD".to_string(),
            best_bid: dec!(2000.5),
            best_ask: dec!(2001),
            vwap: dec!(2000.75),
        };
        let json = serde_json::to_string(&update).unwrap();
        let back: PriceUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, update);
    }
}
