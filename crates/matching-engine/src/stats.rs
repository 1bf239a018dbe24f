//! Per-pair trade statistics
//!
//! Read by the price broadcaster for the volume-weighted average price;
//! updated by the engine exactly once per published trade, strictly before
//! that trade reaches the trade stream.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::events::Trade;

/// Cumulative execution totals for one pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeStats {
    /// Σ executed quantity
    pub total_quantity: Decimal,
    /// Σ executed quantity · execution price
    pub total_value: Decimal,
    /// Number of trades
    pub trade_count: u64,
}

impl TradeStats {
    /// Apply one trade. Called exactly once per published trade.
    pub fn record(&mut self, trade: &Trade) {
        self.total_quantity += trade.quantity;
        self.total_value += trade.notional();
        self.trade_count += 1;
    }

    /// Volume-weighted average execution price; zero before the first trade.
    pub fn vwap(&self) -> Decimal {
        if self.total_quantity.is_zero() {
            Decimal::ZERO
        } else {
            self.total_value / self.total_quantity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trade(price: Decimal, quantity: Decimal) -> Trade {
        Trade {
            pair: "BTC-USD".to_string(),
            buy_order_id: "B".to_string(),
            sell_order_id: "S".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_vwap_is_zero_before_first_trade() {
        assert_eq!(TradeStats::default().vwap(), Decimal::ZERO);
    }

    #[test]
    fn test_record_accumulates() {
        let mut stats = TradeStats::default();
        stats.record(&trade(dec!(100), dec!(2)));
        stats.record(&trade(dec!(110), dec!(1)));

        assert_eq!(stats.total_quantity, dec!(3));
        assert_eq!(stats.total_value, dec!(310));
        assert_eq!(stats.trade_count, 2);
    }

    #[test]
    fn test_vwap_weights_by_quantity() {
        let mut stats = TradeStats::default();
        stats.record(&trade(dec!(100), dec!(3)));
        stats.record(&trade(dec!(200), dec!(1)));

        // (300 + 200) / 4
        assert_eq!(stats.vwap(), dec!(125));
    }
}
