//! Shared domain types for OpenMatch
//!
//! These are the fundamental vocabulary types used by the matching engine
//! and the market-data records it publishes.

use serde::{Deserialize, Serialize};

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Returns true if this is a buy order
    pub fn is_buy(&self) -> bool {
        matches!(self, Side::Buy)
    }

    /// Returns true if this is a sell order
    pub fn is_sell(&self) -> bool {
        matches!(self, Side::Sell)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Fill lifecycle status carried on every order fill event.
///
/// The canonical serialised forms are `"NEW"`, `"PARTIALLY_FILLED"` and
/// `"FILLED"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillStatus {
    /// Order entered the book without crossing; nothing executed
    New,
    /// Some quantity executed, some remains resting
    PartiallyFilled,
    /// Fully executed
    Filled,
}

impl std::fmt::Display for FillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FillStatus::New => write!(f, "NEW"),
            FillStatus::PartiallyFilled => write!(f, "PARTIALLY_FILLED"),
            FillStatus::Filled => write!(f, "FILLED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
        assert!(Side::Buy.is_buy());
        assert!(Side::Sell.is_sell());
    }

    #[test]
    fn test_side_serde() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"sell\"");
        assert_eq!(serde_json::from_str::<Side>("\"sell\"").unwrap(), Side::Sell);
    }

    #[test]
    fn test_fill_status_canonical_forms() {
        assert_eq!(serde_json::to_string(&FillStatus::New).unwrap(), "\"NEW\"");
        assert_eq!(
            serde_json::to_string(&FillStatus::PartiallyFilled).unwrap(),
            "\"PARTIALLY_FILLED\""
        );
        assert_eq!(
            serde_json::to_string(&FillStatus::Filled).unwrap(),
            "\"FILLED\""
        );
        assert_eq!(
            serde_json::from_str::<FillStatus>("\"PARTIALLY_FILLED\"").unwrap(),
            FillStatus::PartiallyFilled
        );
    }

    #[test]
    fn test_fill_status_display_matches_serde() {
        for status in [
            FillStatus::New,
            FillStatus::PartiallyFilled,
            FillStatus::Filled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }
}
