//! Per-pair order book
//!
//! Each book owns two priority queues over resting orders, keyed by the
//! lexicographic pair (price, submission timestamp):
//!
//! 1. Bids: greatest price at the top, earliest timestamp first within a price
//! 2. Asks: least price at the top, earliest timestamp first within a price
//!
//! The tie-break is the explicit timestamp carried on the order, never the
//! insertion order of the underlying heap.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use common::Side;
use market_data::DepthLevel;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::order::Order;
use crate::result::MatchOutcome;

/// A resting entry in one of the book's priority queues.
///
/// Implementations wrap an [`Order`] and define the side's ordering; the
/// queue top is always the next order to trade on that side.
pub(crate) trait RestingEntry: Ord {
    /// The wrapped order
    fn order(&self) -> &Order;
    /// Unwrap
    fn into_order(self) -> Order;
    /// Wrap
    fn from_order(order: Order) -> Self;
}

/// Bid-side entry: max-heap top is the highest price, earliest submission.
#[derive(Debug, Clone)]
pub(crate) struct BidEntry(pub(crate) Order);

impl PartialEq for BidEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BidEntry {}

impl PartialOrd for BidEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BidEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .price
            .cmp(&other.0.price)
            .then_with(|| other.0.timestamp.cmp(&self.0.timestamp))
    }
}

impl RestingEntry for BidEntry {
    fn order(&self) -> &Order {
        &self.0
    }

    fn into_order(self) -> Order {
        self.0
    }

    fn from_order(order: Order) -> Self {
        Self(order)
    }
}

/// Ask-side entry: max-heap top is the lowest price, earliest submission.
#[derive(Debug, Clone)]
pub(crate) struct AskEntry(pub(crate) Order);

impl PartialEq for AskEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AskEntry {}

impl PartialOrd for AskEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AskEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .price
            .cmp(&self.0.price)
            .then_with(|| other.0.timestamp.cmp(&self.0.timestamp))
    }
}

impl RestingEntry for AskEntry {
    fn order(&self) -> &Order {
        &self.0
    }

    fn into_order(self) -> Order {
        self.0
    }

    fn from_order(order: Order) -> Self {
        Self(order)
    }
}

/// Both sides of a single book.
///
/// Always accessed through the owning [`OrderBook`]'s guard; mutation happens
/// only in [`BookSides::match_order`](crate::matching).
#[derive(Debug, Default)]
pub(crate) struct BookSides {
    pub(crate) bids: BinaryHeap<BidEntry>,
    pub(crate) asks: BinaryHeap<AskEntry>,
}

impl BookSides {
    /// Highest resting bid price; zero when the side is empty.
    pub(crate) fn best_bid(&self) -> Decimal {
        self.bids
            .peek()
            .map(|entry| entry.0.price)
            .unwrap_or(Decimal::ZERO)
    }

    /// Lowest resting ask price; zero when the side is empty.
    pub(crate) fn best_ask(&self) -> Decimal {
        self.asks
            .peek()
            .map(|entry| entry.0.price)
            .unwrap_or(Decimal::ZERO)
    }

    /// Top `levels` bid tiers, highest price first.
    pub(crate) fn bid_depth(&self, levels: usize) -> Vec<DepthLevel> {
        aggregate_depth(self.bids.iter().map(|entry| &entry.0), Side::Buy, levels)
    }

    /// Top `levels` ask tiers, lowest price first.
    pub(crate) fn ask_depth(&self, levels: usize) -> Vec<DepthLevel> {
        aggregate_depth(self.asks.iter().map(|entry| &entry.0), Side::Sell, levels)
    }

    /// Insert a residual order on its own side.
    pub(crate) fn rest(&mut self, order: Order) {
        match order.side {
            Side::Buy => self.bids.push(BidEntry(order)),
            Side::Sell => self.asks.push(AskEntry(order)),
        }
    }

    /// Total number of resting orders on both sides.
    pub(crate) fn order_count(&self) -> usize {
        self.bids.len() + self.asks.len()
    }
}

/// Bucket resting orders by exact price, sum quantities and count orders per
/// bucket, then return the best `levels` tiers for the given side.
fn aggregate_depth<'a>(
    orders: impl Iterator<Item = &'a Order>,
    side: Side,
    levels: usize,
) -> Vec<DepthLevel> {
    let mut tiers: BTreeMap<Decimal, (Decimal, usize)> = BTreeMap::new();
    for order in orders {
        let tier = tiers.entry(order.price).or_insert((Decimal::ZERO, 0));
        tier.0 += order.quantity;
        tier.1 += 1;
    }

    let to_level = |(price, (quantity, order_count)): (Decimal, (Decimal, usize))| DepthLevel {
        price,
        quantity,
        order_count,
    };

    match side {
        Side::Buy => tiers.into_iter().rev().take(levels).map(to_level).collect(),
        Side::Sell => tiers.into_iter().take(levels).map(to_level).collect(),
    }
}

/// A single trading pair's order book.
///
/// Every operation holds the book's own guard for its full duration, so the
/// events of one matching call never interleave with another call's on the
/// same book. The guard is async because the engine keeps it held while
/// forwarding events into the public streams.
#[derive(Debug)]
pub struct OrderBook {
    /// Pair this book trades
    pub pair: String,
    pub(crate) sides: Mutex<BookSides>,
}

impl OrderBook {
    /// Create an empty book for `pair`
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            sides: Mutex::new(BookSides::default()),
        }
    }

    /// Run a single matching attempt for `order` and return everything it
    /// produced, in emission order.
    pub async fn execute(&self, order: Order) -> MatchOutcome {
        self.sides.lock().await.match_order(&self.pair, order)
    }

    /// Highest resting bid price; zero when there are no bids.
    pub async fn best_bid(&self) -> Decimal {
        self.sides.lock().await.best_bid()
    }

    /// Lowest resting ask price; zero when there are no asks.
    pub async fn best_ask(&self) -> Decimal {
        self.sides.lock().await.best_ask()
    }

    /// Top `levels` bid tiers aggregated by exact price, highest first.
    pub async fn bid_depth(&self, levels: usize) -> Vec<DepthLevel> {
        self.sides.lock().await.bid_depth(levels)
    }

    /// Top `levels` ask tiers aggregated by exact price, lowest first.
    pub async fn ask_depth(&self, levels: usize) -> Vec<DepthLevel> {
        self.sides.lock().await.ask_depth(levels)
    }
}
