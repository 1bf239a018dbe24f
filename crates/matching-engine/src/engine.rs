//! The engine: multiplexes order books across pairs and fans out events
//!
//! One engine owns every book, the per-pair statistics, the synthetic trade
//! identifier counter and the four public event streams. Lock order is
//! engine maps → book state, never the reverse; the statistics guard is a
//! leaf and never wraps another acquisition.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use common::unix_now;
use market_data::{DepthSnapshot, PriceUpdate};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::book::OrderBook;
use crate::broadcast;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::events::{BookEvent, OrderFill, Trade};
use crate::order::Order;
use crate::stats::TradeStats;

/// Consumer ends of the four public event streams.
///
/// Trades and fills are lossless: producers block when a stream is at
/// capacity, which backpressures [`Engine::submit_order`]. Prices and depth
/// are best effort: the broadcasters drop the newest snapshot when a stream
/// is full rather than ever blocking.
pub struct MarketStreams {
    /// Executed trades
    pub trades: mpsc::Receiver<Trade>,
    /// Per-order fill updates
    pub fills: mpsc::Receiver<OrderFill>,
    /// Best-price snapshots
    pub prices: mpsc::Receiver<PriceUpdate>,
    /// Depth snapshots
    pub depth: mpsc::Receiver<DepthSnapshot>,
}

/// The matching engine.
///
/// Books are created lazily on first order for a pair and live for the
/// engine's lifetime. Two distinct pair identifiers get two distinct books
/// even if they describe the same instrument; the engine never parses them.
pub struct Engine {
    /// Order books per pair
    books: Mutex<HashMap<String, Arc<OrderBook>>>,
    /// Execution totals per pair (leaf guard)
    stats: Mutex<HashMap<String, TradeStats>>,
    /// Synthetic trade identifier counter
    trade_seq: AtomicU64,
    config: EngineConfig,
    trades_tx: mpsc::Sender<Trade>,
    fills_tx: mpsc::Sender<OrderFill>,
    pub(crate) prices_tx: mpsc::Sender<PriceUpdate>,
    pub(crate) depth_tx: mpsc::Sender<DepthSnapshot>,
}

impl Engine {
    /// Create an engine with default configuration.
    pub fn new() -> (Arc<Self>, MarketStreams) {
        Self::build(EngineConfig::default())
    }

    /// Create an engine with a custom, validated configuration.
    pub fn with_config(config: EngineConfig) -> Result<(Arc<Self>, MarketStreams), EngineError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> (Arc<Self>, MarketStreams) {
        let (trades_tx, trades) = mpsc::channel(config.trade_buffer);
        let (fills_tx, fills) = mpsc::channel(config.fill_buffer);
        let (prices_tx, prices) = mpsc::channel(config.price_buffer);
        let (depth_tx, depth) = mpsc::channel(config.depth_buffer);

        let engine = Arc::new(Self {
            books: Mutex::new(HashMap::new()),
            stats: Mutex::new(HashMap::new()),
            trade_seq: AtomicU64::new(0),
            config,
            trades_tx,
            fills_tx,
            prices_tx,
            depth_tx,
        });

        let streams = MarketStreams {
            trades,
            fills,
            prices,
            depth,
        };

        (engine, streams)
    }

    /// Route `order` to its pair's book, match it, and forward every
    /// resulting trade and fill into the public streams in emission order.
    ///
    /// Statistics for a trade are recorded strictly before the trade is
    /// published. Suspends when the trade or fill stream is at capacity.
    /// Fails only when a stream's receiver has been dropped.
    pub async fn submit_order(&self, pair: &str, order: Order) -> Result<(), EngineError> {
        debug!(
            pair,
            order_id = %order.id,
            side = %order.side,
            price = %order.price,
            quantity = %order.quantity,
            "submitting order"
        );

        let book = self.book(pair);
        let mut sides = book.sides.lock().await;
        let outcome = sides.match_order(pair, order);

        // Forward while the book guard is held so the events of concurrent
        // submissions on the same pair never interleave.
        for event in outcome.events {
            match event {
                BookEvent::Trade(trade) => {
                    self.record_trade(&trade);
                    self.trades_tx
                        .send(trade)
                        .await
                        .map_err(|_| EngineError::StreamClosed { stream: "trade" })?;
                }
                BookEvent::Fill(fill) => {
                    self.fills_tx
                        .send(fill)
                        .await
                        .map_err(|_| EngineError::StreamClosed { stream: "fill" })?;
                }
            }
        }

        Ok(())
    }

    /// The pair's book, created on first use.
    fn book(&self, pair: &str) -> Arc<OrderBook> {
        let mut books = self.books.lock();
        Arc::clone(books.entry(pair.to_string()).or_insert_with(|| {
            info!(pair, "creating order book");
            Arc::new(OrderBook::new(pair))
        }))
    }

    /// The pair's book if one exists.
    pub fn get_book(&self, pair: &str) -> Option<Arc<OrderBook>> {
        self.books.lock().get(pair).cloned()
    }

    /// All pairs with a book, in no particular order.
    pub fn pairs(&self) -> Vec<String> {
        self.books.lock().keys().cloned().collect()
    }

    fn record_trade(&self, trade: &Trade) {
        let mut stats = self.stats.lock();
        stats.entry(trade.pair.clone()).or_default().record(trade);
    }

    /// Cumulative statistics for a pair; zeroed totals before the first
    /// trade.
    pub fn stats(&self, pair: &str) -> TradeStats {
        self.stats.lock().get(pair).cloned().unwrap_or_default()
    }

    /// Volume-weighted average execution price for a pair; zero before the
    /// first trade.
    pub fn vwap(&self, pair: &str) -> Decimal {
        self.stats
            .lock()
            .get(pair)
            .map(TradeStats::vwap)
            .unwrap_or(Decimal::ZERO)
    }

    /// Next synthetic trade identifier: `T1`, `T2`, ...
    ///
    /// Strictly increasing and duplicate-free under concurrent callers. Not
    /// attached to published trades; offered for downstream sequencing.
    pub fn next_trade_id(&self) -> String {
        let n = self.trade_seq.fetch_add(1, Ordering::Relaxed) + 1;
        format!("T{n}")
    }

    /// Aggregated depth for a pair with up to `levels` tiers per side;
    /// `None` when the pair has no book yet.
    pub async fn depth_snapshot(&self, pair: &str, levels: usize) -> Option<DepthSnapshot> {
        let book = self.get_book(pair)?;
        let sides = book.sides.lock().await;
        let bids = sides.bid_depth(levels);
        let asks = sides.ask_depth(levels);
        drop(sides);

        let trade_count = self.stats.lock().get(pair).map(|s| s.trade_count).unwrap_or(0);

        Some(DepthSnapshot {
            pair: pair.to_string(),
            bids,
            asks,
            timestamp: unix_now(),
            trade_count,
        })
    }

    /// Current best prices and vwap for a pair; `None` when the pair has no
    /// book yet.
    pub(crate) async fn price_update(&self, pair: &str) -> Option<PriceUpdate> {
        let book = self.get_book(pair)?;
        let sides = book.sides.lock().await;
        let best_bid = sides.best_bid();
        let best_ask = sides.best_ask();
        drop(sides);

        Some(PriceUpdate {
            pair: pair.to_string(),
            best_bid,
            best_ask,
            vwap: self.vwap(pair),
        })
    }

    /// Spawn the periodic best-price broadcaster.
    ///
    /// Runs until the returned handle is aborted or the price stream's
    /// receiver is dropped. Expected to be started at most once.
    pub fn start_price_broadcaster(self: &Arc<Self>) -> JoinHandle<()> {
        let engine = Arc::clone(self);
        let period = self.config.price_interval();
        tokio::spawn(broadcast::price_loop(engine, period))
    }

    /// Spawn the periodic depth broadcaster with `levels` tiers per side.
    ///
    /// Runs until the returned handle is aborted or the depth stream's
    /// receiver is dropped. Expected to be started at most once.
    pub fn start_depth_broadcaster(self: &Arc<Self>, levels: usize) -> JoinHandle<()> {
        let engine = Arc::clone(self);
        let period = self.config.depth_interval();
        tokio::spawn(broadcast::depth_loop(engine, period, levels))
    }
}

// ============================================================================
// Tests
// ============================================================================
