//! Order Matching Engine for OpenMatch
//!
//! This crate implements a multi-asset limit-order matching engine with
//! real-time market-data fan-out.
//!
//! # Features
//!
//! - Price-time priority matching with an explicit (price, timestamp) key
//! - Maker-price execution: trades always print at the resting order's price
//! - Four public event streams: trades, fills, best-price updates, depth
//!   snapshots
//! - Lossless trade/fill delivery with producer backpressure; best-effort
//!   price/depth delivery that drops rather than blocks
//! - Exact decimal prices and quantities throughout
//!
//! # Architecture
//!
//! One [`Engine`] multiplexes any number of per-pair [`OrderBook`]s, created
//! lazily on first order. A matching call runs entirely under its book's
//! guard, so the trades and fills of concurrent submissions on one pair
//! never interleave. Two background broadcasters walk the books on fixed
//! intervals and publish market-data snapshots.
//!
//! ## Core components
//!
//! - [`book`] - Per-pair priority queues and depth aggregation
//! - [`engine`] - Pair multiplexing, event fan-out, statistics
//! - [`events`] - The published record types ([`Trade`], [`OrderFill`])
//! - [`stats`] - Per-pair totals feeding the volume-weighted average price
//!
//! # Example
//!
//! ```rust
//! use common::Side;
//! use matching_engine::{Engine, Order};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (engine, mut streams) = Engine::new();
//!
//!     let sell = Order::new("S-1", Side::Sell, Decimal::from(50_000), Decimal::ONE, 1);
//!     let buy = Order::new("B-1", Side::Buy, Decimal::from(50_000), Decimal::ONE, 2);
//!
//!     engine.submit_order("BTC-USD", sell).await.unwrap();
//!     engine.submit_order("BTC-USD", buy).await.unwrap();
//!
//!     let trade = streams.trades.recv().await.unwrap();
//!     println!("traded {} @ {}", trade.quantity, trade.price);
//! }
//! ```

pub mod book;
mod broadcast;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
mod matching;
pub mod order;
pub mod result;
pub mod stats;

pub use book::OrderBook;
pub use config::EngineConfig;
pub use engine::{Engine, MarketStreams};
pub use error::EngineError;
pub use events::{BookEvent, OrderFill, Trade};
pub use order::Order;
pub use result::MatchOutcome;
pub use stats::TradeStats;
