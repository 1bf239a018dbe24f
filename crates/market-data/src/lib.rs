//! Market Data records for OpenMatch
//!
//! This crate defines the value types the engine's broadcasters publish:
//! best-price updates and aggregated order-book depth snapshots. They are
//! plain records - the matching engine produces them, observers consume
//! them, and nothing here holds live book state.
//!
//! Both record families are best-effort by design: the engine drops them
//! rather than block when a consumer falls behind.

pub mod types;

pub use types::{DepthLevel, DepthSnapshot, PriceUpdate};
