//! Engine configuration

use std::time::Duration;

use serde::Deserialize;

use crate::error::EngineError;

/// Tunables for stream buffering and broadcast cadence.
///
/// The trade and fill buffers absorb matching bursts and block the producer
/// when full; the price and depth buffers are small because stale snapshots
/// are droppable.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Trade stream capacity (producers block when full)
    pub trade_buffer: usize,
    /// Fill stream capacity (producers block when full)
    pub fill_buffer: usize,
    /// Price update stream capacity (newest dropped when full)
    pub price_buffer: usize,
    /// Depth snapshot stream capacity (newest dropped when full)
    pub depth_buffer: usize,
    /// Price broadcast period in milliseconds
    pub price_interval_ms: u64,
    /// Depth broadcast period in milliseconds
    pub depth_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trade_buffer: 1000,
            fill_buffer: 1000,
            price_buffer: 100,
            depth_buffer: 100,
            price_interval_ms: 500,
            depth_interval_ms: 100,
        }
    }
}

impl EngineConfig {
    /// Price broadcast period
    pub fn price_interval(&self) -> Duration {
        Duration::from_millis(self.price_interval_ms)
    }

    /// Depth broadcast period
    pub fn depth_interval(&self) -> Duration {
        Duration::from_millis(self.depth_interval_ms)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.trade_buffer == 0
            || self.fill_buffer == 0
            || self.price_buffer == 0
            || self.depth_buffer == 0
        {
            return Err(EngineError::Config(
                "stream buffer capacities must be non-zero".to_string(),
            ));
        }
        if self.price_interval_ms == 0 || self.depth_interval_ms == 0 {
            return Err(EngineError::Config(
                "broadcast intervals must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
