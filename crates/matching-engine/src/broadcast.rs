//! Periodic market-data broadcasters
//!
//! Both loops follow the same discipline: snapshot the pair list under the
//! engine maps guard, release it, then visit books one at a time under their
//! own guards. Publication never blocks; when a stream is full the snapshot
//! is dropped. A snapshot may describe book state that has already changed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::error::TrySendError;
use tokio::time::{self, MissedTickBehavior};
use tracing::trace;

use crate::engine::Engine;

/// Publish a best-price update per pair every `period`.
pub(crate) async fn price_loop(engine: Arc<Engine>, period: Duration) {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        for pair in engine.pairs() {
            let Some(update) = engine.price_update(&pair).await else {
                continue;
            };
            match engine.prices_tx.try_send(update) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    trace!(pair, "price stream full, dropping update");
                }
                // Consumer gone for good; stop ticking.
                Err(TrySendError::Closed(_)) => return,
            }
        }
    }
}

/// Publish a depth snapshot per pair every `period`, `levels` tiers a side.
pub(crate) async fn depth_loop(engine: Arc<Engine>, period: Duration, levels: usize) {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        for pair in engine.pairs() {
            let Some(snapshot) = engine.depth_snapshot(&pair, levels).await else {
                continue;
            };
            match engine.depth_tx.try_send(snapshot) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    trace!(pair, "depth stream full, dropping snapshot");
                }
                Err(TrySendError::Closed(_)) => return,
            }
        }
    }
}
