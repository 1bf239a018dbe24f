//! Engine error types

use thiserror::Error;

/// Errors surfaced by the engine.
///
/// The matching core cannot fail on input: an unknown pair creates a book
/// and a zero-quantity order is inert. What remains is configuration
/// rejection and the loss of a source-of-record stream consumer.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A trade or fill stream receiver was dropped while events were pending
    #[error("{stream} stream closed by consumer")]
    StreamClosed {
        /// Which stream was closed
        stream: &'static str,
    },

    /// Invalid engine configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
