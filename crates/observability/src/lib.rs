//! Observability infrastructure for OpenMatch
//!
//! This crate provides structured logging via tracing. Call
//! [`init_logging`] once at process startup; library crates only ever emit
//! through the `tracing` macros and never install a subscriber themselves.
//!
//! # Quick Start
//!
//! ```ignore
//! use observability::{init_logging, LogFormat};
//!
//! init_logging("openmatch", LogFormat::Pretty)?;
//! tracing::info!("engine started");
//! ```

pub mod logging;

pub use logging::{init_logging, init_test_logging, LogFormat};
