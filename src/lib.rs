//! Confluence: technical-indicator signal aggregation for OHLCV price history.
//!
//! The pipeline is pure and synchronous: indicators are computed once per
//! evaluation, fed to a fixed battery of sub-signal evaluators, tallied by the
//! aggregator, and turned into take-profit/stop-loss targets.

pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use config::EngineConfig;
pub use models::{PriceBar, PriceHistory, PriceSnapshot, SignalDirection, SignalOutput};
pub use signals::engine::SignalEngine;
