//! Trend indicators: SMA, EMA, short-term price pattern

pub mod ema;
pub mod pattern;
pub mod sma;

pub use ema::*;
pub use pattern::*;
pub use sma::*;
