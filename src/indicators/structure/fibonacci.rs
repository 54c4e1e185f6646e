//! Fibonacci retracement levels

use super::support_resistance::trailing_extremes;
use crate::common::math;
use crate::models::{FibonacciLevels, PriceBar};

pub const FIB_382: f64 = 0.382;
pub const FIB_500: f64 = 0.5;
pub const FIB_618: f64 = 0.618;

/// Retracement prices `low + ratio * (high - low)` over the trailing
/// `lookback` bars.
pub fn calculate_fibonacci(bars: &[PriceBar], lookback: usize) -> Option<FibonacciLevels> {
    let (highs, lows) = trailing_extremes(bars, lookback)?;
    let high = math::max_of(&highs)?;
    let low = math::min_of(&lows)?;
    let range = high - low;

    Some(FibonacciLevels {
        range_high: high,
        range_low: low,
        level_382: low + range * FIB_382,
        level_500: low + range * FIB_500,
        level_618: low + range * FIB_618,
    })
}
