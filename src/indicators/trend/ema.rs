//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::PriceBar;

/// Calculate the latest EMA of closes for a span.
pub fn calculate_ema(bars: &[PriceBar], period: usize) -> Option<f64> {
    if period == 0 {
        return None;
    }
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::ewm(&closes, period)
}
