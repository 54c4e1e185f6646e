//! Support and Resistance levels detection

use crate::common::math;
use crate::models::PriceBar;

/// Lowest low and highest high over the trailing `lookback` bars, returned as
/// `(support, resistance)`.
pub fn calculate_support_resistance(bars: &[PriceBar], lookback: usize) -> Option<(f64, f64)> {
    let (highs, lows) = trailing_extremes(bars, lookback)?;
    Some((math::min_of(&lows)?, math::max_of(&highs)?))
}

pub(crate) fn trailing_extremes(bars: &[PriceBar], lookback: usize) -> Option<(Vec<f64>, Vec<f64>)> {
    if lookback == 0 || bars.len() < lookback {
        return None;
    }
    let recent = &bars[bars.len() - lookback..];
    Some((
        recent.iter().map(|b| b.high).collect(),
        recent.iter().map(|b| b.low).collect(),
    ))
}
