//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::PriceBar;

/// True range of every bar. The first bar has no previous close, so its
/// range is plain high - low.
pub fn true_ranges(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter()
        .enumerate()
        .map(|(i, bar)| match i.checked_sub(1) {
            Some(prev) => math::true_range(bar.high, bar.low, bars[prev].close),
            None => bar.high - bar.low,
        })
        .collect()
}

/// Calculate ATR as the simple mean of the last `period` true ranges.
pub fn calculate_atr(bars: &[PriceBar], period: usize) -> Option<f64> {
    math::sma(&true_ranges(bars), period)
}
