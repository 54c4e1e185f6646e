//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::{MacdIndicator, PriceBar};

/// Calculate MACD
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// All averages weight the full history; nothing is discarded for warm-up.
pub fn calculate_macd(
    bars: &[PriceBar],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdIndicator> {
    if bars.is_empty() {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let fast = math::ewm_series(&closes, fast_period);
    let slow = math::ewm_series(&closes, slow_period);

    let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_line = math::ewm_series(&macd_line, signal_period);

    let macd = *macd_line.last()?;
    let signal = *signal_line.last()?;

    Some(MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
    })
}
