//! RSI (Relative Strength Index) indicator

use crate::common::fallback;
use crate::models::PriceBar;

/// RSI at every bar that has a full window of `period` price changes behind
/// it. Element `k` belongs to bar `k + period`.
///
/// RSI = 100 - (100 / (1 + RS)), RS = average gain / average loss over the
/// window. A zero average loss is resolved by [`fallback::rsi_from_averages`].
pub fn rsi_series(bars: &[PriceBar], period: usize) -> Vec<f64> {
    if period == 0 || bars.len() < period + 1 {
        return Vec::new();
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = bars
        .windows(2)
        .map(|pair| {
            let change = pair[1].close - pair[0].close;
            (change.max(0.0), (-change).max(0.0))
        })
        .unzip();

    (period..=gains.len())
        .map(|end| {
            let avg_gain = gains[end - period..end].iter().sum::<f64>() / period as f64;
            let avg_loss = losses[end - period..end].iter().sum::<f64>() / period as f64;
            fallback::rsi_from_averages(avg_gain, avg_loss)
        })
        .collect()
}

/// Latest RSI value.
pub fn calculate_rsi(bars: &[PriceBar], period: usize) -> Option<f64> {
    rsi_series(bars, period).last().copied()
}
