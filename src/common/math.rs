//! Window statistics over plain `f64` slices.
//!
//! Functions that look at "the last `period` values" return `None` when the
//! slice is shorter than the window.

/// Mean of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    let window = tail(values, period)?;
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Sample standard deviation (n - 1 denominator) of the last `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period < 2 {
        return None;
    }
    let window = tail(values, period)?;
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (period - 1) as f64;
    Some(variance.sqrt())
}

/// Exponentially weighted mean at every index, weighting the whole history.
///
/// Uses `alpha = 2 / (span + 1)` and normalises by the sum of weights seen so
/// far, so early values are not biased toward the first observation and no
/// warm-up bars are discarded. The mean is updated incrementally, so a
/// constant input yields exactly that constant.
pub fn ewm_series(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let decay = 1.0 - alpha;
    let mut weight_total = 0.0;
    let mut mean = 0.0;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            weight_total = 1.0 + decay * weight_total;
            mean = if i == 0 { value } else { mean + (value - mean) / weight_total };
            mean
        })
        .collect()
}

/// Last value of [`ewm_series`].
pub fn ewm(values: &[f64], span: usize) -> Option<f64> {
    ewm_series(values, span).last().copied()
}

/// True range of a bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

pub fn max_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

pub fn min_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// The last `period` values, or `None` if there are fewer.
pub fn tail(values: &[f64], period: usize) -> Option<&[f64]> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(&values[values.len() - period..])
}
