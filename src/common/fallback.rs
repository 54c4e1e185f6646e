//! Named substitutes for division-by-zero conditions.
//!
//! Every ratio in the engine that can divide by zero goes through one of these
//! so the substitute value is explicit and never NaN or infinite.

/// RSI used when the average loss over the window is zero.
pub const RSI_ALL_GAINS: f64 = 100.0;
/// RSI used when the window has neither gains nor losses.
pub const RSI_FLAT: f64 = 50.0;
/// Volume ratio used when volume or its average is missing or zero.
pub const VOLUME_RATIO_DEFAULT: f64 = 1.0;
/// Risk/reward used when the stop distance is zero.
pub const RISK_REWARD_DEFAULT: f64 = 2.0;
/// Band position used when the Bollinger bands have zero width.
pub const BAND_POSITION_MID: f64 = 50.0;

/// RSI from average gain and loss, substituting for a zero average loss.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss <= 0.0 {
        return if avg_gain > 0.0 { RSI_ALL_GAINS } else { RSI_FLAT };
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// Latest volume over its moving average, or [`VOLUME_RATIO_DEFAULT`].
pub fn volume_ratio(latest: Option<f64>, average: Option<f64>) -> f64 {
    match (latest, average) {
        (Some(latest), Some(average)) if average > 0.0 && latest.is_finite() => latest / average,
        _ => VOLUME_RATIO_DEFAULT,
    }
}

/// |reward| / |risk|, or [`RISK_REWARD_DEFAULT`] when risk is zero.
pub fn risk_reward(reward: f64, risk: f64) -> f64 {
    let risk = risk.abs();
    if risk > 0.0 {
        reward.abs() / risk
    } else {
        RISK_REWARD_DEFAULT
    }
}

/// Range width in percent of the low, or zero when the low is not positive.
pub fn range_width_pct(high: f64, low: f64) -> f64 {
    if low > 0.0 {
        ((high - low) / low * 100.0).max(0.0)
    } else {
        0.0
    }
}

/// Position of `price` between `lower` and `upper` in percent.
pub fn band_position_pct(price: f64, lower: f64, upper: f64) -> f64 {
    let width = upper - lower;
    if width > 0.0 {
        (price - lower) / width * 100.0
    } else {
        BAND_POSITION_MID
    }
}

/// Relative distance |a - b| / reference, or `None` for a non-positive
/// reference price.
pub fn relative_distance(a: f64, b: f64, reference: f64) -> Option<f64> {
    if reference > 0.0 {
        Some((a - b).abs() / reference)
    } else {
        None
    }
}

/// Percent change from `from` to `to`, or zero when `from` is zero.
pub fn percent_change(from: f64, to: f64) -> f64 {
    if from != 0.0 {
        (to - from) / from * 100.0
    } else {
        0.0
    }
}
