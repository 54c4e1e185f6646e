//! Price/RSI divergence over a fixed lookback

use super::rsi::rsi_series;
use crate::models::{Divergence, PriceBar};

/// Compare price momentum with RSI momentum over `lookback` bars.
///
/// Bullish when price fell while RSI rose, bearish when price rose while RSI
/// fell. When the RSI series is too short to look back that far its momentum
/// counts as zero.
pub fn calculate_divergence(bars: &[PriceBar], rsi_period: usize, lookback: usize) -> Option<Divergence> {
    if lookback == 0 || bars.len() < lookback + 1 {
        return None;
    }

    let last = bars.len() - 1;
    let price_momentum = bars[last].close - bars[last - lookback].close;

    let rsi = rsi_series(bars, rsi_period);
    let rsi_momentum = if rsi.len() > lookback {
        rsi[rsi.len() - 1] - rsi[rsi.len() - 1 - lookback]
    } else {
        0.0
    };

    Some(classify_divergence(price_momentum, rsi_momentum))
}

pub fn classify_divergence(price_momentum: f64, rsi_momentum: f64) -> Divergence {
    if price_momentum < 0.0 && rsi_momentum > 0.0 {
        Divergence::Bullish
    } else if price_momentum > 0.0 && rsi_momentum < 0.0 {
        Divergence::Bearish
    } else {
        Divergence::None
    }
}
