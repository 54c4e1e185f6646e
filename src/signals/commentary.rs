//! Context notes appended to a directional call, and the market condition
//! label. None of this changes direction or confidence.

use crate::common::fallback;
use crate::config::SignalThresholds;
use crate::models::{IndicatorSet, MarketCondition};

/// Note when price sits within `level_proximity` of support, or failing that
/// of resistance.
pub fn level_proximity_note(price: f64, indicators: &IndicatorSet, thresholds: &SignalThresholds) -> Option<String> {
    let near = |level: f64| {
        fallback::relative_distance(price, level, price).is_some_and(|d| d < thresholds.level_proximity)
    };

    if near(indicators.support) {
        Some(format!(
            "Price is close to support at {:.5}; a bounce from this level is likely",
            indicators.support
        ))
    } else if near(indicators.resistance) {
        Some(format!(
            "Price is close to resistance at {:.5}; expect selling pressure here",
            indicators.resistance
        ))
    } else {
        None
    }
}

/// One-line reading of the headline indicators: the first two available
/// observations among RSI zone, MACD state, Bollinger position, SMA trend
/// and unusual volume.
pub fn indicator_summary(price: f64, indicators: &IndicatorSet, thresholds: &SignalThresholds) -> String {
    let mut parts = Vec::new();

    let rsi = indicators.rsi;
    if rsi < thresholds.rsi_oversold {
        parts.push(format!("RSI {:.1} oversold", rsi));
    } else if rsi > thresholds.rsi_overbought {
        parts.push(format!("RSI {:.1} overbought", rsi));
    } else {
        parts.push(format!("RSI {:.1} neutral", rsi));
    }

    let m = &indicators.macd;
    if m.macd > m.signal && m.histogram > 0.0 {
        parts.push(format!("MACD {:.6} above signal, bullish momentum", m.macd));
    } else if m.macd < m.signal && m.histogram < 0.0 {
        parts.push(format!("MACD {:.6} below signal, bearish momentum", m.macd));
    }

    let bands = &indicators.bollinger;
    if price >= bands.upper {
        parts.push(format!("price {:.5} at upper band {:.5}", price, bands.upper));
    } else if price <= bands.lower {
        parts.push(format!("price {:.5} at lower band {:.5}", price, bands.lower));
    } else {
        parts.push(format!("price {:.5} inside bands, middle {:.5}", price, bands.middle));
    }

    if indicators.sma_short > indicators.sma_long {
        parts.push(format!(
            "SMA {:.5} > {:.5}, bullish trend",
            indicators.sma_short, indicators.sma_long
        ));
    } else {
        parts.push(format!(
            "SMA {:.5} <= {:.5}, bearish trend",
            indicators.sma_short, indicators.sma_long
        ));
    }

    let volume = indicators.volume_ratio;
    if volume > thresholds.high_volume_ratio {
        parts.push(format!("volume {:.1}x above average", volume));
    } else if volume < thresholds.low_volume_ratio {
        parts.push(format!("volume {:.1}x, weak", volume));
    }

    parts.truncate(2);
    parts.join(" | ")
}

/// Coarse regime label from RSI and relative volume.
pub fn market_condition(indicators: &IndicatorSet, thresholds: &SignalThresholds) -> MarketCondition {
    let rsi = indicators.rsi;
    let heavy_volume = indicators.volume_ratio > thresholds.high_volume_ratio;

    if rsi > thresholds.rsi_overbought && heavy_volume {
        MarketCondition::StrongUptrend
    } else if rsi < thresholds.rsi_oversold && heavy_volume {
        MarketCondition::StrongDowntrend
    } else if (45.0..=55.0).contains(&rsi) {
        MarketCondition::Sideways
    } else if rsi > 60.0 {
        MarketCondition::BullishMomentum
    } else if rsi < 40.0 {
        MarketCondition::BearishMomentum
    } else {
        MarketCondition::Mixed
    }
}
