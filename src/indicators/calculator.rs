//! Computes the full [`IndicatorSet`] for one evaluation.

use super::error::IndicatorError;
use super::momentum::{calculate_divergence, calculate_macd, calculate_rsi};
use super::structure::{calculate_fibonacci, calculate_session_range, calculate_support_resistance};
use super::trend::{calculate_ema, calculate_price_pattern, calculate_sma};
use super::volatility::{calculate_atr, calculate_bollinger_bands};
use super::volume::calculate_volume_ratio;
use crate::common::fallback;
use crate::config::{EngineConfig, IndicatorPeriods};
use crate::models::{IndicatorSet, PriceHistory};

/// Stateless indicator calculator. Each call recomputes everything from the
/// supplied history.
#[derive(Debug, Clone)]
pub struct IndicatorCalculator {
    periods: IndicatorPeriods,
    min_history: usize,
}

impl IndicatorCalculator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            periods: config.periods.clone(),
            min_history: config.min_history(),
        }
    }

    pub fn min_history(&self) -> usize {
        self.min_history
    }

    pub fn compute(&self, history: &PriceHistory) -> Result<IndicatorSet, IndicatorError> {
        let available = history.len();
        let insufficient = || IndicatorError::InsufficientData {
            required: self.min_history,
            available,
        };
        if available < self.min_history {
            return Err(insufficient());
        }

        let p = &self.periods;
        let bars = history.bars();
        let last = bars.last().ok_or_else(insufficient)?;

        let bollinger = calculate_bollinger_bands(bars, p.bollinger, p.bollinger_std_dev).ok_or_else(insufficient)?;
        let (support, resistance) = calculate_support_resistance(bars, p.support_resistance).ok_or_else(insufficient)?;
        let price_change_pct = match bars.len().checked_sub(2) {
            Some(prev) => fallback::percent_change(bars[prev].close, last.close),
            None => 0.0,
        };

        Ok(IndicatorSet {
            rsi: calculate_rsi(bars, p.rsi).ok_or_else(insufficient)?,
            sma_short: calculate_sma(bars, p.sma_short).ok_or_else(insufficient)?,
            sma_long: calculate_sma(bars, p.sma_long).ok_or_else(insufficient)?,
            bb_position: fallback::band_position_pct(last.close, bollinger.lower, bollinger.upper),
            bollinger,
            macd: calculate_macd(bars, p.macd_fast, p.macd_slow, p.macd_signal).ok_or_else(insufficient)?,
            ema_fast: calculate_ema(bars, p.macd_fast).ok_or_else(insufficient)?,
            ema_slow: calculate_ema(bars, p.macd_slow).ok_or_else(insufficient)?,
            volume_ratio: calculate_volume_ratio(bars, p.volume),
            atr: calculate_atr(bars, p.atr).ok_or_else(insufficient)?,
            support,
            resistance,
            fibonacci: calculate_fibonacci(bars, p.fibonacci).ok_or_else(insufficient)?,
            divergence: calculate_divergence(bars, p.rsi, p.divergence).ok_or_else(insufficient)?,
            session: calculate_session_range(bars, p.session, p.ranging_width_pct).ok_or_else(insufficient)?,
            price_pattern: calculate_price_pattern(bars).ok_or_else(insufficient)?,
            price_change_pct,
        })
    }
}

impl Default for IndicatorCalculator {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
