//! Engine configuration: indicator windows, evaluator thresholds and target
//! multipliers, with optional `SIGNAL_*` environment overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    ZeroWindow { name: &'static str },

    #[error("bollinger period must be at least 2, got {0}")]
    BollingerPeriod(usize),

    #[error("rsi oversold ({oversold}) must be below overbought ({overbought})")]
    RsiThresholds { oversold: f64, overbought: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("invalid value for {key}: {value:?}")]
    InvalidOverride { key: String, value: String },
}

/// Lookback windows for every indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPeriods {
    pub rsi: usize,
    pub sma_short: usize,
    pub sma_long: usize,
    pub bollinger: usize,
    pub bollinger_std_dev: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub atr: usize,
    pub volume: usize,
    pub support_resistance: usize,
    pub fibonacci: usize,
    pub divergence: usize,
    pub session: usize,
    /// Session width (percent) below which the market counts as ranging.
    pub ranging_width_pct: f64,
}

impl Default for IndicatorPeriods {
    fn default() -> Self {
        Self {
            rsi: 14,
            sma_short: 10,
            sma_long: 21,
            bollinger: 20,
            bollinger_std_dev: 2.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            atr: 14,
            volume: 10,
            support_resistance: 5,
            fibonacci: 20,
            divergence: 10,
            session: 8,
            ranging_width_pct: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub high_volume_ratio: f64,
    pub low_volume_ratio: f64,
    pub volume_boost: f64,
    /// Relative distance to a Fibonacci level that counts as "at" it.
    pub fibonacci_proximity: f64,
    /// Relative distance to support/resistance that earns a comment.
    pub level_proximity: f64,
    pub breakout_margin: f64,
    pub range_edge_margin: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            high_volume_ratio: 1.5,
            low_volume_ratio: 0.7,
            volume_boost: 0.15,
            fibonacci_proximity: 0.005,
            level_proximity: 0.01,
            breakout_margin: 0.001,
            range_edge_margin: 0.002,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub stop_atr_multiple: f64,
    pub take_profit_atr_multiple: f64,
    /// Distance kept from a support/resistance level, in ATRs.
    pub level_offset_atr: f64,
    pub fallback_take_profit_pct: f64,
    pub fallback_stop_pct: f64,
    pub max_confidence: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            stop_atr_multiple: 1.5,
            take_profit_atr_multiple: 3.0,
            level_offset_atr: 0.2,
            fallback_take_profit_pct: 2.0,
            fallback_stop_pct: 1.0,
            max_confidence: 95.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub periods: IndicatorPeriods,
    pub thresholds: SignalThresholds,
    pub targets: TargetConfig,
}

impl EngineConfig {
    /// Load `.env` if present and apply `SIGNAL_*` overrides on top of the
    /// defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        let p = &mut config.periods;
        p.rsi = env_override("SIGNAL_RSI_PERIOD", p.rsi)?;
        p.sma_short = env_override("SIGNAL_SMA_SHORT", p.sma_short)?;
        p.sma_long = env_override("SIGNAL_SMA_LONG", p.sma_long)?;
        p.bollinger = env_override("SIGNAL_BB_PERIOD", p.bollinger)?;
        p.atr = env_override("SIGNAL_ATR_PERIOD", p.atr)?;

        let t = &mut config.thresholds;
        t.rsi_oversold = env_override("SIGNAL_RSI_OVERSOLD", t.rsi_oversold)?;
        t.rsi_overbought = env_override("SIGNAL_RSI_OVERBOUGHT", t.rsi_overbought)?;
        t.high_volume_ratio = env_override("SIGNAL_VOLUME_THRESHOLD", t.high_volume_ratio)?;

        let g = &mut config.targets;
        g.stop_atr_multiple = env_override("SIGNAL_STOP_ATR", g.stop_atr_multiple)?;
        g.take_profit_atr_multiple = env_override("SIGNAL_TAKE_PROFIT_ATR", g.take_profit_atr_multiple)?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.periods;
        let windows = [
            ("rsi period", p.rsi),
            ("sma short period", p.sma_short),
            ("sma long period", p.sma_long),
            ("macd fast period", p.macd_fast),
            ("macd slow period", p.macd_slow),
            ("macd signal period", p.macd_signal),
            ("atr period", p.atr),
            ("volume period", p.volume),
            ("support/resistance period", p.support_resistance),
            ("fibonacci period", p.fibonacci),
            ("divergence period", p.divergence),
            ("session period", p.session),
        ];
        if let Some((name, _)) = windows.iter().find(|(_, w)| *w == 0) {
            return Err(ConfigError::ZeroWindow { name });
        }
        if p.bollinger < 2 {
            return Err(ConfigError::BollingerPeriod(p.bollinger));
        }

        let t = &self.thresholds;
        if t.rsi_oversold >= t.rsi_overbought {
            return Err(ConfigError::RsiThresholds {
                oversold: t.rsi_oversold,
                overbought: t.rsi_overbought,
            });
        }

        let g = &self.targets;
        for (name, value) in [
            ("stop atr multiple", g.stop_atr_multiple),
            ("take-profit atr multiple", g.take_profit_atr_multiple),
            ("max confidence", g.max_confidence),
            ("fallback take-profit percent", g.fallback_take_profit_pct),
            ("fallback stop percent", g.fallback_stop_pct),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if g.level_offset_atr.is_nan() || g.level_offset_atr < 0.0 {
            return Err(ConfigError::Negative {
                name: "level offset atr",
                value: g.level_offset_atr,
            });
        }

        Ok(())
    }

    /// Bars required before any indicator is computed: the longest lookback.
    pub fn min_history(&self) -> usize {
        let p = &self.periods;
        [
            p.rsi + 1,
            p.sma_short,
            p.sma_long,
            p.bollinger,
            p.atr,
            p.volume,
            p.support_resistance,
            p.fibonacci,
            p.divergence + 1,
            p.session,
            3,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// Parse an override value, keeping `default` when the variable is unset.
pub fn parse_override<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidOverride {
            key: key.to_string(),
            value,
        }),
    }
}

fn env_override<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    parse_override(key, env::var(key).ok(), default)
}

/// Deployment environment name (`APP_ENV`), defaulting to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}
