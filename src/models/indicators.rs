use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerBands {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Retracement prices measured up from the low of the lookback range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FibonacciLevels {
    pub range_high: f64,
    pub range_low: f64,
    pub level_382: f64,
    pub level_500: f64,
    pub level_618: f64,
}

impl FibonacciLevels {
    pub fn range(&self) -> f64 {
        self.range_high - self.range_low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Divergence {
    Bullish,
    Bearish,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePattern {
    Ascending,
    Descending,
    Sideways,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionRange {
    pub high: f64,
    pub low: f64,
    /// (high - low) / low, in percent.
    pub range_width: f64,
    pub is_ranging: bool,
}

impl SessionRange {
    pub fn is_degenerate(&self) -> bool {
        self.high <= self.low
    }
}

/// Every indicator the evaluators consume, computed fresh per evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: f64,
    pub sma_short: f64,
    pub sma_long: f64,
    pub bollinger: BollingerBands,
    /// Last close's position inside the bands, 0 = lower, 100 = upper.
    pub bb_position: f64,
    pub macd: MacdIndicator,
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub volume_ratio: f64,
    pub atr: f64,
    pub support: f64,
    pub resistance: f64,
    pub fibonacci: FibonacciLevels,
    pub divergence: Divergence,
    pub session: SessionRange,
    pub price_pattern: PricePattern,
    /// Last close versus the previous close, in percent.
    pub price_change_pct: f64,
}

impl IndicatorSet {
    pub fn summary(&self) -> IndicatorSummary {
        IndicatorSummary {
            rsi: self.rsi,
            sma_short: self.sma_short,
            sma_long: self.sma_long,
            macd: self.macd.macd,
            volume_ratio: self.volume_ratio,
            atr: self.atr,
            support: self.support,
            resistance: self.resistance,
        }
    }
}

/// The subset of indicators returned to callers for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSummary {
    pub rsi: f64,
    pub sma_short: f64,
    pub sma_long: f64,
    pub macd: f64,
    pub volume_ratio: f64,
    pub atr: f64,
    pub support: f64,
    pub resistance: f64,
}
