//! Signal outputs: individual votes, the aggregated call and price targets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::indicators::IndicatorSummary;

/// Side of a single evaluator vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// Final call after aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Buy,
    Sell,
    Neutral,
}

impl SignalDirection {
    pub fn side(&self) -> Option<TradeSide> {
        match self {
            SignalDirection::Buy => Some(TradeSide::Buy),
            SignalDirection::Sell => Some(TradeSide::Sell),
            SignalDirection::Neutral => None,
        }
    }
}

impl From<TradeSide> for SignalDirection {
    fn from(side: TradeSide) -> Self {
        match side {
            TradeSide::Buy => SignalDirection::Buy,
            TradeSide::Sell => SignalDirection::Sell,
        }
    }
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SignalDirection::Buy => "BUY",
            SignalDirection::Sell => "SELL",
            SignalDirection::Neutral => "NEUTRAL",
        };
        f.write_str(label)
    }
}

/// A directional vote from one evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubSignalVote {
    pub evaluator: String,
    pub side: TradeSide,
    /// Heuristic confidence in [0, 1].
    pub weight: f64,
    pub reason: String,
}

impl SubSignalVote {
    pub fn new(evaluator: &str, side: TradeSide, weight: f64, reason: String) -> Self {
        Self {
            evaluator: evaluator.to_string(),
            side,
            weight,
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedSignal {
    pub direction: SignalDirection,
    /// Heuristic score in [0, 95].
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub buy_votes: usize,
    pub sell_votes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeTargets {
    pub take_profit: f64,
    pub stop_loss: f64,
    pub risk_reward_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketCondition {
    #[serde(rename = "Strong Uptrend")]
    StrongUptrend,
    #[serde(rename = "Strong Downtrend")]
    StrongDowntrend,
    #[serde(rename = "Sideways")]
    Sideways,
    #[serde(rename = "Bullish Momentum")]
    BullishMomentum,
    #[serde(rename = "Bearish Momentum")]
    BearishMomentum,
    #[serde(rename = "Mixed Signals")]
    Mixed,
    #[serde(rename = "Consolidation")]
    Consolidation,
}

/// Structured result handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalOutput {
    pub symbol: String,
    pub direction: SignalDirection,
    pub confidence: f64,
    pub reasons: Vec<String>,
    /// `None` for NEUTRAL calls.
    pub targets: Option<TradeTargets>,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub source: String,
    /// `None` when the history was too short to compute indicators.
    pub indicators: Option<IndicatorSummary>,
    pub market_condition: MarketCondition,
    pub timestamp: DateTime<Utc>,
}
