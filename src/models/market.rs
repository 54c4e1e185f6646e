//! Market data inputs: price bars, ordered histories and live snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One OHLCV bar. Volume is optional because some feeds (spot FX) omit it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl PriceBar {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume: Some(volume),
        }
    }

    pub fn without_volume(mut self) -> Self {
        self.volume = None;
        self
    }
}

/// Validation failures raised by [`PriceHistory::new`].
#[derive(Debug, Error, PartialEq)]
pub enum HistoryError {
    #[error("price history is empty")]
    Empty,

    #[error("bar {index} is not after the previous bar ({timestamp})")]
    OutOfOrder {
        index: usize,
        timestamp: DateTime<Utc>,
    },

    #[error("bar {index} has a non-finite price")]
    NonFinite { index: usize },
}

/// Chronologically ordered bars, oldest first, with strictly increasing
/// timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistory {
    bars: Vec<PriceBar>,
}

impl PriceHistory {
    /// Validate and wrap a bar sequence.
    ///
    /// Validation belongs to whoever supplies the data; the engine itself
    /// assumes a well-formed history.
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, HistoryError> {
        if bars.is_empty() {
            return Err(HistoryError::Empty);
        }

        for (index, bar) in bars.iter().enumerate() {
            let prices = [bar.open, bar.high, bar.low, bar.close];
            if prices.iter().any(|p| !p.is_finite()) {
                return Err(HistoryError::NonFinite { index });
            }
            if index > 0 && bar.timestamp <= bars[index - 1].timestamp {
                return Err(HistoryError::OutOfOrder {
                    index,
                    timestamp: bar.timestamp,
                });
            }
        }

        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }
}

impl<'de> Deserialize<'de> for PriceHistory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bars = Vec::<PriceBar>::deserialize(deserializer)?;
        PriceHistory::new(bars).map_err(serde::de::Error::custom)
    }
}

/// The most recent quote, possibly from a different feed than the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub price: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub change_percent: f64,
    #[serde(default)]
    pub high: f64,
    #[serde(default)]
    pub low: f64,
    #[serde(default)]
    pub volume: f64,
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

impl PriceSnapshot {
    pub fn new(price: f64, source: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            price,
            change: 0.0,
            change_percent: 0.0,
            high: price,
            low: price,
            volume: 0.0,
            source: source.into(),
            timestamp,
        }
    }

    /// Build a snapshot from the last bar of a history, with change measured
    /// against the previous close.
    pub fn from_history(history: &PriceHistory, source: impl Into<String>) -> Option<Self> {
        let bars = history.bars();
        let last = bars.last()?;
        let (change, change_percent) = match bars.len().checked_sub(2).map(|i| bars[i].close) {
            Some(prev) if prev != 0.0 => (last.close - prev, (last.close - prev) / prev * 100.0),
            _ => (0.0, 0.0),
        };

        Some(Self {
            price: last.close,
            change,
            change_percent,
            high: last.high,
            low: last.low,
            volume: last.volume.unwrap_or(0.0),
            source: source.into(),
            timestamp: last.timestamp,
        })
    }
}
