//! Market data provider interface. Retrieval lives outside the engine; the
//! engine only ever sees the history and snapshot a provider hands over.

use std::collections::HashMap;
use thiserror::Error;

use crate::models::{PriceHistory, PriceSnapshot};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("market data unavailable for {symbol}: {reason}")]
    Unavailable { symbol: String, reason: String },
}

pub trait MarketDataProvider {
    /// Historical bars for a symbol, oldest first.
    fn history(&self, symbol: &str) -> Result<PriceHistory, ProviderError>;

    /// The latest quote for a symbol.
    fn snapshot(&self, symbol: &str) -> Result<PriceSnapshot, ProviderError>;
}

/// In-memory provider serving pre-loaded histories. Snapshots are derived
/// from the last bar unless one was set explicitly.
#[derive(Debug, Default)]
pub struct StaticMarketDataProvider {
    histories: HashMap<String, PriceHistory>,
    snapshots: HashMap<String, PriceSnapshot>,
}

impl StaticMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(mut self, symbol: impl Into<String>, history: PriceHistory) -> Self {
        self.histories.insert(symbol.into(), history);
        self
    }

    pub fn with_snapshot(mut self, symbol: impl Into<String>, snapshot: PriceSnapshot) -> Self {
        self.snapshots.insert(symbol.into(), snapshot);
        self
    }

    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.histories.keys().cloned().collect();
        symbols.sort();
        symbols
    }
}

impl MarketDataProvider for StaticMarketDataProvider {
    fn history(&self, symbol: &str) -> Result<PriceHistory, ProviderError> {
        self.histories
            .get(symbol)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownSymbol(symbol.to_string()))
    }

    fn snapshot(&self, symbol: &str) -> Result<PriceSnapshot, ProviderError> {
        if let Some(snapshot) = self.snapshots.get(symbol) {
            return Ok(snapshot.clone());
        }
        let history = self.history(symbol)?;
        PriceSnapshot::from_history(&history, "static").ok_or_else(|| ProviderError::Unavailable {
            symbol: symbol.to_string(),
            reason: "empty history".to_string(),
        })
    }
}
