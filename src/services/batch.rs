//! Concurrent evaluation of independent instruments.
//!
//! Evaluations share nothing, so each runs on tokio's blocking pool and the
//! results are collected back in request order.

use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

use super::market_data::{MarketDataProvider, ProviderError};
use crate::models::{PriceHistory, PriceSnapshot, SignalOutput};
use crate::signals::SignalEngine;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("evaluation task for {symbol} failed: {reason}")]
    TaskFailed { symbol: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub symbol: String,
    pub snapshot: PriceSnapshot,
    pub history: PriceHistory,
}

impl EvaluationRequest {
    pub fn from_provider<P: MarketDataProvider + ?Sized>(provider: &P, symbol: &str) -> Result<Self, ProviderError> {
        Ok(Self {
            symbol: symbol.to_string(),
            history: provider.history(symbol)?,
            snapshot: provider.snapshot(symbol)?,
        })
    }
}

pub async fn evaluate_batch(
    engine: Arc<SignalEngine>,
    requests: Vec<EvaluationRequest>,
) -> Result<Vec<SignalOutput>, BatchError> {
    let started = Instant::now();
    let count = requests.len();

    let handles: Vec<_> = requests
        .into_iter()
        .map(|request| {
            let engine = Arc::clone(&engine);
            let symbol = request.symbol.clone();
            let handle = tokio::task::spawn_blocking(move || {
                engine.generate_signal(&request.symbol, &request.snapshot, &request.history)
            });
            (symbol, handle)
        })
        .collect();

    let mut outputs = Vec::with_capacity(count);
    for (symbol, handle) in handles {
        let output = handle.await.map_err(|e| BatchError::TaskFailed {
            symbol: symbol.clone(),
            reason: e.to_string(),
        })?;
        debug!(symbol = %symbol, direction = %output.direction, "batch evaluation finished");
        outputs.push(output);
    }

    info!(
        count,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "evaluated {} instruments",
        count
    );
    Ok(outputs)
}
