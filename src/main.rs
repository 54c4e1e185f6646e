//! Confluence demo runner
//!
//! Usage: `confluence [history.json [SYMBOL]]`
//!
//! With a path, evaluates the JSON array of bars it contains. Without one,
//! evaluates a few synthetic instruments. Results are printed as JSON.

use chrono::{DateTime, Duration, Utc};
use confluence::config::{get_environment, EngineConfig};
use confluence::logging;
use confluence::models::{PriceBar, PriceHistory};
use confluence::services::{evaluate_batch, EvaluationRequest, StaticMarketDataProvider};
use confluence::SignalEngine;
use std::env;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::from_env()?;
    logging::init_logging();
    info!(environment = %get_environment(), min_history = config.min_history(), "starting confluence");

    let args: Vec<String> = env::args().skip(1).collect();
    let provider = match args.first() {
        Some(path) => {
            let symbol = args.get(1).cloned().unwrap_or_else(|| symbol_from_path(path));
            let raw = std::fs::read_to_string(path)?;
            let history: PriceHistory = serde_json::from_str(&raw)?;
            info!(symbol = %symbol, bars = history.len(), "loaded history from {}", path);
            StaticMarketDataProvider::new().with_history(symbol, history)
        }
        None => demo_provider()?,
    };

    let mut requests = Vec::new();
    for symbol in provider.symbols() {
        match EvaluationRequest::from_provider(&provider, &symbol) {
            Ok(request) => requests.push(request),
            Err(e) => warn!(symbol = %symbol, error = %e, "skipping symbol"),
        }
    }

    let engine = Arc::new(SignalEngine::new(config));
    let outputs = evaluate_batch(engine, requests).await?;
    println!("{}", serde_json::to_string_pretty(&outputs)?);

    Ok(())
}

fn symbol_from_path(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_uppercase)
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

fn demo_provider() -> Result<StaticMarketDataProvider, Box<dyn std::error::Error>> {
    let start = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).ok_or("invalid demo start time")?;

    let oscillating = synthetic_bars(start, 60, |i| 1.10 + 0.004 * (i as f64 / 4.0).sin());
    let rising = synthetic_bars(start, 60, |i| 42_000.0 + 35.0 * i as f64 + 80.0 * (i as f64 / 3.0).cos());
    let falling = synthetic_bars(start, 60, |i| 2_050.0 - 1.8 * i as f64 + 4.0 * (i as f64 / 2.0).sin());

    Ok(StaticMarketDataProvider::new()
        .with_history("EURUSD", PriceHistory::new(oscillating)?)
        .with_history("BTCUSD", PriceHistory::new(rising)?)
        .with_history("XAUUSD", PriceHistory::new(falling)?))
}

fn synthetic_bars(start: DateTime<Utc>, count: usize, close_at: impl Fn(usize) -> f64) -> Vec<PriceBar> {
    (0..count)
        .map(|i| {
            let close = close_at(i);
            let open = if i == 0 { close } else { close_at(i - 1) };
            let spread = close.abs() * 0.0008;
            let volume = 1_000.0 + 250.0 * ((i % 7) as f64);
            PriceBar::new(
                open,
                open.max(close) + spread,
                open.min(close) - spread,
                close,
                volume,
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}
