//! Unit tests for RSI indicator

use crate::fixtures::{bars_from_closes, flat_bars, linear_closes};
use confluence::indicators::momentum::{calculate_rsi, rsi_series};

#[test]
fn test_rsi_insufficient_data() {
    let bars = bars_from_closes(&linear_closes(14, 100.0, 1.0));
    assert!(calculate_rsi(&bars, 14).is_none());
    assert!(rsi_series(&bars, 14).is_empty());
}

#[test]
fn test_rsi_series_length() {
    let bars = bars_from_closes(&linear_closes(30, 100.0, 1.0));
    assert_eq!(rsi_series(&bars, 14).len(), 16);
}

#[test]
fn test_rsi_simple_average_of_changes() {
    let mut closes = vec![100.0];
    for _ in 0..7 {
        let last = *closes.last().unwrap();
        closes.push(last + 2.0);
        closes.push(last + 1.0);
    }
    let bars = bars_from_closes(&closes);
    let rsi = calculate_rsi(&bars, 14).unwrap();
    // average gain 1.0, average loss 0.5
    assert!((rsi - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_rsi_all_gains() {
    let bars = bars_from_closes(&linear_closes(20, 100.0, 0.5));
    assert_eq!(calculate_rsi(&bars, 14), Some(100.0));
}

#[test]
fn test_rsi_all_losses() {
    let bars = bars_from_closes(&linear_closes(20, 100.0, -0.5));
    assert_eq!(calculate_rsi(&bars, 14), Some(0.0));
}

#[test]
fn test_rsi_flat_series() {
    let bars = flat_bars(20, 1.1);
    assert_eq!(calculate_rsi(&bars, 14), Some(50.0));
}
