//! Unit tests for MACD indicator

use crate::fixtures::{bars_from_closes, flat_bars, linear_closes};
use confluence::indicators::momentum::calculate_macd;

#[test]
fn test_macd_empty() {
    assert!(calculate_macd(&[], 12, 26, 9).is_none());
}

#[test]
fn test_macd_uptrend_is_bullish() {
    let bars = bars_from_closes(&linear_closes(30, 100.0, 0.5));
    let macd = calculate_macd(&bars, 12, 26, 9).unwrap();
    assert!(macd.macd > 0.0);
    assert!(macd.macd > macd.signal);
    assert!(macd.histogram > 0.0);
    assert!((macd.histogram - (macd.macd - macd.signal)).abs() < 1e-12);
}

#[test]
fn test_macd_downtrend_is_bearish() {
    let bars = bars_from_closes(&linear_closes(30, 100.0, -0.5));
    let macd = calculate_macd(&bars, 12, 26, 9).unwrap();
    assert!(macd.macd < 0.0);
    assert!(macd.histogram < 0.0);
}

#[test]
fn test_macd_flat_is_exactly_zero() {
    let bars = flat_bars(40, 1.1);
    let macd = calculate_macd(&bars, 12, 26, 9).unwrap();
    assert_eq!(macd.macd, 0.0);
    assert_eq!(macd.signal, 0.0);
    assert_eq!(macd.histogram, 0.0);
}
