//! Unit tests for Bollinger Bands indicator

use crate::fixtures::{bars_from_closes, flat_bars, linear_closes};
use confluence::indicators::volatility::calculate_bollinger_bands;

#[test]
fn test_bollinger_insufficient_data() {
    let bars = bars_from_closes(&linear_closes(19, 1.0, 1.0));
    assert!(calculate_bollinger_bands(&bars, 20, 2.0).is_none());
}

#[test]
fn test_bollinger_sample_deviation() {
    let bars = bars_from_closes(&linear_closes(20, 1.0, 1.0));
    let bands = calculate_bollinger_bands(&bars, 20, 2.0).unwrap();
    // closes 1..=20: mean 10.5, sample variance 35
    let std = 35.0_f64.sqrt();
    assert!((bands.middle - 10.5).abs() < 1e-12);
    assert!((bands.upper - (10.5 + 2.0 * std)).abs() < 1e-9);
    assert!((bands.lower - (10.5 - 2.0 * std)).abs() < 1e-9);
}

#[test]
fn test_bollinger_flat_series_has_zero_width() {
    let bands = calculate_bollinger_bands(&flat_bars(25, 100.0), 20, 2.0).unwrap();
    assert_eq!(bands.width(), 0.0);
    assert_eq!(bands.middle, 100.0);
}
