//! Unit tests for ATR indicator

use crate::fixtures::{bars_from_closes, linear_closes, ts};
use confluence::indicators::volatility::{calculate_atr, true_ranges};
use confluence::models::PriceBar;

#[test]
fn test_atr_insufficient_data() {
    let bars = bars_from_closes(&linear_closes(13, 100.0, 1.0));
    assert!(calculate_atr(&bars, 14).is_none());
}

#[test]
fn test_first_true_range_is_high_minus_low() {
    let bars = vec![
        PriceBar::new(10.0, 12.0, 9.0, 11.0, 1.0, ts(0)),
        PriceBar::new(11.0, 11.5, 10.5, 11.0, 1.0, ts(1)),
        PriceBar::new(15.0, 16.0, 14.0, 15.5, 1.0, ts(2)),
    ];
    assert_eq!(true_ranges(&bars), vec![3.0, 1.0, 5.0]);
}

#[test]
fn test_atr_is_simple_mean_of_true_ranges() {
    // each bar moves 0.5 with a 0.2 wide range, so true range is 0.6
    let bars = bars_from_closes(&linear_closes(30, 100.0, 0.5));
    let atr = calculate_atr(&bars, 14).unwrap();
    assert!((atr - 0.6).abs() < 1e-9);
}
