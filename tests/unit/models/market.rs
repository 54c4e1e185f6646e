//! Unit tests for price history validation and snapshots

use crate::fixtures::{bars_from_closes, history_from_closes, ts};
use confluence::models::{HistoryError, PriceBar, PriceHistory, PriceSnapshot};

#[test]
fn test_history_rejects_empty() {
    assert_eq!(PriceHistory::new(Vec::new()), Err(HistoryError::Empty));
}

#[test]
fn test_history_rejects_out_of_order_bars() {
    let mut bars = bars_from_closes(&[1.0, 2.0, 3.0]);
    bars[2].timestamp = bars[0].timestamp;
    assert!(matches!(
        PriceHistory::new(bars),
        Err(HistoryError::OutOfOrder { index: 2, .. })
    ));
}

#[test]
fn test_history_rejects_duplicate_timestamps() {
    let mut bars = bars_from_closes(&[1.0, 2.0]);
    bars[1].timestamp = bars[0].timestamp;
    assert!(PriceHistory::new(bars).is_err());
}

#[test]
fn test_history_rejects_non_finite_prices() {
    let mut bars = bars_from_closes(&[1.0, 2.0, 3.0]);
    bars[1].close = f64::NAN;
    assert_eq!(PriceHistory::new(bars), Err(HistoryError::NonFinite { index: 1 }));
}

#[test]
fn test_history_accessors() {
    let history = history_from_closes(&[1.0, 2.0, 3.0]);
    assert_eq!(history.len(), 3);
    assert!(!history.is_empty());
    assert_eq!(history.last().map(|b| b.close), Some(3.0));
    assert!((history.bars()[0].high - 1.1).abs() < 1e-12);
    assert!((history.bars()[2].low - 2.9).abs() < 1e-12);
}

#[test]
fn test_history_deserialize_validates() {
    let bars = bars_from_closes(&[1.0, 2.0]);
    let json = serde_json::to_string(&bars).unwrap();
    let history: PriceHistory = serde_json::from_str(&json).unwrap();
    assert_eq!(history.len(), 2);

    let reversed: Vec<PriceBar> = bars.into_iter().rev().collect();
    let json = serde_json::to_string(&reversed).unwrap();
    assert!(serde_json::from_str::<PriceHistory>(&json).is_err());
}

#[test]
fn test_bar_volume_is_optional_in_json() {
    let bar = PriceBar::new(1.0, 1.2, 0.9, 1.1, 500.0, ts(0)).without_volume();
    let json = serde_json::to_string(&bar).unwrap();
    assert!(!json.contains("volume"));
    let parsed: PriceBar = serde_json::from_str(&json).unwrap();
    assert!(parsed.volume.is_none());
}

#[test]
fn test_snapshot_from_history() {
    let history = history_from_closes(&[100.0, 102.0]);
    let snapshot = PriceSnapshot::from_history(&history, "feed").unwrap();
    assert_eq!(snapshot.price, 102.0);
    assert_eq!(snapshot.change, 2.0);
    assert!((snapshot.change_percent - 2.0).abs() < 1e-12);
    assert_eq!(snapshot.volume, 1000.0);
    assert_eq!(snapshot.source, "feed");
    assert_eq!(snapshot.timestamp, ts(1));
}

#[test]
fn test_snapshot_from_single_bar_has_no_change() {
    let history = history_from_closes(&[100.0]);
    let snapshot = PriceSnapshot::from_history(&history, "feed").unwrap();
    assert_eq!(snapshot.change, 0.0);
    assert_eq!(snapshot.change_percent, 0.0);
}
