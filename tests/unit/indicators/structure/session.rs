//! Unit tests for session range detection

use crate::fixtures::{bars_from_closes, flat_bars, linear_closes};
use confluence::indicators::structure::calculate_session_range;

#[test]
fn test_narrow_session_is_ranging() {
    let bars = bars_from_closes(&[100.0, 100.2, 100.1, 100.3, 100.0, 100.2, 100.1, 100.2]);
    let session = calculate_session_range(&bars, 8, 1.0).unwrap();
    assert!((session.high - 100.4).abs() < 1e-9);
    assert!((session.low - 99.9).abs() < 1e-9);
    assert!(session.range_width < 1.0);
    assert!(session.is_ranging);
    assert!(!session.is_degenerate());
}

#[test]
fn test_wide_session_is_not_ranging() {
    let bars = bars_from_closes(&linear_closes(8, 100.0, 1.0));
    let session = calculate_session_range(&bars, 8, 1.0).unwrap();
    assert!(session.range_width > 1.0);
    assert!(!session.is_ranging);
}

#[test]
fn test_flat_session_is_degenerate() {
    let session = calculate_session_range(&flat_bars(8, 100.0), 8, 1.0).unwrap();
    assert_eq!(session.range_width, 0.0);
    assert!(session.is_degenerate());
}

#[test]
fn test_session_insufficient_data() {
    assert!(calculate_session_range(&flat_bars(7, 100.0), 8, 1.0).is_none());
}
