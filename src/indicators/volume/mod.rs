//! Volume indicators

use crate::common::{fallback, math};
use crate::models::PriceBar;

/// Latest volume relative to its `period`-bar average.
///
/// Falls back to 1.0 when any bar in the window lacks volume or the average
/// is zero.
pub fn calculate_volume_ratio(bars: &[PriceBar], period: usize) -> f64 {
    let window = match bars.len().checked_sub(period) {
        Some(start) if period > 0 => &bars[start..],
        _ => return fallback::VOLUME_RATIO_DEFAULT,
    };

    let volumes: Option<Vec<f64>> = window.iter().map(|b| b.volume).collect();
    let Some(volumes) = volumes else {
        return fallback::VOLUME_RATIO_DEFAULT;
    };

    fallback::volume_ratio(volumes.last().copied(), math::sma(&volumes, period))
}
