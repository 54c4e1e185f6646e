//! Session high/low and range-bound detection

use super::support_resistance::trailing_extremes;
use crate::common::{fallback, math};
use crate::models::{PriceBar, SessionRange};

/// Session extremes over the trailing `lookback` bars. The market is ranging
/// when the session width is below `ranging_width_pct` percent of the low.
pub fn calculate_session_range(bars: &[PriceBar], lookback: usize, ranging_width_pct: f64) -> Option<SessionRange> {
    let (highs, lows) = trailing_extremes(bars, lookback)?;
    let high = math::max_of(&highs)?;
    let low = math::min_of(&lows)?;
    let range_width = fallback::range_width_pct(high, low);

    Some(SessionRange {
        high,
        low,
        range_width,
        is_ranging: range_width < ranging_width_pct,
    })
}
