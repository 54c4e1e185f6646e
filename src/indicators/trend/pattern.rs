//! Three-close price action pattern

use crate::models::{PriceBar, PricePattern};

/// Classify the last three closes by strict monotonicity.
pub fn calculate_price_pattern(bars: &[PriceBar]) -> Option<PricePattern> {
    if bars.len() < 3 {
        return None;
    }
    let last = &bars[bars.len() - 3..];
    let (a, b, c) = (last[0].close, last[1].close, last[2].close);

    let pattern = if a < b && b < c {
        PricePattern::Ascending
    } else if a > b && b > c {
        PricePattern::Descending
    } else {
        PricePattern::Sideways
    };
    Some(pattern)
}
