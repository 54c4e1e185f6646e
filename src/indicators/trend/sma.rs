//! SMA (Simple Moving Average) of closes

use crate::common::math;
use crate::models::PriceBar;

pub fn calculate_sma(bars: &[PriceBar], period: usize) -> Option<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::sma(&closes, period)
}
