//! Numeric helpers shared by the indicator and target calculators.

pub mod fallback;
pub mod math;
