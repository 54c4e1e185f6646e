use super::SubSignalEvaluator;
use crate::common::fallback;
use crate::config::SignalThresholds;
use crate::models::{IndicatorSet, SubSignalVote, TradeSide};

/// Price sitting on the 61.8% or 38.2% retracement. Only votes BUY; the
/// deeper 61.8% level takes precedence.
pub struct FibonacciProximity {
    proximity: f64,
}

impl FibonacciProximity {
    pub const WEIGHT_618: f64 = 0.85;
    pub const WEIGHT_382: f64 = 0.75;

    pub fn new(thresholds: &SignalThresholds) -> Self {
        Self {
            proximity: thresholds.fibonacci_proximity,
        }
    }
}

impl SubSignalEvaluator for FibonacciProximity {
    fn id(&self) -> &'static str {
        "fibonacci_proximity"
    }

    fn evaluate(&self, price: f64, indicators: &IndicatorSet) -> Option<SubSignalVote> {
        let fib = &indicators.fibonacci;
        if fib.range() <= 0.0 {
            return None;
        }

        let near = |level: f64| {
            fallback::relative_distance(price, level, price).is_some_and(|d| d < self.proximity)
        };

        if near(fib.level_618) {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Buy,
                Self::WEIGHT_618,
                format!(
                    "Price {:.5} is at the 61.8% retracement {:.5} of the {:.5}-{:.5} range: strong support",
                    price, fib.level_618, fib.range_low, fib.range_high
                ),
            ))
        } else if near(fib.level_382) {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Buy,
                Self::WEIGHT_382,
                format!(
                    "Price {:.5} is at the 38.2% retracement {:.5}: shallow pullback inside the trend",
                    price, fib.level_382
                ),
            ))
        } else {
            None
        }
    }
}

/// Price breaking out of the recent session range by a small margin.
pub struct SessionBreakout {
    margin: f64,
}

impl SessionBreakout {
    pub const WEIGHT: f64 = 0.78;

    pub fn new(thresholds: &SignalThresholds) -> Self {
        Self {
            margin: thresholds.breakout_margin,
        }
    }
}

impl SubSignalEvaluator for SessionBreakout {
    fn id(&self) -> &'static str {
        "session_breakout"
    }

    fn evaluate(&self, price: f64, indicators: &IndicatorSet) -> Option<SubSignalVote> {
        let session = &indicators.session;
        if price > session.high * (1.0 + self.margin) {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Buy,
                Self::WEIGHT,
                format!(
                    "Price {:.5} broke above the session high {:.5}: fresh upside momentum",
                    price, session.high
                ),
            ))
        } else if price < session.low * (1.0 - self.margin) {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Sell,
                Self::WEIGHT,
                format!(
                    "Price {:.5} broke below the session low {:.5}: downside momentum building",
                    price, session.low
                ),
            ))
        } else {
            None
        }
    }
}

/// Fade the edges of a narrow session range. Only active while ranging and
/// never on a zero-width session.
pub struct RangeEdge {
    margin: f64,
}

impl RangeEdge {
    pub const WEIGHT: f64 = 0.68;

    pub fn new(thresholds: &SignalThresholds) -> Self {
        Self {
            margin: thresholds.range_edge_margin,
        }
    }
}

impl SubSignalEvaluator for RangeEdge {
    fn id(&self) -> &'static str {
        "range_edge"
    }

    fn evaluate(&self, price: f64, indicators: &IndicatorSet) -> Option<SubSignalVote> {
        let session = &indicators.session;
        if !session.is_ranging || session.is_degenerate() {
            return None;
        }

        if price <= session.low * (1.0 + self.margin) {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Buy,
                Self::WEIGHT,
                format!(
                    "Ranging market ({:.2}% wide) with price {:.5} at the range floor {:.5}",
                    session.range_width, price, session.low
                ),
            ))
        } else if price >= session.high * (1.0 - self.margin) {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Sell,
                Self::WEIGHT,
                format!(
                    "Ranging market ({:.2}% wide) with price {:.5} at the range ceiling {:.5}",
                    session.range_width, price, session.high
                ),
            ))
        } else {
            None
        }
    }
}
