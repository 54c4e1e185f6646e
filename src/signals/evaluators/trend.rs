use super::SubSignalEvaluator;
use crate::common::fallback;
use crate::config::SignalThresholds;
use crate::models::{IndicatorSet, PricePattern, SubSignalVote, TradeSide};

/// Short SMA against long SMA, confirmed by price on the same side of the
/// short SMA.
pub struct MaCross;

impl MaCross {
    pub const WEIGHT: f64 = 0.65;
}

impl SubSignalEvaluator for MaCross {
    fn id(&self) -> &'static str {
        "ma_cross"
    }

    fn evaluate(&self, price: f64, indicators: &IndicatorSet) -> Option<SubSignalVote> {
        let (short, long) = (indicators.sma_short, indicators.sma_long);
        let spread = fallback::percent_change(long, short).abs();

        if short > long && price > short {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Buy,
                Self::WEIGHT,
                format!(
                    "Price {:.5} is above the short SMA {:.5}, which leads the long SMA {:.5} by {:.2}%: uptrend",
                    price, short, long, spread
                ),
            ))
        } else if short < long && price < short {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Sell,
                Self::WEIGHT,
                format!(
                    "Price {:.5} is below the short SMA {:.5}, which trails the long SMA {:.5} by {:.2}%: downtrend",
                    price, short, long, spread
                ),
            ))
        } else {
            None
        }
    }
}

/// Fast EMA against slow EMA, confirmed by price against the fast EMA.
pub struct EmaCross;

impl EmaCross {
    pub const WEIGHT: f64 = 0.72;
}

impl SubSignalEvaluator for EmaCross {
    fn id(&self) -> &'static str {
        "ema_cross"
    }

    fn evaluate(&self, price: f64, indicators: &IndicatorSet) -> Option<SubSignalVote> {
        let (fast, slow) = (indicators.ema_fast, indicators.ema_slow);

        if fast > slow && price > fast {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Buy,
                Self::WEIGHT,
                format!(
                    "EMA 12 {:.5} is above EMA 26 {:.5} and price {:.5} holds above EMA 12: trend continuation",
                    fast, slow, price
                ),
            ))
        } else if fast < slow && price < fast {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Sell,
                Self::WEIGHT,
                format!(
                    "EMA 12 {:.5} is below EMA 26 {:.5} and price {:.5} holds below EMA 12: bearish trend",
                    fast, slow, price
                ),
            ))
        } else {
            None
        }
    }
}

/// Three consecutive higher (lower) closes while RSI still has room.
pub struct PriceAction {
    oversold: f64,
    overbought: f64,
}

impl PriceAction {
    pub const WEIGHT: f64 = 0.65;

    pub fn new(thresholds: &SignalThresholds) -> Self {
        Self {
            oversold: thresholds.rsi_oversold,
            overbought: thresholds.rsi_overbought,
        }
    }
}

impl SubSignalEvaluator for PriceAction {
    fn id(&self) -> &'static str {
        "price_action"
    }

    fn evaluate(&self, _price: f64, indicators: &IndicatorSet) -> Option<SubSignalVote> {
        let rsi = indicators.rsi;
        match indicators.price_pattern {
            PricePattern::Ascending if rsi < self.overbought => Some(SubSignalVote::new(
                self.id(),
                TradeSide::Buy,
                Self::WEIGHT,
                format!(
                    "Three rising closes (last change {:+.2}%) with RSI {:.1} not yet overbought",
                    indicators.price_change_pct, rsi
                ),
            )),
            PricePattern::Descending if rsi > self.oversold => Some(SubSignalVote::new(
                self.id(),
                TradeSide::Sell,
                Self::WEIGHT,
                format!(
                    "Three falling closes (last change {:+.2}%) with RSI {:.1} not yet oversold",
                    indicators.price_change_pct, rsi
                ),
            )),
            _ => None,
        }
    }
}
