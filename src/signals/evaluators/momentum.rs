use super::SubSignalEvaluator;
use crate::config::SignalThresholds;
use crate::models::{Divergence, IndicatorSet, SubSignalVote, TradeSide};

/// Votes against RSI extremes: oversold buys, overbought sells.
pub struct RsiExtremity {
    oversold: f64,
    overbought: f64,
}

impl RsiExtremity {
    pub const WEIGHT: f64 = 0.75;

    pub fn new(thresholds: &SignalThresholds) -> Self {
        Self {
            oversold: thresholds.rsi_oversold,
            overbought: thresholds.rsi_overbought,
        }
    }
}

impl SubSignalEvaluator for RsiExtremity {
    fn id(&self) -> &'static str {
        "rsi_extremity"
    }

    fn evaluate(&self, _price: f64, indicators: &IndicatorSet) -> Option<SubSignalVote> {
        let rsi = indicators.rsi;
        if rsi < self.oversold {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Buy,
                Self::WEIGHT,
                format!(
                    "RSI {:.1} is below {:.0}: oversold, a rebound is likely",
                    rsi, self.oversold
                ),
            ))
        } else if rsi > self.overbought {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Sell,
                Self::WEIGHT,
                format!(
                    "RSI {:.1} is above {:.0}: overbought, a pullback is likely",
                    rsi, self.overbought
                ),
            ))
        } else {
            None
        }
    }
}

/// MACD line crossing its signal line, confirmed by the histogram sign.
pub struct MacdCross;

impl MacdCross {
    pub const WEIGHT: f64 = 0.7;
}

impl SubSignalEvaluator for MacdCross {
    fn id(&self) -> &'static str {
        "macd_cross"
    }

    fn evaluate(&self, _price: f64, indicators: &IndicatorSet) -> Option<SubSignalVote> {
        let m = &indicators.macd;
        if m.macd > m.signal && m.histogram > 0.0 {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Buy,
                Self::WEIGHT,
                format!(
                    "MACD {:.6} is above its signal line {:.6} (histogram {:.6}): bullish momentum",
                    m.macd, m.signal, m.histogram
                ),
            ))
        } else if m.macd < m.signal && m.histogram < 0.0 {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Sell,
                Self::WEIGHT,
                format!(
                    "MACD {:.6} is below its signal line {:.6} (histogram {:.6}): bearish momentum",
                    m.macd, m.signal, m.histogram
                ),
            ))
        } else {
            None
        }
    }
}

/// Price and RSI moving in opposite directions.
pub struct DivergenceEvaluator;

impl DivergenceEvaluator {
    pub const WEIGHT: f64 = 0.8;
}

impl SubSignalEvaluator for DivergenceEvaluator {
    fn id(&self) -> &'static str {
        "divergence"
    }

    fn evaluate(&self, _price: f64, indicators: &IndicatorSet) -> Option<SubSignalVote> {
        match indicators.divergence {
            Divergence::Bullish => Some(SubSignalVote::new(
                self.id(),
                TradeSide::Buy,
                Self::WEIGHT,
                format!(
                    "Bullish divergence: price is falling while RSI rises (RSI {:.1})",
                    indicators.rsi
                ),
            )),
            Divergence::Bearish => Some(SubSignalVote::new(
                self.id(),
                TradeSide::Sell,
                Self::WEIGHT,
                format!(
                    "Bearish divergence: price is rising while RSI falls (RSI {:.1})",
                    indicators.rsi
                ),
            )),
            Divergence::None => None,
        }
    }
}
