use super::SubSignalEvaluator;
use crate::models::{IndicatorSet, SubSignalVote, TradeSide};

/// Price touching or piercing a Bollinger band. Zero-width bands (a flat
/// window) never vote.
pub struct BollingerExtremity;

impl BollingerExtremity {
    pub const WEIGHT: f64 = 0.8;
}

impl SubSignalEvaluator for BollingerExtremity {
    fn id(&self) -> &'static str {
        "bollinger_extremity"
    }

    fn evaluate(&self, price: f64, indicators: &IndicatorSet) -> Option<SubSignalVote> {
        let bands = &indicators.bollinger;
        if bands.width() <= 0.0 {
            return None;
        }

        if price <= bands.lower {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Buy,
                Self::WEIGHT,
                format!(
                    "Price {:.5} is at the lower Bollinger band {:.5} (band position {:.1}%): stretched to the downside",
                    price, bands.lower, indicators.bb_position
                ),
            ))
        } else if price >= bands.upper {
            Some(SubSignalVote::new(
                self.id(),
                TradeSide::Sell,
                Self::WEIGHT,
                format!(
                    "Price {:.5} is at the upper Bollinger band {:.5} (band position {:.1}%): stretched to the upside",
                    price, bands.upper, indicators.bb_position
                ),
            ))
        } else {
            None
        }
    }
}
