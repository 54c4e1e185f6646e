//! The fixed battery of sub-signal evaluators.
//!
//! Each evaluator is a pure function of the current price and the indicator
//! set; it either votes BUY/SELL with a heuristic weight and a justification
//! or abstains.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use momentum::{DivergenceEvaluator, MacdCross, RsiExtremity};
pub use structure::{FibonacciProximity, RangeEdge, SessionBreakout};
pub use trend::{EmaCross, MaCross, PriceAction};
pub use volatility::BollingerExtremity;
pub use volume::{VolumeAssessment, VolumeConfirmation};

use crate::config::SignalThresholds;
use crate::models::{IndicatorSet, SubSignalVote};

pub trait SubSignalEvaluator: Send + Sync {
    /// Stable identifier recorded on every vote.
    fn id(&self) -> &'static str;

    fn evaluate(&self, price: f64, indicators: &IndicatorSet) -> Option<SubSignalVote>;
}

/// Ordered collection of evaluators. Order only affects the order of votes
/// and reasons, never the outcome.
pub struct EvaluatorBattery {
    evaluators: Vec<Box<dyn SubSignalEvaluator>>,
}

impl EvaluatorBattery {
    pub fn new(evaluators: Vec<Box<dyn SubSignalEvaluator>>) -> Self {
        Self { evaluators }
    }

    /// The ten standard evaluators.
    pub fn standard(thresholds: &SignalThresholds) -> Self {
        Self::new(vec![
            Box::new(RsiExtremity::new(thresholds)),
            Box::new(MaCross),
            Box::new(BollingerExtremity),
            Box::new(MacdCross),
            Box::new(EmaCross),
            Box::new(FibonacciProximity::new(thresholds)),
            Box::new(DivergenceEvaluator),
            Box::new(SessionBreakout::new(thresholds)),
            Box::new(RangeEdge::new(thresholds)),
            Box::new(PriceAction::new(thresholds)),
        ])
    }

    pub fn evaluate(&self, price: f64, indicators: &IndicatorSet) -> Vec<SubSignalVote> {
        self.evaluators
            .iter()
            .filter_map(|e| e.evaluate(price, indicators))
            .collect()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.evaluators.iter().map(|e| e.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }
}

impl Default for EvaluatorBattery {
    fn default() -> Self {
        Self::standard(&SignalThresholds::default())
    }
}
