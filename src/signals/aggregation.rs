//! Majority-vote aggregation of sub-signal votes

use crate::models::{AggregatedSignal, SignalDirection, SubSignalVote, TradeSide};

pub const INSUFFICIENT_SIGNALS: &str = "insufficient signals";
pub const NEUTRAL_CONFIDENCE: f64 = 50.0;
pub const MAX_CONFIDENCE: f64 = 95.0;

/// Resolves votes into one call.
///
/// Direction is decided by vote count alone; weights only shape the
/// confidence of the winning side. Equal counts are NEUTRAL whatever the
/// weights.
#[derive(Debug, Clone)]
pub struct Aggregator {
    max_confidence: f64,
}

impl Aggregator {
    /// `max_confidence` is bounded to `[0, 95]`; NaN falls back to 95.
    pub fn new(max_confidence: f64) -> Self {
        let max_confidence = if max_confidence.is_nan() {
            MAX_CONFIDENCE
        } else {
            max_confidence.clamp(0.0, MAX_CONFIDENCE)
        };
        Self { max_confidence }
    }

    pub fn max_confidence(&self) -> f64 {
        self.max_confidence
    }

    pub fn aggregate(&self, votes: &[SubSignalVote], volume_boost: f64) -> AggregatedSignal {
        if votes.is_empty() {
            return Self::insufficient();
        }

        let buy_votes = count(votes, TradeSide::Buy);
        let sell_votes = count(votes, TradeSide::Sell);
        let mut reasons: Vec<String> = votes.iter().map(|v| v.reason.clone()).collect();

        let winner = if buy_votes > sell_votes {
            TradeSide::Buy
        } else if sell_votes > buy_votes {
            TradeSide::Sell
        } else {
            reasons.push(format!(
                "No consensus: {} BUY against {} SELL signals",
                buy_votes, sell_votes
            ));
            return AggregatedSignal {
                direction: SignalDirection::Neutral,
                confidence: NEUTRAL_CONFIDENCE,
                reasons,
                buy_votes,
                sell_votes,
            };
        };

        let winning: Vec<f64> = votes
            .iter()
            .filter(|v| v.side == winner)
            .map(|v| v.weight)
            .collect();
        let mean_weight = winning.iter().sum::<f64>() / winning.len() as f64;
        let confidence = ((mean_weight + volume_boost) * 100.0).clamp(0.0, self.max_confidence);

        AggregatedSignal {
            direction: winner.into(),
            confidence,
            reasons,
            buy_votes,
            sell_votes,
        }
    }

    /// The fixed NEUTRAL result used when nothing voted or indicators could
    /// not be computed.
    pub fn insufficient() -> AggregatedSignal {
        AggregatedSignal {
            direction: SignalDirection::Neutral,
            confidence: NEUTRAL_CONFIDENCE,
            reasons: vec![INSUFFICIENT_SIGNALS.to_string()],
            buy_votes: 0,
            sell_votes: 0,
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(MAX_CONFIDENCE)
    }
}

fn count(votes: &[SubSignalVote], side: TradeSide) -> usize {
    votes.iter().filter(|v| v.side == side).count()
}
