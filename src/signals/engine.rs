//! Main signal evaluation engine: indicators -> votes -> aggregate -> targets.

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::indicators::{IndicatorCalculator, IndicatorError};
use crate::models::{
    AggregatedSignal, IndicatorSet, MarketCondition, PriceHistory, PriceSnapshot, SignalDirection,
    SignalOutput,
};
use crate::signals::aggregation::Aggregator;
use crate::signals::commentary;
use crate::signals::decision::StopLossTakeProfit;
use crate::signals::evaluators::{EvaluatorBattery, VolumeConfirmation};

/// Stateless signal engine. Safe to share across threads; two calls with the
/// same inputs return identical outputs.
pub struct SignalEngine {
    config: EngineConfig,
    calculator: IndicatorCalculator,
    battery: EvaluatorBattery,
    volume: VolumeConfirmation,
    aggregator: Aggregator,
    targets: StopLossTakeProfit,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            calculator: IndicatorCalculator::new(&config),
            battery: EvaluatorBattery::standard(&config.thresholds),
            volume: VolumeConfirmation::new(&config.thresholds),
            aggregator: Aggregator::new(config.targets.max_confidence),
            targets: StopLossTakeProfit::new(config.targets.clone()),
            config,
        }
    }

    /// Replace the evaluator battery, e.g. to run a reduced set.
    pub fn with_battery(mut self, battery: EvaluatorBattery) -> Self {
        self.battery = battery;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate one instrument.
    ///
    /// Never fails: a history shorter than the longest lookback, an empty
    /// vote list and a tied vote all resolve to NEUTRAL with confidence 50.
    pub fn generate_signal(&self, symbol: &str, snapshot: &PriceSnapshot, history: &PriceHistory) -> SignalOutput {
        self.evaluate_with_indicators(symbol, snapshot, history).0
    }

    /// Evaluate and also return the full indicator set (for debugging and
    /// detailed rendering).
    pub fn evaluate_with_indicators(
        &self,
        symbol: &str,
        snapshot: &PriceSnapshot,
        history: &PriceHistory,
    ) -> (SignalOutput, Option<IndicatorSet>) {
        let indicators = match self.calculator.compute(history) {
            Ok(indicators) => indicators,
            Err(IndicatorError::InsufficientData { required, available }) => {
                debug!(
                    symbol,
                    required, available, "not enough bars for indicators, returning neutral"
                );
                let output = self.build_output(symbol, snapshot, Aggregator::insufficient(), None);
                return (output, None);
            }
        };

        let price = snapshot.price;
        let votes = self.battery.evaluate(price, &indicators);
        let volume = self.volume.assess(&indicators);
        let mut signal = self.aggregator.aggregate(&votes, volume.boost);

        if !votes.is_empty() {
            let thresholds = &self.config.thresholds;
            signal.reasons.extend(volume.note);
            signal
                .reasons
                .extend(commentary::level_proximity_note(price, &indicators, thresholds));
            signal
                .reasons
                .push(commentary::indicator_summary(price, &indicators, thresholds));
        }

        debug!(
            symbol,
            buy_votes = signal.buy_votes,
            sell_votes = signal.sell_votes,
            volume_boost = volume.boost,
            "votes tallied"
        );

        let output = self.build_output(symbol, snapshot, signal, Some(&indicators));
        info!(
            symbol,
            direction = %output.direction,
            confidence = output.confidence,
            "signal generated"
        );
        (output, Some(indicators))
    }

    fn build_output(
        &self,
        symbol: &str,
        snapshot: &PriceSnapshot,
        signal: AggregatedSignal,
        indicators: Option<&IndicatorSet>,
    ) -> SignalOutput {
        let targets =
            indicators.and_then(|ind| self.targets.calculate(signal.direction, snapshot.price, ind));

        let market_condition = match (signal.direction, indicators) {
            (SignalDirection::Neutral, _) | (_, None) => MarketCondition::Consolidation,
            (_, Some(ind)) => commentary::market_condition(ind, &self.config.thresholds),
        };

        SignalOutput {
            symbol: symbol.to_string(),
            direction: signal.direction,
            confidence: signal.confidence,
            reasons: signal.reasons,
            targets,
            price: snapshot.price,
            change: snapshot.change,
            change_percent: snapshot.change_percent,
            source: snapshot.source.clone(),
            indicators: indicators.map(IndicatorSet::summary),
            market_condition,
            timestamp: snapshot.timestamp,
        }
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
