//! Unit tests for the signal engine

use crate::fixtures::{history_from_closes, last_snapshot, linear_closes, snapshot_at};
use confluence::config::EngineConfig;
use confluence::models::{
    IndicatorSet, MarketCondition, SignalDirection, SubSignalVote, TradeSide,
};
use confluence::signals::evaluators::{EvaluatorBattery, SubSignalEvaluator};
use confluence::signals::{SignalEngine, INSUFFICIENT_SIGNALS};

struct FixedVote(&'static str, TradeSide, f64);

impl SubSignalEvaluator for FixedVote {
    fn id(&self) -> &'static str {
        self.0
    }

    fn evaluate(&self, _price: f64, _indicators: &IndicatorSet) -> Option<SubSignalVote> {
        Some(SubSignalVote::new(self.0, self.1, self.2, format!("{} fired", self.0)))
    }
}

#[test]
fn test_short_history_is_neutral() {
    let engine = SignalEngine::default();
    let history = history_from_closes(&linear_closes(20, 100.0, 0.5));
    let (output, indicators) = engine.evaluate_with_indicators("EURUSD", &last_snapshot(&history), &history);

    assert!(indicators.is_none());
    assert_eq!(output.direction, SignalDirection::Neutral);
    assert_eq!(output.confidence, 50.0);
    assert_eq!(output.reasons, vec![INSUFFICIENT_SIGNALS.to_string()]);
    assert!(output.targets.is_none());
    assert!(output.indicators.is_none());
    assert_eq!(output.market_condition, MarketCondition::Consolidation);
}

#[test]
fn test_snapshot_fields_pass_through() {
    let engine = SignalEngine::default();
    let history = history_from_closes(&linear_closes(30, 100.0, 0.5));
    let mut snapshot = snapshot_at(&history, 114.5);
    snapshot.change = 0.25;
    snapshot.change_percent = 0.2;
    snapshot.source = "live-feed".to_string();

    let output = engine.generate_signal("BTCUSD", &snapshot, &history);
    assert_eq!(output.symbol, "BTCUSD");
    assert_eq!(output.price, 114.5);
    assert_eq!(output.change, 0.25);
    assert_eq!(output.change_percent, 0.2);
    assert_eq!(output.source, "live-feed");
    assert_eq!(output.timestamp, snapshot.timestamp);
    assert!(output.indicators.is_some());
}

#[test]
fn test_generate_signal_is_idempotent() {
    let engine = SignalEngine::default();
    let history = history_from_closes(&linear_closes(40, 100.0, -0.3));
    let snapshot = last_snapshot(&history);

    let first = engine.generate_signal("XAUUSD", &snapshot, &history);
    let second = engine.generate_signal("XAUUSD", &snapshot, &history);
    assert_eq!(first, second);
}

#[test]
fn test_custom_battery_replaces_evaluators() {
    let battery = EvaluatorBattery::new(vec![Box::new(FixedVote("always_sell", TradeSide::Sell, 0.6))]);
    let engine = SignalEngine::new(EngineConfig::default()).with_battery(battery);
    let history = history_from_closes(&linear_closes(30, 100.0, 0.5));

    let output = engine.generate_signal("EURUSD", &last_snapshot(&history), &history);
    assert_eq!(output.direction, SignalDirection::Sell);
    assert!((output.confidence - 60.0).abs() < 1e-9);
    assert_eq!(output.reasons[0], "always_sell fired");
    let targets = output.targets.unwrap();
    assert!(targets.stop_loss > output.price);
    assert!(targets.take_profit < output.price);
}

#[test]
fn test_tie_from_engine_has_no_targets() {
    let battery = EvaluatorBattery::new(vec![
        Box::new(FixedVote("strong_buy", TradeSide::Buy, 0.95)),
        Box::new(FixedVote("weak_sell", TradeSide::Sell, 0.55)),
    ]);
    let engine = SignalEngine::default().with_battery(battery);
    let history = history_from_closes(&linear_closes(30, 100.0, 0.5));

    let output = engine.generate_signal("EURUSD", &last_snapshot(&history), &history);
    assert_eq!(output.direction, SignalDirection::Neutral);
    assert_eq!(output.confidence, 50.0);
    assert!(output.targets.is_none());
    assert_eq!(output.reasons[0], "strong_buy fired");
    assert_eq!(output.reasons[1], "weak_sell fired");
    assert!(output.reasons[2].contains("No consensus"));
    assert_eq!(output.market_condition, MarketCondition::Consolidation);
}

#[test]
fn test_volume_spike_boosts_confidence_and_adds_note() {
    let battery = EvaluatorBattery::new(vec![Box::new(FixedVote("always_buy", TradeSide::Buy, 0.6))]);
    let engine = SignalEngine::default().with_battery(battery);

    let mut bars = crate::fixtures::bars_from_closes(&linear_closes(30, 100.0, 0.5));
    bars.last_mut().unwrap().volume = Some(3000.0);
    let history = crate::fixtures::history(bars);

    let output = engine.generate_signal("EURUSD", &last_snapshot(&history), &history);
    assert_eq!(output.direction, SignalDirection::Buy);
    assert!((output.confidence - 75.0).abs() < 1e-9);
    assert!(output.reasons.iter().any(|r| r.contains("Volume is 2.5x")));
}

#[test]
fn test_directional_output_carries_summary_line() {
    let engine = SignalEngine::default();
    let history = history_from_closes(&linear_closes(30, 100.0, 0.5));
    let output = engine.generate_signal("EURUSD", &last_snapshot(&history), &history);

    assert_eq!(output.direction, SignalDirection::Buy);
    let summary = output.reasons.last().unwrap();
    assert!(summary.contains(" | "));
    assert!(summary.starts_with("RSI 100.0"));
}

#[test]
fn test_output_serializes_for_presentation() {
    let engine = SignalEngine::default();
    let history = history_from_closes(&linear_closes(30, 100.0, 0.5));
    let output = engine.generate_signal("EURUSD", &last_snapshot(&history), &history);

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["direction"], "BUY");
    assert_eq!(json["market_condition"], "Bullish Momentum");
    assert!(json["targets"]["take_profit"].is_number());
}

#[test]
fn test_commentary_follows_every_vote() {
    let battery = EvaluatorBattery::new(vec![
        Box::new(FixedVote("first", TradeSide::Buy, 0.6)),
        Box::new(FixedVote("second", TradeSide::Buy, 0.6)),
    ]);
    let engine = SignalEngine::default().with_battery(battery);

    let mut bars = crate::fixtures::bars_from_closes(&linear_closes(30, 100.0, 0.5));
    bars.last_mut().unwrap().volume = Some(3000.0);
    let history = crate::fixtures::history(bars);

    let output = engine.generate_signal("EURUSD", &last_snapshot(&history), &history);
    assert_eq!(output.reasons.len(), 5);
    assert_eq!(output.reasons[0], "first fired");
    assert_eq!(output.reasons[1], "second fired");
    assert!(output.reasons[2].contains("Volume is 2.5x"));
    assert!(output.reasons[3].contains("close to resistance"));
    assert!(output.reasons[4].contains(" | "));
}

#[test]
fn test_negative_confidence_cap_does_not_panic() {
    let mut config = EngineConfig::default();
    config.targets.max_confidence = -1.0;
    let engine = SignalEngine::new(config);
    let history = history_from_closes(&linear_closes(30, 100.0, 0.5));

    let output = engine.generate_signal("EURUSD", &last_snapshot(&history), &history);
    assert_eq!(output.direction, SignalDirection::Buy);
    assert_eq!(output.confidence, 0.0);
    assert!(output.targets.is_some());
}
