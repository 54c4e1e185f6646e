//! Unit tests for engine configuration

use confluence::config::{parse_override, ConfigError, EngineConfig};

#[test]
fn test_default_config_is_valid() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.periods.rsi, 14);
    assert_eq!(config.periods.sma_long, 21);
    assert_eq!(config.thresholds.rsi_oversold, 30.0);
    assert_eq!(config.targets.stop_atr_multiple, 1.5);
    assert_eq!(config.targets.take_profit_atr_multiple, 3.0);
}

#[test]
fn test_min_history_is_longest_lookback() {
    let mut config = EngineConfig::default();
    assert_eq!(config.min_history(), 21);

    config.periods.fibonacci = 40;
    assert_eq!(config.min_history(), 40);

    config.periods.rsi = 50;
    assert_eq!(config.min_history(), 51);
}

#[test]
fn test_validate_rejects_zero_window() {
    let mut config = EngineConfig::default();
    config.periods.atr = 0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::ZeroWindow { name: "atr period" })
    );
}

#[test]
fn test_validate_rejects_single_bar_bollinger() {
    let mut config = EngineConfig::default();
    config.periods.bollinger = 1;
    assert_eq!(config.validate(), Err(ConfigError::BollingerPeriod(1)));
}

#[test]
fn test_validate_rejects_inverted_rsi_thresholds() {
    let mut config = EngineConfig::default();
    config.thresholds.rsi_oversold = 80.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::RsiThresholds { .. })
    ));
}

#[test]
fn test_validate_rejects_non_positive_multiple() {
    let mut config = EngineConfig::default();
    config.targets.stop_atr_multiple = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositive { value, .. }) if value == 0.0
    ));
}

#[test]
fn test_parse_override_unset_keeps_default() {
    let value: usize = parse_override("SIGNAL_RSI_PERIOD", None, 14).unwrap();
    assert_eq!(value, 14);
}

#[test]
fn test_parse_override_trims_and_parses() {
    let value: f64 = parse_override("SIGNAL_STOP_ATR", Some(" 2.5 ".to_string()), 1.5).unwrap();
    assert_eq!(value, 2.5);
}

#[test]
fn test_parse_override_rejects_garbage() {
    let err = parse_override::<usize>("SIGNAL_ATR_PERIOD", Some("fourteen".to_string()), 14).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidOverride {
            key: "SIGNAL_ATR_PERIOD".to_string(),
            value: "fourteen".to_string(),
        }
    );
}

#[test]
fn test_validate_rejects_non_positive_fallback_percent() {
    let mut config = EngineConfig::default();
    config.targets.fallback_stop_pct = -1.0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::NonPositive {
            name: "fallback stop percent",
            value: -1.0
        })
    );

    let mut config = EngineConfig::default();
    config.targets.fallback_take_profit_pct = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositive { name: "fallback take-profit percent", .. })
    ));
}

#[test]
fn test_validate_rejects_negative_level_offset() {
    let mut config = EngineConfig::default();
    config.targets.level_offset_atr = -0.2;
    assert_eq!(
        config.validate(),
        Err(ConfigError::Negative {
            name: "level offset atr",
            value: -0.2
        })
    );

    config.targets.level_offset_atr = 0.0;
    assert!(config.validate().is_ok());
}
