//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod signal;

pub use indicators::{
    BollingerBands, Divergence, FibonacciLevels, IndicatorSet, IndicatorSummary, MacdIndicator,
    PricePattern, SessionRange,
};
pub use market::{HistoryError, PriceBar, PriceHistory, PriceSnapshot};
pub use signal::{
    AggregatedSignal, MarketCondition, SignalDirection, SignalOutput, SubSignalVote, TradeSide,
    TradeTargets,
};
