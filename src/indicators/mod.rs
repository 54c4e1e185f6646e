pub mod calculator;
pub mod error;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use calculator::IndicatorCalculator;
pub use error::IndicatorError;
