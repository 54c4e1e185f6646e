//! Signal evaluation: evaluator battery, aggregation, targets and the engine.

pub mod aggregation;
pub mod commentary;
pub mod decision;
pub mod engine;
pub mod evaluators;

pub use aggregation::*;
pub use decision::*;
pub use engine::SignalEngine;
