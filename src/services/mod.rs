//! Collaborator seams around the pure engine.

pub mod batch;
pub mod market_data;

pub use batch::*;
pub use market_data::*;
