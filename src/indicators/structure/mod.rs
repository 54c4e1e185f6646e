//! Market structure: support/resistance, Fibonacci retracements, session range

pub mod fibonacci;
pub mod session;
pub mod support_resistance;

pub use fibonacci::*;
pub use session::*;
pub use support_resistance::*;
