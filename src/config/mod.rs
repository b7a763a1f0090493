//! Scenario parameters.
//!
//! Bounds on how large generated frontiers, paths and costs may be, and which
//! questions a session may ask. Loaded from JSON or taken from defaults.

mod error;
mod params;

pub use error::*;
pub use params::*;
