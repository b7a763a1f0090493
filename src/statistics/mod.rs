//! Session statistics.
//!
//! Counts the scenarios a quiz session has synthesized and how many frontier
//! entries went into them.

mod stats;
pub use stats::*;
