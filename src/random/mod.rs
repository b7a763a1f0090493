//! Injectable randomness.
//!
//! Scenario synthesis never touches an ambient generator. Every draw goes through a
//! [`RandomSource`], so a seeded or scripted source makes generation fully
//! deterministic.

mod source;

pub use source::*;
