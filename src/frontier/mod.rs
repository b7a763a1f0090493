//! The search-frontier data model.
//!
//! A frontier is an ordered collection of candidate paths, each annotated with its
//! accumulated cost and a heuristic estimate. The selection rules here decide which
//! entry a given search strategy expands next.
//!
//! # Submodules
//!
//! - `label`: node labels and the label to heuristic mapping
//! - `entry`: a single frontier entry
//! - `store`: the ordered frontier and its selection queries
//! - `strategy`: the supported search strategies
//! - `generator`: synthesis of random entries for quiz scenarios

mod entry;
mod error;
mod generator;
mod label;
mod store;
mod strategy;

pub use entry::*;
pub use error::*;
pub use generator::*;
pub use label::*;
pub use store::*;
pub use strategy::*;
