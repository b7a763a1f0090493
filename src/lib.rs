pub mod config;
pub mod frontier;
pub mod quiz;
pub mod random;
pub mod statistics;
