//! Matching logic module
//!
//! Implements price-time priority execution of market orders

pub mod crossing;
pub mod executor;

pub use executor::Execution;
