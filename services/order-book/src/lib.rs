//! Order Book Service
//!
//! Single-instrument limit order book with price-time priority matching,
//! shared by many threads.
//!
//! **Behaviour:**
//! - LIMIT orders rest at the tail of their price level and never execute on
//!   entry, even when they cross the opposite side
//! - MARKET orders sweep the opposite side best price first, oldest order
//!   first, and never rest; any unfilled remainder is discarded
//! - Cancellation is all-or-nothing on the unfilled remainder
//!
//! **Key Invariants:**
//! - Ladders and index change together under one exclusive lock
//! - An id is indexed iff an unfilled order with that id is resting
//! - No empty price level is ever visible
//! - Conservation of quantity on every execution
//!
//! Self-trade prevention and trade publication are not provided.

pub mod book;
pub mod config;
pub mod engine;
pub mod matching;
pub mod snapshot;

pub use config::BookConfig;
pub use engine::{OrderBook, Submission};
pub use matching::Execution;
pub use snapshot::{BookDepth, BookStats};
