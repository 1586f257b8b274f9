//! Identifier types for book entities
//!
//! Identifiers are assigned by the caller. The book never generates them, it
//! only checks that an order id is not already live.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order
///
/// Callers must not reuse an id while the order it names is still resting.
/// Once an order is filled or cancelled its id may be submitted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Wrap a caller-assigned raw id
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Instrument identifier
///
/// Carried on every order but not used for routing: a book serves a single
/// instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(u32);

impl InstrumentId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for InstrumentId {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for InstrumentId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
