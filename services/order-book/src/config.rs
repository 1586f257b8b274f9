//! Order book configuration

use serde::{Deserialize, Serialize};
use types::ids::InstrumentId;

/// Configuration for an order book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Instrument this book serves. Orders carry an instrument id too, but it
    /// is informational only; nothing is routed or rejected on it.
    pub instrument: InstrumentId,
    /// Initial capacity of the order index.
    pub order_capacity: usize,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            instrument: InstrumentId::default(),
            order_capacity: 4_096,
        }
    }
}
