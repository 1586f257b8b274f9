//! Read-only views of the book
//!
//! Each view is built under a single shared lock acquisition, so its fields
//! always describe the same instant.

use serde::{Deserialize, Serialize};
use types::ids::InstrumentId;
use types::numeric::Price;

use crate::book::{BookState, LevelSummary};
use types::order::Side;

/// Cardinalities and top of book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStats {
    pub total_orders: usize,
    pub bid_levels: usize,
    pub ask_levels: usize,
    pub best_bid: Option<Price>,
    pub best_ask: Option<Price>,
}

impl BookStats {
    pub(crate) fn capture(state: &BookState) -> Self {
        Self {
            total_orders: state.order_count(),
            bid_levels: state.ladder(Side::BUY).level_count(),
            ask_levels: state.ladder(Side::SELL).level_count(),
            best_bid: state.best_bid(),
            best_ask: state.best_ask(),
        }
    }

    /// Best ask minus best bid
    ///
    /// None if either side is empty or the book is crossed.
    pub fn spread(&self) -> Option<u64> {
        self.best_ask?.checked_distance_above(self.best_bid?)
    }
}

/// Aggregated depth, best level first on each side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDepth {
    pub instrument: InstrumentId,
    /// Bid levels in descending price order
    pub bids: Vec<LevelSummary>,
    /// Ask levels in ascending price order
    pub asks: Vec<LevelSummary>,
}

impl BookDepth {
    pub(crate) fn capture(state: &BookState, instrument: InstrumentId, levels: usize) -> Self {
        Self {
            instrument,
            bids: state.ladder(Side::BUY).depth_snapshot(levels),
            asks: state.ladder(Side::SELL).depth_snapshot(levels),
        }
    }
}
