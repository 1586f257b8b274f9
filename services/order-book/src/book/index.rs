//! Order index
//!
//! Maps a live order id to a stable locator (side, price, slot). A locator is
//! only resolved against the ladders while the book's lock is held.

use std::collections::HashMap;
use types::ids::OrderId;
use types::numeric::Price;
use types::order::Side;

use super::price_level::Slot;

/// Where a resting order lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locator {
    pub side: Side,
    pub price: Price,
    pub slot: Slot,
}

/// Id to locator map for O(1) lookup and cancellation
#[derive(Debug, Clone, Default)]
pub struct OrderIndex {
    locations: HashMap<OrderId, Locator>,
}

impl OrderIndex {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            locations: HashMap::with_capacity(capacity),
        }
    }

    /// Record a locator; returns the previous one if the id was already present
    pub fn insert(&mut self, order_id: OrderId, locator: Locator) -> Option<Locator> {
        self.locations.insert(order_id, locator)
    }

    pub fn get(&self, order_id: &OrderId) -> Option<Locator> {
        self.locations.get(order_id).copied()
    }

    pub fn remove(&mut self, order_id: &OrderId) -> Option<Locator> {
        self.locations.remove(order_id)
    }

    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.locations.contains_key(order_id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OrderId, &Locator)> {
        self.locations.iter()
    }
}
