//! One side of the order book
//!
//! Price levels live in a BTreeMap for deterministic ordering. The bid ladder
//! treats the highest price as best, the ask ladder the lowest.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use super::price_level::{PriceLevel, Slot};

/// Aggregated view of one price level
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LevelSummary {
    pub price: Price,
    pub quantity: Quantity,
    pub order_count: usize,
}

/// Price ladder for a single side
#[derive(Debug, Clone)]
pub struct Ladder {
    side: Side,
    /// Price levels sorted ascending; best end depends on `side`
    levels: BTreeMap<Price, PriceLevel>,
}

impl Ladder {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Append an order to the tail of its price level, creating the level
    pub fn insert(&mut self, slot: Slot, order: Order) {
        let price = order.price;
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .insert(slot, order);
    }

    /// Remove the order at `price`/`slot`
    ///
    /// Prunes the level if it becomes empty.
    pub fn remove(&mut self, price: Price, slot: Slot) -> Option<Order> {
        let level = self.levels.get_mut(&price)?;
        let order = level.remove(slot)?;
        if level.is_empty() {
            self.levels.remove(&price);
        }
        Some(order)
    }

    pub fn get(&self, price: Price, slot: Slot) -> Option<&Order> {
        self.levels.get(&price)?.get(slot)
    }

    /// Best price on this side
    pub fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::BUY => self.levels.keys().next_back().copied(),
            Side::SELL => self.levels.keys().next().copied(),
        }
    }

    /// Get mutable reference to the best level
    pub(crate) fn best_level_mut(&mut self) -> Option<&mut PriceLevel> {
        match self.side {
            Side::BUY => self.levels.values_mut().next_back(),
            Side::SELL => self.levels.values_mut().next(),
        }
    }

    /// Drop a level; callers only do this once it is empty
    pub(crate) fn remove_level(&mut self, price: Price) -> Option<PriceLevel> {
        let level = self.levels.remove(&price);
        debug_assert!(level.as_ref().map_or(true, PriceLevel::is_empty));
        level
    }

    /// Iterate levels from best to worst
    pub fn levels(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::BUY => Box::new(self.levels.values().rev()),
            Side::SELL => Box::new(self.levels.values()),
        }
    }

    /// Get depth snapshot (top N price levels, best first)
    pub fn depth_snapshot(&self, depth: usize) -> Vec<LevelSummary> {
        self.levels()
            .take(depth)
            .map(|level| LevelSummary {
                price: level.price(),
                quantity: level.total_quantity(),
                order_count: level.order_count(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
