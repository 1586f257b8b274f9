//! Unlocked book state
//!
//! Ladders and index as one unit. Every method assumes the caller holds the
//! book's lock (shared for `&self`, exclusive for `&mut self`), which is what
//! keeps the two structures in agreement from the outside.

use types::ids::OrderId;
use types::numeric::Price;
use types::order::{Order, Side};

use super::index::{Locator, OrderIndex};
use super::ladder::Ladder;
use super::price_level::Slot;
use crate::matching::executor::{self, Execution};

#[derive(Debug, Clone)]
pub struct BookState {
    bids: Ladder,
    asks: Ladder,
    index: OrderIndex,
    /// Next arrival slot; strictly increasing for the life of the book
    next_slot: Slot,
}

impl BookState {
    pub fn new(order_capacity: usize) -> Self {
        Self {
            bids: Ladder::new(Side::BUY),
            asks: Ladder::new(Side::SELL),
            index: OrderIndex::with_capacity(order_capacity),
            next_slot: 1,
        }
    }

    pub fn ladder(&self, side: Side) -> &Ladder {
        match side {
            Side::BUY => &self.bids,
            Side::SELL => &self.asks,
        }
    }

    fn ladder_mut(&mut self, side: Side) -> &mut Ladder {
        match side {
            Side::BUY => &mut self.bids,
            Side::SELL => &mut self.asks,
        }
    }

    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.index.contains(order_id)
    }

    /// Resolve an id to the resting order
    pub fn order(&self, order_id: &OrderId) -> Option<&Order> {
        let locator = self.index.get(order_id)?;
        self.ladder(locator.side).get(locator.price, locator.slot)
    }

    /// Place a limit order at the tail of its price level
    ///
    /// The caller has already rejected duplicate ids. No matching is
    /// attempted, whatever the opposite side looks like.
    pub fn rest_limit(&mut self, order: Order) -> Locator {
        debug_assert!(!self.index.contains(&order.id));

        let slot = self.next_slot;
        self.next_slot += 1;

        let locator = Locator {
            side: order.side,
            price: order.price,
            slot,
        };
        let order_id = order.id;
        self.ladder_mut(locator.side).insert(slot, order);
        self.index.insert(order_id, locator);
        locator
    }

    /// Run a market order against the opposite ladder
    ///
    /// Whatever cannot be filled is discarded; the order itself never rests.
    pub fn execute_market(&mut self, order: Order) -> Execution {
        let Self {
            bids, asks, index, ..
        } = self;
        let opposite = match order.side {
            Side::BUY => asks,
            Side::SELL => bids,
        };
        executor::match_market_order(order, opposite, index)
    }

    /// Remove a live order from its level and from the index
    pub fn cancel(&mut self, order_id: &OrderId) -> Option<Order> {
        let locator = self.index.remove(order_id)?;
        let removed = self
            .ladder_mut(locator.side)
            .remove(locator.price, locator.slot);
        debug_assert!(removed.is_some(), "index pointed at an empty slot");
        removed
    }

    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    pub fn order_count(&self) -> usize {
        self.index.len()
    }

    /// Check that every index entry resolves and every resting order is indexed
    pub fn check_consistency(&self) -> bool {
        let indexed_resolve = self.index.iter().all(|(id, loc)| {
            self.ladder(loc.side)
                .get(loc.price, loc.slot)
                .map(|order| order.id)
                == Some(*id)
        });

        let mut resting = 0;
        for level in self.bids.levels().chain(self.asks.levels()) {
            if level.is_empty() || level.orders().any(Order::is_filled) {
                return false;
            }
            resting += level.order_count();
        }

        indexed_resolve && resting == self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::Quantity;

    #[test]
    fn test_rest_limit_records_locator() {
        let mut state = BookState::new(16);
        let loc = state.rest_limit(Order::limit(1, 1, Side::BUY, 100, 10));

        assert_eq!(loc.side, Side::BUY);
        assert_eq!(loc.price, Price::from_u64(100));
        assert_eq!(state.order(&OrderId::new(1)).unwrap().remaining, Quantity::from_u64(10));
        assert_eq!(state.best_bid(), Some(Price::from_u64(100)));
        assert!(state.check_consistency());
    }

    #[test]
    fn test_slots_increase_across_sides() {
        let mut state = BookState::new(16);
        let a = state.rest_limit(Order::limit(1, 1, Side::BUY, 100, 10));
        let b = state.rest_limit(Order::limit(2, 1, Side::SELL, 110, 10));
        let c = state.rest_limit(Order::limit(3, 1, Side::BUY, 100, 10));

        assert!(a.slot < b.slot && b.slot < c.slot);
    }

    #[test]
    fn test_cancel_clears_index_and_level() {
        let mut state = BookState::new(16);
        state.rest_limit(Order::limit(1, 1, Side::SELL, 105, 10));

        let cancelled = state.cancel(&OrderId::new(1)).unwrap();
        assert_eq!(cancelled.id, OrderId::new(1));
        assert!(state.cancel(&OrderId::new(1)).is_none());
        assert_eq!(state.best_ask(), None);
        assert_eq!(state.order_count(), 0);
        assert!(state.check_consistency());
    }

    #[test]
    fn test_execute_market_uses_opposite_side() {
        let mut state = BookState::new(16);
        state.rest_limit(Order::limit(1, 1, Side::BUY, 100, 10));
        state.rest_limit(Order::limit(2, 1, Side::SELL, 110, 10));

        let execution = state.execute_market(Order::market(3, 1, Side::SELL, 4));
        assert_eq!(execution.executed, Quantity::from_u64(4));
        assert_eq!(state.order(&OrderId::new(1)).unwrap().remaining, Quantity::from_u64(6));
        assert_eq!(state.order(&OrderId::new(2)).unwrap().remaining, Quantity::from_u64(10));
        assert!(state.check_consistency());
    }

    #[test]
    fn test_rest_limit_past_u64_level_total() {
        let mut state = BookState::new(16);
        let half = u64::MAX / 2 + 1;
        state.rest_limit(Order::limit(1, 1, Side::SELL, 100, half));
        state.rest_limit(Order::limit(2, 1, Side::SELL, 100, half));

        assert_eq!(state.order_count(), 2);
        assert!(state.check_consistency());
        assert_eq!(state.cancel(&OrderId::new(2)).unwrap().remaining, Quantity::from_u64(half));
        assert!(state.check_consistency());
    }
}
