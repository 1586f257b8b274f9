//! Price level implementation with FIFO queue
//!
//! A price level contains all resting orders at a specific price point.
//! Orders are keyed by their arrival slot, so ascending key order is arrival
//! order and any single order can be removed without scanning its neighbours.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};
use types::order::Order;

/// Arrival slot of a resting order
///
/// Slots are handed out book-wide in strictly increasing order.
pub type Slot = u64;

/// Outcome of filling the order at the front of a level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontFill {
    /// The front order still has quantity left and keeps its slot
    Partial,
    /// The front order was completely filled and has left the level
    Filled(Order),
}

/// A price level containing orders at a specific price
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: Price,
    /// Resting orders in arrival order
    orders: BTreeMap<Slot, Order>,
    /// Sum of remaining quantity across all orders at this level; wider than
    /// a single quantity so that any number of u64 orders can share a level
    total_quantity: u128,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: Price) -> Self {
        Self {
            price,
            orders: BTreeMap::new(),
            total_quantity: 0,
        }
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Insert an order at the back of the queue (time priority)
    pub fn insert(&mut self, slot: Slot, order: Order) {
        debug_assert!(
            self.orders.keys().next_back().map_or(true, |last| *last < slot),
            "slots must arrive in increasing order"
        );
        self.total_quantity += u128::from(order.remaining.as_u64());
        self.orders.insert(slot, order);
    }

    /// Remove an order by its slot
    ///
    /// Returns the removed order, or None if the slot is empty
    pub fn remove(&mut self, slot: Slot) -> Option<Order> {
        let order = self.orders.remove(&slot)?;
        self.total_quantity -= u128::from(order.remaining.as_u64());
        Some(order)
    }

    pub fn get(&self, slot: Slot) -> Option<&Order> {
        self.orders.get(&slot)
    }

    /// Peek at the earliest-arrived order
    pub fn front(&self) -> Option<(Slot, &Order)> {
        self.orders.iter().next().map(|(slot, order)| (*slot, order))
    }

    /// Execute `quantity` against the front order
    ///
    /// A fully filled front order is popped and handed back. Returns None if
    /// the level is empty.
    ///
    /// # Panics
    /// Panics if `quantity` exceeds the front order's remaining quantity
    pub fn fill_front(&mut self, quantity: Quantity) -> Option<FrontFill> {
        let mut entry = self.orders.first_entry()?;
        entry.get_mut().fill(quantity);
        self.total_quantity -= u128::from(quantity.as_u64());

        if entry.get().is_filled() {
            Some(FrontFill::Filled(entry.remove()))
        } else {
            Some(FrontFill::Partial)
        }
    }

    /// Iterate resting orders in arrival order
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total quantity at this price level
    ///
    /// Saturates at `u64::MAX` when the orders together exceed one quantity.
    pub fn total_quantity(&self) -> Quantity {
        Quantity::from_u64(u64::try_from(self.total_quantity).unwrap_or(u64::MAX))
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
