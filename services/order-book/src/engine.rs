//! Order book core
//!
//! `OrderBook` owns all book state behind one readers-writer lock. Order
//! entry and cancellation take it exclusively and run to completion before
//! releasing it; every query takes it shared, so readers never block each
//! other and never observe a half-applied mutation.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use types::errors::BookError;
use types::ids::OrderId;
use types::numeric::Price;
use types::order::{Order, OrderType, Side};

use crate::book::BookState;
use crate::config::BookConfig;
use crate::matching::{crossing, Execution};
use crate::snapshot::{BookDepth, BookStats};

/// Result of submitting an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    /// Limit order placed at the tail of its price level
    Resting { order_id: OrderId, side: Side, price: Price },
    /// Limit order with nothing left to rest; accepted and dropped
    Inert { order_id: OrderId },
    /// Market order run against the opposite side
    Executed(Execution),
}

/// Thread-safe single-instrument limit order book
#[derive(Debug)]
pub struct OrderBook {
    config: BookConfig,
    state: RwLock<BookState>,
}

impl OrderBook {
    /// Create an order book with default configuration
    pub fn new() -> Self {
        Self::with_config(BookConfig::default())
    }

    pub fn with_config(config: BookConfig) -> Self {
        info!(
            instrument = %config.instrument,
            order_capacity = config.order_capacity,
            "OrderBook initialized"
        );

        Self {
            state: RwLock::new(BookState::new(config.order_capacity)),
            config,
        }
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Submit an order
    ///
    /// Fails without touching the book if an order with the same id is
    /// resting. LIMIT orders rest without matching, even when they cross the
    /// opposite best. MARKET orders consume the opposite side and never rest.
    pub fn submit(&self, order: Order) -> Result<Submission, BookError> {
        let mut state = self.state.write();

        if state.contains(&order.id) {
            debug!(order_id = %order.id, "Rejecting duplicate order id");
            return Err(BookError::DuplicateOrder { order_id: order.id });
        }

        if order.instrument != self.config.instrument {
            debug!(
                order_id = %order.id,
                instrument = %order.instrument,
                book_instrument = %self.config.instrument,
                "Order instrument differs from book instrument"
            );
        }

        let submission = match order.order_type {
            OrderType::LIMIT if order.is_filled() => {
                debug!(order_id = %order.id, "Zero-quantity limit order accepted, nothing to rest");
                Submission::Inert { order_id: order.id }
            }
            OrderType::LIMIT => {
                let opposite_best = state.ladder(order.side.opposite()).best_price();
                if crossing::crosses_opposite(order.side, order.price, opposite_best) {
                    debug!(
                        order_id = %order.id,
                        side = %order.side,
                        price = %order.price,
                        "Limit order crosses opposite best, resting without matching"
                    );
                }

                let order_id = order.id;
                let locator = state.rest_limit(order);
                debug!(
                    order_id = %order_id,
                    side = %locator.side,
                    price = %locator.price,
                    slot = locator.slot,
                    "Limit order resting"
                );
                Submission::Resting {
                    order_id,
                    side: locator.side,
                    price: locator.price,
                }
            }
            OrderType::MARKET => {
                let execution = state.execute_market(order);
                debug!(
                    order_id = %execution.order_id,
                    side = %execution.side,
                    executed = %execution.executed,
                    discarded = %execution.discarded,
                    orders_filled = execution.orders_filled,
                    levels_cleared = execution.levels_cleared,
                    complete = execution.is_complete(),
                    "Market order executed"
                );
                Submission::Executed(execution)
            }
        };

        Ok(submission)
    }

    /// Submit an order; true on acceptance, false on duplicate id
    pub fn add_order(&self, order: Order) -> bool {
        self.submit(order).is_ok()
    }

    /// Cancel a resting order, returning it with its unfilled quantity
    pub fn cancel(&self, order_id: OrderId) -> Result<Order, BookError> {
        let mut state = self.state.write();

        match state.cancel(&order_id) {
            Some(order) => {
                debug!(
                    order_id = %order_id,
                    side = %order.side,
                    price = %order.price,
                    remaining = %order.remaining,
                    "Order cancelled"
                );
                Ok(order)
            }
            None => {
                debug!(order_id = %order_id, "Cancel for unknown order id");
                Err(BookError::OrderNotFound { order_id })
            }
        }
    }

    /// Cancel a resting order; true if it was live and is now gone
    pub fn cancel_order(&self, order_id: OrderId) -> bool {
        self.cancel(order_id).is_ok()
    }

    pub fn best_bid_price(&self) -> Option<Price> {
        self.state.read().best_bid()
    }

    pub fn best_ask_price(&self) -> Option<Price> {
        self.state.read().best_ask()
    }

    /// Number of live resting orders
    pub fn total_orders(&self) -> usize {
        self.state.read().order_count()
    }

    pub fn total_bid_levels(&self) -> usize {
        self.state.read().ladder(Side::BUY).level_count()
    }

    pub fn total_ask_levels(&self) -> usize {
        self.state.read().ladder(Side::SELL).level_count()
    }

    /// Best ask minus best bid, if both sides are present and not crossed
    pub fn spread(&self) -> Option<u64> {
        self.stats().spread()
    }

    /// Look up a resting order by id
    pub fn order(&self, order_id: OrderId) -> Option<Order> {
        self.state.read().order(&order_id).cloned()
    }

    pub fn contains_order(&self, order_id: OrderId) -> bool {
        self.state.read().contains(&order_id)
    }

    /// Totals and top of book from one consistent view
    pub fn stats(&self) -> BookStats {
        BookStats::capture(&self.state.read())
    }

    /// Get order book depth (top N levels per side)
    pub fn depth(&self, levels: usize) -> BookDepth {
        BookDepth::capture(&self.state.read(), self.config.instrument, levels)
    }

    /// Verify that ladders and index agree
    pub fn check_consistency(&self) -> bool {
        self.state.read().check_consistency()
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
