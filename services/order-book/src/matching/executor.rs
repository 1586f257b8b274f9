//! Market order execution
//!
//! Sweeps the opposite ladder best level first and, within a level, oldest
//! order first. Resting orders that fill leave the level and the index in the
//! same step. Nothing here publishes trades; the caller only gets an
//! `Execution` summary back.

use serde::{Deserialize, Serialize};
use tracing::trace;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use crate::book::index::OrderIndex;
use crate::book::ladder::Ladder;
use crate::book::price_level::{FrontFill, PriceLevel};

/// Summary of one market order's pass through the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    pub order_id: OrderId,
    pub side: Side,
    /// Quantity the market order arrived with
    pub requested: Quantity,
    /// Quantity taken from resting orders
    pub executed: Quantity,
    /// Unfilled remainder dropped once the opposite side ran dry
    pub discarded: Quantity,
    /// Resting orders that traded at least once
    pub orders_touched: usize,
    /// Resting orders that were completely filled and removed
    pub orders_filled: usize,
    /// Price levels emptied and pruned
    pub levels_cleared: usize,
    /// Price of the last resting order traded against
    pub last_price: Option<Price>,
}

impl Execution {
    fn start(order: &Order) -> Self {
        Self {
            order_id: order.id,
            side: order.side,
            requested: order.remaining,
            executed: Quantity::zero(),
            discarded: Quantity::zero(),
            orders_touched: 0,
            orders_filled: 0,
            levels_cleared: 0,
            last_price: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.discarded.is_zero()
    }
}

/// Match a market order against `opposite` until it is filled or the ladder
/// is empty
pub(crate) fn match_market_order(
    mut incoming: Order,
    opposite: &mut Ladder,
    index: &mut OrderIndex,
) -> Execution {
    debug_assert_eq!(opposite.side(), incoming.side.opposite());
    let mut execution = Execution::start(&incoming);

    while !incoming.is_filled() {
        let Some(level) = opposite.best_level_mut() else {
            break;
        };
        let price = level.price();

        sweep_level(&mut incoming, level, index, &mut execution);

        if level.is_empty() {
            opposite.remove_level(price);
            execution.levels_cleared += 1;
        }
    }

    execution.discarded = incoming.remaining;
    execution
}

/// Walk one level in arrival order
fn sweep_level(
    incoming: &mut Order,
    level: &mut PriceLevel,
    index: &mut OrderIndex,
    execution: &mut Execution,
) {
    while !incoming.is_filled() {
        let Some((_, resting)) = level.front() else {
            break;
        };
        let exec_qty = incoming.remaining.min(resting.remaining);
        let resting_id = resting.id;

        incoming.fill(exec_qty);
        execution.executed += exec_qty;
        execution.orders_touched += 1;
        execution.last_price = Some(level.price());

        trace!(
            incoming = %incoming.id,
            resting = %resting_id,
            price = %level.price(),
            quantity = %exec_qty,
            "Execution"
        );

        if let Some(FrontFill::Filled(filled)) = level.fill_front(exec_qty) {
            index.remove(&filled.id);
            execution.orders_filled += 1;
        }
    }
}
