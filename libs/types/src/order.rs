//! Order value types
//!
//! An order is immutable once built except for `remaining`, which only the
//! book's matching and cancellation paths reduce.

use crate::ids::{InstrumentId, OrderId};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::BUY => "BUY",
            Side::SELL => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type
///
/// LIMIT orders rest on the book and never execute on entry. MARKET orders
/// consume resting liquidity and never rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    LIMIT,
    MARKET,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::LIMIT => "LIMIT",
            OrderType::MARKET => "MARKET",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order submitted to the book
///
/// Invariant: `remaining <= quantity`. The order is filled iff
/// `remaining` is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub instrument: InstrumentId,
    pub order_type: OrderType,
    pub side: Side,
    /// Meaningful only for LIMIT orders; zero for MARKET
    pub price: Price,
    pub quantity: Quantity,
    pub remaining: Quantity,
}

impl Order {
    /// Create a limit order with nothing filled yet
    pub fn limit(id: u64, instrument: u32, side: Side, price: u64, quantity: u64) -> Self {
        let quantity = Quantity::from_u64(quantity);
        Self {
            id: OrderId::new(id),
            instrument: InstrumentId::new(instrument),
            order_type: OrderType::LIMIT,
            side,
            price: Price::from_u64(price),
            quantity,
            remaining: quantity,
        }
    }

    /// Create a market order; its price is always zero
    pub fn market(id: u64, instrument: u32, side: Side, quantity: u64) -> Self {
        let quantity = Quantity::from_u64(quantity);
        Self {
            id: OrderId::new(id),
            instrument: InstrumentId::new(instrument),
            order_type: OrderType::MARKET,
            side,
            price: Price::ZERO,
            quantity,
            remaining: quantity,
        }
    }

    /// Check quantity invariant: remaining never exceeds the original size
    pub fn check_invariant(&self) -> bool {
        self.remaining <= self.quantity
    }

    /// Check if order is completely filled
    pub fn is_filled(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Quantity executed so far
    ///
    /// Zero for a hand-built order whose remaining exceeds its size.
    pub fn filled_quantity(&self) -> Quantity {
        self.quantity
            .checked_sub(self.remaining)
            .unwrap_or(Quantity::zero())
    }

    pub fn is_market(&self) -> bool {
        self.order_type == OrderType::MARKET
    }

    /// Reduce the remaining quantity by an executed amount
    ///
    /// # Panics
    /// Panics if the fill would exceed the remaining quantity
    pub fn fill(&mut self, quantity: Quantity) {
        self.remaining = self
            .remaining
            .checked_sub(quantity)
            .expect("Fill would exceed remaining quantity");
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order{{id={} {} {} price={} qty={}}}",
            self.id, self.side, self.order_type, self.price, self.remaining
        )
    }
}
