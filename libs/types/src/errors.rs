//! Error types for the order book
//!
//! The book has exactly two recoverable conditions: a duplicate id on entry
//! and an unknown id on cancellation.

use crate::ids::OrderId;
use thiserror::Error;

/// Book operation error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookError {
    #[error("Duplicate order id: {order_id} is already resting")]
    DuplicateOrder { order_id: OrderId },

    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: OrderId },
}

impl BookError {
    /// Id of the order the failed operation referred to
    pub fn order_id(&self) -> OrderId {
        match self {
            BookError::DuplicateOrder { order_id } | BookError::OrderNotFound { order_id } => {
                *order_id
            }
        }
    }
}
