//! Shared helpers for order book integration tests

#![allow(dead_code)]

use order_book::OrderBook;
use types::numeric::Quantity;
use types::order::Side;

/// Route book logs to the test harness; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Total resting quantity on one side, read from a full-depth view
pub fn side_quantity(book: &OrderBook, side: Side) -> Quantity {
    let depth = book.depth(usize::MAX);
    let levels = match side {
        Side::BUY => depth.bids,
        Side::SELL => depth.asks,
    };
    levels.iter().map(|level| level.quantity).sum()
}

/// Order count summed over every level on both sides
pub fn resting_count(book: &OrderBook) -> usize {
    let depth = book.depth(usize::MAX);
    depth
        .bids
        .iter()
        .chain(depth.asks.iter())
        .map(|level| level.order_count)
        .sum()
}
