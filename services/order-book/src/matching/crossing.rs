//! Crossing detection logic
//!
//! Limit orders never execute on entry, so a limit price that crosses the
//! opposite best leaves the book crossed. These checks only report that
//! condition; they never trigger matching.

use types::numeric::Price;
use types::order::Side;

/// Check if a bid and ask price overlap
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Check if a limit order at `limit_price` would cross the opposite best
pub fn crosses_opposite(side: Side, limit_price: Price, opposite_best: Option<Price>) -> bool {
    match (side, opposite_best) {
        (Side::BUY, Some(best_ask)) => can_match(limit_price, best_ask),
        (Side::SELL, Some(best_bid)) => can_match(best_bid, limit_price),
        (_, None) => false,
    }
}
