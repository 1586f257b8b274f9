//! Types library for the limit order book
//!
//! Value types shared by the book and its collaborators (order-flow
//! generators, test drivers). Nothing here holds book state.
//!
//! # Modules
//! - `ids`: Caller-assigned identifiers (OrderId, InstrumentId)
//! - `numeric`: Integer price and quantity newtypes
//! - `order`: Order value, side and type
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod order;
pub mod errors;
