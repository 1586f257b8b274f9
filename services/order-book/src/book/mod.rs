//! Order book infrastructure module
//!
//! Contains price levels, the per-side ladders, the order index and the
//! combined state they form.

pub mod price_level;
pub mod ladder;
pub mod index;
pub mod state;

pub use price_level::{PriceLevel, Slot};
pub use ladder::{Ladder, LevelSummary};
pub use index::{Locator, OrderIndex};
pub use state::BookState;
