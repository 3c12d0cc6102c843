//! OrderBook implementation: price priority indexes, resting order ledgers and exact matching.

pub mod book;
pub mod error;
/// Price priority index for one side of the book.
pub mod index;
/// Functional-style iterators for order book analysis.
pub mod iterators;
/// Resting order ledger for one side of the book.
pub mod ledger;
/// Paginated enumeration of resting orders.
pub mod listing;
pub mod matching;
/// Orders, sides, prices and identifiers.
pub mod order;
mod private;
pub mod snapshot;
/// Trade result and listener types.
pub mod trade;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use iterators::LevelInfo;
pub use order::{Order, OrderId, Price, Side};
pub use snapshot::{BookEntry, OrderBookSnapshot};
pub use trade::{TradeListener, TradeResult};
