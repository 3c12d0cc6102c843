//! # Exact-Match Limit Order Book
//!
//! A single-instrument limit order book that accepts buy and sell orders and
//! either trades them immediately against resting contra-side orders or keeps
//! them as new liquidity.
//!
//! ## Components
//!
//! - **Price Priority Index** ([`orderbook::index::PriceIndex`]): one per side, a
//!   skip-list ordered set of the prices holding resting quantity. The best
//!   price is the highest bid or the lowest ask.
//! - **Resting Order Ledger** ([`orderbook::ledger::OrderLedger`]): one per side,
//!   maps each price to the FIFO queue of orders resting there.
//! - **Matching** ([`OrderBook::place_order`]): decides whether an incoming order
//!   trades or rests.
//! - **Snapshots** ([`OrderBook::snapshot`]): aggregated liquidity per price level,
//!   laid out as a price ladder and readable back from JSON.
//! - **Order Listing** ([`OrderBook::list_orders`]): paginated enumeration of every
//!   resting order.
//! - **Gateway** ([`gateway::OrderGateway`]): request validation, duplicate
//!   submission detection and status mapping in front of a book.
//!
//! ## Matching rules
//!
//! An incoming order is eligible to trade when its price is at least as good
//! as the best contra price. An eligible order then looks at the contra level
//! at **its own price** and collects every resting order there whose quantity
//! is **exactly** its own. The first of those, in arrival order, is removed
//! from the book and the incoming order is consumed; all of them are returned.
//! Otherwise the incoming order rests on its own side. There are no partial
//! fills, no cancellations and no walking across price levels.
//!
//! ```
//! use exactbook_rs::{Order, OrderBook, Side};
//!
//! let book = OrderBook::new("BTC/USD");
//! assert!(book.place_order(Order::new("S1", Side::Sell, 100.0, 2.0)).is_empty());
//! assert!(book.place_order(Order::new("S2", Side::Sell, 100.0, 2.0)).is_empty());
//!
//! let matched = book.place_order(Order::new("B1", Side::Buy, 100.0, 2.0));
//! assert_eq!(matched.len(), 2);
//! assert_eq!(matched[0].id().as_str(), "S1");
//! assert_eq!(book.orders_at(100.0, Side::Sell).len(), 1);
//! ```
//!
//! ## Concurrency
//!
//! Each book serialises all of its operations, reads included, behind one
//! lock, so a book can be shared across request-handling threads through an
//! `Arc`. Operations never block on I/O. Separate books are independent.

pub mod gateway;
pub mod orderbook;

pub mod prelude;
mod utils;

pub use gateway::{GatewayConfig, OrderGateway, RequestError};
pub use orderbook::iterators::LevelInfo;
pub use orderbook::snapshot::BookEntry;
pub use orderbook::trade::{TradeListener, TradeResult};
pub use orderbook::{
    Order, OrderBook, OrderBookError, OrderBookSnapshot, OrderId, Price, Side,
};
pub use utils::current_time_millis;

/// An order book shared between request-handling threads.
pub type SharedOrderBook = std::sync::Arc<OrderBook>;
