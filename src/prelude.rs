//! Prelude module that re-exports commonly used types and traits.
//!
//! ```rust
//! use exactbook_rs::prelude::*;
//!
//! let book = OrderBook::new("ETH/USD");
//! book.place_order(Order::new(OrderId::new(), Side::Buy, 3000.0, 1.0));
//! assert_eq!(book.best_bid(), Some(Price::new(3000.0)));
//! ```

// Core order book types
pub use crate::orderbook::OrderBook;
pub use crate::orderbook::OrderBookError;
pub use crate::orderbook::order::{Order, OrderId, Price, Side};

// Iterator types
pub use crate::orderbook::iterators::LevelInfo;

// Snapshot types
pub use crate::orderbook::snapshot::{BookEntry, OrderBookSnapshot};

// Trade-related types
pub use crate::orderbook::trade::{TradeListener, TradeResult};

// Request handling
pub use crate::gateway::{GatewayConfig, GatewayResponse, OrderGateway, RequestError, Status};

// Utility functions
pub use crate::utils::current_time_millis;

pub use crate::SharedOrderBook;
