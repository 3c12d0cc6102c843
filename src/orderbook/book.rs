//! Core OrderBook implementation holding the price indexes and order ledgers

use super::index::PriceIndex;
use super::iterators::{LevelInfo, LevelsWithCumulativeDepth};
use super::ledger::OrderLedger;
use super::order::{Order, OrderId, Price, Side};
use crate::orderbook::trade::TradeListener;
use crossbeam::atomic::AtomicCell;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::trace;

/// One side of the book: the price priority index and the resting order
/// ledger that it indexes.
///
/// A price is present in `index` if and only if `ledger` holds a non-empty
/// level at that price.
pub struct BookSide {
    pub(super) index: PriceIndex,
    pub(super) ledger: OrderLedger,
}

impl BookSide {
    pub(super) fn new(side: Side) -> Self {
        Self {
            index: PriceIndex::new(side),
            ledger: OrderLedger::new(),
        }
    }
}

/// The OrderBook for a single instrument.
///
/// Every operation, reads included, runs under one book-wide lock, so at most
/// one operation touches the book state at a time. Distinct books share
/// nothing.
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Bid side (buy orders), best price is the highest
    pub(super) bids: BookSide,

    /// Ask side (sell orders), best price is the lowest
    pub(super) asks: BookSide,

    /// Order ID to (price, side) for every resting order
    pub(super) order_locations: DashMap<OrderId, (Price, Side)>,

    /// The last price at which a trade occurred
    pub(super) last_trade_price: AtomicCell<Price>,

    /// Flag indicating if there was a trade
    pub(super) has_traded: AtomicBool,

    /// Serialises every operation against this book
    pub(super) operation_lock: Mutex<()>,

    /// Invoked after an incoming order matched
    pub trade_listener: Option<TradeListener>,
}

impl OrderBook {
    /// Create a new order book for the given symbol
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            order_locations: DashMap::new(),
            last_trade_price: AtomicCell::new(Price::default()),
            has_traded: AtomicBool::new(false),
            operation_lock: Mutex::new(()),
            trade_listener: None,
        }
    }

    /// Create a new order book for the given symbol with a trade listener
    pub fn with_trade_listener(symbol: &str, trade_listener: TradeListener) -> Self {
        let mut book = Self::new(symbol);
        book.trade_listener = Some(trade_listener);
        book
    }

    /// Replace the trade listener
    pub fn set_trade_listener(&mut self, trade_listener: TradeListener) {
        self.trade_listener = Some(trade_listener);
    }

    /// Remove the trade listener
    pub fn remove_trade_listener(&mut self) {
        self.trade_listener = None;
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the best bid price, if any
    pub fn best_bid(&self) -> Option<Price> {
        let _guard = self.lock();
        self.bids.index.peek_best()
    }

    /// Get the best ask price, if any
    pub fn best_ask(&self) -> Option<Price> {
        let _guard = self.lock();
        self.asks.index.peek_best()
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        let _guard = self.lock();
        match (self.bids.index.peek_best(), self.asks.index.peek_best()) {
            (Some(bid), Some(ask)) => Some((bid.value() + ask.value()) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    ///
    /// Books in this engine can rest crossed, so the spread may be negative.
    pub fn spread(&self) -> Option<f64> {
        let _guard = self.lock();
        match (self.bids.index.peek_best(), self.asks.index.peek_best()) {
            (Some(bid), Some(ask)) => Some(ask.value() - bid.value()),
            _ => None,
        }
    }

    /// Get the last trade price, if any
    pub fn last_trade_price(&self) -> Option<Price> {
        let _guard = self.lock();
        if self.has_traded.load(Ordering::Relaxed) {
            Some(self.last_trade_price.load())
        } else {
            None
        }
    }

    /// Get a resting order by its ID
    pub fn get_order(&self, order_id: &OrderId) -> Option<Arc<Order>> {
        let _guard = self.lock();
        let (price, side) = *self.order_locations.get(order_id)?;
        self.book_side(side)
            .ledger
            .orders_at(price)
            .into_iter()
            .find(|order| order.id() == order_id)
    }

    /// Check whether an order with this ID is resting
    pub fn contains_order(&self, order_id: &OrderId) -> bool {
        let _guard = self.lock();
        self.order_locations.contains_key(order_id)
    }

    /// Get all orders resting at a specific price level, oldest first
    pub fn orders_at(&self, price: f64, side: Side) -> Vec<Arc<Order>> {
        trace!(
            "Order book {}: Getting orders at price {} for side {}",
            self.symbol, price, side
        );
        let _guard = self.lock();
        self.book_side(side).ledger.orders_at(Price::new(price))
    }

    /// Number of resting orders across both sides
    pub fn order_count(&self) -> usize {
        let _guard = self.lock();
        self.bids.ledger.order_count() + self.asks.ledger.order_count()
    }

    /// Number of distinct price levels on `side`
    pub fn level_count(&self, side: Side) -> usize {
        let _guard = self.lock();
        self.book_side(side).index.len()
    }

    /// Total resting quantity on `side`
    pub fn total_quantity(&self, side: Side) -> f64 {
        let _guard = self.lock();
        self.book_side(side).ledger.total_quantity()
    }

    /// Up to `levels` price levels of `side`, best first, with running depth.
    pub fn depth(&self, side: Side, levels: usize) -> Vec<LevelInfo> {
        let _guard = self.lock();
        LevelsWithCumulativeDepth::new(self.book_side(side))
            .take(levels)
            .collect()
    }

    /// Every price level of `side`, best first, with running depth.
    pub fn levels_with_cumulative_depth(&self, side: Side) -> Vec<LevelInfo> {
        let _guard = self.lock();
        LevelsWithCumulativeDepth::new(self.book_side(side)).collect()
    }
}
