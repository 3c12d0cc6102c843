use super::book::BookSide;
use super::order::{Order, OrderId, Price, Side};
use crate::OrderBook;
use std::sync::atomic::Ordering;
use std::sync::{Arc, MutexGuard, PoisonError};
use tracing::trace;

impl OrderBook {
    /// Acquire the book-wide operation lock.
    ///
    /// The lock guards no data of its own, so a poisoned lock is recovered.
    pub(super) fn lock(&self) -> MutexGuard<'_, ()> {
        self.operation_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// The (index, ledger) pair for `side`.
    pub(super) fn book_side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Places a resting order in the book and records its location.
    ///
    /// The price enters the index only when the order opens a new level.
    /// Caller must hold the operation lock.
    pub(super) fn rest_order(&self, order: Arc<Order>) {
        let (side, price) = (order.side(), order.price());
        debug_assert!(
            !self.order_locations.contains_key(order.id()),
            "order {} is already resting",
            order.id()
        );
        trace!("Order book {}: resting {}", self.symbol, order);

        self.order_locations
            .insert(order.id().clone(), (price, side));

        let book_side = self.book_side(side);
        if book_side.ledger.append(order) {
            book_side.index.insert(price);
        }
    }

    /// Removes a resting order, dropping its level from both ledger and index
    /// when it was the last order there.
    ///
    /// Caller must hold the operation lock.
    pub(super) fn remove_resting(
        &self,
        side: Side,
        price: Price,
        order_id: &OrderId,
    ) -> Option<Arc<Order>> {
        let book_side = self.book_side(side);
        let removal = book_side.ledger.remove_at(price, order_id)?;
        if removal.level_emptied {
            book_side.index.remove(price);
        }
        self.order_locations.remove(order_id);
        Some(removal.order)
    }

    /// Records `price` as the last traded price.
    pub(super) fn record_trade_price(&self, price: Price) {
        self.last_trade_price.store(price);
        self.has_traded.store(true, Ordering::Relaxed);
    }
}
