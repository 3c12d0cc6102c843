//! Paginated enumeration of resting orders.
//!
//! Orders are enumerated bid side first, then ask side; within a side levels
//! go from best to worst and orders within a level oldest first. The order is
//! stable while the book is unchanged.

use super::order::Order;
use crate::OrderBook;
use std::sync::Arc;
use tracing::trace;

impl OrderBook {
    /// Every resting order across both sides.
    pub fn all_orders(&self) -> Vec<Arc<Order>> {
        let _guard = self.lock();
        self.collect_resting_orders()
    }

    /// One page of resting orders.
    ///
    /// Returns the window `[(page - 1) * page_size, page * page_size)` of the
    /// enumeration, clipped to the orders available. Pages past the end are
    /// empty.
    pub fn list_orders(&self, page: usize, page_size: usize) -> Vec<Arc<Order>> {
        let _guard = self.lock();
        trace!(
            "Order book {}: listing page {} of size {}",
            self.symbol, page, page_size
        );

        let start = page.saturating_sub(1).saturating_mul(page_size);
        self.collect_resting_orders()
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect()
    }

    /// Caller must hold the operation lock.
    fn collect_resting_orders(&self) -> Vec<Arc<Order>> {
        [&self.bids, &self.asks]
            .into_iter()
            .flat_map(|book_side| {
                book_side
                    .index
                    .iter_best_to_worst()
                    .flat_map(move |price| book_side.ledger.orders_at(price))
            })
            .collect()
    }
}
