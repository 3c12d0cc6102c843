//! Contains the core matching engine logic for the order book.
//!
//! Matching is exact: an incoming order trades only against resting contra
//! orders at exactly its own price and with exactly its own quantity. There
//! are no partial fills and no walking across price levels.
//!
//! Eligibility is checked against the best contra price, but the level that
//! is searched is the one at the incoming order's own price. When the contra
//! side holds several levels these can differ, so a marketable order may find
//! nothing to trade with and rest instead.

use crate::OrderBook;
use crate::orderbook::order::{Order, Side};
use crate::orderbook::trade::TradeResult;
use crate::utils::current_time_millis;
use std::sync::Arc;
use tracing::{debug, trace};

impl OrderBook {
    /// Place an order, either trading it against the book or resting it.
    ///
    /// Returns every resting contra order at the incoming order's price whose
    /// quantity equals the incoming quantity, oldest first. Only the first of
    /// them is removed from the book; the incoming order is consumed. When the
    /// returned list is empty the incoming order now rests on its own side.
    ///
    /// The caller must supply an order with a unique ID and strictly positive
    /// price and quantity.
    pub fn place_order(&self, order: Order) -> Vec<Arc<Order>> {
        let order = Arc::new(order);

        let (matched, trade) = {
            let _guard = self.lock();
            trace!("Order book {}: placing {}", self.symbol, order);

            let matched = self.find_exact_matches(&order);
            let trade = match matched.first() {
                Some(filled) => {
                    let price = order.price();
                    self.remove_resting(order.side().opposite(), price, filled.id());
                    self.record_trade_price(price);
                    debug!(
                        "Order book {}: {} matched {} ({} candidates)",
                        self.symbol,
                        order.id(),
                        filled.id(),
                        matched.len()
                    );
                    Some(TradeResult {
                        symbol: self.symbol.clone(),
                        taker: Order::clone(&order),
                        matched: matched.iter().map(|resting| Order::clone(resting)).collect(),
                        filled_order_id: filled.id().clone(),
                        price,
                        quantity: order.quantity(),
                        timestamp: current_time_millis(),
                    })
                }
                None => {
                    self.rest_order(Arc::clone(&order));
                    None
                }
            };
            (matched, trade)
        };

        if let (Some(listener), Some(trade)) = (&self.trade_listener, trade) {
            listener(&trade);
        }

        matched
    }

    /// Dry run of [`Self::place_order`]: the resting orders it would return,
    /// without changing the book.
    pub fn peek_match(&self, order: &Order) -> Vec<Arc<Order>> {
        let _guard = self.lock();
        self.find_exact_matches(order)
    }

    /// Collects the exact-quantity matches for `order`.
    ///
    /// Caller must hold the operation lock.
    fn find_exact_matches(&self, order: &Order) -> Vec<Arc<Order>> {
        let contra = self.book_side(order.side().opposite());

        let Some(best_contra) = contra.index.peek_best() else {
            return Vec::new();
        };

        let marketable = match order.side() {
            Side::Buy => order.price() >= best_contra,
            Side::Sell => order.price() <= best_contra,
        };
        if !marketable {
            return Vec::new();
        }

        contra
            .ledger
            .orders_at(order.price())
            .into_iter()
            .filter(|resting| resting.quantity() == order.quantity())
            .collect()
    }
}
