//! Resting order ledger for one side of the book.

use super::order::{Order, OrderId, Price};
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::Arc;

/// Outcome of removing a resting order from the ledger.
#[derive(Debug, Clone)]
pub struct LedgerRemoval {
    /// The order that was removed.
    pub order: Arc<Order>,
    /// True when the removal emptied the price level, which was dropped.
    pub level_emptied: bool,
}

/// Mapping from price to the FIFO queue of orders resting at that price.
///
/// A price level only exists while it holds at least one order. Keeping the
/// matching [`super::index::PriceIndex`] in step is the owner's job.
#[derive(Default)]
pub struct OrderLedger {
    levels: DashMap<Price, VecDeque<Arc<Order>>>,
}

impl OrderLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders resting at `price` in arrival order. Empty when no level exists.
    pub fn orders_at(&self, price: Price) -> Vec<Arc<Order>> {
        self.levels
            .get(&price)
            .map(|level| level.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Appends `order` to the back of its price level.
    ///
    /// Returns true if the level did not exist before.
    pub fn append(&self, order: Arc<Order>) -> bool {
        let mut created = false;
        self.levels
            .entry(order.price())
            .or_insert_with(|| {
                created = true;
                VecDeque::new()
            })
            .push_back(order);
        created
    }

    /// Removes the order `order_id` from the level at `price`.
    ///
    /// A level left empty is dropped from the ledger.
    pub fn remove_at(&self, price: Price, order_id: &OrderId) -> Option<LedgerRemoval> {
        let (order, level_emptied) = {
            let mut level = self.levels.get_mut(&price)?;
            let position = level.iter().position(|order| order.id() == order_id)?;
            let order = level.remove(position)?;
            (order, level.is_empty())
        };

        if level_emptied {
            self.levels.remove_if(&price, |_, level| level.is_empty());
        }

        Some(LedgerRemoval {
            order,
            level_emptied,
        })
    }

    /// True if a level exists at `price`.
    pub fn has_level(&self, price: Price) -> bool {
        self.levels.contains_key(&price)
    }

    /// Sum of the quantities resting at `price`.
    pub fn level_quantity(&self, price: Price) -> f64 {
        self.levels
            .get(&price)
            .map(|level| level.iter().map(|order| order.quantity()).sum())
            .unwrap_or(0.0)
    }

    /// Number of orders resting at `price`.
    pub fn level_order_count(&self, price: Price) -> usize {
        self.levels.get(&price).map_or(0, |level| level.len())
    }

    /// Number of price levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Number of resting orders across all levels.
    pub fn order_count(&self) -> usize {
        self.levels.iter().map(|level| level.len()).sum()
    }

    /// Sum of the quantities of every resting order.
    pub fn total_quantity(&self) -> f64 {
        self.levels
            .iter()
            .map(|level| level.iter().map(|order| order.quantity()).sum::<f64>())
            .sum()
    }

    /// Prices of every level, in no particular order.
    pub fn prices(&self) -> Vec<Price> {
        self.levels.iter().map(|level| *level.key()).collect()
    }
}
