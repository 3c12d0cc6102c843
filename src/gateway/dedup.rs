//! Duplicate submission detection.

use crate::orderbook::OrderId;
use dashmap::DashSet;

/// Concurrent set of every order identifier seen so far.
///
/// Identifiers are never forgotten, so a resubmission is rejected even after
/// the original order has left the book.
#[derive(Debug, Default)]
pub struct DuplicateGuard {
    seen: DashSet<OrderId>,
}

impl DuplicateGuard {
    /// Creates an empty guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `order_id`. Returns false if it had been recorded before.
    pub fn record(&self, order_id: &OrderId) -> bool {
        self.seen.insert(order_id.clone())
    }

    /// True if `order_id` has been recorded.
    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.seen.contains(order_id)
    }

    /// Number of recorded identifiers.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
