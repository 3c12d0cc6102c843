//! Functional-style iterators for order book analysis
//!
//! These walk one side of the book lazily, in price-priority order (best to
//! worst), and can short-circuit with the usual iterator combinators.

use super::book::BookSide;
use super::ledger::OrderLedger;
use super::order::Price;
use serde::Serialize;

/// Information about a price level including price, quantity, and cumulative depth
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelInfo {
    /// The price of this level
    pub price: Price,

    /// Total quantity resting at this level
    pub quantity: f64,

    /// Number of orders resting at this level
    pub order_count: usize,

    /// Cumulative depth up to and including this level
    pub cumulative_depth: f64,
}

/// Iterator over price levels with cumulative depth tracking
pub struct LevelsWithCumulativeDepth<'a> {
    prices: Box<dyn Iterator<Item = Price> + 'a>,
    ledger: &'a OrderLedger,
    cumulative_depth: f64,
}

impl<'a> LevelsWithCumulativeDepth<'a> {
    /// Creates a new iterator over the levels of one book side.
    ///
    /// Callers hold the book's operation lock for the iterator's lifetime.
    pub(crate) fn new(book_side: &'a BookSide) -> Self {
        Self {
            prices: book_side.index.iter_best_to_worst(),
            ledger: &book_side.ledger,
            cumulative_depth: 0.0,
        }
    }
}

impl Iterator for LevelsWithCumulativeDepth<'_> {
    type Item = LevelInfo;

    fn next(&mut self) -> Option<Self::Item> {
        self.prices.next().map(|price| {
            let quantity = self.ledger.level_quantity(price);
            self.cumulative_depth += quantity;

            LevelInfo {
                price,
                quantity,
                order_count: self.ledger.level_order_count(price),
                cumulative_depth: self.cumulative_depth,
            }
        })
    }
}
