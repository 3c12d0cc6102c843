//! Price priority index for one side of the book.
//!
//! The index only knows about prices, never about orders. It is a sorted map
//! from price to the number of times that price was inserted, so duplicate
//! insertions are permitted and each one must be paired with a removal before
//! the price disappears from the index.

use super::order::{Price, Side};
use crossbeam_skiplist::SkipMap;

/// Ordered set of the price levels currently present on one side.
///
/// The best element is the price most favourable to an incoming contra-side
/// order: the highest price on the bid side and the lowest on the ask side.
pub struct PriceIndex {
    side: Side,
    prices: SkipMap<Price, usize>,
}

impl PriceIndex {
    /// Creates an empty index for `side`.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            prices: SkipMap::new(),
        }
    }

    /// Side this index orders for.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the best price, if any.
    pub fn peek_best(&self) -> Option<Price> {
        let entry = match self.side {
            Side::Buy => self.prices.back(),
            Side::Sell => self.prices.front(),
        };
        entry.map(|entry| *entry.key())
    }

    /// Inserts `price`, incrementing its multiplicity when already present.
    pub fn insert(&self, price: Price) {
        let count = self.prices.get(&price).map_or(0, |entry| *entry.value());
        self.prices.insert(price, count + 1);
    }

    /// Removes one occurrence of the best price and returns it.
    ///
    /// Returns `None` on an empty index.
    pub fn remove_best(&self) -> Option<Price> {
        let best = self.peek_best()?;
        self.remove(best);
        Some(best)
    }

    /// Removes one occurrence of `price`.
    ///
    /// Returns `false` when the price was not present.
    pub fn remove(&self, price: Price) -> bool {
        let Some(count) = self.prices.get(&price).map(|entry| *entry.value()) else {
            return false;
        };
        if count > 1 {
            self.prices.insert(price, count - 1);
        } else {
            self.prices.remove(&price);
        }
        true
    }

    /// Returns true if `price` is present.
    pub fn contains(&self, price: Price) -> bool {
        self.prices.contains_key(&price)
    }

    /// Number of distinct prices.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true when no price is present.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Distinct prices from best to worst for this side.
    pub fn iter_best_to_worst(&self) -> Box<dyn Iterator<Item = Price> + '_> {
        match self.side {
            Side::Buy => Box::new(self.prices.iter().rev().map(|entry| *entry.key())),
            Side::Sell => Box::new(self.prices.iter().map(|entry| *entry.key())),
        }
    }
}
