//! Order book snapshot for market data
//!
//! A snapshot aggregates each visited price level into a single entry whose
//! liquidity is the sum of the resting quantities at that price. Entries are
//! laid out as a price ladder: sell levels from the highest selected price
//! down to the best ask, then buy levels from the best bid downwards.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::OrderBookError;
use super::iterators::LevelsWithCumulativeDepth;
use super::order::{Price, Side};
use crate::OrderBook;
use crate::utils::current_time_millis;

/// One aggregated price level in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    /// Price of the level
    pub price: Price,

    /// Sum of the quantities resting at this price
    pub liquidity: f64,

    /// Side the level belongs to
    #[serde(rename = "type")]
    pub side: Side,
}

impl BookEntry {
    /// Creates a new entry.
    pub fn new(price: Price, liquidity: f64, side: Side) -> Self {
        Self {
            price,
            liquidity,
            side,
        }
    }
}

impl OrderBook {
    /// Aggregated view of up to `limit` price levels per side.
    ///
    /// The `limit` best levels of each side are selected. Sell entries come
    /// first, highest price first; buy entries follow, highest price first.
    /// A side with fewer than `limit` levels contributes all of them.
    pub fn snapshot(&self, limit: usize) -> Vec<BookEntry> {
        let _guard = self.lock();
        trace!("Order book {}: snapshot with limit {}", self.symbol, limit);

        let mut entries: Vec<BookEntry> = LevelsWithCumulativeDepth::new(&self.asks)
            .take(limit)
            .map(|level| BookEntry::new(level.price, level.quantity, Side::Sell))
            .collect();
        entries.reverse();

        entries.extend(
            LevelsWithCumulativeDepth::new(&self.bids)
                .take(limit)
                .map(|level| BookEntry::new(level.price, level.quantity, Side::Buy)),
        );

        entries
    }

    /// Create a timestamped snapshot of up to `limit` levels per side
    pub fn create_snapshot(&self, limit: usize) -> OrderBookSnapshot {
        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            entries: self.snapshot(limit),
        }
    }

    /// Serialize a timestamped snapshot of up to `limit` levels per side to JSON
    pub fn snapshot_to_json(&self, limit: usize) -> Result<String, OrderBookError> {
        self.create_snapshot(limit).to_json()
    }
}

/// A snapshot of the order book state at a specific point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Ladder-ordered entries, sells first
    pub entries: Vec<BookEntry>,
}

impl OrderBookSnapshot {
    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, OrderBookError> {
        serde_json::to_string(self).map_err(|error| OrderBookError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Deserializes a snapshot from JSON.
    ///
    /// Entries must be in ladder order with every sell ahead of every buy.
    pub fn from_json(data: &str) -> Result<Self, OrderBookError> {
        let snapshot: Self =
            serde_json::from_str(data).map_err(|error| OrderBookError::DeserializationError {
                message: error.to_string(),
            })?;
        snapshot.check_ladder()?;
        Ok(snapshot)
    }

    /// Checks that sells precede buys and each side descends in price.
    fn check_ladder(&self) -> Result<(), OrderBookError> {
        let first_buy = self
            .entries
            .iter()
            .position(|entry| entry.side == Side::Buy)
            .unwrap_or(self.entries.len());
        let (sells, buys) = self.entries.split_at(first_buy);

        if let Some(entry) = buys.iter().find(|entry| entry.side == Side::Sell) {
            return Err(OrderBookError::InvalidLadder {
                message: format!("sell entry at {} follows a buy entry", entry.price),
            });
        }
        for side in [sells, buys] {
            if let Some(pair) = side.windows(2).find(|pair| pair[0].price <= pair[1].price) {
                return Err(OrderBookError::InvalidLadder {
                    message: format!(
                        "{} entry at {} does not descend from {}",
                        pair[1].side, pair[1].price, pair[0].price
                    ),
                });
            }
        }
        Ok(())
    }

    fn side_entries(&self, side: Side) -> impl Iterator<Item = &BookEntry> {
        self.entries.iter().filter(move |entry| entry.side == side)
    }

    /// Get the best bid price and liquidity
    pub fn best_bid(&self) -> Option<(Price, f64)> {
        let bid = self
            .side_entries(Side::Buy)
            .map(|entry| (entry.price, entry.liquidity))
            .max_by_key(|&(price, _)| price);
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and liquidity
    pub fn best_ask(&self) -> Option<(Price, f64)> {
        let ask = self
            .side_entries(Side::Sell)
            .map(|entry| (entry.price, entry.liquidity))
            .min_by_key(|&(price, _)| price);
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some((bid.value() + ask.value()) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some(ask.value() - bid.value()),
            _ => None,
        }
    }

    /// Total liquidity on the bid side of the snapshot
    pub fn total_bid_liquidity(&self) -> f64 {
        self.side_entries(Side::Buy).map(|entry| entry.liquidity).sum()
    }

    /// Total liquidity on the ask side of the snapshot
    pub fn total_ask_liquidity(&self) -> f64 {
        self.side_entries(Side::Sell).map(|entry| entry.liquidity).sum()
    }
}
