//! Order, side, price and identifier types shared by every book component.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, caller-supplied order identifier.
///
/// The book never interprets the identifier; it only requires it to be unique
/// for the lifetime of the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generates a fresh random identifier (UUID v4 in hyphenated form).
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bid side.
    #[serde(rename = "BUY")]
    Buy,
    /// Ask side.
    #[serde(rename = "SELL")]
    Sell,
}

impl Side {
    /// Returns the contra side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("BUY"),
            Side::Sell => f.write_str("SELL"),
        }
    }
}

/// A price level key.
///
/// Wraps `OrderedFloat<f64>` so prices have a total order and can be hashed,
/// which lets them key both the skip-list index and the ledger map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(OrderedFloat<f64>);

impl Price {
    /// Creates a price from a raw value.
    pub fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    /// Returns the raw value.
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// An immutable limit order.
///
/// Once placed an order is either consumed whole by a match or rests whole in
/// the ledger; its quantity is never reduced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "uuid")]
    id: OrderId,
    #[serde(rename = "action")]
    side: Side,
    price: Price,
    #[serde(rename = "amount")]
    quantity: f64,
}

impl Order {
    /// Creates a new order.
    ///
    /// The caller is responsible for supplying a unique identifier and a
    /// strictly positive price and quantity.
    pub fn new(id: impl Into<OrderId>, side: Side, price: f64, quantity: f64) -> Self {
        Self {
            id: id.into(),
            side,
            price: Price::new(price),
            quantity,
        }
    }

    /// Identifier of the order.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Side of the order.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Limit price of the order.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Quantity of the order.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {}",
            self.id, self.side, self.quantity, self.price
        )
    }
}
