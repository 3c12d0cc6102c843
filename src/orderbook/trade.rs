use crate::orderbook::order::{Order, OrderId, Price};
use serde::Serialize;
use std::sync::Arc;

/// Outcome of an incoming order that matched resting liquidity
#[derive(Debug, Clone, Serialize)]
pub struct TradeResult {
    /// The symbol this trade result belongs to
    pub symbol: String,
    /// The incoming order that was consumed
    pub taker: Order,
    /// Every exact-quantity resting order found at the trade price, oldest first
    pub matched: Vec<Order>,
    /// The resting order that was removed from the book
    pub filled_order_id: OrderId,
    /// Price at which the trade happened
    pub price: Price,
    /// Traded quantity
    pub quantity: f64,
    /// Unix timestamp in milliseconds when the trade occurred
    pub timestamp: u64,
}

impl TradeResult {
    /// Notional value of the trade (price × quantity)
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.price.value() * self.quantity
    }
}

/// Trade listener specification using Arc for shared ownership
pub type TradeListener = Arc<dyn Fn(&TradeResult) + Send + Sync>;
