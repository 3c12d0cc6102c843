//! Example demonstrating trade monitoring with a TradeListener
//!
//! The listener runs after the book has released its lock, so it is free to
//! query the book it observes.

use demos::setup_logger;
use exactbook_rs::{Order, OrderBook, OrderId, Side, TradeListener, TradeResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

fn main() {
    setup_logger();
    info!("=== Trade Listener Demo ===\n");

    let trade_count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&trade_count);
    let trade_listener: TradeListener = Arc::new(move |trade: &TradeResult| {
        counter.fetch_add(1, Ordering::Relaxed);
        display_trade_event(trade);
    });

    let book = OrderBook::with_trade_listener("ETH/USD", trade_listener);

    info!("Step 1: adding liquidity");
    for (price, quantity) in [(3000.0, 5.0), (2980.0, 7.5), (2960.0, 10.0)] {
        book.place_order(Order::new(OrderId::new(), Side::Buy, price, quantity));
    }
    for (price, quantity) in [(3020.0, 5.0), (3040.0, 7.5), (3040.0, 7.5)] {
        book.place_order(Order::new(OrderId::new(), Side::Sell, price, quantity));
    }

    info!("\nStep 2: orders that meet resting liquidity exactly");
    book.place_order(Order::new(OrderId::new(), Side::Sell, 3000.0, 5.0));
    book.place_order(Order::new(OrderId::new(), Side::Buy, 3040.0, 7.5));

    info!("\nStep 3: an order without an exact partner");
    book.place_order(Order::new(OrderId::new(), Side::Buy, 3020.0, 1.0));

    info!(
        "\nTrades observed: {}, last trade price: {:?}",
        trade_count.load(Ordering::Relaxed),
        book.last_trade_price().map(|price| price.value())
    );
    info!("=== Demo Complete ===");
}

fn display_trade_event(trade: &TradeResult) {
    info!("┌─ TRADE {} ─────────────", trade.symbol);
    info!("│ taker      {}", trade.taker);
    info!("│ filled     {}", trade.filled_order_id);
    info!("│ candidates {}", trade.matched.len());
    info!("│ notional   {:.2}", trade.notional());
    info!("└────────────────────────");
}
