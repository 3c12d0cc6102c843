//! Walks through the exact-match rules on a small book.
//!
//! Run with:
//!   cargo run --bin exact_match_demo
//!   (from the demos directory, LOGLEVEL=debug for matching traces)

use demos::setup_logger;
use exactbook_rs::{Order, OrderBook, Side};
use std::sync::Arc;
use tracing::info;

fn main() {
    setup_logger();
    info!("=== Exact Match Demo ===\n");

    let book = OrderBook::new("BTC/USD");

    info!("Step 1: two sells of 2 @ 100 and one of 2 @ 120");
    place(&book, Order::new("S1", Side::Sell, 100.0, 2.0));
    place(&book, Order::new("S2", Side::Sell, 100.0, 2.0));
    place(&book, Order::new("S3", Side::Sell, 120.0, 2.0));
    show_book(&book);

    info!("\nStep 2: a buy of 2 @ 100 finds both sells, consumes the first");
    place(&book, Order::new("B1", Side::Buy, 100.0, 2.0));
    show_book(&book);

    info!("\nStep 3: a buy of 3 @ 100 has no equal-quantity partner and rests");
    place(&book, Order::new("B2", Side::Buy, 100.0, 3.0));
    show_book(&book);

    info!("\nStep 4: a buy of 2 @ 110 is marketable but 110 holds nothing");
    place(&book, Order::new("B3", Side::Buy, 110.0, 2.0));
    show_book(&book);

    info!("\nStep 5: a buy of 2 @ 120 trades at its own price, past the best ask");
    place(&book, Order::new("B4", Side::Buy, 120.0, 2.0));
    show_book(&book);

    match book.spread() {
        Some(spread) => info!("\nFinal spread: {:.2}", spread),
        None => info!("\nFinal spread: one side is empty"),
    }
    info!("=== Demo Complete ===");
}

fn place(book: &OrderBook, order: Order) {
    let label = order.to_string();
    let matched: Vec<Arc<Order>> = book.place_order(order);
    if matched.is_empty() {
        info!("  rested  {}", label);
    } else {
        let ids: Vec<&str> = matched.iter().map(|order| order.id().as_str()).collect();
        info!("  matched {} against {:?}, removed {}", label, ids, ids[0]);
    }
}

fn show_book(book: &OrderBook) {
    for entry in book.snapshot(5) {
        info!(
            "    {:<4} {:>8.2} | {:>6.2}",
            entry.side.to_string(),
            entry.price.value(),
            entry.liquidity
        );
    }
}
