//! Exports a snapshot as JSON, reads it back and shows that a document whose
//! entries are out of ladder order is refused.

use demos::setup_logger;
use exactbook_rs::{Order, OrderBook, OrderBookSnapshot, Side};
use tracing::{error, info};

fn main() {
    setup_logger();
    info!("=== Order Book Snapshot Demo ===\n");

    let book = OrderBook::new("SOL/USD");
    for (i, price) in [150.0, 149.5, 149.0].into_iter().enumerate() {
        book.place_order(Order::new(format!("bid-{i}"), Side::Buy, price, 10.0));
    }
    for (i, price) in [150.5, 151.0, 151.0].into_iter().enumerate() {
        book.place_order(Order::new(format!("ask-{i}"), Side::Sell, price, 8.0));
    }

    let json = match book.snapshot_to_json(10) {
        Ok(json) => json,
        Err(e) => {
            error!("Snapshot failed: {}", e);
            return;
        }
    };
    info!("Snapshot: {}", json);

    let snapshot = match OrderBookSnapshot::from_json(&json) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Decode failed: {}", e);
            return;
        }
    };
    info!("Read back {} entries", snapshot.entries.len());
    info!("  best bid: {:?}", snapshot.best_bid());
    info!("  best ask: {:?}", snapshot.best_ask());
    info!("  spread:   {:?}", snapshot.spread());

    let mut shuffled = snapshot;
    shuffled.entries.reverse();
    let reread = shuffled
        .to_json()
        .and_then(|json| OrderBookSnapshot::from_json(&json));
    match reread {
        Ok(_) => error!("Out-of-order snapshot went unnoticed"),
        Err(e) => info!("Out-of-order snapshot rejected: {}", e),
    }

    info!("\n=== Demo Complete ===");
}
