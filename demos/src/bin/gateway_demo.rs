//! Drives an OrderGateway with JSON request bodies.
//!
//! Shows the three response classes (200, 409, 422), the book snapshot
//! endpoint and paginated order listing.

use demos::setup_logger;
use exactbook_rs::{OrderBook, OrderGateway};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    setup_logger();
    info!("=== Gateway Demo ===\n");

    let gateway = OrderGateway::new(Arc::new(OrderBook::new("BTC/USD")));
    let sell_id = uuid::Uuid::new_v4().to_string();

    let requests = [
        json!({ "uuid": sell_id, "action": "SELL", "price": 100.0, "amount": 2.0 }),
        json!({ "uuid": sell_id, "action": "SELL", "price": 100.0, "amount": 2.0 }),
        json!({ "uuid": "b-1", "action": "HOLD", "price": 100.0, "amount": 2.0 }),
        json!({ "uuid": "b-2", "action": "BUY", "price": 80.0, "amount": 1.0 }),
        json!({ "uuid": "s-2", "action": "SELL", "price": 120.0, "amount": 4.0 }),
        json!({ "uuid": "b-3", "action": "BUY", "price": 100.0, "amount": 2.0 }),
    ];

    for request in &requests {
        let response = gateway.create_order(&request.to_string());
        match response.to_json() {
            Ok(body) => info!("POST /orders {} -> {} {}", request, response.status.code(), body),
            Err(e) => error!("Failed to encode response: {}", e),
        }
    }

    let book = gateway.order_book(Some("5"));
    match book.to_json() {
        Ok(body) => info!("\nGET /orderbook?limit=5 -> {}", body),
        Err(e) => error!("Failed to encode response: {}", e),
    }

    let page = gateway.list_orders(Some("1"), Some("2"));
    match page.to_json() {
        Ok(body) => info!("GET /orders?page=1&page_size=2 -> {}", body),
        Err(e) => error!("Failed to encode response: {}", e),
    }

    info!("\n=== Demo Complete ===");
}
