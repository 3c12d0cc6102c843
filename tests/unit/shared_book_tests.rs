//! Tests for a book shared between request-handling threads

#[cfg(test)]
mod tests {
    use exactbook_rs::prelude::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_gateway_shared_across_threads() {
        let gateway = Arc::new(OrderGateway::new(Arc::new(OrderBook::new("BTC/USD"))));

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let gateway = Arc::clone(&gateway);
                thread::spawn(move || {
                    for i in 0..50 {
                        let request = serde_json::json!({
                            "uuid": format!("{worker}-{i}"),
                            "action": if worker % 2 == 0 { "BUY" } else { "SELL" },
                            "price": 100.0,
                            "amount": 1.0,
                        });
                        let response = gateway.create_order(&request.to_string());
                        assert_eq!(response.status, Status::Ok);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // Every buy and sell at the same price and quantity pairs off.
        let book = gateway.book();
        assert_eq!(book.order_count(), 0);
        assert_eq!(book.last_trade_price(), Some(Price::new(100.0)));
    }

    #[test]
    fn test_readers_run_alongside_writers() {
        let book: SharedOrderBook = Arc::new(OrderBook::new("BTC/USD"));

        let writer = {
            let book = Arc::clone(&book);
            thread::spawn(move || {
                for i in 0..500u32 {
                    let price = 90.0 + f64::from(i % 10);
                    book.place_order(Order::new(format!("B{i}"), Side::Buy, price, 1.0));
                }
            })
        };
        let reader = {
            let book = Arc::clone(&book);
            thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = book.snapshot(5);
                    assert!(snapshot.len() <= 5);
                    assert!(snapshot.iter().all(|entry| entry.side == Side::Buy));
                }
            })
        };

        writer.join().unwrap();
        reader.join().unwrap();
        assert_eq!(book.level_count(Side::Buy), 10);
        assert_eq!(book.order_count(), 500);
    }
}
