//! End-to-end scenarios against the public order book API

#[cfg(test)]
mod tests {
    use exactbook_rs::prelude::*;

    fn ids(orders: &[std::sync::Arc<Order>]) -> Vec<&str> {
        orders.iter().map(|order| order.id().as_str()).collect()
    }

    #[test]
    fn test_rest_then_match_then_rest() {
        let book = OrderBook::new("BTC/USD");

        assert!(book.place_order(Order::new("S1", Side::Sell, 100.0, 2.0)).is_empty());
        assert!(book.place_order(Order::new("S2", Side::Sell, 100.0, 2.0)).is_empty());

        let matched = book.place_order(Order::new("B1", Side::Buy, 100.0, 2.0));
        assert_eq!(ids(&matched), vec!["S1", "S2"]);

        let matched = book.place_order(Order::new("B2", Side::Buy, 100.0, 2.0));
        assert_eq!(ids(&matched), vec!["S2"]);
        assert_eq!(book.best_ask(), None);

        assert!(book.place_order(Order::new("B3", Side::Buy, 100.0, 2.0)).is_empty());
        assert_eq!(book.best_bid(), Some(Price::new(100.0)));
        assert_eq!(book.order_count(), 1);
    }

    #[test]
    fn test_book_may_rest_crossed() {
        let book = OrderBook::new("BTC/USD");
        book.place_order(Order::new("S1", Side::Sell, 100.0, 2.0));

        // Marketable, but no resting order of quantity 3 at 105.
        assert!(book.place_order(Order::new("B1", Side::Buy, 105.0, 3.0)).is_empty());

        assert_eq!(book.best_bid(), Some(Price::new(105.0)));
        assert_eq!(book.best_ask(), Some(Price::new(100.0)));
        assert_eq!(book.spread(), Some(-5.0));
    }

    #[test]
    fn test_snapshot_and_listing_agree_on_totals() {
        let book = OrderBook::new("BTC/USD");
        book.place_order(Order::new("S120", Side::Sell, 120.0, 2.0));
        book.place_order(Order::new("S100a", Side::Sell, 100.0, 2.0));
        book.place_order(Order::new("S100b", Side::Sell, 100.0, 2.0));
        book.place_order(Order::new("B80", Side::Buy, 80.0, 2.0));
        book.place_order(Order::new("B100", Side::Buy, 100.0, 3.0));

        let snapshot = book.create_snapshot(10);
        let listed: f64 = book.all_orders().iter().map(|order| order.quantity()).sum();

        assert_eq!(
            snapshot.total_bid_liquidity() + snapshot.total_ask_liquidity(),
            listed
        );
        assert_eq!(snapshot.total_ask_liquidity(), book.total_quantity(Side::Sell));
        assert_eq!(snapshot.total_bid_liquidity(), book.total_quantity(Side::Buy));
    }

    #[test]
    fn test_get_order_after_fill() {
        let book = OrderBook::new("BTC/USD");
        book.place_order(Order::new("S1", Side::Sell, 10.0, 1.0));
        let resting = book.get_order(&OrderId::from("S1")).unwrap();
        assert_eq!(resting.price(), Price::new(10.0));

        book.place_order(Order::new("B1", Side::Buy, 10.0, 1.0));

        assert!(book.get_order(&OrderId::from("S1")).is_none());
    }
}
