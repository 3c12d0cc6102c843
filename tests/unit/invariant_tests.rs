//! Property-based tests for order book invariants
//!
//! Random order flows over a small price grid and quantity set, so that
//! levels are shared and exact matches actually happen, must keep:
//!
//! - the best price of each side equal to the extreme resting price
//! - one live level per price that holds at least one order
//! - the resting count equal to placements minus twice the trades
//! - matches at the incoming price with the incoming quantity only

use exactbook_rs::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn arb_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

fn arb_price() -> impl Strategy<Value = f64> {
    (1u32..8).prop_map(|tick| f64::from(tick) * 10.0)
}

fn arb_quantity() -> impl Strategy<Value = f64> {
    (1u32..4).prop_map(f64::from)
}

fn arb_flow() -> impl Strategy<Value = Vec<(Side, f64, f64)>> {
    prop::collection::vec((arb_side(), arb_price(), arb_quantity()), 1..120)
}

fn resting_prices(book: &OrderBook, side: Side) -> BTreeSet<Price> {
    book.all_orders()
        .iter()
        .filter(|order| order.side() == side)
        .map(|order| order.price())
        .collect()
}

#[cfg(test)]
mod book_invariants {
    use super::*;

    proptest! {
        #[test]
        fn prop_best_prices_track_resting_orders(flow in arb_flow()) {
            let book = OrderBook::new("PROP_TEST");
            for (i, (side, price, quantity)) in flow.into_iter().enumerate() {
                book.place_order(Order::new(format!("O{i}"), side, price, quantity));

                let bids = resting_prices(&book, Side::Buy);
                let asks = resting_prices(&book, Side::Sell);
                prop_assert_eq!(book.best_bid(), bids.iter().next_back().copied());
                prop_assert_eq!(book.best_ask(), asks.iter().next().copied());
            }
        }

        #[test]
        fn prop_levels_are_never_empty(flow in arb_flow()) {
            let book = OrderBook::new("PROP_TEST");
            for (i, (side, price, quantity)) in flow.into_iter().enumerate() {
                book.place_order(Order::new(format!("O{i}"), side, price, quantity));
            }

            // order_count and total_quantity sum the ledgers, the listing walks the indexes.
            let listed = book.all_orders();
            prop_assert_eq!(book.order_count(), listed.len());

            for side in [Side::Buy, Side::Sell] {
                let listed_quantity: f64 = listed
                    .iter()
                    .filter(|order| order.side() == side)
                    .map(|order| order.quantity())
                    .sum();
                prop_assert_eq!(book.total_quantity(side), listed_quantity);

                let levels = book.levels_with_cumulative_depth(side);
                prop_assert_eq!(levels.len(), resting_prices(&book, side).len());
                prop_assert_eq!(levels.len(), book.level_count(side));
                for level in &levels {
                    prop_assert!(level.order_count > 0);
                    prop_assert!(level.quantity > 0.0);
                }
            }
        }

        #[test]
        fn prop_each_trade_removes_two_orders(flow in arb_flow()) {
            let book = OrderBook::new("PROP_TEST");
            let placed = flow.len();
            let mut trades = 0;
            for (i, (side, price, quantity)) in flow.into_iter().enumerate() {
                let before = book.order_count();
                let matched = book.place_order(Order::new(format!("O{i}"), side, price, quantity));
                if matched.is_empty() {
                    prop_assert_eq!(book.order_count(), before + 1);
                } else {
                    prop_assert_eq!(book.order_count(), before - 1);
                    trades += 1;
                }
            }
            prop_assert_eq!(book.order_count(), placed - 2 * trades);
        }

        #[test]
        fn prop_matches_are_exact(flow in arb_flow()) {
            let book = OrderBook::new("PROP_TEST");
            for (i, (side, price, quantity)) in flow.into_iter().enumerate() {
                let matched = book.place_order(Order::new(format!("O{i}"), side, price, quantity));
                for resting in &matched {
                    prop_assert_eq!(resting.side(), side.opposite());
                    prop_assert_eq!(resting.price(), Price::new(price));
                    prop_assert_eq!(resting.quantity(), quantity);
                }
                if let Some(filled) = matched.first() {
                    prop_assert!(!book.contains_order(filled.id()));
                    for survivor in &matched[1..] {
                        prop_assert!(book.contains_order(survivor.id()));
                    }
                }
            }
        }

        #[test]
        fn prop_pages_concatenate_to_full_listing(
            flow in arb_flow(),
            page_size in 1usize..7,
        ) {
            let book = OrderBook::new("PROP_TEST");
            for (i, (side, price, quantity)) in flow.into_iter().enumerate() {
                book.place_order(Order::new(format!("O{i}"), side, price, quantity));
            }

            let all = book.all_orders();
            let mut paged = Vec::new();
            let mut page = 1;
            loop {
                let chunk = book.list_orders(page, page_size);
                if chunk.is_empty() {
                    break;
                }
                prop_assert!(chunk.len() <= page_size);
                paged.extend(chunk);
                page += 1;
            }

            let all_ids: Vec<_> = all.iter().map(|order| order.id().clone()).collect();
            let paged_ids: Vec<_> = paged.iter().map(|order| order.id().clone()).collect();
            prop_assert_eq!(all_ids, paged_ids);
        }
    }
}
