use super::populated_book;
use criterion::{BenchmarkId, Criterion};
use exactbook_rs::{Order, OrderBook, OrderId, Side};
use std::hint::black_box;

/// Register benchmarks for order placement.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Place Order");

    for &levels in &[10, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("rest_passive", levels),
            &levels,
            |b, &levels| {
                b.iter_with_setup(
                    || populated_book(levels, 4),
                    |book| {
                        let order = Order::new(OrderId::new(), Side::Buy, 500.0, 1.0);
                        black_box(book.place_order(order))
                    },
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("exact_match_best_level", levels),
            &levels,
            |b, &levels| {
                b.iter_with_setup(
                    || populated_book(levels, 4),
                    |book| {
                        let order = Order::new(OrderId::new(), Side::Buy, 1001.0, 2.0);
                        let matched = black_box(book.place_order(order));
                        assert_eq!(matched.len(), 1);
                    },
                );
            },
        );
    }

    group.bench_function("alternating_flow_1000", |b| {
        b.iter(|| {
            let book = OrderBook::new("BENCH");
            for i in 0..1_000u32 {
                let side = if i % 2 == 0 { Side::Sell } else { Side::Buy };
                let price = 100.0 + f64::from(i % 8);
                black_box(book.place_order(Order::new(OrderId::new(), side, price, 1.0)));
            }
        });
    });

    group.finish();
}
