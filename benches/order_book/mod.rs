use criterion::Criterion;
use exactbook_rs::{Order, OrderBook, Side};

mod place_order;

/// Register all order book benchmarks.
pub fn register_benchmarks(c: &mut Criterion) {
    place_order::register_benchmarks(c);
    queries::register_benchmarks(c);
}

/// A book with `levels` price levels per side and `depth` orders per level.
///
/// Bids sit at 1000 and below, asks at 1001 and above, each order with a
/// distinct quantity so nothing trades while the book is built.
pub(crate) fn populated_book(levels: usize, depth: usize) -> OrderBook {
    let book = OrderBook::new("BENCH");
    for level in 0..levels {
        for slot in 0..depth {
            let quantity = (slot + 1) as f64;
            book.place_order(Order::new(
                format!("B-{level}-{slot}"),
                Side::Buy,
                1000.0 - level as f64,
                quantity,
            ));
            book.place_order(Order::new(
                format!("S-{level}-{slot}"),
                Side::Sell,
                1001.0 + level as f64,
                quantity,
            ));
        }
    }
    book
}
