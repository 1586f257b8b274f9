//! Property-based tests for book invariants
//!
//! Random order flow is replayed against a fresh book and the book is checked
//! after every step: best prices, time priority, quantity conservation and
//! index/ladder agreement.

mod common;

use std::collections::BTreeMap;

use order_book::{OrderBook, Submission};
use proptest::prelude::*;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

#[derive(Debug, Clone)]
enum Op {
    Limit { side: Side, price: u64, qty: u64 },
    Market { side: Side, qty: u64 },
    Cancel { pick: usize },
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::BUY), Just(Side::SELL)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        5 => (side_strategy(), 90u64..110, 1u64..50)
            .prop_map(|(side, price, qty)| Op::Limit { side, price, qty }),
        2 => (side_strategy(), 0u64..150).prop_map(|(side, qty)| Op::Market { side, qty }),
        2 => any::<usize>().prop_map(|pick| Op::Cancel { pick }),
    ]
}

fn limit_strategy() -> impl Strategy<Value = (Side, u64, u64)> {
    (side_strategy(), 1u64..1_000, 1u64..100)
}

proptest! {
    #[test]
    fn prop_best_prices_track_extremes(
        orders in proptest::collection::vec(limit_strategy(), 1..60),
        cancels in proptest::collection::vec(any::<usize>(), 0..20),
    ) {
        let book = OrderBook::new();
        // id -> (side, price) for orders that should still be resting
        let mut live: BTreeMap<u64, (Side, u64)> = BTreeMap::new();

        for (i, (side, price, qty)) in orders.iter().enumerate() {
            let id = i as u64 + 1;
            prop_assert!(book.add_order(Order::limit(id, 1, *side, *price, *qty)));
            live.insert(id, (*side, *price));
        }

        for pick in cancels {
            let id = pick as u64 % orders.len() as u64 + 1;
            let was_live = live.remove(&id).is_some();
            prop_assert_eq!(book.cancel_order(OrderId::new(id)), was_live);
        }

        let max_bid = live.values().filter(|(s, _)| *s == Side::BUY).map(|(_, p)| *p).max();
        let min_ask = live.values().filter(|(s, _)| *s == Side::SELL).map(|(_, p)| *p).min();

        prop_assert_eq!(book.best_bid_price(), max_bid.map(Price::from_u64));
        prop_assert_eq!(book.best_ask_price(), min_ask.map(Price::from_u64));
        prop_assert_eq!(book.total_orders(), live.len());
    }

    #[test]
    fn prop_same_level_fills_in_arrival_order(
        sizes in proptest::collection::vec(1u64..40, 1..20),
        take in 0u64..600,
    ) {
        let book = OrderBook::new();
        for (i, qty) in sizes.iter().enumerate() {
            book.add_order(Order::limit(i as u64 + 1, 1, Side::SELL, 100, *qty));
        }

        book.add_order(Order::market(10_000, 1, Side::BUY, take));

        let mut left = take;
        for (i, qty) in sizes.iter().enumerate() {
            let consumed = left.min(*qty);
            left -= consumed;
            let expected = qty - consumed;
            let actual = book.order(OrderId::new(i as u64 + 1)).map(|o| o.remaining.as_u64());
            if expected == 0 {
                prop_assert_eq!(actual, None);
            } else {
                prop_assert_eq!(actual, Some(expected));
            }
        }
    }

    #[test]
    fn prop_random_flow_conserves_and_stays_consistent(
        ops in proptest::collection::vec(op_strategy(), 1..120),
    ) {
        let book = OrderBook::new();
        let mut next_id = 1u64;
        let mut submitted: Vec<u64> = Vec::new();

        for op in ops {
            match op {
                Op::Limit { side, price, qty } => {
                    prop_assert!(book.add_order(Order::limit(next_id, 1, side, price, qty)));
                    submitted.push(next_id);
                    next_id += 1;
                }
                Op::Market { side, qty } => {
                    let available = common::side_quantity(&book, side.opposite());
                    let own_side = common::side_quantity(&book, side);
                    let orders_before = book.total_orders();

                    let submission = book.submit(Order::market(next_id, 1, side, qty));
                    next_id += 1;

                    let Ok(Submission::Executed(execution)) = submission else {
                        return Err(TestCaseError::fail("market order was not executed"));
                    };
                    let expected = Quantity::from_u64(qty).min(available);
                    prop_assert_eq!(execution.executed, expected);
                    prop_assert_eq!(execution.executed + execution.discarded, Quantity::from_u64(qty));
                    prop_assert_eq!(
                        common::side_quantity(&book, side.opposite()),
                        available - execution.executed
                    );
                    prop_assert_eq!(common::side_quantity(&book, side), own_side);
                    prop_assert_eq!(book.total_orders(), orders_before - execution.orders_filled);
                }
                Op::Cancel { pick } => {
                    if submitted.is_empty() {
                        continue;
                    }
                    let id = OrderId::new(submitted[pick % submitted.len()]);
                    let was_live = book.contains_order(id);
                    prop_assert_eq!(book.cancel_order(id), was_live);
                    prop_assert!(!book.contains_order(id));
                }
            }

            prop_assert!(book.check_consistency());
            prop_assert_eq!(common::resting_count(&book), book.total_orders());

            for id in &submitted {
                let id = OrderId::new(*id);
                match book.order(id) {
                    Some(order) => {
                        prop_assert!(book.contains_order(id));
                        prop_assert!(!order.is_filled());
                        prop_assert!(order.check_invariant());
                    }
                    None => prop_assert!(!book.contains_order(id)),
                }
            }
        }
    }
}
