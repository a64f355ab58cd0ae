//! Integration test: worked pricing scenarios
//!
//! Hand-computed books run through every public entry point, checking that
//! the Walrasian, Marshallian, queue and single-unit views of the same
//! market agree.

use market_pricing_kernel::*;
use market_pricing_types::*;
use rust_decimal::Decimal;

fn dec(n: i64) -> Decimal {
    Decimal::new(n, 0)
}

fn order(qty: i64, price: i64) -> Order {
    Order::new(dec(price), dec(qty))
}

#[test]
fn demand_curve_scenario() {
    let buys = vec![
        order(5, 100),
        order(4, 80),
        order(2, 75),
        order(1, 50),
        order(10, 25),
    ];
    let demand = demand_from_queue(&buys);
    assert_eq!(demand.quantity_at(dec(0)), dec(22));
    assert_eq!(demand.quantity_at(dec(30)), dec(12));
    assert_eq!(demand.quantity_at(dec(101)), dec(0));
}

#[test]
fn marshallian_scenarios() {
    assert_eq!(
        marshallian_ce_price_range(dec(100), dec(90), Some(dec(100)), Some(dec(110))),
        Ok(PriceRange::interval(dec(100), dec(100)))
    );
    assert_eq!(
        marshallian_ce_price_range(dec(100), dec(30), Some(dec(65)), Some(dec(70))),
        Ok(PriceRange::interval(dec(65), dec(70)))
    );
    assert!(matches!(
        marshallian_ce_price_range(dec(100), dec(20), Some(dec(90)), Some(dec(30))),
        Err(PricingError::ExtramarginalWouldTrade { .. })
    ));
}

#[test]
fn cross_scenario() {
    let result = cross(&[order(1, 110)], &[order(1, 100)]).unwrap().unwrap();
    assert_eq!(result.price, dec(105));
    assert_eq!(result.total_quantity, dec(1));
    assert_eq!(result.buy_fills, vec![dec(1)]);
    assert_eq!(result.sell_fills, vec![dec(1)]);
}

#[test]
fn sequential_scenario() {
    let buys = [Order::timed(1000, dec(110), dec(1))];
    let sells = [Order::timed(2000, dec(100), dec(1))];
    let result = sequential(&buys, &sells).unwrap().unwrap();
    assert_eq!(result.taker_side, Side::Sell);
    assert_eq!(result.prices, vec![dec(110)]);
    assert_eq!(result.total_quantity, dec(1));
}

/// The marginal-order range of a queue cross should contain the Walrasian
/// range found by searching the aggregate curves of the same book.
#[test]
fn views_of_one_book_agree() {
    let buys = vec![order(1, 100), order(1, 65)];
    let sells = vec![order(1, 30), order(1, 70)];

    let crossed = cross(&buys, &sells).unwrap().unwrap();
    assert_eq!(crossed.price_range, PriceRange::interval(dec(65), dec(70)));
    assert_eq!(crossed.price, Decimal::new(675, 1));

    let walrasian = walrasian_ce_price_range_for(
        &SearchConfig::ticks(dec(0), dec(1000)),
        demand_from_queue(&buys),
        supply_from_queue(&sells),
    )
    .unwrap()
    .unwrap();
    assert_eq!(walrasian, PriceRange::interval(dec(66), dec(69)));
    assert!(crossed.price_range.contains(walrasian.low()));
    assert!(crossed.price_range.contains(walrasian.high()));

    let unit = cross_single_unit_demand_and_supply(
        &unit_prices(&buys).unwrap(),
        &unit_prices(&sells).unwrap(),
    )
    .unwrap()
    .unwrap();
    assert_eq!(
        unit,
        UnitCrossing::Priced {
            price: PriceRange::interval(dec(65), dec(70)),
            quantity: 1,
        }
    );
}

#[test]
fn flat_overlap_round_trip() {
    // demand and supply share a horizontal segment at 22
    let buys = vec![order(1, 40), order(1, 30), order(5, 22), order(1, 20)];
    let sells = vec![order(1, 10), order(1, 15), order(1, 20), order(4, 22), order(1, 30)];

    let crossed = cross(&buys, &sells).unwrap().unwrap();
    assert_eq!(crossed.price, dec(22));
    assert_eq!(crossed.total_quantity, dec(7));
    assert_eq!(crossed.buy_fills, vec![dec(1), dec(1), dec(5)]);
    assert_eq!(crossed.sell_fills, vec![dec(1), dec(1), dec(1), dec(4)]);

    let unit = cross_single_unit_demand_and_supply(
        &unit_prices(&buys).unwrap(),
        &unit_prices(&sells).unwrap(),
    )
    .unwrap()
    .unwrap();
    assert_eq!(
        unit,
        UnitCrossing::Flat {
            price: dec(22),
            min_quantity: 3,
            max_quantity: 7,
        }
    );
    assert_eq!(Decimal::from(unit.max_quantity()), crossed.total_quantity);
}

#[test]
fn results_serialize() {
    let result = cross(&[order(2, 110)], &[order(2, 100)]).unwrap().unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: CrossingResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}
