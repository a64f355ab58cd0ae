//! Aggregate demand and supply curves.
//!
//! A sorted order queue defines a step function: the quantity demanded at
//! `p` is the total size of the bids priced at or above `p`, the quantity
//! supplied is the total size of the asks priced at or below `p`. The
//! curves here borrow the queue and evaluate on demand.

use market_pricing_types::{PricingError, Quote, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Quantity as a function of price.
///
/// Implemented by the queue curves and by any `Fn(Decimal) -> Decimal`, so
/// continuous functions and order queues are interchangeable wherever a
/// curve is expected.
pub trait QuantityCurve {
    fn quantity_at(&self, price: Decimal) -> Decimal;
}

impl<F> QuantityCurve for F
where
    F: Fn(Decimal) -> Decimal,
{
    fn quantity_at(&self, price: Decimal) -> Decimal {
        self(price)
    }
}

/// Cumulative demand of a buy queue sorted by descending price.
#[derive(Debug)]
pub struct DemandCurve<'a, O> {
    orders: &'a [O],
}

// Manual impls: the derive would require `O: Clone`.
impl<O> Clone for DemandCurve<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for DemandCurve<'_, O> {}

impl<O: Quote> QuantityCurve for DemandCurve<'_, O> {
    fn quantity_at(&self, price: Decimal) -> Decimal {
        self.orders
            .iter()
            .take_while(|o| o.price() >= price)
            .map(Quote::quantity)
            .sum()
    }
}

/// Cumulative supply of a sell queue sorted by ascending price.
#[derive(Debug)]
pub struct SupplyCurve<'a, O> {
    orders: &'a [O],
}

impl<O> Clone for SupplyCurve<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for SupplyCurve<'_, O> {}

impl<O: Quote> QuantityCurve for SupplyCurve<'_, O> {
    fn quantity_at(&self, price: Decimal) -> Decimal {
        self.orders
            .iter()
            .take_while(|o| o.price() <= price)
            .map(Quote::quantity)
            .sum()
    }
}

/// Demand curve of a buy queue (highest bid first).
#[must_use]
pub fn demand_from_queue<O: Quote>(buys: &[O]) -> DemandCurve<'_, O> {
    DemandCurve { orders: buys }
}

/// Supply curve of a sell queue (lowest ask first).
#[must_use]
pub fn supply_from_queue<O: Quote>(sells: &[O]) -> SupplyCurve<'_, O> {
    SupplyCurve { orders: sells }
}

/// Expand a queue into one price per unit of quantity, preserving queue
/// order. Quantities must be whole, non-negative numbers.
pub fn unit_prices<O: Quote>(queue: &[O]) -> Result<Vec<Decimal>> {
    let mut prices = Vec::new();
    for order in queue {
        let quantity = order.quantity();
        let units = if quantity.is_sign_negative() || !quantity.fract().is_zero() {
            None
        } else {
            quantity.to_usize()
        }
        .ok_or(PricingError::InvalidQuantity(quantity))?;
        prices.extend(std::iter::repeat_n(order.price(), units));
    }
    Ok(prices)
}
