//! Crossing a buy queue against a sell queue.
//!
//! ## Algorithm
//!
//! 1. Walk the buy queue (highest bid first) and the sell queue (lowest
//!    ask first) together
//! 2. While the current bid is at or above the current ask, trade the
//!    smaller of the two remaining quantities
//! 3. Advance every side whose current order is now fully filled
//! 4. Stop when a queue runs out or the bid falls below the ask
//! 5. Price the trade at the midpoint of the Marshallian range formed by
//!    the last trading bid/ask and the bid/ask the walk stopped on
//!
//! Fill vectors line up with the head of each queue. Only the last entry
//! can be a partial fill.

use market_pricing_types::{CrossingResult, Quote, Result};
use rust_decimal::Decimal;

use crate::marshallian::marshallian_ce_price_range;

/// Cross two price-sorted queues at a single uniform price.
///
/// Returns `None` when nothing trades: a queue is empty or the best bid
/// is below the best ask.
///
/// # Errors
///
/// Marginal price errors from [`marshallian_ce_price_range`], which can
/// only occur when a queue is not sorted by price priority.
pub fn cross<B, S>(buys: &[B], sells: &[S]) -> Result<Option<CrossingResult>>
where
    B: Quote,
    S: Quote,
{
    let mut buy_fills: Vec<Decimal> = vec![Decimal::ZERO];
    let mut sell_fills: Vec<Decimal> = vec![Decimal::ZERO];
    let mut buy_idx = 0;
    let mut sell_idx = 0;
    let mut total = Decimal::ZERO;
    // (bid, ask) of the last unit that traded
    let mut marginal: Option<(Decimal, Decimal)> = None;

    while buy_idx < buys.len() && sell_idx < sells.len() {
        let buy = &buys[buy_idx];
        let sell = &sells[sell_idx];
        if buy.price() < sell.price() {
            break;
        }

        let fill_qty =
            (buy.quantity() - buy_fills[buy_idx]).min(sell.quantity() - sell_fills[sell_idx]);
        total += fill_qty;
        buy_fills[buy_idx] += fill_qty;
        sell_fills[sell_idx] += fill_qty;
        marginal = Some((buy.price(), sell.price()));

        tracing::trace!(
            buy_idx,
            sell_idx,
            bid = %buy.price(),
            ask = %sell.price(),
            qty = %fill_qty,
            "Crossed"
        );

        if buy_fills[buy_idx] == buy.quantity() {
            buy_idx += 1;
            buy_fills.push(Decimal::ZERO);
        }
        if sell_fills[sell_idx] == sell.quantity() {
            sell_idx += 1;
            sell_fills.push(Decimal::ZERO);
        }
    }

    let Some((last_bid, last_ask)) = marginal else {
        return Ok(None);
    };
    if total.is_zero() {
        return Ok(None);
    }

    // The walk stopped on these orders; absent when a queue ran out.
    let next_bid = buys.get(buy_idx).map(Quote::price);
    let next_ask = sells.get(sell_idx).map(Quote::price);
    let price_range = marshallian_ce_price_range(last_bid, last_ask, next_bid, next_ask)?;
    let price = price_range.midpoint();

    trim_untouched(&mut buy_fills);
    trim_untouched(&mut sell_fills);

    tracing::debug!(
        %price,
        range = %price_range,
        qty = %total,
        buys = buy_fills.len(),
        sells = sell_fills.len(),
        "Cross complete"
    );

    Ok(Some(CrossingResult {
        price,
        price_range,
        total_quantity: total,
        buy_fills,
        sell_fills,
    }))
}

/// Drop the entry opened for an order the walk reached but never filled.
fn trim_untouched(fills: &mut Vec<Decimal>) {
    if fills.last().is_some_and(Decimal::is_zero) {
        fills.pop();
    }
}
