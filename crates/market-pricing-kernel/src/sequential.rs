//! Sequential crossing.
//!
//! In a sequential auction the side whose best order arrived later is the
//! price taker: it trades at the posted prices of the resting side, one
//! resting order at a time, instead of at one uniform price. Quantities and
//! fills are the same as for [`cross`].

use market_pricing_types::{PricingError, Result, SequentialResult, Side, TimedQuote};
use rust_decimal::Decimal;

use crate::cross::cross;

/// Cross two price-sorted queues, pricing each fill at the resting side's
/// posted price.
///
/// Returns `None` when a queue is empty or the best bid is below the best
/// ask. Equal arrival times make the buy side the taker.
///
/// # Errors
///
/// [`PricingError::NonSequentialTrade`] if the taker would fill a second
/// resting order on its own side, which one-at-a-time pricing cannot
/// express.
pub fn sequential<B, S>(buys: &[B], sells: &[S]) -> Result<Option<SequentialResult>>
where
    B: TimedQuote,
    S: TimedQuote,
{
    let (Some(best_bid), Some(best_ask)) = (buys.first(), sells.first()) else {
        return Ok(None);
    };
    if best_bid.price() < best_ask.price() {
        return Ok(None);
    }
    let Some(crossed) = cross(buys, sells)? else {
        return Ok(None);
    };

    let (taker_side, prices) = if best_bid.timestamp() < best_ask.timestamp() {
        reject_second_fill(Side::Sell, &crossed.sell_fills)?;
        (Side::Sell, posted_prices(buys, crossed.buy_fills.len()))
    } else {
        reject_second_fill(Side::Buy, &crossed.buy_fills)?;
        (Side::Buy, posted_prices(sells, crossed.sell_fills.len()))
    };

    tracing::debug!(
        taker = %taker_side,
        qty = %crossed.total_quantity,
        fills = prices.len(),
        "Sequential cross complete"
    );

    Ok(Some(SequentialResult {
        taker_side,
        prices,
        total_quantity: crossed.total_quantity,
        buy_fills: crossed.buy_fills,
        sell_fills: crossed.sell_fills,
    }))
}

// Only the second entry is inspected.
fn reject_second_fill(side: Side, fills: &[Decimal]) -> Result<()> {
    match fills.get(1) {
        Some(fill) if !fill.is_zero() => {
            tracing::warn!(%side, %fill, "Non-sequential trade rejected");
            Err(PricingError::NonSequentialTrade { side })
        }
        _ => Ok(()),
    }
}

fn posted_prices<Q: TimedQuote>(resting: &[Q], filled: usize) -> Vec<Decimal> {
    resting.iter().take(filled).map(|o| o.price()).collect()
}
