//! Intersection of single-unit demand and supply.
//!
//! Each entry of the price vectors is one unit: bids sorted high to low,
//! asks low to high. The `q`-th unit trades while the `q`-th ask does not
//! exceed the `q`-th bid, so the traded quantity sits where the marginal
//! cost minus marginal value `ask[q] - bid[q]` crosses zero.

use market_pricing_types::{PriceRange, PricingError, Result, UnitCrossing};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::marshallian::marshallian_ce_price_range;
use crate::zero_range::{BisectionFinder, ZeroRangeFinder};

/// Cross unit demand against unit supply with the default
/// [`BisectionFinder`].
///
/// Returns `None` if either side is empty.
pub fn cross_single_unit_demand_and_supply(
    buy_prices: &[Decimal],
    sell_prices: &[Decimal],
) -> Result<Option<UnitCrossing>> {
    cross_single_unit_demand_and_supply_with(&BisectionFinder, buy_prices, sell_prices)
}

/// [`cross_single_unit_demand_and_supply`] with an explicit root finder.
///
/// # Errors
///
/// [`PricingError::Internal`] if the finder reports a range that the
/// price ordering rules out; marginal price errors propagate from
/// [`marshallian_ce_price_range`].
pub fn cross_single_unit_demand_and_supply_with<Z: ZeroRangeFinder>(
    finder: &Z,
    buy_prices: &[Decimal],
    sell_prices: &[Decimal],
) -> Result<Option<UnitCrossing>> {
    let (Some(&bid), Some(&ask)) = (buy_prices.first(), sell_prices.first()) else {
        return Ok(None);
    };
    let depth = buy_prices.len().min(sell_prices.len());

    // Beyond the shorter side no further unit can trade.
    let margin = |q: Decimal| {
        q.to_usize()
            .filter(|&i| i < depth)
            .map_or(Decimal::MAX, |i| sell_prices[i].saturating_sub(buy_prices[i]))
    };

    let Some(found) = finder.find_zero_range(Decimal::ZERO, Decimal::from(depth), Decimal::ONE, margin)?
    else {
        tracing::debug!(%bid, %ask, "No unit crosses");
        return Ok(Some(UnitCrossing::NoTrade { bid, ask }));
    };

    let first = unit_index(found.low(), depth)?;
    let last = unit_index(found.high(), depth)?;

    // A marginal unit at equal bid and ask opens the flat segment.
    let min_quantity = if buy_prices[first] == sell_prices[first] {
        first
    } else {
        first + 1
    };
    let max_quantity = last + 1;

    let crossing = match max_quantity.cmp(&min_quantity) {
        std::cmp::Ordering::Greater => UnitCrossing::Flat {
            price: sell_prices[last],
            min_quantity,
            max_quantity,
        },
        std::cmp::Ordering::Equal => {
            let price = marshallian_ce_price_range(
                buy_prices[last],
                sell_prices[last],
                buy_prices.get(last + 1).copied(),
                sell_prices.get(last + 1).copied(),
            )?
            .collapse();
            UnitCrossing::Priced {
                price,
                quantity: max_quantity,
            }
        }
        std::cmp::Ordering::Less => {
            tracing::error!(first, last, "Zero range ends before it starts");
            return Err(PricingError::Internal(format!(
                "unit crossing range [{first}, {last}] is reversed"
            )));
        }
    };

    tracing::debug!(crossing = ?crossing, "Single-unit crossing complete");
    Ok(Some(crossing))
}

/// Convert a grid point reported by the finder back into a unit index.
fn unit_index(q: Decimal, depth: usize) -> Result<usize> {
    q.to_usize().filter(|&i| i < depth).ok_or_else(|| {
        tracing::error!(%q, depth, "Zero range outside the unit grid");
        PricingError::Internal(format!("unit index {q} outside 0..{depth}"))
    })
}
