//! Walrasian equilibrium search.
//!
//! Finds the prices at which aggregate supply meets aggregate demand by
//! root-finding on excess supply `S(p) - D(p)`.

use market_pricing_types::{PriceRange, Result, SearchConfig};
use rust_decimal::Decimal;

use crate::curves::QuantityCurve;
use crate::zero_range::{BisectionFinder, ZeroRangeFinder};

/// CE price range of `demand` and `supply` inside `[low, high]`, searched
/// on a grid of step `tolerance` with the default [`BisectionFinder`].
///
/// Returns `None` when excess supply neither vanishes nor changes sign
/// inside the bracket.
pub fn walrasian_ce_price_range<D, S>(
    low: Decimal,
    high: Decimal,
    tolerance: Decimal,
    demand: D,
    supply: S,
) -> Result<Option<PriceRange>>
where
    D: QuantityCurve,
    S: QuantityCurve,
{
    walrasian_ce_price_range_with(&BisectionFinder, low, high, tolerance, demand, supply)
}

/// [`walrasian_ce_price_range`] over the bracket of a [`SearchConfig`].
pub fn walrasian_ce_price_range_for<D, S>(
    config: &SearchConfig,
    demand: D,
    supply: S,
) -> Result<Option<PriceRange>>
where
    D: QuantityCurve,
    S: QuantityCurve,
{
    walrasian_ce_price_range(config.low, config.high, config.tolerance, demand, supply)
}

/// [`walrasian_ce_price_range`] with an explicit root finder.
///
/// On a whole-tick grid, a point where supply is still short is moved up
/// one tick when the next tick brings in more supply: with discrete
/// quantities, that next sell order is needed to clear.
pub fn walrasian_ce_price_range_with<Z, D, S>(
    finder: &Z,
    low: Decimal,
    high: Decimal,
    tolerance: Decimal,
    demand: D,
    supply: S,
) -> Result<Option<PriceRange>>
where
    Z: ZeroRangeFinder,
    D: QuantityCurve,
    S: QuantityCurve,
{
    let unit_step = SearchConfig::new(low, high, tolerance).is_unit_step();
    let excess_supply = |p: Decimal| supply.quantity_at(p).saturating_sub(demand.quantity_at(p));
    let found = finder.find_zero_range(low, high, tolerance, excess_supply)?;

    let range = match found {
        Some(PriceRange::Point(p)) if unit_step && excess_supply(p) < Decimal::ZERO => {
            let next = p
                .checked_add(Decimal::ONE)
                .filter(|&next| supply.quantity_at(p) < supply.quantity_at(next));
            Some(PriceRange::Point(next.unwrap_or(p)))
        }
        other => other,
    };

    tracing::debug!(%low, %high, %tolerance, range = ?range, "Walrasian search complete");
    Ok(range)
}
