//! Clearing-price bounds from the marginal orders.
//!
//! The last unit that trades (inframarginal) and the first unit that does
//! not (extramarginal) bracket the competitive-equilibrium price on both
//! sides of the book:
//!
//! ```text
//! low  = max(extramarginal buy,  inframarginal sell)
//! high = min(extramarginal sell, inframarginal buy)
//! ```

use market_pricing_types::{PriceRange, PricingError, Result};
use rust_decimal::Decimal;

/// CE price interval implied by the marginal buy and sell prices.
///
/// Extramarginal prices are `None` at the edge of the book, in which case
/// the inframarginal price on that side bounds the interval.
///
/// # Errors
///
/// - [`PricingError::InvalidBuyPrices`] if the extramarginal buy exceeds the inframarginal buy
/// - [`PricingError::InvalidSellPrices`] if the extramarginal sell is below the inframarginal sell
/// - [`PricingError::ExtramarginalWouldTrade`] if the extramarginal pair crosses
/// - [`PricingError::InframarginalWouldNotTrade`] if the inframarginal pair does not cross
pub fn marshallian_ce_price_range(
    inframarginal_buy: Decimal,
    inframarginal_sell: Decimal,
    extramarginal_buy: Option<Decimal>,
    extramarginal_sell: Option<Decimal>,
) -> Result<PriceRange> {
    if let Some(buy) = extramarginal_buy {
        if buy > inframarginal_buy {
            return Err(PricingError::InvalidBuyPrices {
                inframarginal: inframarginal_buy,
                extramarginal: buy,
            });
        }
    }
    if let Some(sell) = extramarginal_sell {
        if sell < inframarginal_sell {
            return Err(PricingError::InvalidSellPrices {
                inframarginal: inframarginal_sell,
                extramarginal: sell,
            });
        }
    }
    if let (Some(buy), Some(sell)) = (extramarginal_buy, extramarginal_sell) {
        if buy >= sell {
            return Err(PricingError::ExtramarginalWouldTrade { buy, sell });
        }
    }
    if inframarginal_buy < inframarginal_sell {
        return Err(PricingError::InframarginalWouldNotTrade {
            buy: inframarginal_buy,
            sell: inframarginal_sell,
        });
    }

    let low = extramarginal_buy.map_or(inframarginal_sell, |buy| buy.max(inframarginal_sell));
    let high = extramarginal_sell.map_or(inframarginal_buy, |sell| sell.min(inframarginal_buy));

    // A zero bound is treated like an absent extramarginal order.
    let low = if low.is_zero() { inframarginal_sell } else { low };
    let high = if high.is_zero() { inframarginal_buy } else { high };

    Ok(PriceRange::interval(low, high))
}
