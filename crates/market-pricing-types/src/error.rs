//! Error types for the pricing kernel.
//!
//! All errors use the `MP_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Marginal price ordering
//! - 2xx: Equilibrium search
//! - 3xx: Crossing
//! - 9xx: Internal errors
//!
//! Empty queues and books that do not cross are not errors; the kernel
//! reports them as `Ok(None)`.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::Side;

/// Central error enum for all pricing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    // =================================================================
    // Marginal price ordering (1xx)
    // =================================================================
    /// Buy prices must be weakly decreasing from inframarginal to extramarginal.
    #[error(
        "MP_ERR_100: Invalid buy prices: extramarginal {extramarginal} exceeds inframarginal {inframarginal}"
    )]
    InvalidBuyPrices {
        inframarginal: Decimal,
        extramarginal: Decimal,
    },

    /// Sell prices must be weakly increasing from inframarginal to extramarginal.
    #[error(
        "MP_ERR_101: Invalid sell prices: extramarginal {extramarginal} is below inframarginal {inframarginal}"
    )]
    InvalidSellPrices {
        inframarginal: Decimal,
        extramarginal: Decimal,
    },

    /// The first non-trading buy/sell pair would itself trade.
    #[error(
        "MP_ERR_102: Extramarginal buy {buy} meets or exceeds extramarginal sell {sell}"
    )]
    ExtramarginalWouldTrade { buy: Decimal, sell: Decimal },

    /// The marginal trading pair could not actually trade.
    #[error("MP_ERR_103: Inframarginal buy {buy} is below inframarginal sell {sell}")]
    InframarginalWouldNotTrade { buy: Decimal, sell: Decimal },

    // =================================================================
    // Equilibrium search (2xx)
    // =================================================================
    /// The search bracket is empty.
    #[error("MP_ERR_200: Invalid search bounds: low {low} exceeds high {high}")]
    InvalidSearchBounds { low: Decimal, high: Decimal },

    /// The search step must be strictly positive.
    #[error("MP_ERR_201: Invalid tolerance {0}: must be positive")]
    InvalidTolerance(Decimal),

    /// The bracket holds more grid points than can be indexed.
    #[error("MP_ERR_202: Search grid too large: [{low}, {high}] at step {tolerance}")]
    SearchGridTooLarge {
        low: Decimal,
        high: Decimal,
        tolerance: Decimal,
    },

    // =================================================================
    // Crossing (3xx)
    // =================================================================
    /// A quantity that must be a whole number of units is not.
    #[error("MP_ERR_300: Invalid quantity {0}: expected a non-negative whole number")]
    InvalidQuantity(Decimal),

    /// Sequential pricing would need more than one resting order on the
    /// taker's opposite side to fill out of sequence.
    #[error("MP_ERR_301: Non-sequential trades on {side} side")]
    NonSequentialTrade { side: Side },

    // =================================================================
    // Internal (9xx)
    // =================================================================
    /// A condition the algorithms rule out was reached; the inputs broke
    /// an ordering precondition.
    #[error("MP_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, PricingError>;
