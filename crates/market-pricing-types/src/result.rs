//! Result records produced by the crossing functions.
//!
//! Each record is an immutable snapshot of one computation, not a
//! standing book state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PriceRange, Side};

/// Outcome of crossing a buy queue against a sell queue at a uniform price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingResult {
    /// Uniform clearing price: midpoint of `price_range`.
    pub price: Decimal,
    /// Every price consistent with the marginal orders.
    pub price_range: PriceRange,
    pub total_quantity: Decimal,
    /// Fill per buy order, parallel to the head of the buy queue.
    pub buy_fills: Vec<Decimal>,
    /// Fill per sell order, parallel to the head of the sell queue.
    pub sell_fills: Vec<Decimal>,
}

/// Outcome of a sequential crossing, where the later side pays the
/// earlier side's posted prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequentialResult {
    /// The side whose orders take the resting side's prices.
    pub taker_side: Side,
    /// One execution price per resting order filled.
    pub prices: Vec<Decimal>,
    pub total_quantity: Decimal,
    pub buy_fills: Vec<Decimal>,
    pub sell_fills: Vec<Decimal>,
}

/// Intersection of single-unit demand and supply.
///
/// At most one of price and quantity is indeterminate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitCrossing {
    /// Nothing trades; `bid`/`ask` is the spread.
    NoTrade { bid: Decimal, ask: Decimal },
    /// A fixed quantity trades at any price in `price`.
    Priced { price: PriceRange, quantity: usize },
    /// Demand and supply overlap on a flat segment: the price is exact,
    /// any quantity in `min_quantity..=max_quantity` clears.
    Flat {
        price: Decimal,
        min_quantity: usize,
        max_quantity: usize,
    },
}

impl UnitCrossing {
    /// Largest quantity that clears.
    #[must_use]
    pub fn max_quantity(&self) -> usize {
        match self {
            Self::NoTrade { .. } => 0,
            Self::Priced { quantity, .. } => *quantity,
            Self::Flat { max_quantity, .. } => *max_quantity,
        }
    }

    /// Prices consistent with the crossing; the spread when nothing trades.
    #[must_use]
    pub fn price_range(&self) -> PriceRange {
        match *self {
            Self::NoTrade { bid, ask } => PriceRange::Interval {
                low: bid.min(ask),
                high: bid.max(ask),
            },
            Self::Priced { price, .. } => price,
            Self::Flat { price, .. } => PriceRange::Point(price),
        }
    }

    #[must_use]
    pub fn is_trade(&self) -> bool {
        !matches!(self, Self::NoTrade { .. })
    }
}
