//! Price ranges.
//!
//! A competitive-equilibrium price is either exact or any value in a
//! closed interval, depending on where the step-shaped demand and supply
//! curves meet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single price or a closed interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    Point(Decimal),
    Interval { low: Decimal, high: Decimal },
}

impl PriceRange {
    /// Build an interval; callers must pass `low <= high`.
    #[must_use]
    pub fn interval(low: Decimal, high: Decimal) -> Self {
        debug_assert!(low <= high, "interval bounds reversed: [{low}, {high}]");
        Self::Interval { low, high }
    }

    #[must_use]
    pub fn low(&self) -> Decimal {
        match *self {
            Self::Point(p) => p,
            Self::Interval { low, .. } => low,
        }
    }

    #[must_use]
    pub fn high(&self) -> Decimal {
        match *self {
            Self::Point(p) => p,
            Self::Interval { high, .. } => high,
        }
    }

    /// Midpoint of the range; the point itself for [`PriceRange::Point`].
    #[must_use]
    pub fn midpoint(&self) -> Decimal {
        match *self {
            Self::Point(p) => p,
            Self::Interval { low, high } => (low + high) / Decimal::TWO,
        }
    }

    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        self.low() <= price && price <= self.high()
    }

    #[must_use]
    pub fn is_point(&self) -> bool {
        matches!(self, Self::Point(_))
    }

    /// Turn a degenerate interval into a point.
    #[must_use]
    pub fn collapse(self) -> Self {
        match self {
            Self::Interval { low, high } if low == high => Self::Point(low),
            other => other,
        }
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Point(p) => write!(f, "{p}"),
            Self::Interval { low, high } => write!(f, "[{low}, {high}]"),
        }
    }
}
