//! Configuration for the equilibrium price search.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PricingError, Result, constants};

/// Bracket and resolution for a Walrasian equilibrium search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Lowest candidate price.
    pub low: Decimal,
    /// Highest candidate price.
    pub high: Decimal,
    /// Grid step between candidate prices. A step of exactly one enables
    /// the whole-tick correction for discrete supply.
    pub tolerance: Decimal,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            low: constants::DEFAULT_PRICE_FLOOR,
            high: constants::DEFAULT_PRICE_CEILING,
            tolerance: constants::DEFAULT_TOLERANCE,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn new(low: Decimal, high: Decimal, tolerance: Decimal) -> Self {
        Self {
            low,
            high,
            tolerance,
        }
    }

    /// Whole-tick search over `[low, high]`.
    #[must_use]
    pub fn ticks(low: Decimal, high: Decimal) -> Self {
        Self::new(low, high, Decimal::ONE)
    }

    /// Reject empty brackets and non-positive steps.
    pub fn validate(&self) -> Result<()> {
        if self.tolerance <= Decimal::ZERO {
            return Err(PricingError::InvalidTolerance(self.tolerance));
        }
        if self.low > self.high {
            return Err(PricingError::InvalidSearchBounds {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Whether the search runs on whole price ticks.
    #[must_use]
    pub fn is_unit_step(&self) -> bool {
        self.tolerance == Decimal::ONE
    }
}
