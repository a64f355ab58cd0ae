//! Defaults shared by the pricing kernel.

use rust_decimal::Decimal;

/// Default lower bound of the equilibrium price search.
pub const DEFAULT_PRICE_FLOOR: Decimal = Decimal::ZERO;

/// Default upper bound of the equilibrium price search.
pub const DEFAULT_PRICE_CEILING: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Default search resolution: one whole price tick.
pub const DEFAULT_TOLERANCE: Decimal = Decimal::ONE;
