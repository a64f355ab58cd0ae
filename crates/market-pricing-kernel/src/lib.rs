//! # market-pricing-kernel
//!
//! **Pure competitive-equilibrium pricing and order crossing.**
//!
//! The kernel takes immutable snapshots of price-sorted order queues (or
//! demand and supply functions) and computes clearing prices, traded
//! quantities and per-order fills. It has:
//!
//! - **Zero side effects**: no I/O, no persistence, nothing kept between calls
//! - **Borrowed inputs**: queues are read through [`Quote`](market_pricing_types::Quote)
//!   and never mutated
//! - **Explicit outcomes**: "no trade" is `Ok(None)`, broken preconditions
//!   are [`PricingError`](market_pricing_types::PricingError)s
//!
//! ```text
//! curves ─┐
//!         ├─ walrasian ── zero_range
//! marshallian ─┬─ single_unit ── zero_range
//!              └─ cross ── sequential
//! ```

pub mod cross;
pub mod curves;
pub mod marshallian;
pub mod sequential;
pub mod single_unit;
pub mod walrasian;
pub mod zero_range;

pub use cross::cross;
pub use curves::{
    DemandCurve, QuantityCurve, SupplyCurve, demand_from_queue, supply_from_queue, unit_prices,
};
pub use marshallian::marshallian_ce_price_range;
pub use sequential::sequential;
pub use single_unit::{
    cross_single_unit_demand_and_supply, cross_single_unit_demand_and_supply_with,
};
pub use walrasian::{
    walrasian_ce_price_range, walrasian_ce_price_range_for, walrasian_ce_price_range_with,
};
pub use zero_range::{BisectionFinder, ZeroRangeFinder, find_zero_range};
