//! # market-pricing-types
//!
//! Shared types, errors, and configuration for the **market-pricing**
//! equilibrium and crossing kernel.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`OrderId`]
//! - **Order model**: [`Order`], [`Side`], and the [`Quote`] / [`TimedQuote`]
//!   accessor traits the kernel is generic over
//! - **Price model**: [`PriceRange`]
//! - **Results**: [`CrossingResult`], [`SequentialResult`], [`UnitCrossing`]
//! - **Configuration**: [`SearchConfig`]
//! - **Errors**: [`PricingError`] with `MP_ERR_` prefix codes
//! - **Constants**: equilibrium search defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod order;
pub mod range;
pub mod result;

// Re-export all primary types at crate root for ergonomic imports:
//   use market_pricing_types::{Order, Quote, PriceRange, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use order::*;
pub use range::*;
pub use result::*;

// Constants are accessed via `market_pricing_types::constants::FOO`
// (not re-exported to avoid name collisions).
