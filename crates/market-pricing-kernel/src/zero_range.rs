//! Zero-range root finding over a price grid.
//!
//! The equilibrium search and the single-unit crosser both need the region
//! where a non-decreasing function crosses zero. They depend on the
//! [`ZeroRangeFinder`] contract only; [`BisectionFinder`] is the default.

use market_pricing_types::{PriceRange, PricingError, Result, SearchConfig};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Locates where `f` crosses zero inside `[low, high]` at resolution
/// `tolerance`.
///
/// Contract:
/// - `Point(x)` when `f` is zero at exactly one grid point, or when it
///   jumps from negative to positive without touching zero (`x` is the last
///   negative point);
/// - `Interval { low, high }` when `f` is zero over a flat segment;
/// - `None` when the bracket holds neither a zero nor a sign change.
pub trait ZeroRangeFinder {
    fn find_zero_range<F>(
        &self,
        low: Decimal,
        high: Decimal,
        tolerance: Decimal,
        f: F,
    ) -> Result<Option<PriceRange>>
    where
        F: Fn(Decimal) -> Decimal;
}

/// Binary search on the grid `low + k * tolerance`, assuming `f` is
/// non-decreasing. Costs `O(log n)` evaluations of `f`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionFinder;

impl ZeroRangeFinder for BisectionFinder {
    fn find_zero_range<F>(
        &self,
        low: Decimal,
        high: Decimal,
        tolerance: Decimal,
        f: F,
    ) -> Result<Option<PriceRange>>
    where
        F: Fn(Decimal) -> Decimal,
    {
        SearchConfig::new(low, high, tolerance).validate()?;

        let too_large = || PricingError::SearchGridTooLarge {
            low,
            high,
            tolerance,
        };
        let points = high
            .checked_sub(low)
            .and_then(|width| width.checked_div(tolerance))
            .map(|steps| steps.floor())
            .and_then(|steps| steps.to_u64())
            .and_then(|last| last.checked_add(1))
            .ok_or_else(too_large)?;

        // Grid points never leave the bracket, even when rounding pushes
        // the last step past `high`.
        let at = |k: u64| {
            tolerance
                .checked_mul(Decimal::from(k))
                .and_then(|offset| low.checked_add(offset))
                .map_or(high, |p| p.min(high))
        };

        let first_non_negative = partition_point(0, points, |k| f(at(k)) < Decimal::ZERO);
        if first_non_negative == points {
            // negative on the whole grid
            return Ok(None);
        }

        let start = at(first_non_negative);
        if f(start).is_zero() {
            let first_positive =
                partition_point(first_non_negative, points, |k| f(at(k)) <= Decimal::ZERO);
            let last_zero = first_positive - 1;
            return Ok(Some(if last_zero == first_non_negative {
                PriceRange::Point(start)
            } else {
                PriceRange::interval(start, at(last_zero))
            }));
        }

        if first_non_negative == 0 {
            // positive on the whole grid
            return Ok(None);
        }
        Ok(Some(PriceRange::Point(at(first_non_negative - 1))))
    }
}

/// [`BisectionFinder`] as a free function.
pub fn find_zero_range<F>(
    low: Decimal,
    high: Decimal,
    tolerance: Decimal,
    f: F,
) -> Result<Option<PriceRange>>
where
    F: Fn(Decimal) -> Decimal,
{
    BisectionFinder.find_zero_range(low, high, tolerance, f)
}

/// First index in `lo..hi` where `pred` is false; `pred` must be monotone.
fn partition_point(mut lo: u64, mut hi: u64, pred: impl Fn(u64) -> bool) -> u64 {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    #[test]
    fn single_zero_is_a_point() {
        let r = find_zero_range(dec(0), dec(100), Decimal::ONE, |x| x - dec(10)).unwrap();
        assert_eq!(r, Some(PriceRange::Point(dec(10))));
    }

    #[test]
    fn flat_zero_segment_is_an_interval() {
        let f = |x: Decimal| {
            if x < dec(66) {
                dec(-1)
            } else if x <= dec(69) {
                Decimal::ZERO
            } else {
                Decimal::ONE
            }
        };
        let r = find_zero_range(dec(0), dec(1000), Decimal::ONE, f).unwrap();
        assert_eq!(r, Some(PriceRange::interval(dec(66), dec(69))));
    }

    #[test]
    fn sign_change_reports_last_negative_point() {
        let f = |x: Decimal| x - Decimal::new(105, 1);
        let r = find_zero_range(dec(0), dec(100), Decimal::ONE, f).unwrap();
        assert_eq!(r, Some(PriceRange::Point(dec(10))));
    }

    #[test]
    fn fractional_grid() {
        let f = |x: Decimal| x - Decimal::new(2525, 2);
        let r = find_zero_range(dec(0), dec(50), Decimal::new(1, 2), f).unwrap();
        assert_eq!(r, Some(PriceRange::Point(Decimal::new(2525, 2))));
    }

    #[test]
    fn positive_everywhere_is_none() {
        let r = find_zero_range(dec(0), dec(10), Decimal::ONE, |x| x + Decimal::ONE).unwrap();
        assert_eq!(r, None);
    }

    #[test]
    fn negative_everywhere_is_none() {
        let r = find_zero_range(dec(0), dec(10), Decimal::ONE, |x| x - dec(100)).unwrap();
        assert_eq!(r, None);
    }

    #[test]
    fn zero_at_lower_edge() {
        let r = find_zero_range(dec(5), dec(10), Decimal::ONE, |x| x - dec(5)).unwrap();
        assert_eq!(r, Some(PriceRange::Point(dec(5))));
    }

    #[test]
    fn degenerate_bracket() {
        let r = find_zero_range(dec(7), dec(7), Decimal::ONE, |x| x - dec(7)).unwrap();
        assert_eq!(r, Some(PriceRange::Point(dec(7))));
    }

    #[test]
    fn rejects_bad_tolerance() {
        let err = find_zero_range(dec(0), dec(10), Decimal::ZERO, |x| x).unwrap_err();
        assert_eq!(err, PricingError::InvalidTolerance(Decimal::ZERO));
    }

    #[test]
    fn rejects_reversed_bracket() {
        let err = find_zero_range(dec(10), dec(0), Decimal::ONE, |x| x).unwrap_err();
        assert!(matches!(err, PricingError::InvalidSearchBounds { .. }));
    }

    #[test]
    fn unrepresentable_bracket_width_is_too_large() {
        let err = find_zero_range(Decimal::MIN, Decimal::MAX, Decimal::ONE, |x| x).unwrap_err();
        assert_eq!(
            err,
            PricingError::SearchGridTooLarge {
                low: Decimal::MIN,
                high: Decimal::MAX,
                tolerance: Decimal::ONE,
            }
        );
    }

    #[test]
    fn too_many_grid_points_is_too_large() {
        let err = find_zero_range(Decimal::MIN, dec(0), Decimal::ONE, |x| x).unwrap_err();
        assert!(matches!(err, PricingError::SearchGridTooLarge { .. }));
    }

    #[test]
    fn grid_at_top_of_decimal_range() {
        let low = Decimal::MAX - dec(10);
        let r = find_zero_range(low, Decimal::MAX, Decimal::ONE, |x| x - (low + dec(4))).unwrap();
        assert_eq!(r, Some(PriceRange::Point(low + dec(4))));
    }

    #[test]
    fn partition_point_finds_boundary() {
        assert_eq!(partition_point(0, 10, |k| k < 4), 4);
        assert_eq!(partition_point(0, 10, |_| true), 10);
        assert_eq!(partition_point(0, 10, |_| false), 0);
    }
}
