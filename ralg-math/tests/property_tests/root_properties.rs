//! Property-based tests for root counting and isolation

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use ralg_math::{Interval, UnivariatePolynomial};

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Product of (x - r) over the given roots
fn from_roots(roots: &[i64]) -> UnivariatePolynomial {
    roots.iter().fold(UnivariatePolynomial::from_ints(0, &[1]), |acc, &r| {
        acc.mul(&UnivariatePolynomial::from_ints(0, &[-r, 1]))
    })
}

fn distinct(roots: &[i64]) -> Vec<i64> {
    let mut v = roots.to_vec();
    v.sort_unstable();
    v.dedup();
    v
}

#[cfg(test)]
mod root_counting_properties {
    use super::*;

    proptest! {
        /// Sturm counting sees each distinct root once
        #[test]
        fn count_all_matches_distinct_roots(roots in prop::collection::vec(-8i64..8, 1..5)) {
            let p = from_roots(&roots);
            prop_assert_eq!(p.count_all_real_roots(), distinct(&roots).len());
        }

        /// Counting over a closed interval matches the roots inside it
        #[test]
        fn count_in_interval(roots in prop::collection::vec(-8i64..8, 1..5), lo in -9i64..0, hi in 0i64..9) {
            let p = from_roots(&roots);
            let expected = distinct(&roots).into_iter().filter(|r| lo <= *r && *r <= hi).count();
            prop_assert_eq!(p.count_real_roots(&Interval::closed(rat(lo), rat(hi))), expected);
        }

        /// Isolating intervals are sorted, disjoint and hold one root each
        #[test]
        fn isolation_separates_roots(roots in prop::collection::vec(-8i64..8, 1..5), split in any::<bool>()) {
            let p = from_roots(&roots);
            let intervals = p.isolate_real_roots(split);
            let expected = distinct(&roots);
            prop_assert_eq!(intervals.len(), expected.len());
            for (interval, r) in intervals.iter().zip(&expected) {
                prop_assert!(interval.contains(&rat(*r)));
                prop_assert!(interval.is_open() || interval.is_point());
            }
            for pair in intervals.windows(2) {
                prop_assert!(pair[0].upper() <= pair[1].lower());
            }
        }

        /// Squaring a polynomial does not change its real roots
        #[test]
        fn square_free_part_keeps_roots(roots in prop::collection::vec(-8i64..8, 1..4)) {
            let p = from_roots(&roots);
            let sq = p.mul(&p);
            prop_assert_eq!(sq.square_free(), from_roots(&distinct(&roots)));
        }
    }
}
