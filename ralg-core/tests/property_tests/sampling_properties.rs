//! Property-based tests for rational sampling

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use ralg_core::{RealAlgebraicNumber, ThomEncoding};
use ralg_math::{Interval, UnivariatePolynomial};

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// The positive square root of `n >= 2`
fn sqrt(n: i64) -> RealAlgebraicNumber {
    RealAlgebraicNumber::from_interval(
        UnivariatePolynomial::from_ints(0, &[-n, 0, 1]),
        Interval::open(rat(0), rat(n)),
    )
    .expect("(0, n) isolates sqrt(n)")
}

/// Thom-encoded real roots of the polynomial with coefficients `coeffs`
fn thom_roots(coeffs: &[i64]) -> Vec<RealAlgebraicNumber> {
    ThomEncoding::realize_all(&UnivariatePolynomial::from_ints(0, coeffs))
        .expect("nonconstant")
        .into_iter()
        .map(RealAlgebraicNumber::from_thom)
        .collect()
}

#[cfg(test)]
mod sampling_properties {
    use super::*;

    proptest! {
        /// Samples below and above are numeric and on the right side
        #[test]
        fn samples_around_sqrt(n in 2i64..80) {
            let x = sqrt(n);
            let below = RealAlgebraicNumber::sample_below(&x);
            let above = RealAlgebraicNumber::sample_above(&x);
            prop_assert!(below.is_numeric() && above.is_numeric());
            prop_assert!(below < x);
            prop_assert!(x < above);
        }

        /// Samples around integers are the neighbouring integers
        #[test]
        fn samples_around_integers(k in -100i64..100) {
            let x = RealAlgebraicNumber::from_integer(k);
            prop_assert_eq!(RealAlgebraicNumber::sample_below(&x).value(), Ok(rat(k - 1)));
            prop_assert_eq!(RealAlgebraicNumber::sample_above(&x).value(), Ok(rat(k + 1)));
        }

        /// A sample between two distinct roots lies strictly between them
        #[test]
        fn sample_between_distinct_roots(m in 2i64..60, d in 1i64..10) {
            let (lo, hi) = (sqrt(m), sqrt(m + d));
            let s = RealAlgebraicNumber::sample_between(&lo, &hi).expect("lo < hi");
            prop_assert!(s.is_numeric());
            prop_assert!(lo < s);
            prop_assert!(s < hi);
        }

        /// Sampling an empty range fails
        #[test]
        fn sample_between_rejects_reversed(m in 2i64..60, d in 0i64..10) {
            let (lo, hi) = (sqrt(m), sqrt(m + d));
            prop_assert!(RealAlgebraicNumber::sample_between(&hi, &lo).is_err());
        }
    }
}

#[cfg(test)]
mod thom_sampling_properties {
    use super::*;

    proptest! {
        /// Samples around Thom-encoded square roots are strict
        #[test]
        fn samples_around_thom_sqrt(n in 2i64..80) {
            for x in thom_roots(&[-n, 0, 1]) {
                let below = RealAlgebraicNumber::sample_below(&x);
                let above = RealAlgebraicNumber::sample_above(&x);
                prop_assert!(below.is_numeric() && above.is_numeric());
                prop_assert!(below < x);
                prop_assert!(x < above);
            }
        }

        /// Thom roots at integers: -k, 0, k of x^3 - k^2 x
        #[test]
        fn samples_around_integral_thom_roots(k in 1i64..30) {
            let roots = thom_roots(&[0, -k * k, 0, 1]);
            prop_assert_eq!(roots.len(), 3);
            for x in &roots {
                prop_assert!(x.is_thom());
                prop_assert!(RealAlgebraicNumber::sample_below(x) < *x);
                prop_assert!(RealAlgebraicNumber::sample_above(x) > *x);
            }
        }

        /// Comparing with the integer value first must not break sampling
        #[test]
        fn samples_after_locator_collapse(k in 1i64..30) {
            let roots = thom_roots(&[0, -k * k, 0, 1]);
            let top = &roots[2];
            prop_assert_eq!(top, &RealAlgebraicNumber::from_integer(k));
            prop_assert_eq!(RealAlgebraicNumber::sample_below(top).value(), Ok(rat(k - 1)));
            prop_assert_eq!(RealAlgebraicNumber::sample_above(top).value(), Ok(rat(k + 1)));
        }

        /// A sample between two Thom roots lies strictly between them
        #[test]
        fn sample_between_thom_roots(n in 2i64..80) {
            let roots = thom_roots(&[-n, 0, 1]);
            let s = RealAlgebraicNumber::sample_between(&roots[0], &roots[1]).expect("lo < hi");
            prop_assert!(roots[0] < s);
            prop_assert!(s < roots[1]);
        }
    }
}
