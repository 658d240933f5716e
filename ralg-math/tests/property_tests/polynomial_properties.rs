//! Property-based tests for multivariate polynomial operations

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use ralg_math::Polynomial;
use rustc_hash::FxHashMap;

/// Strategy for generating small polynomial coefficients
fn coeff_strategy() -> impl Strategy<Value = i64> {
    -10i64..10i64
}

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// c0 + c1 x0 + c2 x0 x1 + c3 x1^2
fn poly(c: [i64; 4]) -> Polynomial {
    Polynomial::from_coeffs_int(&[
        (c[0], &[]),
        (c[1], &[(0, 1)]),
        (c[2], &[(0, 1), (1, 1)]),
        (c[3], &[(1, 2)]),
    ])
}

fn point_value(p: &Polynomial, x0: i64, x1: i64) -> BigRational {
    p.eval_at(0, &rat(x0)).eval_at(1, &rat(x1)).constant_value()
}

#[cfg(test)]
mod polynomial_arithmetic_properties {
    use super::*;

    proptest! {
        /// Test that polynomial addition is commutative
        #[test]
        fn poly_add_commutative(a in prop::array::uniform4(coeff_strategy()), b in prop::array::uniform4(coeff_strategy())) {
            let (p, q) = (poly(a), poly(b));
            prop_assert_eq!(&p + &q, &q + &p);
        }

        /// Test that p - p is zero
        #[test]
        fn poly_sub_self_is_zero(a in prop::array::uniform4(coeff_strategy())) {
            let p = poly(a);
            prop_assert!((&p - &p).is_zero());
        }

        /// Test that evaluation is a ring homomorphism for multiplication
        #[test]
        fn poly_mul_evaluates_pointwise(
            a in prop::array::uniform4(coeff_strategy()),
            b in prop::array::uniform4(coeff_strategy()),
            x0 in -5i64..5, x1 in -5i64..5
        ) {
            let (p, q) = (poly(a), poly(b));
            let prod = &p * &q;
            prop_assert_eq!(
                point_value(&prod, x0, x1),
                point_value(&p, x0, x1) * point_value(&q, x0, x1)
            );
        }

        /// Test that exact division undoes multiplication
        #[test]
        fn poly_div_exact_undoes_mul(
            a in prop::array::uniform4(coeff_strategy()),
            b in prop::array::uniform4(coeff_strategy())
        ) {
            let (p, q) = (poly(a), poly(b));
            prop_assume!(!q.is_zero());
            let prod = &p * &q;
            prop_assert_eq!(prod.div_exact(&q), Some(p));
        }

        /// Test that the interval enclosure contains the point value
        #[test]
        fn poly_eval_interval_encloses(
            a in prop::array::uniform4(coeff_strategy()),
            x0 in -5i64..5, x1 in -5i64..5
        ) {
            let p = poly(a);
            let mut boxes = FxHashMap::default();
            boxes.insert(0, (rat(x0 - 1), rat(x0 + 1)));
            boxes.insert(1, (rat(x1), rat(x1 + 2)));
            let (lo, hi) = p.eval_interval(&boxes).expect("all variables bounded");
            let v = point_value(&p, x0, x1);
            prop_assert!(lo <= v && v <= hi);
        }
    }
}

#[cfg(test)]
mod resultant_properties {
    use super::*;

    proptest! {
        /// res_x(x^2 - a, y - x) = y^2 - a up to sign
        #[test]
        fn resultant_eliminates_square(a in 1i64..30) {
            let p = Polynomial::from_coeffs_int(&[(1, &[(0, 2)]), (-a, &[])]);
            let q = Polynomial::from_coeffs_int(&[(1, &[(1, 1)]), (-1, &[(0, 1)])]);
            let r = p.resultant(&q, 0);
            let expected = Polynomial::from_coeffs_int(&[(1, &[(1, 2)]), (-a, &[])]);
            prop_assert!(r == expected || r == -&expected);
        }

        /// The resultant vanishes at common roots
        #[test]
        fn resultant_vanishes_on_common_root(r0 in -5i64..5, r1 in -5i64..5, r2 in -5i64..5) {
            // (x - r0)(x - r1) and (x - r0)(x - r2) share r0
            let lin = |r: i64| Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (-r, &[])]);
            let p = &lin(r0) * &lin(r1);
            let q = &lin(r0) * &lin(r2);
            prop_assert!(p.resultant(&q, 0).is_zero());
        }
    }
}
