//! Property-based tests for the ordering of real algebraic numbers

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use ralg_core::{RealAlgebraicNumber, ThomEncoding};
use ralg_math::{Interval, Sign, UnivariatePolynomial};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

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

/// Thom-encoded roots of `x^2 - n`, ascending
fn thom_sqrt(n: i64) -> (RealAlgebraicNumber, RealAlgebraicNumber) {
    let roots = ThomEncoding::realize_all(&UnivariatePolynomial::from_ints(0, &[-n, 0, 1]))
        .expect("nonconstant");
    let mut roots = roots.into_iter().map(RealAlgebraicNumber::from_thom);
    let neg = roots.next().expect("two real roots");
    let pos = roots.next().expect("two real roots");
    (neg, pos)
}

/// `+-n/d`, `sqrt(n)` or `+-sqrt(n)` Thom-encoded, picked by `kind`
fn mixed(kind: u8, n: i64, d: i64) -> RealAlgebraicNumber {
    let q = BigRational::new(BigInt::from(n), BigInt::from(d));
    match kind {
        0 => RealAlgebraicNumber::from_rational(q),
        1 => RealAlgebraicNumber::from_rational(-q),
        2 => sqrt(n),
        3 => thom_sqrt(n).1,
        _ => thom_sqrt(n).0,
    }
}

fn hash_of(x: &RealAlgebraicNumber) -> u64 {
    let mut h = DefaultHasher::new();
    x.hash(&mut h);
    h.finish()
}

#[cfg(test)]
mod numeric_properties {
    use super::*;

    proptest! {
        /// Numeric numbers order like their values
        #[test]
        fn numeric_order_matches_rationals(
            a in -50i64..50, b in 1i64..10,
            c in -50i64..50, d in 1i64..10
        ) {
            let p = BigRational::new(BigInt::from(a), BigInt::from(b));
            let q = BigRational::new(BigInt::from(c), BigInt::from(d));
            let x = RealAlgebraicNumber::from_rational(p.clone());
            let y = RealAlgebraicNumber::from_rational(q.clone());
            prop_assert_eq!(x.cmp(&y), p.cmp(&q));
            prop_assert_eq!(x.check_order(&y), (p == q, p < q));
        }
    }
}

#[cfg(test)]
mod algebraic_properties {
    use super::*;

    proptest! {
        /// sqrt is monotone
        #[test]
        fn sqrt_order_matches_radicands(m in 2i64..60, n in 2i64..60) {
            prop_assert_eq!(sqrt(m).cmp(&sqrt(n)), m.cmp(&n));
        }

        /// sqrt(n) vs a/b decided by comparing n b^2 with a^2
        #[test]
        fn sqrt_vs_rational(n in 2i64..60, a in 1i64..80, b in 1i64..10) {
            let q = RealAlgebraicNumber::from_rational(
                BigRational::new(BigInt::from(a), BigInt::from(b)),
            );
            prop_assert_eq!(sqrt(n).cmp(&q), (n * b * b).cmp(&(a * a)));
        }

        /// Equality and order agree with each other in both directions
        #[test]
        fn check_order_is_antisymmetric(m in 2i64..40, n in 2i64..40) {
            let (x, y) = (sqrt(m), sqrt(n));
            let (eq, lt) = x.check_order(&y);
            let (eq_rev, lt_rev) = y.check_order(&x);
            prop_assert_eq!(eq, eq_rev);
            prop_assert!(!(lt && lt_rev));
            prop_assert!(eq || lt || lt_rev);
        }

        /// Perfect squares collapse to their integer roots, hashing alike
        #[test]
        fn perfect_square_roots_equal_integers(k in 2i64..12) {
            let root = sqrt(k * k);
            let int = RealAlgebraicNumber::from_integer(k);
            prop_assert_eq!(&root, &int);
            prop_assert_eq!(hash_of(&root), hash_of(&int));
            prop_assert!(root.is_integral());
        }

        /// abs is nonnegative and fixes positive numbers
        #[test]
        fn abs_of_negative_root(n in 2i64..60) {
            let neg = RealAlgebraicNumber::from_interval(
                UnivariatePolynomial::from_ints(0, &[-n, 0, 1]),
                Interval::open(rat(-n), rat(0)),
            )
            .expect("(-n, 0) isolates -sqrt(n)");
            prop_assert_eq!(neg.sgn(), Sign::Negative);
            prop_assert_eq!(neg.abs(), sqrt(n));
            prop_assert_eq!(sqrt(n).abs().cmp(&sqrt(n)), Ordering::Equal);
        }
    }
}

#[cfg(test)]
mod mixed_properties {
    use super::*;

    proptest! {
        /// Order and equality are transitive across representations
        #[test]
        fn order_is_transitive(
            ka in 0u8..5, na in 2i64..30, da in 1i64..4,
            kb in 0u8..5, nb in 2i64..30, db in 1i64..4,
            kc in 0u8..5, nc in 2i64..30, dc in 1i64..4
        ) {
            let a = mixed(ka, na, da);
            let b = mixed(kb, nb, db);
            let c = mixed(kc, nc, dc);
            if a < b && b < c {
                prop_assert!(a < c);
            }
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
            if a == b && b == c {
                prop_assert!(a == c);
            }
        }

        /// Refining either side never changes a sign or comparison result
        #[test]
        fn refinement_is_transparent(
            kx in 0u8..5, nx in 2i64..30, dx in 1i64..4,
            ky in 0u8..5, ny in 2i64..30, dy in 1i64..4,
            steps in 1usize..12
        ) {
            let x = mixed(kx, nx, dx);
            let y = mixed(ky, ny, dy);
            let sign = x.sgn();
            let zero = x.is_zero();
            let order = x.check_order(&y);
            let reversed = y.check_order(&x);

            for _ in 0..steps {
                x.refine();
            }
            prop_assert_eq!(x.sgn(), sign);
            prop_assert_eq!(x.is_zero(), zero);
            prop_assert_eq!(x.check_order(&y), order);

            for _ in 0..steps {
                y.refine();
            }
            prop_assert_eq!(y.check_order(&x), reversed);
            prop_assert_eq!(x.equal(&y), order.0);
            prop_assert_eq!(x.less(&y), order.1);
            prop_assert_eq!(x.cmp(&mixed(kx, nx, dx)), Ordering::Equal);
        }
    }
}
