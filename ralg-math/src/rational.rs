//! Helpers over arbitrary-precision rationals.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Create a rational from an integer.
#[inline]
pub fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Create the rational `n / d`.
///
/// # Panics
///
/// Panics if `d` is zero.
#[inline]
pub fn rat_frac(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// Number of bits needed to store the numerator and the denominator.
pub fn bit_size(q: &BigRational) -> usize {
    (q.numer().bits() + q.denom().bits()) as usize
}

/// Largest integer not greater than `q`.
#[inline]
pub fn floor(q: &BigRational) -> BigRational {
    q.floor()
}

/// Smallest integer not less than `q`.
#[inline]
pub fn ceil(q: &BigRational) -> BigRational {
    q.ceil()
}

/// Check whether `q` is an integer.
#[inline]
pub fn is_integer(q: &BigRational) -> bool {
    q.is_integer()
}

/// Absolute value.
#[inline]
pub(crate) fn abs(q: &BigRational) -> BigRational {
    q.abs()
}

/// Compute `base^exp` for a non-negative exponent.
pub(crate) fn pow(base: &BigRational, exp: u32) -> BigRational {
    let mut result = BigRational::one();
    let mut b = base.clone();
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result *= &b;
        }
        e >>= 1;
        if e > 0 {
            b = &b * &b;
        }
    }
    result
}

/// Midpoint of two rationals.
#[inline]
pub(crate) fn midpoint(a: &BigRational, b: &BigRational) -> BigRational {
    (a + b) / rat(2)
}

/// The integer in `(lo, hi)` closest to zero, if any.
pub(crate) fn integer_between(lo: &BigRational, hi: &BigRational) -> Option<BigRational> {
    if lo >= hi {
        return None;
    }
    let zero = BigRational::zero();
    if lo < &zero && &zero < hi {
        return Some(zero);
    }
    let candidate = if lo >= &zero {
        // smallest integer strictly above lo
        lo.floor() + BigRational::one()
    } else {
        // largest integer strictly below hi
        hi.ceil() - BigRational::one()
    };
    (lo < &candidate && &candidate < hi).then_some(candidate)
}
