//! Sign of an exact quantity.

use num_rational::BigRational;
use num_traits::{Signed, Zero};
use std::fmt;
use std::ops::{Mul, Neg};

/// The sign of a number: negative, zero or positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// Strictly below zero.
    Negative,
    /// Exactly zero.
    Zero,
    /// Strictly above zero.
    Positive,
}

impl Sign {
    /// Sign of a rational.
    pub fn of(q: &BigRational) -> Self {
        if q.is_zero() {
            Sign::Zero
        } else if q.is_positive() {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    /// Check if this is the zero sign.
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    /// The sign as -1, 0 or 1.
    #[inline]
    pub fn to_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Negative => write!(f, "-"),
            Sign::Zero => write!(f, "0"),
            Sign::Positive => write!(f, "+"),
        }
    }
}
