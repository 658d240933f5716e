//! Intervals over the rationals.
//!
//! An interval carries a bound type per side: strict (open), weak (closed)
//! or infinite. Isolating intervals for algebraic numbers are always either
//! open intervals or point intervals.

use crate::rational::{integer_between, midpoint};
use crate::sign::Sign;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Kind of an interval bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundType {
    /// The bound value is excluded.
    Strict,
    /// The bound value is included.
    Weak,
    /// No bound; the bound value is meaningless.
    Infty,
}

/// An interval `lower .. upper` with per-side bound types.
///
/// Infinite bounds store a zero value so that structural equality and
/// hashing only depend on meaningful data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    lower: BigRational,
    lower_type: BoundType,
    upper: BigRational,
    upper_type: BoundType,
}

impl Interval {
    /// Create an interval, returning `None` if it would be empty.
    pub fn new(
        lower: BigRational,
        lower_type: BoundType,
        upper: BigRational,
        upper_type: BoundType,
    ) -> Option<Self> {
        let lower = if lower_type == BoundType::Infty {
            BigRational::zero()
        } else {
            lower
        };
        let upper = if upper_type == BoundType::Infty {
            BigRational::zero()
        } else {
            upper
        };
        let interval = Self {
            lower,
            lower_type,
            upper,
            upper_type,
        };
        (!interval.is_empty()).then_some(interval)
    }

    /// The open interval `(lower, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `lower >= upper`.
    pub fn open(lower: BigRational, upper: BigRational) -> Self {
        assert!(lower < upper, "open interval requires lower < upper");
        Self {
            lower,
            lower_type: BoundType::Strict,
            upper,
            upper_type: BoundType::Strict,
        }
    }

    /// The closed interval `[lower, upper]`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    pub fn closed(lower: BigRational, upper: BigRational) -> Self {
        assert!(lower <= upper, "closed interval requires lower <= upper");
        Self {
            lower,
            lower_type: BoundType::Weak,
            upper,
            upper_type: BoundType::Weak,
        }
    }

    /// The point interval `[value, value]`.
    pub fn point(value: BigRational) -> Self {
        Self {
            lower: value.clone(),
            lower_type: BoundType::Weak,
            upper: value,
            upper_type: BoundType::Weak,
        }
    }

    /// The point interval `[0, 0]`.
    pub fn zero_interval() -> Self {
        Self::point(BigRational::zero())
    }

    /// The whole real line.
    pub fn unbounded() -> Self {
        Self {
            lower: BigRational::zero(),
            lower_type: BoundType::Infty,
            upper: BigRational::zero(),
            upper_type: BoundType::Infty,
        }
    }

    /// Lower bound value (zero when the lower bound is infinite).
    #[inline]
    pub fn lower(&self) -> &BigRational {
        &self.lower
    }

    /// Upper bound value (zero when the upper bound is infinite).
    #[inline]
    pub fn upper(&self) -> &BigRational {
        &self.upper
    }

    /// Lower bound type.
    #[inline]
    pub fn lower_type(&self) -> BoundType {
        self.lower_type
    }

    /// Upper bound type.
    #[inline]
    pub fn upper_type(&self) -> BoundType {
        self.upper_type
    }

    fn is_empty(&self) -> bool {
        if self.lower_type == BoundType::Infty || self.upper_type == BoundType::Infty {
            return false;
        }
        match self.lower.cmp(&self.upper) {
            Ordering::Greater => true,
            Ordering::Equal => {
                self.lower_type == BoundType::Strict || self.upper_type == BoundType::Strict
            }
            Ordering::Less => false,
        }
    }

    /// Check if this is a point interval `[v, v]`.
    pub fn is_point(&self) -> bool {
        self.lower_type == BoundType::Weak
            && self.upper_type == BoundType::Weak
            && self.lower == self.upper
    }

    /// Check if both bounds are finite and strict.
    pub fn is_open(&self) -> bool {
        self.lower_type == BoundType::Strict && self.upper_type == BoundType::Strict
    }

    /// Check if this is the point interval `[0, 0]`.
    pub fn is_zero(&self) -> bool {
        self.is_point() && self.lower.is_zero()
    }

    /// Check if every element is strictly positive.
    pub fn is_positive(&self) -> bool {
        match self.lower_type {
            BoundType::Infty => false,
            BoundType::Strict => self.lower >= BigRational::zero(),
            BoundType::Weak => self.lower > BigRational::zero(),
        }
    }

    /// Check if every element is strictly negative.
    pub fn is_negative(&self) -> bool {
        match self.upper_type {
            BoundType::Infty => false,
            BoundType::Strict => self.upper <= BigRational::zero(),
            BoundType::Weak => self.upper < BigRational::zero(),
        }
    }

    /// The common sign of all elements, if there is one.
    pub fn sgn(&self) -> Option<Sign> {
        if self.is_zero() {
            Some(Sign::Zero)
        } else if self.is_positive() {
            Some(Sign::Positive)
        } else if self.is_negative() {
            Some(Sign::Negative)
        } else {
            None
        }
    }

    fn above_lower(&self, value: &BigRational) -> bool {
        match self.lower_type {
            BoundType::Infty => true,
            BoundType::Strict => &self.lower < value,
            BoundType::Weak => &self.lower <= value,
        }
    }

    fn below_upper(&self, value: &BigRational) -> bool {
        match self.upper_type {
            BoundType::Infty => true,
            BoundType::Strict => value < &self.upper,
            BoundType::Weak => value <= &self.upper,
        }
    }

    /// Check if the interval contains a value.
    pub fn contains(&self, value: &BigRational) -> bool {
        self.above_lower(value) && self.below_upper(value)
    }

    /// Check if `other` is a subset of this interval.
    pub fn contains_interval(&self, other: &Interval) -> bool {
        let lower_ok = match (self.lower_type, other.lower_type) {
            (BoundType::Infty, _) => true,
            (_, BoundType::Infty) => false,
            (BoundType::Strict, BoundType::Weak) => self.lower < other.lower,
            _ => self.lower <= other.lower,
        };
        let upper_ok = match (self.upper_type, other.upper_type) {
            (BoundType::Infty, _) => true,
            (_, BoundType::Infty) => false,
            (BoundType::Strict, BoundType::Weak) => other.upper < self.upper,
            _ => other.upper <= self.upper,
        };
        lower_ok && upper_ok
    }

    /// Intersection of two intervals, `None` if they are disjoint.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let (lower, lower_type) = match (self.lower_type, other.lower_type) {
            (BoundType::Infty, _) => (other.lower.clone(), other.lower_type),
            (_, BoundType::Infty) => (self.lower.clone(), self.lower_type),
            _ => match self.lower.cmp(&other.lower) {
                Ordering::Greater => (self.lower.clone(), self.lower_type),
                Ordering::Less => (other.lower.clone(), other.lower_type),
                Ordering::Equal => {
                    let strict = self.lower_type == BoundType::Strict
                        || other.lower_type == BoundType::Strict;
                    let ty = if strict { BoundType::Strict } else { BoundType::Weak };
                    (self.lower.clone(), ty)
                }
            },
        };
        let (upper, upper_type) = match (self.upper_type, other.upper_type) {
            (BoundType::Infty, _) => (other.upper.clone(), other.upper_type),
            (_, BoundType::Infty) => (self.upper.clone(), self.upper_type),
            _ => match self.upper.cmp(&other.upper) {
                Ordering::Less => (self.upper.clone(), self.upper_type),
                Ordering::Greater => (other.upper.clone(), other.upper_type),
                Ordering::Equal => {
                    let strict = self.upper_type == BoundType::Strict
                        || other.upper_type == BoundType::Strict;
                    let ty = if strict { BoundType::Strict } else { BoundType::Weak };
                    (self.upper.clone(), ty)
                }
            },
        };
        Interval::new(lower, lower_type, upper, upper_type)
    }

    /// Midpoint of a bounded interval.
    pub fn midpoint(&self) -> BigRational {
        midpoint(&self.lower, &self.upper)
    }

    /// Width of a bounded interval.
    pub fn width(&self) -> BigRational {
        &self.upper - &self.lower
    }

    /// A representative element, preferring the integer closest to zero.
    pub fn sample(&self) -> BigRational {
        if self.is_point() {
            return self.lower.clone();
        }
        match (self.lower_type, self.upper_type) {
            (BoundType::Infty, BoundType::Infty) => BigRational::zero(),
            (BoundType::Infty, _) => {
                if self.contains(&BigRational::zero()) {
                    BigRational::zero()
                } else {
                    self.upper.floor() - BigRational::one()
                }
            }
            (_, BoundType::Infty) => {
                if self.contains(&BigRational::zero()) {
                    BigRational::zero()
                } else {
                    self.lower.ceil() + BigRational::one()
                }
            }
            _ => integer_between(&self.lower, &self.upper).unwrap_or_else(|| self.midpoint()),
        }
    }

    /// The interval of negated elements.
    pub fn negate(&self) -> Interval {
        Interval {
            lower: -self.upper.clone(),
            lower_type: self.upper_type,
            upper: -self.lower.clone(),
            upper_type: self.lower_type,
        }
    }

    /// The interval of absolute values, for sign-definite intervals.
    ///
    /// Intervals straddling zero are returned unchanged.
    pub fn abs(&self) -> Interval {
        if self.is_negative() {
            self.negate()
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower_type {
            BoundType::Infty => write!(f, "(-oo")?,
            BoundType::Strict => write!(f, "({}", self.lower)?,
            BoundType::Weak => write!(f, "[{}", self.lower)?,
        }
        write!(f, ", ")?;
        match self.upper_type {
            BoundType::Infty => write!(f, "oo)"),
            BoundType::Strict => write!(f, "{})", self.upper),
            BoundType::Weak => write!(f, "{}]", self.upper),
        }
    }
}
