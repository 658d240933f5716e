//! Rational sample points around algebraic numbers.
//!
//! Samples are always numeric. They prefer integers, so the witnesses stay
//! small when the caller feeds them back into polynomial evaluation.

use crate::error::{RanError, RanResult};
use crate::ran::{RealAlgebraicNumber, Repr};
use num_rational::BigRational;
use num_traits::One;
use ralg_math::Interval;

impl RealAlgebraicNumber {
    /// Bounds `(lo, hi)` with `lo <= x <= hi`, equal for numeric numbers.
    fn enclosure(&self) -> (BigRational, BigRational) {
        let bounds = |i: &Interval| (i.lower().clone(), i.upper().clone());
        match self.snapshot() {
            Repr::Numeric(v) => (v.clone(), v),
            Repr::Interval(ir) => bounds(ir.borrow().interval()),
            Repr::Thom(te) => bounds(te.locator().borrow().interval()),
        }
    }

    /// A numeric number strictly below `x`.
    pub fn sample_below(x: &Self) -> Self {
        // a Thom locator may have collapsed onto a rational root
        let (lo, hi) = x.enclosure();
        let sample = if lo == hi {
            lo.ceil() - BigRational::one()
        } else {
            lo.floor()
        };
        Self::from_rational(sample)
    }

    /// A numeric number strictly above `x`.
    pub fn sample_above(x: &Self) -> Self {
        let (lo, hi) = x.enclosure();
        let sample = if lo == hi {
            hi.floor() + BigRational::one()
        } else {
            hi.ceil()
        };
        Self::from_rational(sample)
    }

    /// A numeric number strictly between `lower` and `upper`.
    ///
    /// Both numbers are refined until a rational gap opens between them;
    /// the sample is the simplest point of that gap.
    ///
    /// # Errors
    ///
    /// [`RanError::InvalidSampleRange`] unless `lower < upper`.
    pub fn sample_between(lower: &Self, upper: &Self) -> RanResult<Self> {
        if !lower.less(upper) {
            return Err(RanError::InvalidSampleRange);
        }
        loop {
            let (_, lo) = lower.enclosure();
            let (hi, _) = upper.enclosure();
            if lo < hi {
                return Ok(Self::from_rational(Interval::open(lo, hi).sample()));
            }
            lower.refine();
            upper.refine();
        }
    }
}
