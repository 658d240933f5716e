//! Interval representation of an algebraic number.
//!
//! An [`IntervalRepr`] pairs a normalized polynomial with an interval that
//! contains exactly one of its real roots. Refinement narrows the interval
//! in place and never changes which root is represented, so the cache can
//! be shared by every copy of a number.
//!
//! ## Invariant
//!
//! The interval is open or a point, and the polynomial has exactly one
//! distinct real root in it, before and after every operation.

use num_rational::BigRational;
use num_traits::{One, Zero};
use ralg_math::{Interval, Sign, UnivariatePolynomial};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// An interval representation shared by every copy of a number.
///
/// Refinement through one handle is visible through all of them. `Rc` keeps
/// the cache on one thread.
pub type SharedRepr = Rc<RefCell<IntervalRepr>>;

/// Polynomial plus isolating interval, with a refinement counter.
#[derive(Debug, Clone)]
pub struct IntervalRepr {
    polynomial: UnivariatePolynomial,
    interval: Interval,
    refinement_count: usize,
    /// Cached Sturm sequence of `polynomial`.
    sturm: Vec<UnivariatePolynomial>,
}

impl IntervalRepr {
    /// Create a representation from trusted data.
    ///
    /// The caller guarantees that `polynomial` is normalized and has exactly
    /// one root in `interval`; see
    /// [`RealAlgebraicNumber::from_interval`](crate::RealAlgebraicNumber::from_interval)
    /// for the validating constructor.
    pub fn new(polynomial: UnivariatePolynomial, interval: Interval) -> Self {
        let sturm = polynomial.sturm_sequence();
        Self {
            polynomial,
            interval,
            refinement_count: 0,
            sturm,
        }
    }

    /// The defining polynomial.
    #[inline]
    pub fn polynomial(&self) -> &UnivariatePolynomial {
        &self.polynomial
    }

    /// The current isolating interval.
    #[inline]
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// Number of refinement steps applied so far.
    #[inline]
    pub fn refinement_count(&self) -> usize {
        self.refinement_count
    }

    /// Check if the interval has collapsed to a point.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.interval.is_point()
    }

    /// The root as a rational, once the interval is a point.
    pub fn point_value(&self) -> Option<&BigRational> {
        self.is_point().then(|| self.interval.lower())
    }

    fn roots_in(&self, interval: &Interval) -> usize {
        UnivariatePolynomial::count_real_roots_with(&self.sturm, interval)
    }

    fn collapse(&mut self, value: BigRational) {
        self.interval = Interval::point(value);
        self.refinement_count += 1;
    }

    /// Replace the interval by the half of a split at `pivot` that holds
    /// the root. `pivot` must lie strictly inside the interval.
    fn split_at(&mut self, pivot: BigRational) {
        if self.polynomial.is_root(&pivot) {
            self.collapse(pivot);
            return;
        }
        let left = Interval::open(self.interval.lower().clone(), pivot.clone());
        self.interval = if self.roots_in(&left) == 1 {
            left
        } else {
            Interval::open(pivot, self.interval.upper().clone())
        };
        self.refinement_count += 1;
    }

    /// Bisect the interval once.
    ///
    /// Splits at zero when zero lies strictly inside, otherwise at the
    /// midpoint. A point interval is left unchanged.
    pub fn refine(&mut self) {
        if self.is_point() {
            return;
        }
        let zero = BigRational::zero();
        let pivot = if self.interval.lower() < &zero && &zero < self.interval.upper() {
            zero
        } else {
            self.interval.midpoint()
        };
        self.split_at(pivot);
    }

    /// Refine until the interval excludes `q`.
    ///
    /// Returns `false` exactly when the represented number equals `q`; the
    /// interval has then collapsed to the point `q`.
    pub fn refine_avoiding(&mut self, q: &BigRational) -> bool {
        if let Some(v) = self.point_value() {
            return v != q;
        }
        if !self.interval.contains(q) {
            return true;
        }
        self.split_at(q.clone());
        self.point_value().map_or(true, |v| v != q)
    }

    /// Refine until the interval contains no integer, or it has collapsed
    /// to an integral point.
    pub fn refine_to_integrality(&mut self) {
        while !self.is_point() {
            let candidate = self.interval.lower().floor() + BigRational::one();
            if &candidate >= self.interval.upper() {
                return;
            }
            self.refine_avoiding(&candidate);
        }
    }

    /// Check if the number is known to be an integer.
    pub fn is_integral(&self) -> bool {
        self.point_value().is_some_and(|v| v.is_integer())
    }

    /// Check whether the represented root is also a root of `q`.
    pub fn contains_root_of(&self, q: &UnivariatePolynomial) -> bool {
        if let Some(v) = self.point_value() {
            return q.is_root(v);
        }
        if q.is_zero() {
            return true;
        }
        let g = self.polynomial.gcd(q);
        g.degree() > 0 && g.count_real_roots(&self.interval) > 0
    }

    /// Sign of `q` at the represented root.
    ///
    /// A common root with `q` inside the interval means the sign is zero;
    /// otherwise the interval is refined until `q` has no root in it, after
    /// which any sample point carries the sign.
    pub fn sgn(&mut self, q: &UnivariatePolynomial) -> Sign {
        if let Some(v) = self.point_value() {
            return q.sgn_at(v);
        }
        if self.contains_root_of(q) {
            return Sign::Zero;
        }
        let q_sturm = q.sturm_sequence();
        loop {
            if let Some(v) = self.point_value() {
                return q.sgn_at(v);
            }
            if UnivariatePolynomial::count_real_roots_with(&q_sturm, &self.interval) == 0 {
                return q.sgn_at(&self.interval.sample());
            }
            self.refine();
        }
    }
}

/// Wrap a representation for sharing.
pub fn share(repr: IntervalRepr) -> SharedRepr {
    Rc::new(RefCell::new(repr))
}

impl fmt::Display for IntervalRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.interval, self.polynomial)
    }
}
