//! Exact ordering of real algebraic numbers.
//!
//! Dispatch by representation:
//!
//! - Numeric vs Numeric: rational comparison
//! - Numeric vs Interval: refine the interval until it excludes the value
//! - Interval vs Interval: a common root of the two polynomials inside the
//!   overlap of the intervals means equality; otherwise both intervals are
//!   bisected until they are disjoint
//! - Thom vs Thom over the same polynomial: Thom's lemma on the sign
//!   conditions; anything else involving Thom goes through the encoding's
//!   interval locator
//!
//! ## References
//!
//! - "Algorithms in Real Algebraic Geometry" (Basu et al., 2006), Prop. 2.37
//! - Z3's `math/polynomial/algebraic_numbers.cpp`

use crate::interval_repr::SharedRepr;
use crate::ran::{RealAlgebraicNumber, Repr};
use num_rational::BigRational;
use std::cmp::Ordering;
use std::rc::Rc;
use tracing::trace;

/// Order of the root held by `ir` relative to the rational `q`.
pub(crate) fn cmp_repr_rational(ir: &SharedRepr, q: &BigRational) -> Ordering {
    let mut ir = ir.borrow_mut();
    if !ir.refine_avoiding(q) {
        return Ordering::Equal;
    }
    match ir.point_value() {
        Some(v) => v.cmp(q),
        None if q <= ir.interval().lower() => Ordering::Greater,
        None => Ordering::Less,
    }
}

/// Order by interval position, if the intervals are disjoint.
fn disjoint_order(a: &SharedRepr, b: &SharedRepr) -> Option<Ordering> {
    let (a, b) = (a.borrow(), b.borrow());
    let (ia, ib) = (a.interval(), b.interval());
    if ia.upper() <= ib.lower() {
        Some(Ordering::Less)
    } else if ib.upper() <= ia.lower() {
        Some(Ordering::Greater)
    } else {
        None
    }
}

/// Check whether the two isolated roots coincide: the GCD of the defining
/// polynomials has a root in the overlap of the intervals.
fn shares_root(a: &SharedRepr, b: &SharedRepr) -> bool {
    let (a, b) = (a.borrow(), b.borrow());
    let Some(overlap) = a.interval().intersect(b.interval()) else {
        return false;
    };
    let g = if a.polynomial().coeffs() == b.polynomial().coeffs() {
        a.polynomial().clone()
    } else {
        a.polynomial().gcd(b.polynomial())
    };
    g.degree() > 0 && g.count_real_roots(&overlap) > 0
}

/// The collapsed value of `ir`, if it is a point.
fn point_of(ir: &SharedRepr) -> Option<BigRational> {
    ir.borrow().point_value().cloned()
}

/// Order of two interval-represented roots.
pub(crate) fn cmp_reprs(a: &SharedRepr, b: &SharedRepr) -> Ordering {
    if Rc::ptr_eq(a, b) {
        return Ordering::Equal;
    }
    if let Some(v) = point_of(a) {
        return cmp_repr_rational(b, &v).reverse();
    }
    if let Some(v) = point_of(b) {
        return cmp_repr_rational(a, &v);
    }
    if let Some(ord) = disjoint_order(a, b) {
        return ord;
    }
    if shares_root(a, b) {
        trace!("common root in overlapping intervals");
        return Ordering::Equal;
    }

    // distinct roots: bisect both until the intervals separate
    let mut rounds = 0usize;
    loop {
        a.borrow_mut().refine();
        b.borrow_mut().refine();
        rounds += 1;
        if let Some(v) = point_of(a) {
            return cmp_repr_rational(b, &v).reverse();
        }
        if let Some(v) = point_of(b) {
            return cmp_repr_rational(a, &v);
        }
        if let Some(ord) = disjoint_order(a, b) {
            trace!(rounds, "separated by mutual refinement");
            return ord;
        }
    }
}

impl RealAlgebraicNumber {
    fn order(&self, other: &Self) -> Ordering {
        match (self.snapshot(), other.snapshot()) {
            (Repr::Numeric(a), Repr::Numeric(b)) => a.cmp(&b),
            (Repr::Numeric(a), Repr::Interval(ir)) => cmp_repr_rational(&ir, &a).reverse(),
            (Repr::Interval(ir), Repr::Numeric(b)) => cmp_repr_rational(&ir, &b),
            (Repr::Interval(x), Repr::Interval(y)) => cmp_reprs(&x, &y),
            (Repr::Thom(t), Repr::Thom(u)) => t.compare(&u),
            (Repr::Thom(t), Repr::Numeric(b)) => t.cmp_rational(&b),
            (Repr::Numeric(a), Repr::Thom(u)) => u.cmp_rational(&a).reverse(),
            (Repr::Thom(t), Repr::Interval(y)) => cmp_reprs(t.locator(), &y),
            (Repr::Interval(x), Repr::Thom(u)) => cmp_reprs(&x, u.locator()),
        }
    }

    /// Decide equality and strict order together.
    ///
    /// Returns `(self == other, self < other)`; refinement done for one
    /// answer serves the other.
    pub fn check_order(&self, other: &Self) -> (bool, bool) {
        let ord = self.order(other);
        (ord == Ordering::Equal, ord == Ordering::Less)
    }

    /// Check whether both numbers denote the same real.
    pub fn equal(&self, other: &Self) -> bool {
        self.check_order(other).0
    }

    /// Check whether `self` is strictly below `other`.
    pub fn less(&self, other: &Self) -> bool {
        self.check_order(other).1
    }
}

impl PartialEq for RealAlgebraicNumber {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for RealAlgebraicNumber {}

impl PartialOrd for RealAlgebraicNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RealAlgebraicNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order(other)
    }
}
