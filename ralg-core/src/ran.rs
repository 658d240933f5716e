//! Real algebraic numbers.
//!
//! A [`RealAlgebraicNumber`] has exactly one active representation:
//!
//! - **Numeric**: an exact rational value
//! - **Interval**: a shared [`IntervalRepr`] (polynomial plus isolating interval)
//! - **Thom**: a [`ThomEncoding`] (polynomial plus derivative sign condition)
//!
//! The only representation change is Interval to Numeric. It happens lazily
//! on the next query once refinement has shrunk the interval to a point, and
//! it is permanent. Thom numbers stay Thom.
//!
//! Cloning a number shares its interval cache: refining any copy narrows the
//! interval seen by every copy. Refinement never changes which number is
//! represented, so sharing is unobservable except through precision.
//!
//! ## Example
//!
//! ```
//! use ralg_core::RealAlgebraicNumber;
//! use ralg_math::{rat, Interval, UnivariatePolynomial};
//!
//! let p = UnivariatePolynomial::from_ints(0, &[-2, 0, 1]);
//! let sqrt2 = RealAlgebraicNumber::from_interval(p, Interval::open(rat(1), rat(2)))?;
//! assert!(sqrt2.is_interval());
//! assert!(sqrt2 > RealAlgebraicNumber::from_rational(ralg_math::rat_frac(7, 5)));
//! # Ok::<(), ralg_core::RanError>(())
//! ```

use crate::error::{RanError, RanResult};
use crate::interval_repr::{share, IntervalRepr, SharedRepr};
use crate::thom::ThomEncoding;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use ralg_math::{bit_size, rat, BoundType, Interval, Sign, UnivariatePolynomial, Var};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Active representation of a number.
#[derive(Debug, Clone)]
pub(crate) enum Repr {
    Numeric(BigRational),
    Interval(SharedRepr),
    Thom(Rc<ThomEncoding>),
}

/// An exact real algebraic number.
///
/// Equality and order are semantic: two numbers compare equal exactly when
/// they denote the same real, whatever their representations. The
/// root-provenance flag takes no part in comparison or hashing.
#[derive(Debug, Clone)]
pub struct RealAlgebraicNumber {
    repr: RefCell<Repr>,
    is_root: bool,
}

impl RealAlgebraicNumber {
    fn with_repr(repr: Repr) -> Self {
        Self {
            repr: RefCell::new(repr),
            is_root: true,
        }
    }

    /// A numeric number.
    pub fn from_rational(value: BigRational) -> Self {
        Self::with_repr(Repr::Numeric(value))
    }

    /// A numeric integer.
    pub fn from_integer(value: i64) -> Self {
        Self::from_rational(rat(value))
    }

    /// Placeholder for a variable: the root of `var` itself, i.e. zero.
    pub fn from_variable(var: Var) -> Self {
        let poly = UnivariatePolynomial::from_ints(var, &[0, 1]);
        Self::with_repr(Repr::Interval(share(IntervalRepr::new(
            poly,
            Interval::zero_interval(),
        ))))
    }

    /// The unique root of `polynomial` in `interval`.
    ///
    /// The polynomial is replaced by its monic square-free part. Linear
    /// polynomials and point intervals yield a numeric number directly;
    /// otherwise the interval is refined away from zero when it contains it.
    ///
    /// # Errors
    ///
    /// [`RanError::DegenerateRootPolynomial`] for a constant polynomial and
    /// [`RanError::InvalidIsolatingInterval`] unless `interval` is open or a
    /// point and holds exactly one distinct root.
    pub fn from_interval(polynomial: UnivariatePolynomial, interval: Interval) -> RanResult<Self> {
        if polynomial.is_constant() {
            return Err(RanError::DegenerateRootPolynomial);
        }
        let p = polynomial.square_free();
        let roots = p.count_real_roots(&interval);
        if roots != 1 || !(interval.is_open() || interval.is_point()) {
            return Err(RanError::InvalidIsolatingInterval { interval, roots });
        }

        if p.degree() == 1 {
            // monic: x + c
            return Ok(Self::from_rational(-p.constant_coeff()));
        }
        if interval.is_point() {
            return Ok(Self::from_rational(interval.lower().clone()));
        }

        let mut ir = IntervalRepr::new(p, interval);
        let zero = BigRational::zero();
        if ir.interval().contains(&zero) {
            ir.refine_avoiding(&zero);
        }
        Ok(Self::with_repr(Repr::Interval(share(ir))))
    }

    /// A number given by a Thom encoding.
    pub fn from_thom(encoding: ThomEncoding) -> Self {
        Self::with_repr(Repr::Thom(Rc::new(encoding)))
    }

    pub(crate) fn from_shared(repr: SharedRepr) -> Self {
        Self::with_repr(Repr::Interval(repr))
    }

    /// Set the root-provenance flag.
    pub fn with_root_flag(mut self, is_root: bool) -> Self {
        self.is_root = is_root;
        self
    }

    /// Whether the number came from a root computation.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Set the root-provenance flag in place.
    pub fn set_is_root(&mut self, is_root: bool) {
        self.is_root = is_root;
    }

    /// Switch to Numeric once the interval has become a point.
    fn simplify(&self) {
        let collapsed = match &*self.repr.borrow() {
            Repr::Interval(ir) => ir.borrow().point_value().cloned(),
            _ => None,
        };
        if let Some(value) = collapsed {
            *self.repr.borrow_mut() = Repr::Numeric(value);
        }
    }

    /// The simplified representation, detached from the `RefCell`.
    pub(crate) fn snapshot(&self) -> Repr {
        self.simplify();
        self.repr.borrow().clone()
    }

    /// Check if the number is numeric (simplifies first).
    pub fn is_numeric(&self) -> bool {
        matches!(self.snapshot(), Repr::Numeric(_))
    }

    /// Check if the number is interval-represented (simplifies first).
    pub fn is_interval(&self) -> bool {
        matches!(self.snapshot(), Repr::Interval(_))
    }

    /// Check if the number is Thom-encoded.
    pub fn is_thom(&self) -> bool {
        matches!(self.snapshot(), Repr::Thom(_))
    }

    /// Check if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.sgn().is_zero()
    }

    /// Check if the number is an integer, refining as needed.
    pub fn is_integral(&self) -> bool {
        self.refine_to_integrality();
        match self.snapshot() {
            Repr::Numeric(v) => v.is_integer(),
            Repr::Interval(ir) => ir.borrow().is_integral(),
            Repr::Thom(te) => te.locator().borrow().is_integral(),
        }
    }

    /// The rational value of a numeric number.
    pub fn value(&self) -> RanResult<BigRational> {
        match self.snapshot() {
            Repr::Numeric(v) => Ok(v),
            _ => Err(RanError::NotNumeric),
        }
    }

    /// A rational close to the number: its value, or a sample of the
    /// current interval.
    pub fn branching_point(&self) -> BigRational {
        match self.snapshot() {
            Repr::Numeric(v) => v,
            Repr::Interval(ir) => ir.borrow().interval().sample(),
            Repr::Thom(te) => te.locator().borrow().interval().sample(),
        }
    }

    /// Refinement steps applied to the interval cache, if interval-represented.
    pub fn refinement_count(&self) -> Option<usize> {
        match self.snapshot() {
            Repr::Interval(ir) => Some(ir.borrow().refinement_count()),
            _ => None,
        }
    }

    /// Current isolating interval, if interval-represented.
    pub fn interval(&self) -> Option<Interval> {
        match self.snapshot() {
            Repr::Interval(ir) => Some(ir.borrow().interval().clone()),
            _ => None,
        }
    }

    /// Lower bound of the isolating interval.
    pub fn lower(&self) -> Option<BigRational> {
        self.interval().map(|i| i.lower().clone())
    }

    /// Upper bound of the isolating interval.
    pub fn upper(&self) -> Option<BigRational> {
        self.interval().map(|i| i.upper().clone())
    }

    /// Defining polynomial, if interval-represented.
    pub fn ir_polynomial(&self) -> Option<UnivariatePolynomial> {
        match self.snapshot() {
            Repr::Interval(ir) => Some(ir.borrow().polynomial().clone()),
            _ => None,
        }
    }

    /// The Thom encoding, if Thom-encoded.
    pub fn thom_encoding(&self) -> Option<Rc<ThomEncoding>> {
        match self.snapshot() {
            Repr::Thom(te) => Some(te),
            _ => None,
        }
    }

    /// Sign of the number.
    pub fn sgn(&self) -> Sign {
        let sign = match self.snapshot() {
            Repr::Numeric(v) => Sign::of(&v),
            Repr::Interval(ir) => {
                let mut ir = ir.borrow_mut();
                if ir.refine_avoiding(&BigRational::zero()) {
                    ir.interval().sgn().unwrap_or(Sign::Zero)
                } else {
                    Sign::Zero
                }
            }
            Repr::Thom(te) => te.sgn_repr_num(),
        };
        self.simplify();
        sign
    }

    /// Sign of `p` evaluated at the number.
    pub fn sgn_poly(&self, p: &UnivariatePolynomial) -> Sign {
        let sign = match self.snapshot() {
            Repr::Numeric(v) => p.sgn_at(&v),
            Repr::Interval(ir) => ir.borrow_mut().sgn(p),
            Repr::Thom(te) => te.sign_on_polynomial(p),
        };
        self.simplify();
        sign
    }

    /// Check whether the number is a root of `p`.
    pub fn is_root_of(&self, p: &UnivariatePolynomial) -> bool {
        match self.snapshot() {
            Repr::Numeric(v) => p.is_root(&v),
            Repr::Interval(ir) => ir.borrow().contains_root_of(p),
            Repr::Thom(te) => te.sign_on_polynomial(p).is_zero(),
        }
    }

    /// Check whether the number lies in `interval`, refining toward its
    /// bounds as needed.
    pub fn contained_in(&self, interval: &Interval) -> bool {
        let result = match self.snapshot() {
            Repr::Numeric(v) => interval.contains(&v),
            Repr::Interval(ir) => {
                let bounds = [
                    (interval.lower_type(), interval.lower()),
                    (interval.upper_type(), interval.upper()),
                ];
                for (ty, bound) in bounds {
                    if ty != BoundType::Infty && ir.borrow().interval().contains(bound) {
                        ir.borrow_mut().refine_avoiding(bound);
                    }
                }
                let ir = ir.borrow();
                match ir.point_value() {
                    Some(v) => interval.contains(v),
                    None => interval.contains_interval(ir.interval()),
                }
            }
            Repr::Thom(te) => {
                let above_lower = match interval.lower_type() {
                    BoundType::Infty => true,
                    BoundType::Strict => te.cmp_rational(interval.lower()) == Ordering::Greater,
                    BoundType::Weak => te.cmp_rational(interval.lower()) != Ordering::Less,
                };
                let below_upper = match interval.upper_type() {
                    BoundType::Infty => true,
                    BoundType::Strict => te.cmp_rational(interval.upper()) == Ordering::Less,
                    BoundType::Weak => te.cmp_rational(interval.upper()) != Ordering::Greater,
                };
                above_lower && below_upper
            }
        };
        self.simplify();
        result
    }

    /// Bisect the isolating interval once.
    pub fn refine(&self) {
        match self.snapshot() {
            Repr::Numeric(_) => {}
            Repr::Interval(ir) => ir.borrow_mut().refine(),
            Repr::Thom(te) => te.locator().borrow_mut().refine(),
        }
        self.simplify();
    }

    /// Refine until the interval excludes `q`; `false` iff the number is `q`.
    pub fn refine_avoiding(&self, q: &BigRational) -> bool {
        let excluded = match self.snapshot() {
            Repr::Numeric(v) => &v != q,
            Repr::Interval(ir) => ir.borrow_mut().refine_avoiding(q),
            Repr::Thom(te) => te.locator().borrow_mut().refine_avoiding(q),
        };
        self.simplify();
        excluded
    }

    /// Refine until the interval holds no integer or the number is integral.
    pub fn refine_to_integrality(&self) {
        match self.snapshot() {
            Repr::Numeric(_) => {}
            Repr::Interval(ir) => ir.borrow_mut().refine_to_integrality(),
            Repr::Thom(te) => te.locator().borrow_mut().refine_to_integrality(),
        }
        self.simplify();
    }

    /// The integer part `floor(x)`.
    pub fn floor(&self) -> BigRational {
        self.refine_to_integrality();
        let lower_floor = |ir: &IntervalRepr| ir.interval().lower().floor();
        match self.snapshot() {
            Repr::Numeric(v) => v.floor(),
            Repr::Interval(ir) => lower_floor(&ir.borrow()),
            Repr::Thom(te) => lower_floor(&te.locator().borrow()),
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        let result = match self.snapshot() {
            Repr::Numeric(v) => Self::from_rational(v.abs()),
            Repr::Interval(ir) => {
                let mut ir = ir.borrow_mut();
                if !ir.refine_avoiding(&BigRational::zero()) {
                    Self::from_rational(BigRational::zero())
                } else if ir.interval().is_positive() {
                    drop(ir);
                    self.clone()
                } else {
                    let negated = ir.polynomial().negate_variable().normalized();
                    Self::from_shared(share(IntervalRepr::new(negated, ir.interval().negate())))
                }
            }
            Repr::Thom(te) => {
                if te.sgn_repr_num() == Sign::Negative {
                    Self::from_thom(te.negate())
                } else {
                    self.clone()
                }
            }
        };
        self.simplify();
        result.with_root_flag(self.is_root)
    }

    /// The same number over another polynomial variable.
    ///
    /// Interval numbers get a fresh, unshared cache.
    pub fn change_variable(&self, var: Var) -> Self {
        let result = match self.snapshot() {
            Repr::Numeric(_) => self.clone(),
            Repr::Interval(ir) => {
                let ir = ir.borrow();
                Self::from_shared(share(IntervalRepr::new(
                    ir.polynomial().replace_variable(var),
                    ir.interval().clone(),
                )))
            }
            Repr::Thom(te) => Self::from_thom(te.change_variable(var)),
        };
        result.with_root_flag(self.is_root)
    }

    /// Size estimate in bits.
    pub fn size(&self) -> usize {
        match self.snapshot() {
            Repr::Numeric(v) => bit_size(&v),
            Repr::Interval(ir) => {
                let ir = ir.borrow();
                let interval = ir.interval();
                bit_size(interval.lower()) + bit_size(interval.upper()) * ir.polynomial().degree()
            }
            Repr::Thom(te) => te.size(),
        }
    }
}

impl Default for RealAlgebraicNumber {
    fn default() -> Self {
        Self::from_integer(0)
    }
}

impl From<BigRational> for RealAlgebraicNumber {
    fn from(value: BigRational) -> Self {
        Self::from_rational(value)
    }
}

impl From<i64> for RealAlgebraicNumber {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

/// Hashes the integer part, which equal numbers share whatever their
/// representation. Hashing may refine the interval.
impl Hash for RealAlgebraicNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.floor().hash(state);
    }
}

impl fmt::Display for RealAlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = if self.is_root { " R" } else { "" };
        match self.snapshot() {
            Repr::Numeric(v) => write!(f, "(NR {}{})", v, root),
            Repr::Interval(ir) => write!(f, "(IR {}{})", ir.borrow(), root),
            Repr::Thom(te) => write!(f, "(TE {}{})", te, root),
        }
    }
}
