//! Thom encodings.
//!
//! By Thom's lemma, a real root of a square-free polynomial `p` of degree `d`
//! is determined by the signs of `p', p'', ..., p^(d-1)` at it. An encoding
//! keeps that sign condition together with an interval locator used for
//! comparisons against rationals and interval-represented numbers.

use crate::error::{RanError, RanResult};
use crate::interval_repr::{share, IntervalRepr, SharedRepr};
use crate::ordering::{cmp_repr_rational, cmp_reprs};
use num_rational::BigRational;
use num_traits::Zero;
use ralg_math::{bit_size, Sign, UnivariatePolynomial, Var};
use std::cmp::Ordering;
use std::fmt;

/// A root of a polynomial identified by derivative signs.
#[derive(Debug, Clone)]
pub struct ThomEncoding {
    /// Monic square-free polynomial.
    polynomial: UnivariatePolynomial,
    /// `signs[i]` is the sign of the `(i + 1)`-th derivative at the root.
    signs: Vec<Sign>,
    locator: SharedRepr,
}

impl ThomEncoding {
    fn from_locator(polynomial: UnivariatePolynomial, locator: IntervalRepr) -> Self {
        let mut locator = locator;
        let signs = (1..polynomial.degree())
            .map(|k| locator.sgn(&polynomial.nth_derivative(k)))
            .collect();
        Self {
            polynomial,
            signs,
            locator: share(locator),
        }
    }

    /// Encodings of all real roots of `p`, in ascending order.
    pub fn realize_all(p: &UnivariatePolynomial) -> RanResult<Vec<Self>> {
        if p.is_constant() {
            return Err(RanError::DegenerateRootPolynomial);
        }
        let p = p.square_free();
        Ok(p.isolate_real_roots(true)
            .into_iter()
            .map(|interval| Self::from_locator(p.clone(), IntervalRepr::new(p.clone(), interval)))
            .collect())
    }

    /// The root of `p` with the given derivative signs.
    ///
    /// # Errors
    ///
    /// [`RanError::InvalidThomEncoding`] if no root of `p` realizes `signs`.
    pub fn new(p: &UnivariatePolynomial, signs: &[Sign]) -> RanResult<Self> {
        Self::realize_all(p)?
            .into_iter()
            .find(|te| te.signs == signs)
            .ok_or(RanError::InvalidThomEncoding)
    }

    /// The defining polynomial.
    pub fn polynomial(&self) -> &UnivariatePolynomial {
        &self.polynomial
    }

    /// The sign condition on the derivatives.
    pub fn signs(&self) -> &[Sign] {
        &self.signs
    }

    pub(crate) fn locator(&self) -> &SharedRepr {
        &self.locator
    }

    /// Sign of the root itself.
    pub fn sgn_repr_num(&self) -> Sign {
        let mut locator = self.locator.borrow_mut();
        if locator.refine_avoiding(&BigRational::zero()) {
            locator.interval().sgn().unwrap_or(Sign::Zero)
        } else {
            Sign::Zero
        }
    }

    /// Check whether the root is zero.
    pub fn is_zero(&self) -> bool {
        self.polynomial.is_root(&BigRational::zero()) && self.sgn_repr_num().is_zero()
    }

    /// Sign of `q` at the root.
    pub fn sign_on_polynomial(&self, q: &UnivariatePolynomial) -> Sign {
        self.locator.borrow_mut().sgn(q)
    }

    /// Order of the root relative to a rational.
    pub fn cmp_rational(&self, q: &BigRational) -> Ordering {
        cmp_repr_rational(&self.locator, q)
    }

    /// Order of two encoded roots.
    ///
    /// Over the same polynomial, let `k` be the highest derivative whose
    /// signs differ. `p^(k+1)` has a common nonzero sign at both roots and
    /// `p^(k)` is monotone between them, which decides the order.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.polynomial.coeffs() != other.polynomial.coeffs() {
            return cmp_reprs(&self.locator, &other.locator);
        }
        for k in (0..self.signs.len()).rev() {
            if self.signs[k] != other.signs[k] {
                // the leading derivative of a monic polynomial is positive
                let above = self.signs.get(k + 1).copied().unwrap_or(Sign::Positive);
                let ord = self.signs[k].cmp(&other.signs[k]);
                return if above == Sign::Negative {
                    ord.reverse()
                } else {
                    ord
                };
            }
        }
        Ordering::Equal
    }

    /// The encoding of the negated root, over `p(-x)` made monic.
    pub fn negate(&self) -> Self {
        let polynomial = self.polynomial.negate_variable().normalized();
        let flip_all = self.polynomial.degree() % 2 == 1;
        let signs = self
            .signs
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                // derivative i + 1 picks up (-1)^(i + 1), normalization (-1)^d
                if (i % 2 == 0) != flip_all {
                    -s
                } else {
                    s
                }
            })
            .collect();
        let interval = self.locator.borrow().interval().negate();
        Self {
            locator: share(IntervalRepr::new(polynomial.clone(), interval)),
            polynomial,
            signs,
        }
    }

    /// The same encoding over another variable.
    pub fn change_variable(&self, var: Var) -> Self {
        let polynomial = self.polynomial.replace_variable(var);
        let interval = self.locator.borrow().interval().clone();
        Self {
            locator: share(IntervalRepr::new(polynomial.clone(), interval)),
            polynomial,
            signs: self.signs.clone(),
        }
    }

    /// Size estimate in bits.
    pub fn size(&self) -> usize {
        self.polynomial.coeffs().iter().map(bit_size).sum::<usize>() + self.signs.len()
    }
}

impl fmt::Display for ThomEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.polynomial)?;
        for (i, s) in self.signs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", s)?;
        }
        write!(f, "]")
    }
}
