//! Multivariate polynomials over the rationals.
//!
//! Polynomials are sparse sums of terms kept in descending lexicographic
//! monomial order, so structural equality is semantic equality. This is the
//! representation used for root expressions: a polynomial in ordinary
//! variables plus one distinguished root variable.
//!
//! Reference: Z3's `math/polynomial/` directory.

use crate::error::{MathError, MathResult};
use crate::rational::{pow as rat_pow, rat};
use crate::univariate::UnivariatePolynomial;
use crate::var::Var;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Power of a variable (variable, exponent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarPower {
    /// The variable identifier.
    pub var: Var,
    /// The exponent (power) of the variable.
    pub power: u32,
}

impl VarPower {
    /// Create a new variable power.
    #[inline]
    pub fn new(var: Var, power: u32) -> Self {
        Self { var, power }
    }
}

/// A monomial is a product of variables with exponents.
/// Represented as a sorted list of (variable, power) pairs.
/// The unit monomial (1) is represented as an empty list.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Monomial {
    /// Variables with their exponents, sorted by variable index.
    vars: SmallVec<[VarPower; 4]>,
    /// Cached total degree.
    total_degree: u32,
}

impl Monomial {
    /// Create the unit monomial (1).
    #[inline]
    pub fn unit() -> Self {
        Self {
            vars: SmallVec::new(),
            total_degree: 0,
        }
    }

    /// Create a monomial from a single variable with power 1.
    #[inline]
    pub fn from_var(var: Var) -> Self {
        Self::from_var_power(var, 1)
    }

    /// Create a monomial from a single variable with a given power.
    pub fn from_var_power(var: Var, power: u32) -> Self {
        if power == 0 {
            return Self::unit();
        }
        let mut vars = SmallVec::new();
        vars.push(VarPower::new(var, power));
        Self {
            vars,
            total_degree: power,
        }
    }

    /// Create a monomial from (variable, power) pairs in any order.
    ///
    /// Repeated variables have their powers added; zero powers are dropped.
    pub fn from_powers(powers: impl IntoIterator<Item = (Var, u32)>) -> Self {
        let mut vars: SmallVec<[VarPower; 4]> = powers
            .into_iter()
            .filter(|&(_, power)| power > 0)
            .map(|(var, power)| VarPower::new(var, power))
            .collect();
        vars.sort_unstable_by_key(|vp| vp.var);
        vars.dedup_by(|next, kept| {
            let same = next.var == kept.var;
            if same {
                kept.power += next.power;
            }
            same
        });
        let total_degree = vars.iter().map(|vp| vp.power).sum();
        Self { vars, total_degree }
    }

    /// Returns true if this is the unit monomial.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns the total degree of the monomial.
    #[inline]
    pub fn total_degree(&self) -> u32 {
        self.total_degree
    }

    /// Returns the variable-power pairs.
    #[inline]
    pub fn vars(&self) -> &[VarPower] {
        &self.vars
    }

    /// Returns the degree of a specific variable in this monomial.
    pub fn degree(&self, var: Var) -> u32 {
        self.vars
            .iter()
            .find(|vp| vp.var == var)
            .map(|vp| vp.power)
            .unwrap_or(0)
    }

    /// This monomial with `var` removed.
    pub fn without(&self, var: Var) -> Monomial {
        Monomial::from_powers(
            self.vars
                .iter()
                .filter(|vp| vp.var != var)
                .map(|vp| (vp.var, vp.power)),
        )
    }

    /// This monomial with `from` renamed to `to`.
    pub fn rename(&self, from: Var, to: Var) -> Monomial {
        Monomial::from_powers(self.vars.iter().map(|vp| {
            let var = if vp.var == from { to } else { vp.var };
            (var, vp.power)
        }))
    }

    /// Product of two monomials.
    pub fn mul(&self, other: &Monomial) -> Monomial {
        Monomial::from_powers(
            self.vars
                .iter()
                .chain(&other.vars)
                .map(|vp| (vp.var, vp.power)),
        )
    }

    /// The quotient `self / other`, if `other` divides `self`.
    pub fn div(&self, other: &Monomial) -> Option<Monomial> {
        if other.vars.iter().any(|vp| self.degree(vp.var) < vp.power) {
            return None;
        }
        Some(Monomial::from_powers(
            self.vars
                .iter()
                .map(|vp| (vp.var, vp.power - other.degree(vp.var))),
        ))
    }

    /// Lexicographic order; smaller variable ids are more significant.
    pub fn lex_cmp(&self, other: &Monomial) -> Ordering {
        self.vars
            .iter()
            .zip(&other.vars)
            .map(|(a, b)| b.var.cmp(&a.var).then(a.power.cmp(&b.power)))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| self.vars.len().cmp(&other.vars.len()))
    }
}

impl fmt::Display for VarPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.power {
            1 => write!(f, "x{}", self.var),
            power => write!(f, "x{}^{}", self.var, power),
        }
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.vars.split_first() else {
            return f.write_str("1");
        };
        write!(f, "{first}")?;
        rest.iter().try_for_each(|vp| write!(f, "*{vp}"))
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
/// A term is a coefficient multiplied by a monomial.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    /// The coefficient of the term.
    pub coeff: BigRational,
    /// The monomial part of the term.
    pub monomial: Monomial,
}

impl Term {
    /// Create a new term.
    #[inline]
    pub fn new(coeff: BigRational, monomial: Monomial) -> Self {
        Self { coeff, monomial }
    }

    /// Create a constant term.
    #[inline]
    pub fn constant(c: BigRational) -> Self {
        Self::new(c, Monomial::unit())
    }

    /// Check if this term is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }
}

/// A multivariate polynomial over rationals.
/// Represented as a sum of terms, sorted descending in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Create the zero polynomial.
    #[inline]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Create the one polynomial.
    #[inline]
    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    /// Create a constant polynomial.
    pub fn constant(c: BigRational) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self {
                terms: vec![Term::constant(c)],
            }
        }
    }

    /// Create a polynomial from a single variable.
    pub fn from_var(var: Var) -> Self {
        Self::from_var_power(var, 1)
    }

    /// Create a polynomial x^k.
    pub fn from_var_power(var: Var, power: u32) -> Self {
        Self {
            terms: vec![Term::new(
                BigRational::one(),
                Monomial::from_var_power(var, power),
            )],
        }
    }

    /// Create a polynomial from terms. Normalizes and combines like terms.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut poly = Self {
            terms: terms.into_iter().filter(|t| !t.is_zero()).collect(),
        };
        poly.normalize();
        poly
    }

    /// Create a polynomial from integer coefficients.
    pub fn from_coeffs_int(coeffs: &[(i64, &[(Var, u32)])]) -> Self {
        Self::from_terms(coeffs.iter().map(|(c, powers)| {
            Term::new(rat(*c), Monomial::from_powers(powers.iter().copied()))
        }))
    }

    /// Create a univariate polynomial from coefficients.
    /// `coeffs[i]` is the coefficient of x^i.
    pub fn univariate(var: Var, coeffs: &[BigRational]) -> Self {
        Self::from_terms(
            coeffs
                .iter()
                .enumerate()
                .map(|(i, c)| Term::new(c.clone(), Monomial::from_var_power(var, i as u32))),
        )
    }

    /// Lift a dense univariate polynomial.
    pub fn from_univariate(p: &UnivariatePolynomial) -> Self {
        Self::univariate(p.var(), p.coeffs())
    }

    /// Sort terms and combine like terms.
    fn normalize(&mut self) {
        self.terms
            .sort_by(|a, b| b.monomial.lex_cmp(&a.monomial));

        let mut merged: Vec<Term> = Vec::with_capacity(self.terms.len());
        for term in self.terms.drain(..) {
            match merged.last_mut() {
                Some(last) if last.monomial == term.monomial => last.coeff += term.coeff,
                _ => merged.push(term),
            }
        }
        merged.retain(|t| !t.coeff.is_zero());
        self.terms = merged;
    }

    /// Check if the polynomial is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check if the polynomial mentions no variable (zero included).
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|t| t.monomial.is_unit())
    }

    /// The constant term of the polynomial.
    pub fn constant_value(&self) -> BigRational {
        self.terms
            .iter()
            .find(|t| t.monomial.is_unit())
            .map(|t| t.coeff.clone())
            .unwrap_or_else(BigRational::zero)
    }

    /// Get the terms.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Get the degree with respect to a specific variable.
    pub fn degree(&self, var: Var) -> u32 {
        self.terms
            .iter()
            .map(|t| t.monomial.degree(var))
            .max()
            .unwrap_or(0)
    }

    /// Get the total degree of the polynomial.
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|t| t.monomial.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Get all variables in the polynomial, ascending.
    pub fn vars(&self) -> Vec<Var> {
        let mut vars: Vec<Var> = self
            .terms
            .iter()
            .flat_map(|t| t.monomial.vars().iter().map(|vp| vp.var))
            .collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }

    /// Check if the polynomial mentions at most one variable.
    pub fn is_univariate(&self) -> bool {
        self.vars().len() <= 1
    }

    /// Check if the polynomial mentions `var`.
    pub fn has_var(&self, var: Var) -> bool {
        self.terms.iter().any(|t| t.monomial.degree(var) > 0)
    }

    /// Get the coefficient polynomial for x^k.
    /// For polynomial p(y_1, ..., y_n, x), returns coefficient of x^k.
    pub fn coeff(&self, var: Var, k: u32) -> Polynomial {
        Polynomial::from_terms(
            self.terms
                .iter()
                .filter(|t| t.monomial.degree(var) == k)
                .map(|t| Term::new(t.coeff.clone(), t.monomial.without(var))),
        )
    }

    /// All coefficient polynomials with respect to `var`; index k holds the
    /// coefficient of x^k.
    pub fn coefficients(&self, var: Var) -> Vec<Polynomial> {
        let deg = self.degree(var) as usize;
        let mut buckets: Vec<Vec<Term>> = vec![Vec::new(); deg + 1];
        for t in &self.terms {
            let d = t.monomial.degree(var) as usize;
            buckets[d].push(Term::new(t.coeff.clone(), t.monomial.without(var)));
        }
        buckets.into_iter().map(Polynomial::from_terms).collect()
    }

    /// Get the leading coefficient with respect to variable x.
    pub fn leading_coeff_wrt(&self, var: Var) -> Polynomial {
        self.coeff(var, self.degree(var))
    }

    /// Negate the polynomial.
    pub fn neg(&self) -> Polynomial {
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(-t.coeff.clone(), t.monomial.clone()))
                .collect(),
        }
    }

    /// Add two polynomials.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        Polynomial::from_terms(self.terms.iter().chain(other.terms.iter()).cloned())
    }

    /// Subtract two polynomials.
    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        self.add(&other.neg())
    }

    /// Multiply by a rational constant.
    pub fn scale(&self, c: &BigRational) -> Polynomial {
        if c.is_zero() {
            return Polynomial::zero();
        }
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(&t.coeff * c, t.monomial.clone()))
                .collect(),
        }
    }

    /// Multiply two polynomials.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let mut acc: FxHashMap<Monomial, BigRational> = FxHashMap::default();
        for a in &self.terms {
            for b in &other.terms {
                let entry = acc
                    .entry(a.monomial.mul(&b.monomial))
                    .or_insert_with(BigRational::zero);
                *entry += &a.coeff * &b.coeff;
            }
        }
        Polynomial::from_terms(acc.into_iter().map(|(m, c)| Term::new(c, m)))
    }

    /// Multiply by a single term.
    pub fn mul_term(&self, term: &Term) -> Polynomial {
        if term.is_zero() {
            return Polynomial::zero();
        }
        Polynomial::from_terms(
            self.terms
                .iter()
                .map(|t| Term::new(&t.coeff * &term.coeff, t.monomial.mul(&term.monomial))),
        )
    }

    /// Raise to a non-negative power.
    pub fn pow(&self, k: u32) -> Polynomial {
        let mut result = Polynomial::one();
        let mut base = self.clone();
        let mut e = k;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base);
            }
        }
        result
    }

    /// Partial derivative with respect to `var`.
    pub fn derivative(&self, var: Var) -> Polynomial {
        Polynomial::from_terms(self.terms.iter().filter_map(|t| {
            let d = t.monomial.degree(var);
            if d == 0 {
                return None;
            }
            let powers = t.monomial.vars().iter().map(|vp| {
                if vp.var == var {
                    (vp.var, vp.power - 1)
                } else {
                    (vp.var, vp.power)
                }
            });
            Some(Term::new(
                &t.coeff * BigRational::from_integer(BigInt::from(d)),
                Monomial::from_powers(powers),
            ))
        }))
    }

    /// Substitute a polynomial for a variable.
    pub fn substitute(&self, var: Var, replacement: &Polynomial) -> Polynomial {
        let coeffs = self.coefficients(var);
        // Horner scheme in the substituted variable
        let mut result = Polynomial::zero();
        for c in coeffs.iter().rev() {
            result = result.mul(replacement).add(c);
        }
        result
    }

    /// Substitute a polynomial for a variable, in place.
    pub fn substitute_in(&mut self, var: Var, replacement: &Polynomial) {
        *self = self.substitute(var, replacement);
    }

    /// Rename variable `from` to `to`.
    pub fn rename(&self, from: Var, to: Var) -> Polynomial {
        if from == to {
            return self.clone();
        }
        Polynomial::from_terms(
            self.terms
                .iter()
                .map(|t| Term::new(t.coeff.clone(), t.monomial.rename(from, to))),
        )
    }

    /// Evaluate the polynomial at a point for one variable.
    pub fn eval_at(&self, var: Var, value: &BigRational) -> Polynomial {
        Polynomial::from_terms(self.terms.iter().map(|t| {
            let d = t.monomial.degree(var);
            if d == 0 {
                t.clone()
            } else {
                Term::new(&t.coeff * rat_pow(value, d), t.monomial.without(var))
            }
        }))
    }

    /// Enclose the range of the polynomial over a box of closed bounds.
    ///
    /// Returns `None` if a variable of the polynomial has no bounds in `boxes`.
    pub fn eval_interval(
        &self,
        boxes: &FxHashMap<Var, (BigRational, BigRational)>,
    ) -> Option<(BigRational, BigRational)> {
        let mut lo = BigRational::zero();
        let mut hi = BigRational::zero();
        for t in &self.terms {
            let mut range = (BigRational::one(), BigRational::one());
            for vp in t.monomial.vars() {
                let (a, b) = boxes.get(&vp.var)?;
                let factor = pow_range(a, b, vp.power);
                range = mul_range(&range, &factor);
            }
            let (a, b) = if t.coeff.is_negative() {
                (&range.1 * &t.coeff, &range.0 * &t.coeff)
            } else {
                (&range.0 * &t.coeff, &range.1 * &t.coeff)
            };
            lo += a;
            hi += b;
        }
        Some((lo, hi))
    }

    /// Divide by `divisor`, reducing leading terms in lexicographic order.
    /// Returns `(quotient, remainder)`; the remainder is zero when `divisor`
    /// divides `self` exactly.
    pub fn div_rem(&self, divisor: &Polynomial) -> MathResult<(Polynomial, Polynomial)> {
        let lead = divisor.terms.first().ok_or(MathError::DivisionByZero)?;
        let mut quotient: Vec<Term> = Vec::new();
        let mut remainder: Vec<Term> = Vec::new();
        let mut p = self.clone();

        while let Some(top) = p.terms.first().cloned() {
            match top.monomial.div(&lead.monomial) {
                Some(m) => {
                    let t = Term::new(&top.coeff / &lead.coeff, m);
                    p = p.sub(&divisor.mul_term(&t));
                    quotient.push(t);
                }
                None => {
                    p.terms.remove(0);
                    remainder.push(top);
                }
            }
        }

        Ok((
            Polynomial::from_terms(quotient),
            Polynomial::from_terms(remainder),
        ))
    }

    /// Exact quotient, `None` if `divisor` does not divide `self`.
    pub fn div_exact(&self, divisor: &Polynomial) -> Option<Polynomial> {
        match self.div_rem(divisor) {
            Ok((q, r)) if r.is_zero() => Some(q),
            _ => None,
        }
    }

    /// Resultant with respect to `var`.
    ///
    /// Computed as the determinant of the Sylvester matrix using
    /// fraction-free (Bareiss) elimination, so it is exact for polynomials in
    /// any number of other variables.
    pub fn resultant(&self, other: &Polynomial, var: Var) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let m = self.degree(var) as usize;
        let n = other.degree(var) as usize;
        if m == 0 {
            return self.pow(n as u32);
        }
        if n == 0 {
            return other.pow(m as u32);
        }

        let f = self.coefficients(var);
        let g = other.coefficients(var);
        let size = m + n;
        let mut matrix = vec![vec![Polynomial::zero(); size]; size];
        for row in 0..n {
            for (k, c) in f.iter().rev().enumerate() {
                matrix[row][row + k] = c.clone();
            }
        }
        for row in 0..m {
            for (k, c) in g.iter().rev().enumerate() {
                matrix[n + row][row + k] = c.clone();
            }
        }
        bareiss_determinant(matrix)
    }

    /// View as a dense univariate polynomial in `var`.
    pub fn to_univariate(&self, var: Var) -> MathResult<UnivariatePolynomial> {
        if let Some(&found) = self.vars().iter().find(|&&v| v != var) {
            return Err(MathError::NotUnivariate {
                expected: var,
                found,
            });
        }
        let coeffs = self
            .coefficients(var)
            .iter()
            .map(Polynomial::constant_value)
            .collect();
        Ok(UnivariatePolynomial::new(var, coeffs))
    }
}

/// Determinant of a square polynomial matrix by Bareiss elimination.
fn bareiss_determinant(mut m: Vec<Vec<Polynomial>>) -> Polynomial {
    let n = m.len();
    if n == 0 {
        return Polynomial::one();
    }
    let mut negate = false;
    let mut prev = Polynomial::one();

    for k in 0..n - 1 {
        if m[k][k].is_zero() {
            match (k + 1..n).find(|&i| !m[i][k].is_zero()) {
                Some(i) => {
                    m.swap(k, i);
                    negate = !negate;
                }
                None => return Polynomial::zero(),
            }
        }
        for i in k + 1..n {
            for j in k + 1..n {
                let num = m[k][k].mul(&m[i][j]).sub(&m[i][k].mul(&m[k][j]));
                // exact by Sylvester's identity
                let (q, r) = num
                    .div_rem(&prev)
                    .unwrap_or_else(|_| (Polynomial::zero(), Polynomial::zero()));
                debug_assert!(r.is_zero(), "Bareiss division must be exact");
                m[i][j] = q;
            }
        }
        prev = m[k][k].clone();
    }

    let det = m[n - 1][n - 1].clone();
    if negate {
        det.neg()
    } else {
        det
    }
}

fn mul_range(
    a: &(BigRational, BigRational),
    b: &(BigRational, BigRational),
) -> (BigRational, BigRational) {
    let products = [&a.0 * &b.0, &a.0 * &b.1, &a.1 * &b.0, &a.1 * &b.1];
    let mut lo = products[0].clone();
    let mut hi = products[0].clone();
    for p in &products[1..] {
        if p < &lo {
            lo = p.clone();
        }
        if p > &hi {
            hi = p.clone();
        }
    }
    (lo, hi)
}

fn pow_range(a: &BigRational, b: &BigRational, k: u32) -> (BigRational, BigRational) {
    let pa = rat_pow(a, k);
    let pb = rat_pow(b, k);
    if k % 2 == 1 {
        (pa, pb)
    } else if !a.is_negative() {
        (pa, pb)
    } else if !b.is_positive() {
        (pb, pa)
    } else {
        (BigRational::zero(), if pa > pb { pa } else { pb })
    }
}

impl PartialOrd for Polynomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Polynomial {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.terms.iter().zip(other.terms.iter()) {
            match a.monomial.lex_cmp(&b.monomial) {
                Ordering::Equal => {}
                ord => return ord,
            }
            match a.coeff.cmp(&b.coeff) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        self.terms.len().cmp(&other.terms.len())
    }
}

fn fmt_term(f: &mut fmt::Formatter<'_>, coeff: &BigRational, monomial: &Monomial) -> fmt::Result {
    if monomial.is_unit() {
        write!(f, "{}", coeff)
    } else if coeff.is_one() {
        write!(f, "{}", monomial)
    } else {
        write!(f, "{}*{}", coeff, monomial)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, t) in self.terms.iter().enumerate() {
            let negative = t.coeff.is_negative();
            match (i, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }
            fmt_term(f, &t.coeff.abs(), &t.monomial)?;
        }
        Ok(())
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        Polynomial::add(self, other)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &Polynomial) -> Polynomial {
        Polynomial::sub(self, other)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        Polynomial::mul(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::rat_frac;

    // x0^2 - 2
    fn sqrt2_poly(var: Var) -> Polynomial {
        Polynomial::from_coeffs_int(&[(1, &[(var, 2)]), (-2, &[])])
    }

    #[test]
    fn test_monomial_arithmetic() {
        let m = Monomial::from_powers([(2, 1), (0, 2), (2, 2)]);
        assert_eq!(m.to_string(), "x0^2*x2^3");
        assert_eq!(m.total_degree(), 5);

        let n = Monomial::from_var(0);
        assert_eq!(m.mul(&n).to_string(), "x0^3*x2^3");
        assert_eq!(m.div(&n).map(|q| q.to_string()), Some("x0*x2^3".to_string()));
        assert_eq!(m.div(&Monomial::from_var(1)), None);
        assert_eq!(n.div(&m), None);
        assert!(m.div(&m).is_some_and(|q| q.is_unit()));
        assert_eq!(Monomial::unit().to_string(), "1");
    }

    #[test]
    fn test_monomial_lex_order() {
        let x0 = Monomial::from_var(0);
        let x1_cubed = Monomial::from_var_power(1, 3);
        let x0_x1 = Monomial::from_powers([(0, 1), (1, 1)]);
        assert_eq!(x0.lex_cmp(&x1_cubed), Ordering::Greater);
        assert_eq!(x0_x1.lex_cmp(&x0), Ordering::Greater);
        assert_eq!(Monomial::unit().lex_cmp(&x0), Ordering::Less);
        assert_eq!(x0.lex_cmp(&Monomial::from_var(0)), Ordering::Equal);
    }

    #[test]
    fn test_normalize_combines_terms() {
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (2, &[(0, 1)]), (-3, &[(0, 1)])]);
        assert!(p.is_zero());
        let q = Polynomial::from_coeffs_int(&[(3, &[]), (1, &[(0, 2)]), (2, &[(0, 1)])]);
        assert_eq!(q.to_string(), "x0^2 + 2*x0 + 3");
    }

    #[test]
    fn test_display_signs() {
        assert_eq!(sqrt2_poly(0).to_string(), "x0^2 - 2");
        let p = Polynomial::from_coeffs_int(&[(-1, &[(1, 1)]), (1, &[])]);
        assert_eq!(p.to_string(), "-x1 + 1");
        assert_eq!(Polynomial::zero().to_string(), "0");
    }

    #[test]
    fn test_substitute_and_rename() {
        // x0^2 - 2 with x0 := x1 + 1 gives x1^2 + 2*x1 - 1
        let p = sqrt2_poly(0);
        let rep = Polynomial::from_coeffs_int(&[(1, &[(1, 1)]), (1, &[])]);
        let q = p.substitute(0, &rep);
        assert_eq!(
            q,
            Polynomial::from_coeffs_int(&[(1, &[(1, 2)]), (2, &[(1, 1)]), (-1, &[])])
        );
        assert_eq!(p.rename(0, 5), sqrt2_poly(5));

        let mut r = p.clone();
        r.substitute_in(0, &Polynomial::constant(rat(3)));
        assert_eq!(r, Polynomial::constant(rat(7)));
    }

    #[test]
    fn test_coefficients() {
        // x0^2*x1 + 3*x1 - x0
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 2), (1, 1)]), (3, &[(1, 1)]), (-1, &[(0, 1)])]);
        let cs = p.coefficients(0);
        assert_eq!(cs.len(), 3);
        assert_eq!(cs[0], Polynomial::from_coeffs_int(&[(3, &[(1, 1)])]));
        assert_eq!(cs[1], Polynomial::constant(rat(-1)));
        assert_eq!(cs[2], Polynomial::from_var(1));
        assert_eq!(p.leading_coeff_wrt(0), Polynomial::from_var(1));
    }

    #[test]
    fn test_div_exact() {
        // (x0 - x1) * (x0 + x1) / (x0 + x1)
        let a = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (-1, &[(1, 1)])]);
        let b = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (1, &[(1, 1)])]);
        let prod = &a * &b;
        assert_eq!(prod.div_exact(&b), Some(a.clone()));
        assert_eq!(sqrt2_poly(0).div_exact(&b), None);
        assert!(prod.div_rem(&Polynomial::zero()).is_err());
    }

    #[test]
    fn test_resultant_eliminates() {
        // res_x0(x0^2 - 2, x1 - x0) = x1^2 - 2
        let f = sqrt2_poly(0);
        let g = Polynomial::from_coeffs_int(&[(1, &[(1, 1)]), (-1, &[(0, 1)])]);
        let r = f.resultant(&g, 0);
        assert_eq!(r, sqrt2_poly(1));
    }

    #[test]
    fn test_resultant_common_root_vanishes() {
        // x0^2 - 1 and x0 - 1 share the root 1
        let f = Polynomial::from_coeffs_int(&[(1, &[(0, 2)]), (-1, &[])]);
        let g = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (-1, &[])]);
        assert!(f.resultant(&g, 0).is_zero());
        // x0^2 + 1 and x0 - 1 do not
        let h = Polynomial::from_coeffs_int(&[(1, &[(0, 2)]), (1, &[])]);
        assert_eq!(h.resultant(&g, 0), Polynomial::constant(rat(2)));
    }

    #[test]
    fn test_eval_interval_encloses() {
        // x0^2 - x0 over [-1, 2] is enclosed by [0 - 2, 4 + 1]
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 2)]), (-1, &[(0, 1)])]);
        let mut boxes = FxHashMap::default();
        boxes.insert(0, (rat(-1), rat(2)));
        let (lo, hi) = p.eval_interval(&boxes).expect("all variables bounded");
        assert_eq!(lo, rat(-2));
        assert_eq!(hi, rat(5));
        assert!(Polynomial::from_var(3).eval_interval(&boxes).is_none());
    }

    #[test]
    fn test_eval_at_and_univariate_view() {
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 1), (1, 1)]), (1, &[(1, 2)])]);
        let q = p.eval_at(0, &rat_frac(1, 2));
        let u = q.to_univariate(1).expect("univariate in x1");
        assert_eq!(u.degree(), 2);
        assert_eq!(u.eval(&rat(2)), rat(5));
        assert!(p.to_univariate(1).is_err());
    }

    #[test]
    fn test_derivative() {
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 3), (1, 1)]), (4, &[(0, 1)])]);
        let d = p.derivative(0);
        assert_eq!(
            d,
            Polynomial::from_coeffs_int(&[(3, &[(0, 2), (1, 1)]), (4, &[])])
        );
    }
}
