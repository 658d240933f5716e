//! Dense univariate polynomials over the rationals.
//!
//! These carry the root-counting machinery used by isolating intervals:
//! Sturm sequences, square-free decomposition and real root isolation by
//! bisection. Coefficients are stored in ascending order of degree.

use crate::error::{MathError, MathResult};
use crate::interval::{BoundType, Interval};
use crate::polynomial::Polynomial;
use crate::rational::{abs, midpoint, rat};
use crate::sign::Sign;
use crate::var::Var;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::fmt;

/// A univariate polynomial with rational coefficients.
///
/// `coeffs[i]` is the coefficient of `var^i`; trailing zeros are trimmed, so
/// the zero polynomial has no coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnivariatePolynomial {
    var: Var,
    coeffs: Vec<BigRational>,
}

impl UnivariatePolynomial {
    /// Create a polynomial from ascending coefficients.
    pub fn new(var: Var, mut coeffs: Vec<BigRational>) -> Self {
        while coeffs.last().is_some_and(Zero::is_zero) {
            coeffs.pop();
        }
        Self { var, coeffs }
    }

    /// Create a polynomial from ascending integer coefficients.
    pub fn from_ints(var: Var, coeffs: &[i64]) -> Self {
        Self::new(var, coeffs.iter().map(|&c| rat(c)).collect())
    }

    /// A constant polynomial.
    pub fn constant(var: Var, c: BigRational) -> Self {
        Self::new(var, vec![c])
    }

    /// The variable of the polynomial.
    #[inline]
    pub fn var(&self) -> Var {
        self.var
    }

    /// Ascending coefficients.
    #[inline]
    pub fn coeffs(&self) -> &[BigRational] {
        &self.coeffs
    }

    /// Degree; the zero polynomial has degree 0.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Check if the polynomial is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Check if the polynomial has degree 0 (zero included).
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Leading coefficient (zero for the zero polynomial).
    pub fn lc(&self) -> BigRational {
        self.coeffs.last().cloned().unwrap_or_else(BigRational::zero)
    }

    /// Coefficient of `var^0`.
    pub fn constant_coeff(&self) -> BigRational {
        self.coeffs.first().cloned().unwrap_or_else(BigRational::zero)
    }

    /// Evaluate at a rational point (Horner scheme).
    pub fn eval(&self, x: &BigRational) -> BigRational {
        let mut acc = BigRational::zero();
        for c in self.coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    /// Sign of the value at a rational point.
    pub fn sgn_at(&self, x: &BigRational) -> Sign {
        Sign::of(&self.eval(x))
    }

    /// Check whether `x` is a root.
    pub fn is_root(&self, x: &BigRational) -> bool {
        self.eval(x).is_zero()
    }

    /// Sign as the variable tends to +oo or -oo.
    pub fn sgn_at_infinity(&self, positive: bool) -> Sign {
        let s = Sign::of(&self.lc());
        if positive || self.degree() % 2 == 0 {
            s
        } else {
            -s
        }
    }

    /// Multiply every coefficient by `c`.
    pub fn scale(&self, c: &BigRational) -> Self {
        Self::new(self.var, self.coeffs.iter().map(|a| a * c).collect())
    }

    /// First derivative.
    pub fn derivative(&self) -> Self {
        Self::new(
            self.var,
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c * BigRational::from_integer(BigInt::from(i)))
                .collect(),
        )
    }

    /// The `k`-th derivative.
    pub fn nth_derivative(&self, k: usize) -> Self {
        (0..k).fold(self.clone(), |p, _| p.derivative())
    }

    /// The monic associate; the zero polynomial is returned unchanged.
    pub fn normalized(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let inv = self.lc().recip();
        self.scale(&inv)
    }

    /// The same coefficients over another variable.
    pub fn replace_variable(&self, var: Var) -> Self {
        Self {
            var,
            coeffs: self.coeffs.clone(),
        }
    }

    /// The polynomial `p(-x)`.
    pub fn negate_variable(&self) -> Self {
        Self::new(
            self.var,
            self.coeffs
                .iter()
                .enumerate()
                .map(|(i, c)| if i % 2 == 1 { -c } else { c.clone() })
                .collect(),
        )
    }

    /// Product of two polynomials.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::new(self.var, Vec::new());
        }
        let mut coeffs = vec![BigRational::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Self::new(self.var, coeffs)
    }

    /// Long division; `divisor` must be nonzero.
    fn div_rem_nonzero(&self, divisor: &Self) -> (Self, Self) {
        let dd = divisor.degree();
        let lc = divisor.lc();
        let mut rem = self.coeffs.clone();
        if rem.len() < divisor.coeffs.len() {
            return (Self::new(self.var, Vec::new()), self.clone());
        }
        let mut quot = vec![BigRational::zero(); rem.len() - dd];
        for k in (0..quot.len()).rev() {
            let q = &rem[k + dd] / &lc;
            if !q.is_zero() {
                for (j, d) in divisor.coeffs.iter().enumerate() {
                    rem[k + j] -= &q * d;
                }
            }
            quot[k] = q;
        }
        rem.truncate(dd);
        (Self::new(self.var, quot), Self::new(self.var, rem))
    }

    /// Quotient and remainder of Euclidean division.
    pub fn div_rem(&self, divisor: &Self) -> MathResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    /// Remainder of Euclidean division.
    pub fn rem(&self, divisor: &Self) -> MathResult<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Monic greatest common divisor; `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.replace_variable(self.var);
        while !b.is_zero() {
            let (_, r) = a.div_rem_nonzero(&b);
            a = b;
            b = r;
        }
        a.normalized()
    }

    /// Monic square-free part `p / gcd(p, p')`.
    pub fn square_free(&self) -> Self {
        if self.is_constant() {
            return self.normalized();
        }
        let g = self.gcd(&self.derivative());
        let (q, _) = self.div_rem_nonzero(&g);
        q.normalized()
    }

    /// Sturm sequence of the square-free part.
    ///
    /// Remainders are rescaled by positive constants, which leaves sign
    /// variations intact and keeps coefficients small.
    pub fn sturm_sequence(&self) -> Vec<Self> {
        let p = self.square_free();
        if p.is_constant() {
            return vec![p];
        }
        let mut seq = vec![p.clone(), p.derivative()];
        loop {
            let n = seq.len();
            let (_, r) = seq[n - 2].div_rem_nonzero(&seq[n - 1]);
            if r.is_zero() {
                break;
            }
            let scale = -abs(&r.lc()).recip();
            seq.push(r.scale(&scale));
        }
        seq
    }

    fn variations(signs: impl Iterator<Item = Sign>) -> usize {
        let mut count = 0;
        let mut last = Sign::Zero;
        for s in signs.filter(|s| !s.is_zero()) {
            if !last.is_zero() && s != last {
                count += 1;
            }
            last = s;
        }
        count
    }

    fn variations_at(seq: &[Self], x: &BigRational) -> usize {
        Self::variations(seq.iter().map(|p| p.sgn_at(x)))
    }

    fn variations_at_infinity(seq: &[Self], positive: bool) -> usize {
        Self::variations(seq.iter().map(|p| p.sgn_at_infinity(positive)))
    }

    /// Count distinct real roots in `interval` with a precomputed Sturm
    /// sequence (see [`Self::sturm_sequence`]).
    pub fn count_real_roots_with(seq: &[Self], interval: &Interval) -> usize {
        let Some(p) = seq.first() else {
            return 0;
        };
        if p.is_zero() {
            return 0;
        }
        if interval.is_point() {
            return usize::from(p.is_root(interval.lower()));
        }

        // Var(a) - Var(b) counts roots in (a, b]
        let (var_lo, lo_root) = match interval.lower_type() {
            BoundType::Infty => (Self::variations_at_infinity(seq, false), false),
            _ => (
                Self::variations_at(seq, interval.lower()),
                p.is_root(interval.lower()),
            ),
        };
        let (var_hi, hi_root) = match interval.upper_type() {
            BoundType::Infty => (Self::variations_at_infinity(seq, true), false),
            _ => (
                Self::variations_at(seq, interval.upper()),
                p.is_root(interval.upper()),
            ),
        };

        let mut count = var_lo.saturating_sub(var_hi);
        if lo_root && interval.lower_type() == BoundType::Weak {
            count += 1;
        }
        if hi_root && interval.upper_type() == BoundType::Strict {
            count = count.saturating_sub(1);
        }
        count
    }

    /// Count distinct real roots in `interval`.
    pub fn count_real_roots(&self, interval: &Interval) -> usize {
        Self::count_real_roots_with(&self.sturm_sequence(), interval)
    }

    /// Count distinct real roots on the whole real line.
    pub fn count_all_real_roots(&self) -> usize {
        self.count_real_roots(&Interval::unbounded())
    }

    /// Cauchy's root bound: every root has absolute value below
    /// `1 + max |a_i / a_n|`.
    pub fn cauchy_bound(&self) -> BigRational {
        let lc = abs(&self.lc());
        if self.is_constant() {
            return BigRational::one();
        }
        let max = self.coeffs[..self.degree()]
            .iter()
            .map(|c| abs(c) / &lc)
            .max()
            .unwrap_or_else(BigRational::zero);
        BigRational::one() + max
    }

    /// Isolate all distinct real roots.
    ///
    /// Returns intervals sorted from left to right, each either an open
    /// interval containing exactly one root or a point interval at a
    /// rational root. With `split_at_zero`, a root at zero is reported as a
    /// point and no open interval straddles zero.
    pub fn isolate_real_roots(&self, split_at_zero: bool) -> Vec<Interval> {
        let p = self.square_free();
        if p.is_constant() {
            return Vec::new();
        }
        let seq = p.sturm_sequence();
        let bound = p.cauchy_bound();

        let mut found: Vec<Interval> = Vec::new();
        let mut queue: Vec<(BigRational, BigRational)> = Vec::new();
        if split_at_zero {
            let zero = BigRational::zero();
            if p.is_root(&zero) {
                found.push(Interval::zero_interval());
            }
            queue.push((-bound.clone(), zero.clone()));
            queue.push((zero, bound));
        } else {
            queue.push((-bound.clone(), bound));
        }

        while let Some((a, b)) = queue.pop() {
            let open = Interval::open(a.clone(), b.clone());
            match Self::count_real_roots_with(&seq, &open) {
                0 => {}
                1 => found.push(open),
                _ => {
                    let mid = midpoint(&a, &b);
                    if p.is_root(&mid) {
                        found.push(Interval::point(mid.clone()));
                    }
                    queue.push((a, mid.clone()));
                    queue.push((mid, b));
                }
            }
        }

        found.sort_by(|x, y| {
            x.lower()
                .cmp(y.lower())
                .then_with(|| x.upper().cmp(y.upper()))
        });
        found
    }
}

impl fmt::Display for UnivariatePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Polynomial::from_univariate(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::rat_frac;

    #[test]
    fn test_eval_and_derivative() {
        // x^3 - 2x + 1
        let p = UnivariatePolynomial::from_ints(0, &[1, -2, 0, 1]);
        assert_eq!(p.degree(), 3);
        assert_eq!(p.eval(&rat(2)), rat(5));
        assert_eq!(p.derivative(), UnivariatePolynomial::from_ints(0, &[-2, 0, 3]));
        assert_eq!(p.nth_derivative(3), UnivariatePolynomial::from_ints(0, &[6]));
        assert!(p.nth_derivative(4).is_zero());
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        let p = UnivariatePolynomial::from_ints(0, &[1, 2, 0, 0]);
        assert_eq!(p.degree(), 1);
        assert!(UnivariatePolynomial::from_ints(0, &[0, 0]).is_zero());
    }

    #[test]
    fn test_div_rem() {
        // (x^2 - 1) / (x - 1) = x + 1
        let p = UnivariatePolynomial::from_ints(0, &[-1, 0, 1]);
        let d = UnivariatePolynomial::from_ints(0, &[-1, 1]);
        let (q, r) = p.div_rem(&d).expect("nonzero divisor");
        assert_eq!(q, UnivariatePolynomial::from_ints(0, &[1, 1]));
        assert!(r.is_zero());
        let zero = UnivariatePolynomial::from_ints(0, &[]);
        assert_eq!(p.div_rem(&zero), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_gcd_and_square_free() {
        // (x - 1)^2 (x + 2) = x^3 - 3x + 2
        let p = UnivariatePolynomial::from_ints(0, &[2, -3, 0, 1]);
        let q = UnivariatePolynomial::from_ints(0, &[-1, 0, 1]);
        assert_eq!(p.gcd(&q), UnivariatePolynomial::from_ints(0, &[-1, 1]));
        assert_eq!(
            p.square_free(),
            UnivariatePolynomial::from_ints(0, &[-2, 1, 1])
        );
    }

    #[test]
    fn test_count_real_roots_bounds() {
        let p = UnivariatePolynomial::from_ints(0, &[-1, 0, 1]);
        assert_eq!(p.count_real_roots(&Interval::closed(rat(1), rat(2))), 1);
        assert_eq!(p.count_real_roots(&Interval::open(rat(1), rat(2))), 0);
        assert_eq!(p.count_real_roots(&Interval::open(rat(-1), rat(1))), 0);
        assert_eq!(p.count_real_roots(&Interval::closed(rat(-1), rat(1))), 2);
        assert_eq!(p.count_real_roots(&Interval::point(rat(1))), 1);
        assert_eq!(p.count_all_real_roots(), 2);
    }

    #[test]
    fn test_count_real_roots_multiple_root() {
        // (x - 1)^2 has one distinct root
        let p = UnivariatePolynomial::from_ints(0, &[1, -2, 1]);
        assert_eq!(p.count_all_real_roots(), 1);
        assert_eq!(p.count_real_roots(&Interval::open(rat(0), rat(2))), 1);
    }

    #[test]
    fn test_isolate_sqrt2() {
        let p = UnivariatePolynomial::from_ints(0, &[-2, 0, 1]);
        let roots = p.isolate_real_roots(true);
        assert_eq!(roots.len(), 2);
        assert!(roots[0].upper() <= &rat(0));
        assert!(roots[1].lower() >= &rat(0));
        for r in &roots {
            assert!(r.is_open());
            assert_eq!(p.count_real_roots(r), 1);
        }
    }

    #[test]
    fn test_isolate_with_zero_root() {
        // x^3 - x
        let p = UnivariatePolynomial::from_ints(0, &[0, -1, 0, 1]);
        let roots = p.isolate_real_roots(true);
        assert_eq!(roots.len(), 3);
        assert_eq!(roots[1], Interval::zero_interval());
        assert_eq!(p.count_real_roots(&roots[0]), 1);
        assert_eq!(p.count_real_roots(&roots[2]), 1);
    }

    #[test]
    fn test_isolate_constant_has_no_roots() {
        assert!(UnivariatePolynomial::from_ints(0, &[3]).isolate_real_roots(true).is_empty());
        assert!(UnivariatePolynomial::from_ints(0, &[1, 0, 1]).isolate_real_roots(false).is_empty());
    }

    #[test]
    fn test_cauchy_bound() {
        // 2x^2 - 6 -> 1 + 3
        let p = UnivariatePolynomial::from_ints(0, &[-6, 0, 2]);
        assert_eq!(p.cauchy_bound(), rat(4));
    }

    #[test]
    fn test_negate_variable_and_infinity_signs() {
        let p = UnivariatePolynomial::from_ints(0, &[1, 2, 0, 1]);
        assert_eq!(p.negate_variable(), UnivariatePolynomial::from_ints(0, &[1, -2, 0, -1]));
        assert_eq!(p.sgn_at_infinity(true), Sign::Positive);
        assert_eq!(p.sgn_at_infinity(false), Sign::Negative);
        assert_eq!(p.sgn_at(&rat_frac(-1, 2)), Sign::Negative);
    }

    #[test]
    fn test_display() {
        let p = UnivariatePolynomial::from_ints(0, &[-2, 0, 1]);
        assert_eq!(p.to_string(), "x0^2 - 2");
    }
}
