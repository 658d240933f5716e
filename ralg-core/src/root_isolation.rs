//! Real root isolation under an assignment of algebraic numbers.
//!
//! Given a multivariate polynomial `p(x_1, ..., x_n, z)` and values for the
//! `x_i`, this finds the real roots of the univariate polynomial
//! `p(a_1, ..., a_n, z)` as algebraic numbers:
//!
//! 1. rational values are substituted directly;
//! 2. leading coefficients in `z` that vanish at the point are dropped, and
//!    if every coefficient vanishes the result is undefined;
//! 3. algebraic values are eliminated by resultants with their defining
//!    polynomials, giving a univariate eliminant whose roots include all
//!    roots of `p(a, z)`;
//! 4. the eliminant's roots are isolated and only those at which `p`
//!    vanishes are kept.
//!
//! The exact zero test behind steps 2 and 4 combines a resultant
//! annihilator of the value with interval enclosures over refined boxes.
//!
//! ## References
//!
//! - "Algorithms in Real Algebraic Geometry" (Basu et al., 2006)
//! - Z3's `nlsat/nlsat_evaluator.cpp`

use crate::error::{RanError, RanResult};
use crate::interval_repr::{share, IntervalRepr, SharedRepr};
use crate::ran::{RealAlgebraicNumber, Repr};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use ralg_math::{rat, Interval, Polynomial, Sign, UnivariatePolynomial, Var};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Values of variables, as algebraic numbers.
pub type Assignment = BTreeMap<Var, RealAlgebraicNumber>;

/// Configuration for root isolation.
#[derive(Debug, Clone)]
pub struct IsolationConfig {
    /// Reduce the eliminant to its square-free part before isolation.
    pub square_free: bool,
    /// Set the root-provenance flag on produced numbers.
    pub mark_roots: bool,
    /// Isolate a root at zero separately and never straddle zero.
    pub split_at_zero: bool,
}

impl Default for IsolationConfig {
    fn default() -> Self {
        Self {
            square_free: true,
            mark_roots: true,
            split_at_zero: true,
        }
    }
}

/// Statistics for root isolation.
#[derive(Debug, Clone, Default)]
pub struct IsolationStats {
    /// Isolation requests.
    pub isolations: u64,
    /// Resultants computed to eliminate algebraic variables.
    pub eliminations: u64,
    /// Candidate roots of eliminants.
    pub candidates: u64,
    /// Candidates at which the polynomial did not vanish.
    pub candidates_rejected: u64,
    /// Sign determinations at algebraic points.
    pub zero_tests: u64,
}

/// One coordinate of an evaluation point.
#[derive(Debug, Clone)]
enum Coord {
    Rational(BigRational),
    Algebraic(SharedRepr),
}

fn coordinate(value: &RealAlgebraicNumber) -> Coord {
    match value.snapshot() {
        Repr::Numeric(v) => Coord::Rational(v),
        Repr::Interval(ir) => Coord::Algebraic(ir),
        Repr::Thom(te) => Coord::Algebraic(te.locator().clone()),
    }
}

/// Defining polynomial of an algebraic coordinate, over `var`.
fn defining(var: Var, ir: &SharedRepr) -> Polynomial {
    Polynomial::from_univariate(&ir.borrow().polynomial().replace_variable(var))
}

/// A variable above every variable of `g` and of the point.
fn scratch_var(g: &Polynomial, algebraic: &[(Var, SharedRepr)]) -> Var {
    g.vars()
        .into_iter()
        .chain(algebraic.iter().map(|(v, _)| *v))
        .max()
        .map_or(0, |v| v.saturating_add(1))
}

/// Radius `r` such that the annihilator `h` has no nonzero root in
/// `[-r, r]`, or `None` if zero is not a root of `h`.
fn zero_free_radius(h: &UnivariatePolynomial) -> Option<BigRational> {
    if !h.constant_coeff().is_zero() {
        return None;
    }
    let skip = h.coeffs().iter().take_while(|c| c.is_zero()).count();
    let h1 = UnivariatePolynomial::new(h.var(), h.coeffs()[skip..].to_vec());
    let mut r = BigRational::one();
    while h1.count_real_roots(&Interval::closed(-r.clone(), r.clone())) > 0 {
        r /= rat(2);
    }
    Some(r)
}

/// Substitute the rational coordinates into `poly`.
fn substitute_rationals(
    poly: &Polynomial,
    point: &[(Var, Coord)],
) -> (Polynomial, Vec<(Var, SharedRepr)>) {
    let mut p = poly.clone();
    let mut algebraic = Vec::new();
    for (v, c) in point {
        match c {
            Coord::Rational(q) => p = p.eval_at(*v, q),
            Coord::Algebraic(ir) => algebraic.push((*v, ir.clone())),
        }
    }
    (p, algebraic)
}

/// Collect coordinates for every variable of `poly` except `skip`.
fn point_for(
    poly: &Polynomial,
    skip: Option<Var>,
    assignment: &Assignment,
) -> RanResult<Vec<(Var, Coord)>> {
    poly.vars()
        .into_iter()
        .filter(|&v| Some(v) != skip)
        .map(|v| {
            assignment
                .get(&v)
                .map(|value| (v, coordinate(value)))
                .ok_or(RanError::UnassignedVariable(v))
        })
        .collect()
}

/// Isolates real roots of polynomials under assignments.
#[derive(Debug, Default)]
pub struct RootIsolator {
    config: IsolationConfig,
    stats: IsolationStats,
}

impl RootIsolator {
    /// Create an isolator with the given configuration.
    pub fn new(config: IsolationConfig) -> Self {
        Self {
            config,
            stats: IsolationStats::default(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &IsolationConfig {
        &self.config
    }

    /// Get statistics.
    pub fn stats(&self) -> &IsolationStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = IsolationStats::default();
    }

    /// Real roots of `poly` in `var` with the other variables taken from
    /// `assignment`, in ascending order.
    ///
    /// Returns `Ok(None)` when `poly` vanishes identically in `var` at the
    /// assignment, so the roots are undefined.
    ///
    /// # Errors
    ///
    /// [`RanError::UnassignedVariable`] if a variable other than `var` has
    /// no value.
    pub fn isolate(
        &mut self,
        poly: &Polynomial,
        var: Var,
        assignment: &Assignment,
    ) -> RanResult<Option<Vec<RealAlgebraicNumber>>> {
        self.stats.isolations += 1;
        let point = point_for(poly, Some(var), assignment)?;
        let (p, algebraic) = substitute_rationals(poly, &point);

        // effective degree in var at the point
        let coeffs = p.coefficients(var);
        let Some(degree) = (0..coeffs.len())
            .rev()
            .find(|&k| !self.sign_at(&coeffs[k], &algebraic).is_zero())
        else {
            debug!(%poly, "polynomial vanishes identically at the assignment");
            return Ok(None);
        };
        if degree == 0 {
            return Ok(Some(Vec::new()));
        }
        let p = Polynomial::from_terms(
            p.terms()
                .iter()
                .filter(|t| t.monomial.degree(var) as usize <= degree)
                .cloned(),
        );

        let mut eliminant = p.clone();
        for (v, ir) in &algebraic {
            if eliminant.has_var(*v) {
                eliminant = eliminant.resultant(&defining(*v, ir), *v);
                self.stats.eliminations += 1;
            }
        }
        if eliminant.is_zero() {
            warn!(%poly, "eliminant vanishes identically; roots left undefined");
            return Ok(None);
        }
        let eliminant = eliminant.to_univariate(var)?;
        let eliminant = if self.config.square_free {
            eliminant.square_free()
        } else {
            eliminant.normalized()
        };

        let candidates = eliminant.isolate_real_roots(self.config.split_at_zero);
        self.stats.candidates += candidates.len() as u64;
        let mut roots = Vec::with_capacity(candidates.len());
        for interval in candidates {
            let coord = if interval.is_point() {
                Coord::Rational(interval.lower().clone())
            } else {
                Coord::Algebraic(share(IntervalRepr::new(eliminant.clone(), interval)))
            };
            // every candidate is a root when nothing was eliminated
            let vanishes = algebraic.is_empty()
                || match &coord {
                    Coord::Rational(q) => self.sign_at(&p.eval_at(var, q), &algebraic).is_zero(),
                    Coord::Algebraic(ir) => {
                        let mut extended = algebraic.clone();
                        extended.push((var, ir.clone()));
                        self.sign_at(&p, &extended).is_zero()
                    }
                };
            if vanishes {
                roots.push(self.number_at(coord));
            } else {
                self.stats.candidates_rejected += 1;
            }
        }
        debug!(
            %poly,
            degree,
            eliminant_degree = eliminant.degree(),
            roots = roots.len(),
            "isolated roots under assignment"
        );
        Ok(Some(roots))
    }

    fn number_at(&self, coord: Coord) -> RealAlgebraicNumber {
        let number = match coord {
            Coord::Rational(q) => RealAlgebraicNumber::from_rational(q),
            Coord::Algebraic(ir) => {
                let linear = {
                    let mut repr = ir.borrow_mut();
                    let zero = BigRational::zero();
                    if repr.interval().contains(&zero) {
                        repr.refine_avoiding(&zero);
                    }
                    (repr.polynomial().degree() == 1).then(|| -repr.polynomial().constant_coeff())
                };
                match linear {
                    Some(q) => RealAlgebraicNumber::from_rational(q),
                    None => RealAlgebraicNumber::from_shared(ir),
                }
            }
        };
        number.with_root_flag(self.config.mark_roots)
    }

    /// Sign of `g` at the point given by `assignment`.
    ///
    /// # Errors
    ///
    /// [`RanError::UnassignedVariable`] if a variable of `g` has no value.
    pub fn sgn_at(&mut self, g: &Polynomial, assignment: &Assignment) -> RanResult<Sign> {
        let point = point_for(g, None, assignment)?;
        let (g, algebraic) = substitute_rationals(g, &point);
        Ok(self.sign_at(&g, &algebraic))
    }

    /// Sign of `g`, whose variables all occur in `algebraic`.
    fn sign_at(&mut self, g: &Polynomial, algebraic: &[(Var, SharedRepr)]) -> Sign {
        if g.is_constant() {
            return Sign::of(&g.constant_value());
        }
        self.stats.zero_tests += 1;
        let involved: Vec<(Var, SharedRepr)> = algebraic
            .iter()
            .filter(|(v, _)| g.has_var(*v))
            .cloned()
            .collect();

        // one algebraic variable: the interval representation decides
        if let [(v, ir)] = involved.as_slice() {
            if let Ok(u) = g.to_univariate(*v) {
                return ir.borrow_mut().sgn(&u);
            }
        }

        // h(t) annihilates g(point): zero is a root of h unless g(point) != 0
        let t = scratch_var(g, &involved);
        let mut h = Polynomial::from_var(t).sub(g);
        for (v, ir) in &involved {
            h = h.resultant(&defining(*v, ir), *v);
            self.stats.eliminations += 1;
        }
        let radius = match h.to_univariate(t) {
            Ok(h) if !h.is_zero() => zero_free_radius(&h),
            _ => {
                warn!(%g, "degenerate annihilator; zero cannot be certified");
                None
            }
        };

        loop {
            let boxes: FxHashMap<Var, (BigRational, BigRational)> = involved
                .iter()
                .map(|(v, ir)| {
                    let ir = ir.borrow();
                    let i = ir.interval();
                    (*v, (i.lower().clone(), i.upper().clone()))
                })
                .collect();
            let Some((lo, hi)) = g.eval_interval(&boxes) else {
                warn!(%g, "variable without a value in sign test");
                return Sign::Zero;
            };
            if let Some(r) = &radius {
                if -r < lo && &hi < r {
                    return Sign::Zero;
                }
            }
            if lo.is_positive() {
                return Sign::Positive;
            }
            if hi.is_negative() {
                return Sign::Negative;
            }
            for (_, ir) in &involved {
                ir.borrow_mut().refine();
            }
        }
    }
}

/// Real roots of `poly` in `var` under `assignment`, with the default
/// configuration. See [`RootIsolator::isolate`].
pub fn real_roots(
    poly: &Polynomial,
    var: Var,
    assignment: &Assignment,
) -> RanResult<Option<Vec<RealAlgebraicNumber>>> {
    RootIsolator::default().isolate(poly, var, assignment)
}

/// Sign of `g` at the point given by `assignment`.
pub fn sgn_at(g: &Polynomial, assignment: &Assignment) -> RanResult<Sign> {
    RootIsolator::default().sgn_at(g, assignment)
}
