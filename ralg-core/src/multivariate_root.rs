//! Root expressions.
//!
//! A [`MultivariateRoot`] denotes "the k-th real root in `z` of `p(x, z)`" as
//! a function of the ordinary variables `x`. It is evaluated against an
//! [`Assignment`] by root isolation.

use crate::error::{RanError, RanResult};
use crate::ran::RealAlgebraicNumber;
use crate::root_isolation::{real_roots, Assignment};
use ralg_math::{Polynomial, Var, VariablePool};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// The variable reserved for root expressions.
///
/// Allocated once from the process-wide pool, so it never collides with a
/// variable obtained from [`VariablePool::global_fresh`] nor with a literal
/// id below [`GLOBAL_VAR_BASE`](ralg_math::GLOBAL_VAR_BASE).
pub fn uniq_root_var() -> Var {
    static ROOT_VAR: OnceLock<Var> = OnceLock::new();
    *ROOT_VAR.get_or_init(|| VariablePool::global_fresh("__z"))
}

/// The `root_index`-th real root (1-based, ascending) of `poly` in
/// `root_var`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultivariateRoot {
    poly: Polynomial,
    root_index: usize,
    root_var: Var,
}

impl MultivariateRoot {
    /// A root expression over [`uniq_root_var`].
    ///
    /// # Errors
    ///
    /// [`RanError::InvalidRootIndex`] if `root_index` is 0.
    pub fn new(poly: Polynomial, root_index: usize) -> RanResult<Self> {
        Self::with_root_var(poly, root_index, uniq_root_var())
    }

    /// A root expression over an explicitly chosen root variable.
    ///
    /// # Errors
    ///
    /// [`RanError::InvalidRootIndex`] if `root_index` is 0.
    pub fn with_root_var(poly: Polynomial, root_index: usize, root_var: Var) -> RanResult<Self> {
        if root_index == 0 {
            return Err(RanError::InvalidRootIndex);
        }
        Ok(Self {
            poly,
            root_index,
            root_var,
        })
    }

    /// 1-based index of the root.
    #[inline]
    pub fn root_index(&self) -> usize {
        self.root_index
    }

    /// The distinguished variable.
    #[inline]
    pub fn root_var(&self) -> Var {
        self.root_var
    }

    /// The stored polynomial.
    #[inline]
    pub fn poly(&self) -> &Polynomial {
        &self.poly
    }

    /// The polynomial with the root variable renamed to `var`.
    pub fn poly_in(&self, var: Var) -> Polynomial {
        self.poly.rename(self.root_var, var)
    }

    /// Ordinary variables of the polynomial.
    pub fn gather_variables(&self) -> BTreeSet<Var> {
        self.poly
            .vars()
            .into_iter()
            .filter(|&v| v != self.root_var)
            .collect()
    }

    /// Check if the root variable is the only variable.
    pub fn is_univariate(&self) -> bool {
        self.gather_variables().is_empty()
    }

    /// Replace the ordinary variable `var` by `replacement` in place.
    pub fn substitute_in(&mut self, var: Var, replacement: &Polynomial) {
        debug_assert_ne!(var, self.root_var);
        self.poly.substitute_in(var, replacement);
    }

    /// The root at `assignment`.
    ///
    /// Returns `Ok(None)` when the polynomial has fewer than `root_index`
    /// real roots there, or vanishes identically.
    ///
    /// # Errors
    ///
    /// [`RanError::UnassignedVariable`] if an ordinary variable has no value.
    pub fn evaluate(&self, assignment: &Assignment) -> RanResult<Option<RealAlgebraicNumber>> {
        debug!(expr = %self, vars = assignment.len(), "evaluating root expression");
        let Some(roots) = real_roots(&self.poly, self.root_var, assignment)? else {
            trace!(expr = %self, "root expression undefined at assignment");
            return Ok(None);
        };
        let root = roots.into_iter().nth(self.root_index - 1);
        match &root {
            Some(r) => debug!(expr = %self, root = %r, "root expression evaluated"),
            None => trace!(expr = %self, "fewer real roots than the root index"),
        }
        Ok(root)
    }
}

impl PartialOrd for MultivariateRoot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MultivariateRoot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.root_index
            .cmp(&other.root_index)
            .then_with(|| self.poly.cmp(&other.poly))
            .then_with(|| self.root_var.cmp(&other.root_var))
    }
}

impl fmt::Display for MultivariateRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rootExpr({}, {}, x{})",
            self.poly, self.root_index, self.root_var
        )
    }
}
