//! Variable assignments as literals.

use crate::ran::RealAlgebraicNumber;
use num_rational::BigRational;
use ralg_math::Var;
use std::collections::BTreeSet;
use std::fmt;

/// The literal `var = value`, or `var != value` when negated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableAssignment {
    var: Var,
    value: RealAlgebraicNumber,
    negated: bool,
}

impl VariableAssignment {
    /// The assignment `var = value`.
    pub fn new(var: Var, value: RealAlgebraicNumber) -> Self {
        Self {
            var,
            value,
            negated: false,
        }
    }

    /// The assignment of a rational value.
    pub fn from_rational(var: Var, value: BigRational) -> Self {
        Self::new(var, RealAlgebraicNumber::from_rational(value))
    }

    /// The assigned variable.
    #[inline]
    pub fn var(&self) -> Var {
        self.var
    }

    /// The assigned value.
    #[inline]
    pub fn value(&self) -> &RealAlgebraicNumber {
        &self.value
    }

    /// Check if this is the negated literal.
    #[inline]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The complementary literal.
    pub fn negation(&self) -> Self {
        Self {
            negated: !self.negated,
            ..self.clone()
        }
    }

    /// Add the assigned variable to `vars`.
    pub fn collect_variables(&self, vars: &mut BTreeSet<Var>) {
        vars.insert(self.var);
    }
}

impl fmt::Display for VariableAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.negated { "-!>" } else { "->" };
        write!(f, "(x{} {} {})", self.var, arrow, self.value)
    }
}
