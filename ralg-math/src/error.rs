//! Error types for the exact substrate.

use crate::var::Var;
use thiserror::Error;

/// Errors raised by polynomial operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A univariate polynomial was required but other variables occur.
    #[error("polynomial is not univariate in x{expected}: found x{found}")]
    NotUnivariate {
        /// The variable the polynomial was expected to be univariate in.
        expected: Var,
        /// A variable that occurs besides the expected one.
        found: Var,
    },
    /// Division by the zero polynomial.
    #[error("division by zero polynomial")]
    DivisionByZero,
}

/// Result type for substrate operations.
pub type MathResult<T> = Result<T, MathError>;
