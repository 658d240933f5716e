//! Error types for the real algebraic number kernel.
//!
//! These cover the boundary where externally supplied data (isolating
//! intervals, root indices, assignments) enters the kernel. Internal
//! refinement assumes well-formed input and does not fail.

use ralg_math::{Interval, MathError, Var};
use thiserror::Error;

/// Errors raised at the kernel boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RanError {
    /// The interval is neither open nor a point, or does not isolate exactly
    /// one root of the polynomial.
    #[error("interval {interval} contains {roots} roots, expected an open or point interval isolating exactly one")]
    InvalidIsolatingInterval {
        /// The rejected interval.
        interval: Interval,
        /// Number of distinct roots found in it.
        roots: usize,
    },

    /// The defining polynomial is zero or constant.
    #[error("defining polynomial must have positive degree")]
    DegenerateRootPolynomial,

    /// Root indices are 1-based.
    #[error("root index must be at least 1")]
    InvalidRootIndex,

    /// A rational value was requested from a non-numeric number.
    #[error("number is not in numeric representation")]
    NotNumeric,

    /// A variable of the polynomial has no value in the assignment.
    #[error("variable x{0} is not assigned")]
    UnassignedVariable(Var),

    /// `sample_between` requires its lower argument strictly below the upper.
    #[error("sample range is empty")]
    InvalidSampleRange,

    /// The sign condition is not realized by any root of the polynomial.
    #[error("sign condition is not realized by a root of the polynomial")]
    InvalidThomEncoding,

    /// A polynomial in more than one variable was given where a univariate
    /// one is required.
    #[error("polynomial is not univariate")]
    NotUnivariate,

    /// Error from the polynomial substrate.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type for kernel operations.
pub type RanResult<T> = Result<T, RanError>;
