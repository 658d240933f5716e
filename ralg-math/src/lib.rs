//! ralg-math - Exact Substrate for Real Algebraic Numbers
//!
//! This crate provides the exact building blocks consumed by the real
//! algebraic number kernel in `ralg-core`:
//! - [`Sign`] and rational helpers over [`num_rational::BigRational`]
//! - [`Interval`] with strict, weak and infinite bounds
//! - [`VariablePool`] for unique, named polynomial variables
//! - Sparse multivariate [`Polynomial`] with substitution, exact division
//!   and resultants
//! - Dense [`UnivariatePolynomial`] with Sturm root counting, GCD and real
//!   root isolation
//!
//! # Examples
//!
//! ```
//! use ralg_math::{rat, Interval, UnivariatePolynomial};
//!
//! // x^2 - 2 has one root in (1, 2)
//! let p = UnivariatePolynomial::from_ints(0, &[-2, 0, 1]);
//! assert_eq!(p.count_real_roots(&Interval::open(rat(1), rat(2))), 1);
//! assert_eq!(p.isolate_real_roots(true).len(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod interval;
pub mod polynomial;
pub mod rational;
pub mod sign;
pub mod univariate;
pub mod var;

pub use error::{MathError, MathResult};
pub use interval::{BoundType, Interval};
pub use polynomial::{Monomial, Polynomial, Term, VarPower};
pub use rational::{bit_size, ceil, floor, is_integer, rat, rat_frac};
pub use sign::Sign;
pub use univariate::UnivariatePolynomial;
pub use var::{Var, VariablePool, GLOBAL_VAR_BASE};
