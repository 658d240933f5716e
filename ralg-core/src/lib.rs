//! ralg-core - Real Algebraic Number Kernel
//!
//! Exact real algebraic numbers and the operations needed to reason about
//! them inside a nonlinear arithmetic procedure:
//! - [`RealAlgebraicNumber`] in numeric, isolating-interval or Thom form,
//!   with exact, lazily refined comparison
//! - [`IntervalRepr`], the refinement cache shared between copies of a
//!   number
//! - Sampling of rationals below, above and between numbers
//! - [`RootIsolator`], real roots of a polynomial under an assignment of
//!   algebraic numbers
//! - [`MultivariateRoot`], root expressions evaluated against assignments
//!
//! # Examples
//!
//! ```
//! use ralg_core::{uniq_root_var, Assignment, MultivariateRoot, RealAlgebraicNumber};
//! use ralg_math::{rat_frac, Polynomial};
//!
//! // the second root of z^2 - 2 is sqrt(2)
//! let z = uniq_root_var();
//! let p = Polynomial::from_coeffs_int(&[(1, &[(z, 2)]), (-2, &[])]);
//! let expr = MultivariateRoot::new(p, 2)?;
//! let sqrt2 = expr.evaluate(&Assignment::new())?.expect("two real roots");
//! assert!(sqrt2 > RealAlgebraicNumber::from_rational(rat_frac(7, 5)));
//! # Ok::<(), ralg_core::RanError>(())
//! ```
//!
//! # Sharing
//!
//! Numbers are `!Send`: clones share their interval cache through
//! `Rc<RefCell<_>>`, and refinement through one clone is visible through all
//! of them.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod assignment;
pub mod error;
pub mod interval_repr;
pub mod multivariate_root;
mod ordering;
pub mod ran;
pub mod root_isolation;
mod sampling;
pub mod thom;

pub use assignment::VariableAssignment;
pub use error::{RanError, RanResult};
pub use interval_repr::{IntervalRepr, SharedRepr};
pub use multivariate_root::{uniq_root_var, MultivariateRoot};
pub use ran::RealAlgebraicNumber;
pub use root_isolation::{
    real_roots, sgn_at, Assignment, IsolationConfig, IsolationStats, RootIsolator,
};
pub use thom::ThomEncoding;
