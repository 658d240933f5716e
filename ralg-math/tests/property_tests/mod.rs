//! Property-based tests for ralg-math
//!
//! This module contains property tests for:
//! - Polynomial arithmetic, substitution and resultants
//! - Sturm root counting and real root isolation

mod polynomial_properties;
mod root_properties;
