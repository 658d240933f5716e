//! Property-based tests for ralg-core
//!
//! This module contains property tests for:
//! - Exact ordering across representations, transitivity and refinement
//!   transparency
//! - Rational sampling around algebraic numbers, including Thom inputs

mod ordering_properties;
mod sampling_properties;
