//! Iterative methods for locating roots of scalar real-valued functions.
//!
//! The crate is organized by problem family:
//! - [`root_finding`] : nonlinear scalar equations f(x) = 0
//! - [`polynomial`]   : polynomial-specific finders (placeholder)

pub mod polynomial;
pub mod root_finding;
