//! Polynomial root finding (placeholder).
//!
//! Reserved for polynomial-specific methods. Nothing is implemented yet;
//! only the configuration shell exists.

use num_traits::real::Real;

/// Placeholder for a polynomial-specific root finder.
///
/// Carries the same tolerance / max-iteration configuration as
/// [`RootFinder`](crate::root_finding::RootFinder) but exposes no solving
/// operations yet.
#[derive(Debug, Clone, Copy)]
pub struct PolynomialRootFinder<R> {
    tol: R,
    max_iter: usize,
}

impl<R: Real> PolynomialRootFinder<R> {
    #[must_use]
    pub fn new(tol: R, max_iter: usize) -> Self {
        Self { tol, max_iter }
    }

    #[inline]
    #[must_use]
    pub fn tolerance(&self) -> R {
        self.tol
    }

    #[inline]
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iter
    }
}
