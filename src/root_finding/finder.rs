//! The [`RootFinder`] configuration object shared by all
//! nonlinear root-finding algorithms.

use num_traits::real::Real;

use super::errors::RootFindingError;

/// Iteration-control configuration for nonlinear root finding.
///
/// # Fields
/// ├ `tol`      : convergence threshold on the per-step error measure
/// └ `max_iter` : hard bound on refinement steps per call
///
/// # Construction
/// - [`RootFinder::new`] stores both values verbatim; validation happens
///   per-call, not at construction time.
/// - [`RootFinder::set_tolerance`] / [`RootFinder::set_max_iterations`]
///   replace the stored configuration and take effect on subsequent calls.
///
/// # Notes
/// - Each operation is stateless with respect to prior calls; one finder
///   can be reused across any number of functions.
/// - The operations live in their own files:
///   `bisect`, `chord`, `secant`, `newton`.
/// - Exhausting `max_iter` before reaching `tol` is not an error: the last
///   iterate is returned as-is. Use
///   [`RootReport::final_error`](super::report::RootReport::final_error)
///   to detect this.
#[derive(Debug, Clone, Copy)]
pub struct RootFinder<R> {
    tol: R,
    max_iter: usize,
}

impl<R: Real + std::fmt::Debug> RootFinder<R> {
    #[must_use]
    pub fn new(tol: R, max_iter: usize) -> Self {
        Self { tol, max_iter }
    }

    pub fn set_tolerance(&mut self, tol: R) {
        self.tol = tol;
    }

    pub fn set_max_iterations(&mut self, max_iter: usize) {
        self.max_iter = max_iter;
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

    /// Rejects a non-positive tolerance before any refinement step runs.
    pub(crate) fn require_valid_tolerance(&self) -> Result<(), RootFindingError<R>> {
        if self.tol > R::zero() {
            Ok(())
        } else {
            Err(RootFindingError::InvalidTolerance { tol: self.tol })
        }
    }

    /// Sentinel error used to enter the refinement loop.
    ///
    /// Strictly greater than `tol`, so every operation performs at least
    /// one refinement step.
    #[inline]
    pub(crate) fn initial_error(&self) -> R {
        self.tol + R::one()
    }
}
