//! Defines the [`RootReport`] struct returned by all
//! root-finding operations.

use num_traits::real::Real;

/// Final report returned by every [`RootFinder`](super::finder::RootFinder)
/// operation.
///
/// # Fields
/// ├ `root`     : the final accepted approximation
/// ├ `iterates` : every approximation in computation order, including the
/// │              seed point(s) for methods that take initial guesses
/// └ `errors`   : per-refinement-step error measure, one entry per loop pass
///
/// # Invariant
/// └ `root` equals the last element of `iterates`.
#[derive(Debug, Clone, PartialEq)]
pub struct RootReport<R> {
    pub root: R,
    pub iterates: Vec<R>,
    pub errors: Vec<R>,
}

impl<R: Real> RootReport<R> {
    /// Number of refinement steps performed (seed points excluded).
    pub fn iterations(&self) -> usize {
        self.errors.len()
    }

    /// Error measure of the last refinement step, if any ran.
    ///
    /// Exhausting the iteration budget is not an error; comparing this
    /// value against the configured tolerance is how a caller can tell a
    /// best-effort return from true convergence.
    pub fn final_error(&self) -> Option<R> {
        self.errors.last().copied()
    }
}
