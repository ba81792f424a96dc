//! Root-finding error types.
//!
//! [`RootFindingError`] — all recoverable, reported before or during iteration
//! ├ `InvalidEndpoints` : starting abscissas do not straddle a sign change
//! ├ `InvalidTolerance` : configured tolerance is not strictly positive
//! └ `ZeroDerivative`   : Newton hit an exactly-zero derivative mid-run

use thiserror::Error;

/// Failure modes shared by the [`RootFinder`](super::finder::RootFinder)
/// operations.
///
/// # Notes
/// ├ `InvalidEndpoints` and `InvalidTolerance` are raised before any
/// │  refinement step runs; no partial result is produced.
/// └ `ZeroDerivative` is raised mid-iteration and carries the best
///    approximation computed so far, so the caller can either accept it
///    or retry with a different method or seed.
#[derive(Debug, Error, PartialEq)]
pub enum RootFindingError<R: std::fmt::Debug> {
    #[error("starting points do not bracket a root: f(a) * f(b) >= 0")]
    InvalidEndpoints,

    #[error("invalid tolerance: must be > 0. got {tol}")]
    InvalidTolerance { tol: R },

    #[error("derivative is exactly zero; best approximation so far: {best}")]
    ZeroDerivative { best: R },
}
