//! Chord (fixed-slope) method.

use num_traits::real::Real;

use super::errors::RootFindingError;
use super::finder::RootFinder;
use super::report::RootReport;
use super::signs::straddles;

impl<R: Real + std::fmt::Debug> RootFinder<R> {
    /// Finds a root of `f` by fixed-slope iteration: the secant slope over
    /// the original bracket `[a, b]` is computed once and reused for every
    /// step.
    ///
    /// # Arguments
    /// ├ `f`  : the function whose root is sought
    /// ├ `a`  : lower bracket endpoint (slope computation only)
    /// ├ `b`  : upper bracket endpoint (slope computation only)
    /// └ `x0` : starting guess
    ///
    /// # Returns
    /// [`RootReport`] with
    /// ├ `root`     : final iterate
    /// ├ `iterates` : `[x0, x_1, x_2, ...]` (seeded with the starting guess)
    /// └ `errors`   : |x_{k+1} - x_k| per step
    ///
    /// # Errors
    /// ├ [`RootFindingError::InvalidEndpoints`] : `f(a) * f(b) >= 0`
    /// └ [`RootFindingError::InvalidTolerance`] : configured tolerance <= 0
    ///
    /// # Behavior
    /// - Update: `x_{k+1} = x_k - f(x_k) / r` with
    ///   `r = (f(b) - f(a)) / (b - a)` held fixed; the bracket is never
    ///   re-checked during iteration.
    /// - Convergence is linear, and only when the fixed slope is a
    ///   reasonable approximation of the true slope near the root.
    /// - A zero or tiny `r` is not guarded; non-finite iterates propagate
    ///   through ordinary floating-point arithmetic.
    pub fn chord<F>(
        &self,
        mut f: F,
        a: R,
        b: R,
        x0: R,
    ) -> Result<RootReport<R>, RootFindingError<R>>
    where
        F: FnMut(R) -> R,
    {
        let fa = f(a);
        let fb = f(b);
        if !straddles(fa, fb) {
            return Err(RootFindingError::InvalidEndpoints);
        }
        self.require_valid_tolerance()?;

        let tol = self.tolerance();
        let max_iter = self.max_iterations();

        // fixed slope over the original bracket
        let r = (fb - fa) / (b - a);
        let mut curr = x0;
        let mut fx = f(x0);
        let mut err = self.initial_error();
        let mut num_iter = 0;
        let mut iterates = vec![x0];
        let mut errors = Vec::new();

        while err > tol && num_iter < max_iter {
            num_iter += 1;
            let x = curr - fx / r;
            fx = f(x);
            err = (x - curr).abs();
            errors.push(err);
            iterates.push(x);
            curr = x;
        }

        Ok(RootReport {
            root: curr,
            iterates,
            errors,
        })
    }
}
