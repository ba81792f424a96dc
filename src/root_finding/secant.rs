//! Secant method.

use num_traits::real::Real;

use super::errors::RootFindingError;
use super::finder::RootFinder;
use super::report::RootReport;
use super::signs::straddles;

impl<R: Real + std::fmt::Debug> RootFinder<R> {
    /// Finds a root of `f` using the
    /// [secant method](https://en.wikipedia.org/wiki/Secant_method).
    ///
    /// # Arguments
    /// ├ `f`  : the function whose root is sought
    /// ├ `x0` : first initial guess
    /// └ `x1` : second initial guess
    ///
    /// # Returns
    /// [`RootReport`] with
    /// ├ `root`     : final iterate
    /// ├ `iterates` : `[x1, x0, x_2, x_3, ...]` (both guesses recorded
    /// │              first, in call order `x1` then `x0`)
    /// └ `errors`   : |x_k - x_{k+1}| per step
    ///
    /// # Errors
    /// ├ [`RootFindingError::InvalidEndpoints`] : `f(x0) * f(x1) >= 0`
    /// └ [`RootFindingError::InvalidTolerance`] : configured tolerance <= 0
    ///
    /// # Behavior
    /// - Update:
    ///   `x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))`
    /// - Convergence is superlinear (order ~1.618) near a simple root.
    /// - A collapsing denominator `f(x_k) - f(x_{k-1})` is not guarded;
    ///   callers should treat a non-finite `root` as a failed run.
    pub fn secant<F>(&self, mut f: F, x0: R, x1: R) -> Result<RootReport<R>, RootFindingError<R>>
    where
        F: FnMut(R) -> R,
    {
        let mut f_curr = f(x0);
        let mut f_prev = f(x1);
        if !straddles(f_curr, f_prev) {
            return Err(RootFindingError::InvalidEndpoints);
        }
        self.require_valid_tolerance()?;

        let tol = self.tolerance();
        let max_iter = self.max_iterations();

        let mut curr = x0;
        let mut prev = x1;
        let mut err = self.initial_error();
        let mut num_iter = 0;
        let mut iterates = vec![x1, x0];
        let mut errors = Vec::new();

        while err > tol && num_iter < max_iter {
            num_iter += 1;
            let x = curr - f_curr * (curr - prev) / (f_curr - f_prev);
            let fx = f(x);
            iterates.push(x);
            err = (curr - x).abs();
            errors.push(err);
            prev = curr;
            f_prev = f_curr;
            curr = x;
            f_curr = fx;
        }

        Ok(RootReport {
            root: curr,
            iterates,
            errors,
        })
    }
}
