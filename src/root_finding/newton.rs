//! Newton-Raphson method.

use num_traits::real::Real;

use super::errors::RootFindingError;
use super::finder::RootFinder;
use super::report::RootReport;

impl<R: Real + std::fmt::Debug> RootFinder<R> {
    /// Finds a root of `f` using the
    /// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method)
    /// with a caller-supplied analytic derivative.
    ///
    /// # Arguments
    /// ├ `f`  : the function whose root is sought
    /// ├ `df` : its derivative
    /// └ `x0` : starting guess
    ///
    /// # Returns
    /// [`RootReport`] with
    /// ├ `root`     : final iterate
    /// ├ `iterates` : `[x0, x_1, x_2, ...]` (seeded with the starting guess)
    /// └ `errors`   : |x_{k+1} - x_k| per step
    ///
    /// # Errors
    /// ├ [`RootFindingError::InvalidTolerance`] : configured tolerance <= 0
    /// └ [`RootFindingError::ZeroDerivative`]   : `df` evaluated to exactly
    ///    zero; carries the best approximation found so far (the last
    ///    accepted iterate) rather than aborting with no information
    ///
    /// # Behavior
    /// - Update: `x_{k+1} = x_k - f(x_k) / df(x_k)`, derivative re-evaluated
    ///   before every step.
    /// - No bracket is taken or checked; convergence is local and quadratic
    ///   near a simple root when the derivative does not vanish along the
    ///   path.
    pub fn newton<F, G>(
        &self,
        mut f: F,
        mut df: G,
        x0: R,
    ) -> Result<RootReport<R>, RootFindingError<R>>
    where
        F: FnMut(R) -> R,
        G: FnMut(R) -> R,
    {
        self.require_valid_tolerance()?;

        let tol = self.tolerance();
        let max_iter = self.max_iterations();

        let mut curr = x0;
        let mut fx = f(x0);
        let mut err = self.initial_error();
        let mut num_iter = 0;
        let mut iterates = vec![x0];
        let mut errors = Vec::new();

        while err > tol && num_iter < max_iter {
            let dfx = df(curr);
            if dfx == R::zero() {
                return Err(RootFindingError::ZeroDerivative { best: curr });
            }
            let x = curr - fx / dfx;
            err = (x - curr).abs();
            errors.push(err);
            curr = x;
            fx = f(curr);
            num_iter += 1;
            iterates.push(curr);
        }

        Ok(RootReport {
            root: curr,
            iterates,
            errors,
        })
    }
}
