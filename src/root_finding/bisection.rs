//! Bisection method.

use num_traits::real::Real;

use super::errors::RootFindingError;
use super::finder::RootFinder;
use super::report::RootReport;
use super::signs::straddles;

impl<R: Real + std::fmt::Debug> RootFinder<R> {
    /// Finds a root of `f` on the bracket `[a, b]` using the
    /// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
    ///
    /// Assumes `f` is continuous on `[a, b]` with `f(a)` and `f(b)` of
    /// opposite sign, so a root is guaranteed inside the bracket.
    ///
    /// # Arguments
    /// ├ `f` : the function whose root is sought
    /// ├ `a` : lower bracket endpoint
    /// └ `b` : upper bracket endpoint
    ///
    /// # Returns
    /// [`RootReport`] with
    /// ├ `root`     : final midpoint
    /// ├ `iterates` : every midpoint, in computation order
    /// └ `errors`   : half the bracket width after each shrink
    ///
    /// # Errors
    /// ├ [`RootFindingError::InvalidEndpoints`] : `f(a) * f(b) >= 0`
    /// └ [`RootFindingError::InvalidTolerance`] : configured tolerance <= 0
    ///
    /// # Behavior
    /// - Each pass evaluates `f` at the midpoint of the live bracket and at
    ///   the current lower endpoint, then keeps whichever half preserves the
    ///   sign change.
    /// - The bracket width halves every pass, so convergence is linear but
    ///   guaranteed for any continuous function with a sign change.
    pub fn bisect<F>(&self, mut f: F, a: R, b: R) -> Result<RootReport<R>, RootFindingError<R>>
    where
        F: FnMut(R) -> R,
    {
        if !straddles(f(a), f(b)) {
            return Err(RootFindingError::InvalidEndpoints);
        }
        self.require_valid_tolerance()?;

        let tol = self.tolerance();
        let max_iter = self.max_iterations();
        let two = R::one() + R::one();

        let mut inf = a;
        let mut sup = b;
        let mut x = (inf + sup) / two;
        let mut err = self.initial_error();
        let mut num_iter = 0;
        let mut iterates = Vec::new();
        let mut errors = Vec::new();

        while err > tol && num_iter < max_iter {
            num_iter += 1;
            x = (inf + sup) / two;
            let fx = f(x);
            iterates.push(x);
            let fa = f(inf);
            if straddles(fx, fa) {
                sup = x;
            } else {
                inf = x;
            }
            err = (sup - inf).abs() / two;
            errors.push(err);
        }

        Ok(RootReport {
            root: x,
            iterates,
            errors,
        })
    }
}
