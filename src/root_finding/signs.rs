//! Sign utilities for root-finding algorithms.

use num_traits::real::Real;

/// Returns `true` if `fa` and `fb` straddle a zero crossing,
/// i.e. their product is strictly negative.
#[inline]
pub(crate) fn straddles<R: Real>(fa: R, fb: R) -> bool {
    fa * fb < R::zero()
}
