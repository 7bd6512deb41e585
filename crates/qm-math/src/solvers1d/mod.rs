//! 1D root-finding solvers.

use qm_core::{
    errors::{Error, Result},
    Real,
};

use crate::comparison::close;

const MAX_ITERATIONS: u32 = 100;

/// Default absolute accuracy for convergence checks.
pub const DEFAULT_ACCURACY: Real = 1.0e-10;

// ── Newton-Raphson (single root) ─────────────────────────────────────────────

/// Newton-Raphson iteration for a single root, given the function and its
/// analytic first derivative.
///
/// Iterates `x ← x − f(x)/f'(x)` until either the residual `|f(x)|` or the
/// step magnitude drops below `accuracy` (a non-positive accuracy selects
/// [`DEFAULT_ACCURACY`]). The step that detects convergence is always
/// applied before returning, so with quadratic convergence the accepted
/// root is polished well beyond the requested accuracy. The iteration is
/// unbracketed: the initial guess must lie in the basin of attraction of
/// the target root.
///
/// # Errors
/// [`Error::RootNotFound`] if the derivative vanishes at an iterate or the
/// iteration cap is exhausted; there is no silent fallback, the caller must
/// see the failure.
pub fn newton_raphson<F, D>(f: F, df: D, guess: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
    D: Fn(Real) -> Real,
{
    let acc = if accuracy > 0.0 {
        accuracy
    } else {
        DEFAULT_ACCURACY
    };
    let mut x = guess;

    for _ in 0..MAX_ITERATIONS {
        let fx = f(x);
        let dfx = df(x);
        if dfx == 0.0 {
            return Err(Error::RootNotFound(format!(
                "Newton-Raphson: derivative vanished at x = {x}"
            )));
        }
        let step = fx / dfx;
        x -= step;
        if close(fx, 0.0, acc) || close(step, 0.0, acc) {
            return Ok(x);
        }
    }
    Err(Error::RootNotFound(format!(
        "Newton-Raphson: no convergence after {MAX_ITERATIONS} iterations from guess {guess}"
    )))
}
