//! Bisection root finding.
//!
//! Used to locate the day at which cumulative cost crosses the available
//! balance. The iteration cap is the system's bounded-time guarantee: the
//! solver either converges within tolerance or reports the bracket it
//! actually achieved.

use crate::config::SolverTolerance;
use crate::error::SolveError;

/// Find a root of `f` on `[low, high]` by bisection.
///
/// Preconditions: `f` continuous on the bracket with `f(low)` and `f(high)`
/// of opposite sign. Exact endpoint roots return immediately without
/// iterating. A same-sign bracket is an [`SolveError::InvalidBracket`];
/// reaching the iteration cap before the bracket narrows below
/// `tol.tolerance` is a [`SolveError::ConvergenceFailure`] carrying the
/// width achieved.
pub fn bisect<F>(f: F, low: f64, high: f64, tol: &SolverTolerance) -> Result<f64, SolveError>
where
    F: Fn(f64) -> f64,
{
    if !(low < high) {
        return Err(SolveError::EmptyInterval { low, high });
    }

    let f_low = f(low);
    if f_low == 0.0 {
        return Ok(low);
    }
    let f_high = f(high);
    if f_high == 0.0 {
        return Ok(high);
    }
    if f_low.signum() == f_high.signum() {
        return Err(SolveError::InvalidBracket {
            low,
            high,
            f_low,
            f_high,
        });
    }

    let (mut low, mut high, mut f_low) = (low, high, f_low);
    for _ in 0..tol.max_iterations {
        let mid = 0.5 * (low + high);
        if high - low < tol.tolerance {
            return Ok(mid);
        }
        let f_mid = f(mid);
        if f_mid == 0.0 {
            return Ok(mid);
        }
        if f_mid.signum() == f_low.signum() {
            low = mid;
            f_low = f_mid;
        } else {
            high = mid;
        }
    }

    Err(SolveError::ConvergenceFailure {
        achieved: high - low,
        tolerance: tol.tolerance,
        iterations: tol.max_iterations,
    })
}
