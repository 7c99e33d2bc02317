//! Golden-section search.
//!
//! Derivative-free minimization of a unimodal function on a closed interval.
//! Each iteration keeps two interior points at the golden ratio from the
//! bracket ends and reuses one of the two evaluations, so the objective is
//! called once per iteration after the first.
//!
//! Unimodality is a precondition, not something the search can verify: on a
//! multi-modal objective the result is a local minimum.

use crate::config::SolverTolerance;
use crate::error::SolveError;

/// (sqrt(5) - 1) / 2
const INV_PHI: f64 = 0.618_033_988_749_894_8;

/// Minimize a unimodal `f` on `[a, b]`, returning the midpoint of the final
/// bracket once it is narrower than `tol.tolerance`.
///
/// Errors with [`SolveError::ConvergenceFailure`] if the iteration cap is
/// reached first, and [`SolveError::EmptyInterval`] for a reversed or empty
/// interval.
pub fn golden_section_min<F>(
    f: F,
    a: f64,
    b: f64,
    tol: &SolverTolerance,
) -> Result<f64, SolveError>
where
    F: Fn(f64) -> f64,
{
    if !(a < b) {
        return Err(SolveError::EmptyInterval { low: a, high: b });
    }

    let (mut a, mut b) = (a, b);
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);

    for _ in 0..tol.max_iterations {
        if b - a < tol.tolerance {
            return Ok(0.5 * (a + b));
        }
        if fc < fd {
            // Minimum cannot be in (d, b]
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = f(c);
        } else {
            // Minimum cannot be in [a, c)
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = f(d);
        }
    }

    Err(SolveError::ConvergenceFailure {
        achieved: b - a,
        tolerance: tol.tolerance,
        iterations: tol.max_iterations,
    })
}
