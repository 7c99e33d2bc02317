//! Newton divided-difference interpolation.
//!
//! Fits the unique degree-(n-1) polynomial through n points with distinct
//! abscissae and evaluates it in Newton's nested form. Extrapolation beyond
//! the fitted window is the intended use here: the estimator forecasts future
//! days from a short trailing window of history.

use crate::error::InterpolationError;

/// Interpolating polynomial in Newton form.
///
/// `coeffs[k]` is the k-th order divided difference, so
/// `p(x) = c0 + c1 (x - x0) + c2 (x - x0)(x - x1) + ...`.
#[derive(Debug, Clone)]
pub struct NewtonPolynomial {
    xs: Vec<f64>,
    coeffs: Vec<f64>,
}

impl NewtonPolynomial {
    /// Fit the polynomial through the given `(x, y)` points.
    ///
    /// The divided-difference table is built in place: after pass j,
    /// `coeffs[i]` for `i >= j` holds the order-j differences. Equal
    /// abscissae make a denominator zero and fail fast rather than
    /// propagating infinities.
    pub fn fit(points: &[(f64, f64)]) -> Result<Self, InterpolationError> {
        let n = points.len();
        if n < 2 {
            return Err(InterpolationError::TooFewPoints { len: n });
        }

        let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
        let mut coeffs: Vec<f64> = points.iter().map(|p| p.1).collect();

        for j in 1..n {
            for i in (j..n).rev() {
                let denom = xs[i] - xs[i - j];
                if denom == 0.0 {
                    return Err(InterpolationError::DuplicateAbscissa { x: xs[i] });
                }
                coeffs[i] = (coeffs[i] - coeffs[i - 1]) / denom;
            }
        }

        Ok(Self { xs, coeffs })
    }

    /// Evaluate the polynomial at `x` using the nested (Horner) form,
    /// accumulating from the highest-order coefficient down.
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.coeffs.len();
        let mut acc = self.coeffs[n - 1];
        for j in (0..n - 1).rev() {
            acc = self.coeffs[j] + (x - self.xs[j]) * acc;
        }
        acc
    }

    /// Polynomial degree (number of fit points minus one).
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }
}
