//! Ordinary Least Squares fit of a straight line.

use crate::error::{ForecastError, Result};
use serde::Serialize;

/// Slope and intercept of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `y` against its integer positions `0, 1, ..., n-1`.
pub fn ols_fit_positions(y: &[f64]) -> Result<LinearFit> {
    let x: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
    ols_fit(&x, y)
}

/// Fit a straight line to `(x, y)` pairs by least squares.
///
/// Uses the closed-form normal equations:
/// `slope = (n Σxy - Σx Σy) / (n Σx² - (Σx)²)`, `intercept = (Σy - slope Σx) / n`.
pub fn ols_fit(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    if x.len() != y.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }

    let n = x.len();
    if n < 2 {
        return Err(ForecastError::InsufficientData { needed: 2, got: n });
    }

    let nf = n as f64;
    let (sum_x, sum_y, sum_xy, sum_x2) = x.iter().zip(y.iter()).fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sx2), (&xi, &yi)| (sx + xi, sy + yi, sxy + xi * yi, sx2 + xi * xi),
    );

    let denominator = nf * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(ForecastError::InvalidParameter(
            "regressor has zero variance".to_string(),
        ));
    }

    let slope = (nf * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / nf;

    Ok(LinearFit { slope, intercept })
}
