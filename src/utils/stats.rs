//! Statistical utility functions.

use crate::error::{ForecastError, Result};
use serde::Serialize;

/// Descriptive statistics of a series.
///
/// Variance is the population variance (divisor `n`). Skewness and
/// kurtosis are standardized moments and are `None` for a zero-variance
/// series, where they are undefined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub mean: f64,
    pub variance: f64,
    pub std: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub skewness: Option<f64>,
    /// Excess kurtosis (normal distribution = 0).
    pub kurtosis: Option<f64>,
}

impl Statistics {
    /// Compute the descriptive statistics of `values`.
    ///
    /// # Example
    /// ```
    /// use series_forecast::utils::Statistics;
    ///
    /// let stats = Statistics::compute(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(stats.mean, 2.5);
    /// assert_eq!(stats.median, 2.5);
    /// assert_eq!(stats.variance, 1.25);
    /// ```
    pub fn compute(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::EmptyData);
        }

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        let m = mean(values);
        // Rounding in the mean leaves a tiny spread on constant input.
        let var = if min == max {
            0.0
        } else {
            population_variance(values)
        };
        let std = var.sqrt();

        let (skewness, kurtosis) = if std > 0.0 {
            let n = values.len() as f64;
            let (m3, m4) = values.iter().fold((0.0, 0.0), |(s3, s4), &x| {
                let z = (x - m) / std;
                (s3 + z.powi(3), s4 + z.powi(4))
            });
            (Some(m3 / n), Some(m4 / n - 3.0))
        } else {
            (None, None)
        };

        Ok(Self {
            mean: m,
            variance: var,
            std,
            median: median(values),
            min,
            max,
            skewness,
            kurtosis,
        })
    }

    /// True when the series has no spread at all.
    pub fn is_degenerate(&self) -> bool {
        self.std == 0.0
    }
}

/// Divide, substituting `substitute` for a denominator that is exactly zero.
///
/// # Example
/// ```
/// use series_forecast::utils::safe_divide;
///
/// assert_eq!(safe_divide(6.0, 3.0, 1.0), 2.0);
/// assert_eq!(safe_divide(6.0, 0.0, 1.0), 6.0);
/// ```
#[inline]
pub fn safe_divide(numerator: f64, denominator: f64, substitute: f64) -> f64 {
    if denominator == 0.0 {
        numerator / substitute
    } else {
        numerator / denominator
    }
}

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the population variance of a slice (divisor `n`).
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Calculate the median of a slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}
