//! Simple Exponential Smoothing (SES) forecasting model.
//!
//! SES is suitable for data with no clear trend or seasonality.

use crate::core::Predictions;
use crate::error::Result;
use crate::models::traits::{check_inputs, check_smoothing_parameter};
use crate::models::{Forecaster, ModelFamily};

/// Simple Exponential Smoothing forecaster.
///
/// The model equation is:
/// `s_0 = y_0`, `s_t = α × y_t + (1-α) × s_{t-1}`
///
/// where α (alpha) is the smoothing parameter. Every position is defined.
///
/// # Example
/// ```
/// use series_forecast::models::exponential::SimpleExponentialSmoothing;
/// use series_forecast::models::Forecaster;
///
/// let values = [10.0, 12.0, 14.0, 13.0];
/// let preds = SimpleExponentialSmoothing::new(0.5)
///     .fit_predict(&values, &values)
///     .unwrap();
/// assert_eq!(preds.get(3), Some(12.75));
/// ```
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoothing {
    alpha: f64,
}

impl SimpleExponentialSmoothing {
    /// Create a new SES model with a fixed smoothing parameter.
    ///
    /// # Arguments
    /// * `alpha` - Smoothing parameter (0 <= alpha <= 1)
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Get the smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Smoothed level at every position of `values`.
    pub fn smooth(&self, values: &[f64]) -> Result<Vec<f64>> {
        check_smoothing_parameter("alpha", self.alpha)?;

        let mut result = Vec::with_capacity(values.len());
        let mut iter = values.iter();
        if let Some(&first) = iter.next() {
            let mut level = first;
            result.push(level);
            for &y in iter {
                level = self.alpha * y + (1.0 - self.alpha) * level;
                result.push(level);
            }
        }
        Ok(result)
    }
}

impl Default for SimpleExponentialSmoothing {
    fn default() -> Self {
        Self::new(0.3)
    }
}

impl Forecaster for SimpleExponentialSmoothing {
    fn fit_predict(&self, train: &[f64], series: &[f64]) -> Result<Predictions> {
        check_inputs(train, series)?;
        Ok(Predictions::from_values(self.smooth(series)?))
    }

    fn name(&self) -> &str {
        "Simple Exponential Smoothing"
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::Smoothing
    }
}
