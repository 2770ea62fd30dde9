//! Trailing moving average.

use crate::core::Predictions;
use crate::error::{ForecastError, Result};
use crate::models::traits::check_inputs;
use crate::models::{Forecaster, ModelFamily};

/// Moving average forecaster.
///
/// The value at position `i` is the mean of `x[i-window+1..=i]`. The first
/// `window - 1` positions have insufficient history and are undefined.
///
/// # Example
/// ```
/// use series_forecast::models::baseline::MovingAverage;
/// use series_forecast::models::Forecaster;
///
/// let values = [3.0, 6.0, 9.0, 12.0];
/// let preds = MovingAverage::new(3).fit_predict(&values, &values).unwrap();
/// assert_eq!(preds.as_slice(), &[None, None, Some(6.0), Some(9.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct MovingAverage {
    window: usize,
}

impl MovingAverage {
    /// Create a moving average with the given window size.
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Get the window size.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Trailing means over `values`; `None` during the warm-up.
    pub fn smooth(&self, values: &[f64]) -> Result<Vec<Option<f64>>> {
        if self.window == 0 {
            return Err(ForecastError::InvalidParameter(
                "moving average window must be positive".to_string(),
            ));
        }

        let warm_up = (self.window - 1).min(values.len());
        let mut result = vec![None; warm_up];
        result.extend(
            values
                .windows(self.window)
                .map(|w| Some(w.iter().sum::<f64>() / self.window as f64)),
        );
        Ok(result)
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Forecaster for MovingAverage {
    fn fit_predict(&self, train: &[f64], series: &[f64]) -> Result<Predictions> {
        check_inputs(train, series)?;
        Ok(Predictions::new(self.smooth(series)?))
    }

    fn name(&self) -> &str {
        "Moving Average"
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::Classical
    }
}
