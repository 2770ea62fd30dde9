//! Holt's Linear Trend forecasting model.
//!
//! Also known as double exponential smoothing, this model is suitable for
//! data with a linear trend but no seasonality.

use crate::core::Predictions;
use crate::error::{ForecastError, Result};
use crate::models::traits::{check_inputs, check_smoothing_parameter};
use crate::models::{Forecaster, ModelFamily};

/// Holt's Linear Trend forecaster.
///
/// The model equations are:
/// - Init: `l_0 = y_0`, `b_0 = y_1 - y_0`
/// - Level: `l_t = α × y_t + (1-α) × (l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β × (l_t - l_{t-1}) + (1-β) × b_{t-1}`
/// - Prediction at `t`: `l_t`
///
/// The prediction is the level alone, without the trend term that the
/// Holt-Winters models add.
#[derive(Debug, Clone)]
pub struct HoltLinearTrend {
    /// Level smoothing parameter.
    alpha: f64,
    /// Trend smoothing parameter.
    beta: f64,
}

/// Level and trend states of a Holt recursion, one entry per position.
#[derive(Debug, Clone, PartialEq)]
pub struct HoltComponents {
    pub level: Vec<f64>,
    pub trend: Vec<f64>,
}

impl HoltLinearTrend {
    /// Create a new Holt model with fixed parameters.
    ///
    /// # Arguments
    /// * `alpha` - Level smoothing parameter (0 <= alpha <= 1)
    /// * `beta` - Trend smoothing parameter (0 <= beta <= 1)
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Get the level smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the trend smoothing parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Run the recursion over `values` and return both state sequences.
    pub fn components(&self, values: &[f64]) -> Result<HoltComponents> {
        check_smoothing_parameter("alpha", self.alpha)?;
        check_smoothing_parameter("beta", self.beta)?;

        if values.len() < 2 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: values.len(),
            });
        }

        let n = values.len();
        let mut level = Vec::with_capacity(n);
        let mut trend = Vec::with_capacity(n);
        level.push(values[0]);
        trend.push(values[1] - values[0]);

        for t in 1..n {
            let (prev_level, prev_trend) = (level[t - 1], trend[t - 1]);
            let l = self.alpha * values[t] + (1.0 - self.alpha) * (prev_level + prev_trend);
            let b = self.beta * (l - prev_level) + (1.0 - self.beta) * prev_trend;
            level.push(l);
            trend.push(b);
        }

        Ok(HoltComponents { level, trend })
    }
}

impl Default for HoltLinearTrend {
    fn default() -> Self {
        Self::new(0.3, 0.1)
    }
}

impl Forecaster for HoltLinearTrend {
    fn fit_predict(&self, train: &[f64], series: &[f64]) -> Result<Predictions> {
        check_inputs(train, series)?;
        let components = self.components(series)?;
        Ok(Predictions::from_values(components.level))
    }

    fn name(&self) -> &str {
        "Holt Linear Trend"
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::Smoothing
    }
}
