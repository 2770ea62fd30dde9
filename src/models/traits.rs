//! Forecaster trait defining the common interface for all models.

use crate::core::Predictions;
use crate::error::{ForecastError, Result};
use serde::Serialize;
use std::fmt;

/// Broad family a forecasting model belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    /// Non-recursive baselines (moving average, regression).
    Classical,
    /// Recursive exponential smoothing.
    Smoothing,
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFamily::Classical => f.write_str("classical"),
            ModelFamily::Smoothing => f.write_str("smoothing"),
        }
    }
}

/// Common interface for all forecasting models.
///
/// Implementations are pure: hyperparameters are fixed at construction
/// and `fit_predict` only reads its inputs. The trait is object-safe and
/// can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Fit whatever the model needs from `train` and produce one
    /// prediction per position of `series`.
    ///
    /// `train` is the leading segment of `series`. Models without fitted
    /// parameters iterate over `series` directly.
    fn fit_predict(&self, train: &[f64], series: &[f64]) -> Result<Predictions>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Get the model family.
    fn family(&self) -> ModelFamily;
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use series_forecast::models::{BoxedForecaster, Forecaster};
/// use series_forecast::models::baseline::MovingAverage;
///
/// let model: BoxedForecaster = Box::new(MovingAverage::new(3));
/// assert_eq!(model.name(), "Moving Average");
/// ```
pub type BoxedForecaster = Box<dyn Forecaster + Send + Sync>;

/// Ordered collection of forecasters evaluated in one run.
///
/// # Example
///
/// ```
/// use series_forecast::models::ModelRegistry;
/// use series_forecast::models::baseline::{LinearTrend, MovingAverage};
///
/// let mut registry = ModelRegistry::new();
/// registry.register(Box::new(MovingAverage::new(3)));
/// registry.register(Box::new(LinearTrend::new()));
///
/// let names: Vec<_> = registry.iter().map(|m| m.name()).collect();
/// assert_eq!(names, vec!["Moving Average", "Linear Regression"]);
/// ```
#[derive(Default)]
pub struct ModelRegistry {
    models: Vec<BoxedForecaster>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Register a model. Registration order is evaluation order.
    pub fn register(&mut self, model: BoxedForecaster) {
        self.models.push(model);
    }

    /// Get the number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterate over the registered models in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BoxedForecaster> {
        self.models.iter()
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.models.iter().map(|m| m.name()))
            .finish()
    }
}

/// Shared input validation for `fit_predict` implementations.
pub(crate) fn check_inputs(train: &[f64], series: &[f64]) -> Result<()> {
    if series.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if train.len() > series.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: series.len(),
            got: train.len(),
        });
    }
    Ok(())
}

/// Shared validation for smoothing parameters, which must lie in `[0, 1]`.
pub(crate) fn check_smoothing_parameter(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ForecastError::InvalidParameter(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )))
    }
}
