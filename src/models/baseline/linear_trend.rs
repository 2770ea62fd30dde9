//! Linear trend regression.

use crate::core::Predictions;
use crate::error::Result;
use crate::models::traits::check_inputs;
use crate::models::{Forecaster, ModelFamily};
use crate::utils::ols::{ols_fit_positions, LinearFit};

/// Linear trend forecaster.
///
/// Fits `value = slope * position + intercept` by ordinary least squares on
/// the training positions `0..train.len()` and evaluates the line at every
/// position of the full series, extrapolating past the training range.
#[derive(Debug, Clone, Default)]
pub struct LinearTrend;

impl LinearTrend {
    pub fn new() -> Self {
        Self
    }

    /// Fit the trend line on a training segment.
    pub fn fit(train: &[f64]) -> Result<LinearFit> {
        ols_fit_positions(train)
    }
}

impl Forecaster for LinearTrend {
    fn fit_predict(&self, train: &[f64], series: &[f64]) -> Result<Predictions> {
        check_inputs(train, series)?;
        let line = Self::fit(train)?;
        Ok(Predictions::from_values(
            (0..series.len()).map(|i| line.predict(i as f64)).collect(),
        ))
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::Classical
    }
}
