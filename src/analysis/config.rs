//! Configuration for an analysis run.

use crate::detection::SeasonalityConfig;
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Minimum number of observations required to start an analysis.
pub const MIN_OBSERVATIONS: usize = 10;

/// Hyperparameters and split settings of an analysis run.
///
/// Values are checked by [`AnalysisConfig::validate`] before any
/// computation starts, so a malformed setting is never discovered
/// mid-run.
///
/// # Example
/// ```
/// use series_forecast::analysis::AnalysisConfig;
///
/// let config = AnalysisConfig::default().with_train_ratio(0.7).with_alpha(0.5);
/// assert!(config.validate().is_ok());
///
/// let bad = AnalysisConfig::default().with_train_ratio(0.95);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Share of the series used for fitting, in `[0.5, 0.9]`.
    pub train_ratio: f64,
    /// Level smoothing parameter, in `(0, 1)`.
    pub alpha: f64,
    /// Trend smoothing parameter, in `(0, 1)`.
    pub beta: f64,
    /// Seasonal smoothing parameter, in `(0, 1)`.
    pub gamma: f64,
    /// Largest autocorrelation lag examined for seasonality.
    pub max_lag: usize,
    /// Window of the moving-average model.
    pub moving_average_window: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            train_ratio: 0.8,
            alpha: 0.3,
            beta: 0.1,
            gamma: 0.1,
            max_lag: 24,
            moving_average_window: 3,
        }
    }
}

impl AnalysisConfig {
    pub fn with_train_ratio(mut self, train_ratio: f64) -> Self {
        self.train_ratio = train_ratio;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = max_lag;
        self
    }

    pub fn with_moving_average_window(mut self, window: usize) -> Self {
        self.moving_average_window = window;
        self
    }

    /// Seasonality detection settings derived from this configuration.
    pub fn seasonality_config(&self) -> SeasonalityConfig {
        SeasonalityConfig::default().with_max_lag(self.max_lag)
    }

    /// Reject out-of-range settings.
    pub fn validate(&self) -> Result<()> {
        if !(0.5..=0.9).contains(&self.train_ratio) {
            return Err(ForecastError::InvalidParameter(format!(
                "train_ratio must be in [0.5, 0.9], got {}",
                self.train_ratio
            )));
        }
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta), ("gamma", self.gamma)] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ForecastError::InvalidParameter(format!(
                    "{} must be in (0, 1), got {}",
                    name, value
                )));
            }
        }
        if self.moving_average_window == 0 {
            return Err(ForecastError::InvalidParameter(
                "moving_average_window must be positive".to_string(),
            ));
        }
        self.seasonality_config().validate()
    }
}
