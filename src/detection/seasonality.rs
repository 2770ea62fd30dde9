//! Seasonality detection utilities.
//!
//! Detects the period of a repeating pattern from the sample
//! autocorrelation function. This is a heuristic peak picker, not a
//! spectral estimator.

use crate::error::{ForecastError, Result};
use crate::utils::stats;
use serde::{Deserialize, Serialize};

/// Autocorrelation value at a single lag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AutocorrelationPoint {
    pub lag: usize,
    pub value: f64,
}

/// Result of seasonality detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalityResult {
    /// The detected seasonal period (if any).
    pub period: Option<usize>,
    /// Autocorrelation for lags `1..=min(max_lag, n / 2)`.
    pub autocorrelogram: Vec<AutocorrelationPoint>,
}

impl SeasonalityResult {
    /// Whether a seasonal period was found.
    pub fn detected(&self) -> bool {
        self.period.is_some()
    }

    /// Autocorrelation at a lag, if it was computed.
    pub fn autocorrelation_at(&self, lag: usize) -> Option<f64> {
        self.autocorrelogram
            .iter()
            .find(|p| p.lag == lag)
            .map(|p| p.value)
    }
}

/// Configuration for seasonality detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityConfig {
    /// Maximum lag to consider.
    pub max_lag: usize,
    /// A peak must exceed this autocorrelation to count.
    pub threshold: f64,
}

impl Default for SeasonalityConfig {
    fn default() -> Self {
        Self {
            max_lag: 24,
            threshold: 0.3,
        }
    }
}

impl SeasonalityConfig {
    /// Set maximum lag.
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = max_lag;
        self
    }

    /// Set detection threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_lag == 0 {
            return Err(ForecastError::InvalidParameter(
                "max autocorrelation lag must be positive".to_string(),
            ));
        }
        if !self.threshold.is_finite() {
            return Err(ForecastError::InvalidParameter(
                "seasonality threshold must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Detect seasonality using the autocorrelation function.
///
/// A lag is a candidate when its autocorrelation is a strict local maximum
/// with respect to both neighbouring lags and exceeds the threshold. The
/// smallest candidate wins.
///
/// # Example
/// ```
/// use series_forecast::detection::{detect_seasonality, SeasonalityConfig};
///
/// let series: Vec<f64> = (0..48).map(|i| [1.0, 5.0, 9.0, 5.0][i % 4]).collect();
/// let result = detect_seasonality(&series, &SeasonalityConfig::default());
/// assert_eq!(result.period, Some(4));
/// ```
pub fn detect_seasonality(series: &[f64], config: &SeasonalityConfig) -> SeasonalityResult {
    let autocorrelogram = autocorrelogram(series, config.max_lag);

    let period = autocorrelogram
        .windows(3)
        .find(|w| {
            let (prev, curr, next) = (w[0].value, w[1].value, w[2].value);
            curr > prev && curr > next && curr > config.threshold
        })
        .map(|w| w[1].lag);

    SeasonalityResult {
        period,
        autocorrelogram,
    }
}

/// Detect seasonality with default configuration.
pub fn detect_seasonality_auto(series: &[f64]) -> SeasonalityResult {
    detect_seasonality(series, &SeasonalityConfig::default())
}

/// Sample autocorrelation for lags `1..=min(max_lag, n / 2)`.
///
/// Each lag uses the mean and population variance of the whole series,
/// normalized by `n * variance`. A zero-variance series yields zeros.
pub fn autocorrelogram(series: &[f64], max_lag: usize) -> Vec<AutocorrelationPoint> {
    let n = series.len();
    if n == 0 {
        return Vec::new();
    }

    let mean = stats::mean(series);
    let variance = if series.iter().all(|&x| x == series[0]) {
        0.0
    } else {
        stats::population_variance(series)
    };
    let denominator = n as f64 * variance;

    (1..=max_lag.min(n / 2))
        .map(|lag| {
            let value = if denominator > 0.0 {
                autocovariance(series, lag, mean) / denominator
            } else {
                0.0
            };
            AutocorrelationPoint { lag, value }
        })
        .collect()
}

/// Unnormalized lag-`lag` autocovariance around `mean`.
fn autocovariance(series: &[f64], lag: usize, mean: f64) -> f64 {
    series
        .iter()
        .skip(lag)
        .zip(series.iter())
        .map(|(x, x_lagged)| (x - mean) * (x_lagged - mean))
        .sum()
}
