//! Holt-Winters forecasting model.
//!
//! Also known as triple exponential smoothing, this model handles
//! data with both trend and seasonality.

use crate::core::Predictions;
use crate::error::{ForecastError, Result};
use crate::models::traits::{check_inputs, check_smoothing_parameter};
use crate::models::{Forecaster, ModelFamily};
use crate::utils::stats::safe_divide;
use serde::Serialize;

/// Type of seasonal component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalType {
    /// Additive seasonality: y_t = l_t + b_t + s_t + e_t
    #[default]
    Additive,
    /// Multiplicative seasonality: y_t = (l_t + b_t) * s_t + e_t
    Multiplicative,
}

/// Fixed-size ring of seasonal indices, addressed by `t mod period`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalIndices {
    slots: Box<[f64]>,
}

impl SeasonalIndices {
    /// Create from one full season of seed values.
    pub fn new(seed: Vec<f64>) -> Result<Self> {
        if seed.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "seasonal period must be positive".to_string(),
            ));
        }
        Ok(Self {
            slots: seed.into_boxed_slice(),
        })
    }

    pub fn period(&self) -> usize {
        self.slots.len()
    }

    /// Index for time `t`.
    #[inline]
    pub fn get(&self, t: usize) -> f64 {
        self.slots[t % self.slots.len()]
    }

    /// Overwrite the index for time `t`.
    #[inline]
    pub fn set(&mut self, t: usize, value: f64) {
        let len = self.slots.len();
        self.slots[t % len] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.slots
    }
}

/// Holt-Winters forecaster.
///
/// With `k = t mod m`, the additive model iterates:
/// - Level: `l_t = α(y_t - s_k) + (1-α)(l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β(l_t - l_{t-1}) + (1-β)b_{t-1}`
/// - Seasonal: `s_k ← γ(y_t - l_t) + (1-γ)s_k`
/// - Prediction: `l_t + b_t + s_k`
///
/// The multiplicative model divides instead of subtracting and predicts
/// `(l_t + b_t) * s_k`. Every division by a seasonal index or level goes
/// through [`safe_divide`], so an exact zero is replaced by one.
///
/// State is seeded from the raw series: `l_0 = y_0`,
/// `b_0 = (y_m - y_0) / m`, and `s_j = y_j - l_0` (or `y_j / l_0`) for
/// `j < m`. Position 0 predicts `y_0`.
#[derive(Debug, Clone)]
pub struct HoltWinters {
    /// Level smoothing parameter.
    alpha: f64,
    /// Trend smoothing parameter.
    beta: f64,
    /// Seasonal smoothing parameter.
    gamma: f64,
    /// Seasonal period.
    seasonal_period: usize,
    /// Type of seasonality.
    seasonal_type: SeasonalType,
}

impl HoltWinters {
    /// Create a new Holt-Winters model with fixed parameters.
    pub fn new(
        alpha: f64,
        beta: f64,
        gamma: f64,
        seasonal_period: usize,
        seasonal_type: SeasonalType,
    ) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            seasonal_period,
            seasonal_type,
        }
    }

    /// Create a new Holt-Winters model with additive seasonality.
    pub fn additive(alpha: f64, beta: f64, gamma: f64, seasonal_period: usize) -> Self {
        Self::new(alpha, beta, gamma, seasonal_period, SeasonalType::Additive)
    }

    /// Create a new Holt-Winters model with multiplicative seasonality.
    pub fn multiplicative(alpha: f64, beta: f64, gamma: f64, seasonal_period: usize) -> Self {
        Self::new(
            alpha,
            beta,
            gamma,
            seasonal_period,
            SeasonalType::Multiplicative,
        )
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Get the seasonal period.
    pub fn seasonal_period(&self) -> usize {
        self.seasonal_period
    }

    /// Get the seasonal type.
    pub fn seasonal_type(&self) -> SeasonalType {
        self.seasonal_type
    }

    fn validate(&self, n: usize) -> Result<()> {
        check_smoothing_parameter("alpha", self.alpha)?;
        check_smoothing_parameter("beta", self.beta)?;
        check_smoothing_parameter("gamma", self.gamma)?;
        if self.seasonal_period == 0 {
            return Err(ForecastError::InvalidParameter(
                "seasonal period must be positive".to_string(),
            ));
        }
        if n <= self.seasonal_period {
            return Err(ForecastError::InsufficientData {
                needed: self.seasonal_period + 1,
                got: n,
            });
        }
        Ok(())
    }

    /// Seed the level, trend and seasonal indices from the raw series.
    fn initialize_state(&self, values: &[f64]) -> Result<(f64, f64, SeasonalIndices)> {
        let m = self.seasonal_period;
        let level = values[0];
        let trend = (values[m] - values[0]) / m as f64;

        let seed: Vec<f64> = match self.seasonal_type {
            SeasonalType::Additive => values[..m].iter().map(|y| y - level).collect(),
            SeasonalType::Multiplicative => values[..m]
                .iter()
                .map(|&y| safe_divide(y, level, 1.0))
                .collect(),
        };

        Ok((level, trend, SeasonalIndices::new(seed)?))
    }

    /// Run the recursion over `values` and return the in-sample predictions.
    pub fn smooth(&self, values: &[f64]) -> Result<Vec<f64>> {
        self.validate(values.len())?;

        let (mut level, mut trend, mut seasonals) = self.initialize_state(values)?;
        let (alpha, beta, gamma) = (self.alpha, self.beta, self.gamma);

        let mut result = Vec::with_capacity(values.len());
        result.push(values[0]);

        for (t, &y) in values.iter().enumerate().skip(1) {
            let prev_level = level;
            let season = seasonals.get(t);

            let prediction = match self.seasonal_type {
                SeasonalType::Additive => {
                    level = alpha * (y - season) + (1.0 - alpha) * (prev_level + trend);
                    trend = beta * (level - prev_level) + (1.0 - beta) * trend;
                    seasonals.set(t, gamma * (y - level) + (1.0 - gamma) * season);
                    level + trend + seasonals.get(t)
                }
                SeasonalType::Multiplicative => {
                    level = alpha * safe_divide(y, season, 1.0)
                        + (1.0 - alpha) * (prev_level + trend);
                    trend = beta * (level - prev_level) + (1.0 - beta) * trend;
                    seasonals.set(
                        t,
                        gamma * safe_divide(y, level, 1.0) + (1.0 - gamma) * season,
                    );
                    (level + trend) * seasonals.get(t)
                }
            };
            result.push(prediction);
        }

        Ok(result)
    }
}

impl Forecaster for HoltWinters {
    fn fit_predict(&self, train: &[f64], series: &[f64]) -> Result<Predictions> {
        check_inputs(train, series)?;
        Ok(Predictions::from_values(self.smooth(series)?))
    }

    fn name(&self) -> &str {
        match self.seasonal_type {
            SeasonalType::Additive => "Holt-Winters Additive",
            SeasonalType::Multiplicative => "Holt-Winters Multiplicative",
        }
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::Smoothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seasonal_series(n: usize, period: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                50.0 + 0.5 * i as f64
                    + 10.0 * (2.0 * std::f64::consts::PI * i as f64 / period as f64).sin()
            })
            .collect()
    }

    #[test]
    fn ring_buffer_wraps() {
        let mut ring = SeasonalIndices::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(ring.period(), 3);
        assert_eq!(ring.get(4), 2.0);
        ring.set(7, 9.0);
        assert_eq!(ring.as_slice(), &[1.0, 9.0, 3.0]);
        assert!(SeasonalIndices::new(vec![]).is_err());
    }

    #[test]
    fn additive_known_calculation() {
        // m = 2, y = [10, 14, 12, 16]
        // l_0 = 10, b_0 = (12 - 10) / 2 = 1, s = [0, 4]
        // t=1 (k=1): l = 0.5*(14-4) + 0.5*(10+1) = 10.5
        //            b = 0.5*(0.5) + 0.5*1 = 0.75
        //            s_1 = 0.5*(14-10.5) + 0.5*4 = 3.75
        //            pred = 10.5 + 0.75 + 3.75 = 15
        // t=2 (k=0): l = 0.5*(12-0) + 0.5*(10.5+0.75) = 11.625
        //            b = 0.5*(1.125) + 0.5*0.75 = 0.9375
        //            s_0 = 0.5*(12-11.625) + 0 = 0.1875
        //            pred = 11.625 + 0.9375 + 0.1875 = 12.75
        let model = HoltWinters::additive(0.5, 0.5, 0.5, 2);
        let preds = model.smooth(&[10.0, 14.0, 12.0, 16.0]).unwrap();
        assert_eq!(preds.len(), 4);
        assert_relative_eq!(preds[0], 10.0, epsilon = 1e-12);
        assert_relative_eq!(preds[1], 15.0, epsilon = 1e-12);
        assert_relative_eq!(preds[2], 12.75, epsilon = 1e-12);
    }

    #[test]
    fn multiplicative_known_calculation() {
        // m = 2, y = [10, 20, 12]
        // l_0 = 10, b_0 = (12 - 10) / 2 = 1, s = [1, 2]
        // t=1 (k=1): l = 0.5*(20/2) + 0.5*(10+1) = 10.5
        //            b = 0.5*0.5 + 0.5*1 = 0.75
        //            s_1 = 0.5*(20/10.5) + 0.5*2
        //            pred = (10.5 + 0.75) * s_1
        let model = HoltWinters::multiplicative(0.5, 0.5, 0.5, 2);
        let preds = model.smooth(&[10.0, 20.0, 12.0]).unwrap();
        let s1 = 0.5 * (20.0 / 10.5) + 1.0;
        assert_relative_eq!(preds[0], 10.0, epsilon = 1e-12);
        assert_relative_eq!(preds[1], 11.25 * s1, epsilon = 1e-12);
    }

    #[test]
    fn multiplicative_guards_zero_denominators() {
        // A zero first observation makes l_0 = 0 and several seasonal
        // indices 0; every prediction must stay finite.
        let values = vec![0.0, 0.0, 5.0, 0.0, 0.0, 6.0, 0.0, 0.0, 7.0, 0.0];
        let model = HoltWinters::multiplicative(0.3, 0.1, 0.1, 3);
        let preds = model.smooth(&values).unwrap();
        assert_eq!(preds.len(), values.len());
        assert!(preds.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn additive_tracks_seasonal_series() {
        let values = seasonal_series(96, 12);
        let preds = HoltWinters::additive(0.3, 0.1, 0.1, 12)
            .fit_predict(&values[..76], &values)
            .unwrap();
        assert_eq!(preds.defined_count(), 96);
        let tail_error: f64 = (84..96)
            .map(|i| (values[i] - preds.get(i).unwrap()).abs())
            .sum::<f64>()
            / 12.0;
        assert!(tail_error < 10.0, "mean abs error {}", tail_error);
    }

    #[test]
    fn requires_more_than_one_season() {
        let result = HoltWinters::additive(0.3, 0.1, 0.1, 4).smooth(&[1.0, 2.0, 3.0, 4.0]);
        assert!(matches!(
            result,
            Err(ForecastError::InsufficientData { needed: 5, got: 4 })
        ));
    }

    #[test]
    fn zero_period_is_rejected() {
        let result = HoltWinters::additive(0.3, 0.1, 0.1, 0).smooth(&[1.0, 2.0]);
        assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
    }

    #[test]
    fn names_follow_seasonal_type() {
        assert_eq!(
            HoltWinters::additive(0.3, 0.1, 0.1, 4).name(),
            "Holt-Winters Additive"
        );
        let model = HoltWinters::multiplicative(0.3, 0.1, 0.1, 4);
        assert_eq!(model.name(), "Holt-Winters Multiplicative");
        assert_eq!(model.seasonal_type(), SeasonalType::Multiplicative);
        assert_eq!(model.seasonal_period(), 4);
    }
}
