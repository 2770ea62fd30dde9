//! Accuracy metrics for forecast evaluation.

use crate::error::{ForecastError, Result};
use serde::Serialize;

/// Effective parameter count used by the information criteria.
///
/// Applied uniformly to every model family regardless of how many
/// parameters the model actually has, so AIC/BIC are only comparable
/// between models of the same run.
pub const INFORMATION_CRITERION_PARAMS: usize = 3;

/// Error metrics of a model over an evaluation window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSet {
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Absolute Percentage Error, in percent
    pub mape: f64,
    /// Akaike Information Criterion (None on a perfect fit, where ln(0) is undefined)
    pub aic: Option<f64>,
    /// Bayesian Information Criterion (None on a perfect fit)
    pub bic: Option<f64>,
    /// Number of pairs that contributed to the metrics
    pub n_valid: usize,
}

/// Compare `actual` against aligned `predicted` values.
///
/// Pairs whose prediction is undefined or non-finite are skipped and do
/// not contribute to any sum. MAPE ignores pairs whose actual value is
/// zero but still divides by the number of valid pairs.
///
/// # Example
/// ```
/// use series_forecast::utils::evaluate;
///
/// let metrics = evaluate(&[1.0, 2.0, 3.0], &[None, Some(2.5), Some(2.5)]).unwrap();
/// assert_eq!(metrics.n_valid, 2);
/// assert_eq!(metrics.mae, 0.5);
/// assert_eq!(metrics.mse, 0.25);
/// ```
pub fn evaluate(actual: &[f64], predicted: &[Option<f64>]) -> Result<MetricSet> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    if actual.len() != predicted.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }

    let mut n_valid = 0usize;
    let mut sum_sq = 0.0;
    let mut sum_abs = 0.0;
    let mut sum_pct = 0.0;

    for (&a, p) in actual.iter().zip(predicted.iter()) {
        let p = match p {
            Some(p) if p.is_finite() => *p,
            _ => continue,
        };
        let error = a - p;
        sum_sq += error * error;
        sum_abs += error.abs();
        if a != 0.0 {
            sum_pct += (error / a).abs();
        }
        n_valid += 1;
    }

    if n_valid == 0 {
        return Err(ForecastError::NoValidPredictions);
    }

    let n = n_valid as f64;
    let mse = sum_sq / n;
    let k = INFORMATION_CRITERION_PARAMS as f64;
    let log_likelihood_term = n * mse.ln();
    let (aic, bic) = if log_likelihood_term.is_finite() {
        (
            Some(log_likelihood_term + 2.0 * k),
            Some(log_likelihood_term + k * n.ln()),
        )
    } else {
        (None, None)
    };

    Ok(MetricSet {
        mse,
        rmse: mse.sqrt(),
        mae: sum_abs / n,
        mape: 100.0 * sum_pct / n,
        aic,
        bic,
        n_valid,
    })
}

/// Residuals `actual - predicted` at every position with a defined,
/// finite prediction, keyed by position.
pub fn residuals(actual: &[f64], predicted: &[Option<f64>]) -> Vec<(usize, f64)> {
    actual
        .iter()
        .zip(predicted.iter())
        .enumerate()
        .filter_map(|(i, (&a, p))| match p {
            Some(p) if p.is_finite() => Some((i, a - p)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn defined(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn known_values() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let predicted = defined(&[1.5, 2.5, 2.5, 4.5, 4.5]);

        let metrics = evaluate(&actual, &predicted).unwrap();

        assert_eq!(metrics.n_valid, 5);
        assert_relative_eq!(metrics.mae, 0.5, epsilon = 1e-10);
        assert_relative_eq!(metrics.mse, 0.25, epsilon = 1e-10);
        assert_relative_eq!(metrics.rmse, 0.5, epsilon = 1e-10);
        let expected_aic = 5.0 * 0.25_f64.ln() + 6.0;
        let expected_bic = 5.0 * 0.25_f64.ln() + 3.0 * 5.0_f64.ln();
        assert_relative_eq!(metrics.aic.unwrap(), expected_aic, epsilon = 1e-10);
        assert_relative_eq!(metrics.bic.unwrap(), expected_bic, epsilon = 1e-10);
    }

    #[test]
    fn rmse_is_sqrt_of_mse() {
        let actual = vec![3.0, -1.0, 7.5, 2.0];
        let predicted = defined(&[2.0, 0.5, 8.0, -1.0]);
        let metrics = evaluate(&actual, &predicted).unwrap();
        assert_eq!(metrics.rmse, metrics.mse.sqrt());
    }

    #[test]
    fn mape_excludes_zero_actuals() {
        let actual = vec![0.0, 2.0, 4.0];
        let predicted = defined(&[1.0, 2.0, 5.0]);

        let metrics = evaluate(&actual, &predicted).unwrap();

        // Only |(4-5)/4| = 0.25 enters the sum; the divisor is n_valid.
        assert_eq!(metrics.n_valid, 3);
        assert_relative_eq!(metrics.mape, 100.0 * 0.25 / 3.0, epsilon = 1e-10);
        assert!(metrics.mape.is_finite());
    }

    #[test]
    fn undefined_predictions_are_skipped() {
        let actual = vec![1.0, 2.0, 3.0, 4.0];
        let predicted = vec![None, Some(f64::NAN), Some(3.0), Some(5.0)];

        let metrics = evaluate(&actual, &predicted).unwrap();

        assert_eq!(metrics.n_valid, 2);
        assert_relative_eq!(metrics.mse, 0.5, epsilon = 1e-10);
        assert_relative_eq!(metrics.mae, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn perfect_fit_has_undefined_information_criteria() {
        let actual = vec![1.0, 2.0, 3.0];
        let metrics = evaluate(&actual, &defined(&actual)).unwrap();
        assert_eq!(metrics.mse, 0.0);
        assert_eq!(metrics.rmse, 0.0);
        assert!(metrics.aic.is_none());
        assert!(metrics.bic.is_none());
    }

    #[test]
    fn all_undefined_is_an_error() {
        let result = evaluate(&[1.0, 2.0], &[None, None]);
        assert!(matches!(result, Err(ForecastError::NoValidPredictions)));
    }

    #[test]
    fn dimension_mismatch() {
        let result = evaluate(&[1.0, 2.0, 3.0], &defined(&[1.0, 2.0]));
        assert!(matches!(
            result,
            Err(ForecastError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn empty_data() {
        assert!(matches!(evaluate(&[], &[]), Err(ForecastError::EmptyData)));
    }

    #[test]
    fn residuals_skip_undefined_positions() {
        let actual = vec![1.0, 2.0, 3.0, 4.0];
        let predicted = vec![None, Some(1.5), Some(f64::INFINITY), Some(5.0)];
        let res = residuals(&actual, &predicted);
        assert_eq!(res, vec![(1, 0.5), (3, -1.0)]);
    }
}
