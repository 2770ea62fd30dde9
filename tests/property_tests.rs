//! Property-based tests for statistics, models and the analysis pipeline.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated series.

use approx::assert_relative_eq;
use proptest::prelude::*;
use series_forecast::analysis::{analyze, AnalysisConfig};
use series_forecast::core::Series;
use series_forecast::detection::autocorrelogram;
use series_forecast::models::baseline::{LinearTrend, MovingAverage};
use series_forecast::models::exponential::SimpleExponentialSmoothing;
use series_forecast::models::Forecaster;
use series_forecast::utils::{evaluate, Statistics};

/// Strategy for generating positive series of a bounded length.
/// Adds small variation to avoid all-constant series.
fn valid_values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| {
        prop::collection::vec(1.0..1000.0_f64, len).prop_map(|mut v| {
            for (i, val) in v.iter_mut().enumerate() {
                *val += (i as f64) * 0.001;
            }
            v
        })
    })
}

/// Strategy for generating exact straight lines.
fn trending_values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| {
        (0.0..100.0_f64, 0.1..2.0_f64)
            .prop_map(move |(base, slope)| (0..len).map(|i| base + slope * i as f64).collect())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn std_squared_is_variance(values in valid_values_strategy(1, 200)) {
        let stats = Statistics::compute(&values).unwrap();
        assert_relative_eq!(stats.std * stats.std, stats.variance, max_relative = 1e-9);
        prop_assert!(stats.min <= stats.median && stats.median <= stats.max);
        prop_assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }

    #[test]
    fn moving_average_warm_up_and_means(values in valid_values_strategy(3, 80), window in 1usize..6) {
        let preds = MovingAverage::new(window).fit_predict(&values, &values).unwrap();
        prop_assert_eq!(preds.len(), values.len());
        for i in 0..values.len() {
            if i + 1 < window {
                prop_assert!(preds.get(i).is_none());
            } else {
                let mean = values[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
                assert_relative_eq!(preds.get(i).unwrap(), mean, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn ses_alpha_one_reproduces_input(values in valid_values_strategy(1, 80)) {
        let preds = SimpleExponentialSmoothing::new(1.0).fit_predict(&values, &values).unwrap();
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(preds.get(i), Some(v));
        }
    }

    #[test]
    fn ses_alpha_zero_is_constant(values in valid_values_strategy(1, 80)) {
        let preds = SimpleExponentialSmoothing::new(0.0).fit_predict(&values, &values).unwrap();
        for i in 0..values.len() {
            prop_assert_eq!(preds.get(i), Some(values[0]));
        }
    }

    #[test]
    fn linear_trend_recovers_lines(values in trending_values_strategy(10, 100)) {
        let train_size = values.len() * 4 / 5;
        let preds = LinearTrend::new()
            .fit_predict(&values[..train_size], &values)
            .unwrap();
        let metrics = evaluate(&values[train_size..], preds.window(train_size..values.len()).unwrap()).unwrap();
        prop_assert!(metrics.rmse < 1e-6);
    }

    #[test]
    fn rmse_is_root_of_mse(
        actual in prop::collection::vec(-500.0..500.0_f64, 1..50),
        noise in prop::collection::vec(-10.0..10.0_f64, 50),
    ) {
        let predicted: Vec<Option<f64>> = actual
            .iter()
            .zip(noise.iter())
            .map(|(a, n)| Some(a + n))
            .collect();
        let metrics = evaluate(&actual, &predicted).unwrap();
        assert_relative_eq!(metrics.rmse, metrics.mse.sqrt(), max_relative = 1e-12);
        prop_assert!(metrics.mae <= metrics.rmse + 1e-12);
        prop_assert_eq!(metrics.n_valid, actual.len());
    }

    #[test]
    fn autocorrelations_are_bounded(values in valid_values_strategy(2, 120), max_lag in 1usize..40) {
        let acf = autocorrelogram(&values, max_lag);
        prop_assert_eq!(acf.len(), max_lag.min(values.len() / 2));
        for (k, point) in acf.iter().enumerate() {
            prop_assert_eq!(point.lag, k + 1);
            prop_assert!(point.value.abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn analysis_accounts_for_every_candidate(values in valid_values_strategy(10, 120)) {
        let series = Series::from_values(values.clone()).unwrap();
        let result = analyze(&series, &AnalysisConfig::default()).unwrap();

        let ranked = result.models().len();
        prop_assert_eq!(ranked + result.skipped().len() + result.failed().len(), 6);
        prop_assert!(ranked >= 4);

        for pair in result.models().windows(2) {
            prop_assert!(pair[0].metrics.rmse <= pair[1].metrics.rmse);
        }
        for model in result.models() {
            prop_assert_eq!(model.predictions.len(), values.len());
            prop_assert!(!model.metrics.rmse.is_nan());
        }
        prop_assert_eq!(
            result.residuals().len(),
            result.best_model().predictions.defined_count()
        );
    }
}
