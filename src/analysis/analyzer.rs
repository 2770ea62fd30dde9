//! Analysis orchestration: split, describe, detect, fit, score and rank.

use super::config::{AnalysisConfig, MIN_OBSERVATIONS};
use super::result::{AnalysisResult, FailedModel, ModelResult, Residual, SkipReason, SkippedModel};
use crate::core::{Series, TrainTestSplit};
use crate::detection::detect_seasonality;
use crate::error::{ForecastError, Result};
use crate::models::baseline::{LinearTrend, MovingAverage};
use crate::models::exponential::{HoltLinearTrend, HoltWinters, SimpleExponentialSmoothing};
use crate::models::{Forecaster, ModelRegistry};
use crate::utils::{evaluate, residuals, Statistics};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Observable lifecycle of an [`Analyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerStatus {
    Idle,
    Running,
    Completed,
}

#[derive(Debug)]
enum AnalyzerState {
    Idle,
    Running,
    Completed(Arc<AnalysisResult>),
}

impl AnalyzerState {
    fn from_previous(previous: Option<Arc<AnalysisResult>>) -> Self {
        previous.map_or(AnalyzerState::Idle, AnalyzerState::Completed)
    }
}

/// Runs analyses one at a time and keeps the latest result.
///
/// A second `run` while one is in progress is rejected with
/// [`ForecastError::AnalysisInProgress`]. A failed run leaves the
/// previous result in place.
///
/// # Example
/// ```
/// use series_forecast::analysis::{AnalysisConfig, Analyzer, AnalyzerStatus};
/// use series_forecast::core::Series;
///
/// let series = Series::from_values(vec![
///     10.0, 12.0, 13.0, 12.0, 15.0, 16.0, 14.0, 17.0, 19.0, 18.0, 20.0, 22.0,
/// ])
/// .unwrap();
///
/// let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
/// let result = analyzer.run(&series).unwrap();
///
/// assert_eq!(result.models().len(), 4);
/// assert_eq!(analyzer.status(), AnalyzerStatus::Completed);
/// ```
#[derive(Debug)]
pub struct Analyzer {
    config: AnalysisConfig,
    state: Mutex<AnalyzerState>,
}

impl Analyzer {
    /// Create an idle analyzer. The configuration is validated here.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: Mutex::new(AnalyzerState::Idle),
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn status(&self) -> AnalyzerStatus {
        match *self.lock() {
            AnalyzerState::Idle => AnalyzerStatus::Idle,
            AnalyzerState::Running => AnalyzerStatus::Running,
            AnalyzerState::Completed(_) => AnalyzerStatus::Completed,
        }
    }

    /// The result of the last successful run.
    pub fn result(&self) -> Option<Arc<AnalysisResult>> {
        match &*self.lock() {
            AnalyzerState::Completed(result) => Some(Arc::clone(result)),
            _ => None,
        }
    }

    /// Discard a completed result. Has no effect while a run is in progress.
    pub fn clear(&self) {
        let mut state = self.lock();
        if let AnalyzerState::Completed(_) = *state {
            *state = AnalyzerState::Idle;
        }
    }

    /// Analyze `series` and store the result.
    pub fn run(&self, series: &Series) -> Result<Arc<AnalysisResult>> {
        let guard = self.begin(series.len())?;
        let outcome = analyze(series, &self.config);
        match outcome {
            Ok(result) => Ok(guard.complete(result)),
            Err(e) => {
                warn!(error = %e, "Analysis failed");
                Err(e)
            }
        }
    }

    fn begin(&self, observations: usize) -> Result<RunGuard<'_>> {
        let mut state = self.lock();
        if let AnalyzerState::Running = *state {
            return Err(ForecastError::AnalysisInProgress);
        }
        if observations < MIN_OBSERVATIONS {
            return Err(ForecastError::InsufficientData {
                needed: MIN_OBSERVATIONS,
                got: observations,
            });
        }
        let previous = match std::mem::replace(&mut *state, AnalyzerState::Running) {
            AnalyzerState::Completed(result) => Some(result),
            _ => None,
        };
        Ok(RunGuard {
            analyzer: self,
            previous: Some(previous),
        })
    }

    fn lock(&self) -> MutexGuard<'_, AnalyzerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Leaves the Running state on every exit path. Dropping it without
/// [`RunGuard::complete`] restores what was there before the run.
struct RunGuard<'a> {
    analyzer: &'a Analyzer,
    previous: Option<Option<Arc<AnalysisResult>>>,
}

impl RunGuard<'_> {
    fn complete(mut self, result: AnalysisResult) -> Arc<AnalysisResult> {
        let result = Arc::new(result);
        self.previous = None;
        *self.analyzer.lock() = AnalyzerState::Completed(Arc::clone(&result));
        result
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            *self.analyzer.lock() = AnalyzerState::from_previous(previous);
        }
    }
}

/// Run a complete analysis of `series` without touching any analyzer state.
///
/// Models are evaluated in a fixed order (moving average, linear
/// regression, SES, Holt, then the two Holt-Winters variants when a
/// usable period was found) and ranked by ascending test RMSE.
pub fn analyze(series: &Series, config: &AnalysisConfig) -> Result<AnalysisResult> {
    config.validate()?;
    if series.len() < MIN_OBSERVATIONS {
        return Err(ForecastError::InsufficientData {
            needed: MIN_OBSERVATIONS,
            got: series.len(),
        });
    }

    let values = series.values();
    let split = series.split(config.train_ratio)?;
    info!(
        observations = values.len(),
        train_size = split.train_size,
        test_size = split.test_size,
        "Starting forecast analysis"
    );

    let statistics = Statistics::compute(values)?;
    debug!(
        mean = statistics.mean,
        std = statistics.std,
        min = statistics.min,
        max = statistics.max,
        "Computed descriptive statistics"
    );
    if statistics.is_degenerate() {
        warn!("Series has zero variance; higher moments are undefined");
    }

    let seasonality = detect_seasonality(values, &config.seasonality_config());
    match seasonality.period {
        Some(period) => info!(period, "Seasonality detected"),
        None => info!("No significant seasonality detected"),
    }

    let (registry, skipped) = candidate_models(config, seasonality.period, split.train_size);
    for model in &skipped {
        debug!(model = %model.name, reason = ?model.reason, "Model skipped");
    }

    let mut models = Vec::with_capacity(registry.len());
    let mut failed = Vec::new();
    for model in registry.iter() {
        match score_model(&**model, values, split) {
            Ok(result) => {
                info!(
                    model = %result.name,
                    rmse = result.metrics.rmse,
                    aic = ?result.metrics.aic,
                    "Model evaluated"
                );
                models.push(result);
            }
            Err(e) => {
                warn!(model = model.name(), error = %e, "Model failed");
                failed.push(FailedModel {
                    name: model.name().to_string(),
                    error: e,
                });
            }
        }
    }

    if models.is_empty() {
        return Err(ForecastError::NoRankedModels);
    }

    // Stable: ties keep evaluation order.
    models.sort_by(|a, b| a.metrics.rmse.total_cmp(&b.metrics.rmse));

    let best = &models[0];
    let observations = series.observations();
    let residuals = residuals(values, best.predictions.as_slice())
        .into_iter()
        .map(|(i, value)| Residual {
            index: observations[i].index,
            value,
        })
        .collect();

    let result = AnalysisResult::new(statistics, seasonality, split, models, residuals, skipped, failed);
    for (rank, name, rmse) in result.ranking() {
        info!(rank, model = name, rmse, "Ranking");
    }
    info!(best = %result.best_model().name, "Analysis complete");

    Ok(result)
}

/// Build the ordered candidate list for a run.
///
/// The Holt-Winters models are only admitted when a period was detected
/// and it is shorter than half the training segment.
pub fn candidate_models(
    config: &AnalysisConfig,
    period: Option<usize>,
    train_size: usize,
) -> (ModelRegistry, Vec<SkippedModel>) {
    let mut registry = ModelRegistry::new();
    registry.register(Box::new(MovingAverage::new(config.moving_average_window)));
    registry.register(Box::new(LinearTrend::new()));
    registry.register(Box::new(SimpleExponentialSmoothing::new(config.alpha)));
    registry.register(Box::new(HoltLinearTrend::new(config.alpha, config.beta)));

    let seasonal_period = period.unwrap_or(0);
    let seasonal = [
        HoltWinters::additive(config.alpha, config.beta, config.gamma, seasonal_period),
        HoltWinters::multiplicative(config.alpha, config.beta, config.gamma, seasonal_period),
    ];

    let gate = match period {
        None => Err(SkipReason::NoSeasonalPeriod),
        Some(p) if (p as f64) < train_size as f64 / 2.0 => Ok(()),
        Some(p) => Err(SkipReason::PeriodTooLong {
            period: p,
            train_size,
        }),
    };

    let mut skipped = Vec::new();
    for model in seasonal {
        match gate {
            Ok(()) => registry.register(Box::new(model)),
            Err(reason) => skipped.push(SkippedModel {
                name: model.name().to_string(),
                reason,
            }),
        }
    }

    (registry, skipped)
}

fn score_model(model: &dyn Forecaster, values: &[f64], split: TrainTestSplit) -> Result<ModelResult> {
    let train = &values[split.train_range()];
    let predictions = model.fit_predict(train, values)?;
    if predictions.len() != values.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: values.len(),
            got: predictions.len(),
        });
    }
    let metrics = evaluate(
        &values[split.test_range()],
        predictions.window(split.test_range())?,
    )?;

    Ok(ModelResult {
        name: model.name().to_string(),
        family: model.family(),
        predictions,
        metrics,
    })
}
