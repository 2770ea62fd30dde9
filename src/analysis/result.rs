//! Output types of an analysis run.

use crate::core::{Predictions, TrainTestSplit};
use crate::detection::SeasonalityResult;
use crate::error::ForecastError;
use crate::models::ModelFamily;
use crate::utils::{MetricSet, Statistics};
use serde::{Serialize, Serializer};

/// A fitted and evaluated model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelResult {
    pub name: String,
    pub family: ModelFamily,
    /// One prediction per position of the full series.
    pub predictions: Predictions,
    /// Accuracy over the test segment.
    pub metrics: MetricSet,
}

/// Why a candidate model was not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The model needs a seasonal period and none was detected.
    NoSeasonalPeriod,
    /// The detected period is not shorter than half the training segment.
    PeriodTooLong { period: usize, train_size: usize },
}

/// A candidate model that was gated out before fitting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedModel {
    pub name: String,
    pub reason: SkipReason,
}

/// A candidate model whose fit or evaluation returned an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedModel {
    pub name: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: ForecastError,
}

fn serialize_display<S: Serializer>(error: &ForecastError, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Difference `actual - predicted` of the best model at one position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Residual {
    /// Index of the observation the residual belongs to.
    pub index: usize,
    pub value: f64,
}

/// Everything an analysis run produced.
///
/// Models are ranked by ascending test RMSE; ties keep the order in
/// which the models were evaluated. There is always at least one ranked
/// model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    statistics: Statistics,
    seasonality: SeasonalityResult,
    split: TrainTestSplit,
    models: Vec<ModelResult>,
    residuals: Vec<Residual>,
    skipped: Vec<SkippedModel>,
    failed: Vec<FailedModel>,
}

impl AnalysisResult {
    /// `models` must be non-empty and already ranked.
    pub(crate) fn new(
        statistics: Statistics,
        seasonality: SeasonalityResult,
        split: TrainTestSplit,
        models: Vec<ModelResult>,
        residuals: Vec<Residual>,
        skipped: Vec<SkippedModel>,
        failed: Vec<FailedModel>,
    ) -> Self {
        debug_assert!(!models.is_empty());
        Self {
            statistics,
            seasonality,
            split,
            models,
            residuals,
            skipped,
            failed,
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn seasonality(&self) -> &SeasonalityResult {
        &self.seasonality
    }

    pub fn split(&self) -> TrainTestSplit {
        self.split
    }

    /// Ranked models, best first.
    pub fn models(&self) -> &[ModelResult] {
        &self.models
    }

    /// The top-ranked model.
    pub fn best_model(&self) -> &ModelResult {
        &self.models[0]
    }

    /// Residuals of the best model over every position it predicted.
    pub fn residuals(&self) -> &[Residual] {
        &self.residuals
    }

    pub fn skipped(&self) -> &[SkippedModel] {
        &self.skipped
    }

    pub fn failed(&self) -> &[FailedModel] {
        &self.failed
    }

    /// Look up a ranked model by name.
    pub fn model(&self, name: &str) -> Option<&ModelResult> {
        self.models.iter().find(|m| m.name == name)
    }

    /// `(rank, name, rmse)` for every ranked model, ranks starting at 1.
    pub fn ranking(&self) -> impl Iterator<Item = (usize, &str, f64)> + '_ {
        self.models
            .iter()
            .enumerate()
            .map(|(i, m)| (i + 1, m.name.as_str(), m.metrics.rmse))
    }
}
