//! Flat export view of an analysis result.

use super::config::AnalysisConfig;
use super::result::AnalysisResult;
use crate::error::{ForecastError, Result};
use crate::models::ModelFamily;
use crate::utils::{MetricSet, Statistics};
use serde::Serialize;

/// Export summary of a completed analysis.
///
/// Borrows from the result it was built from; predictions and the
/// autocorrelogram are left out.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport<'a> {
    pub configuration: ReportConfiguration,
    pub statistics: &'a Statistics,
    pub seasonality: ReportSeasonality,
    pub models: Vec<ReportModel<'a>>,
    pub best_model: ReportBestModel<'a>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportConfiguration {
    pub data_points: usize,
    pub train_size: usize,
    pub train_ratio: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportSeasonality {
    pub detected: bool,
    pub period: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportModel<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub family: ModelFamily,
    pub metrics: &'a MetricSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportBestModel<'a> {
    pub name: &'a str,
    pub metrics: &'a MetricSet,
}

impl<'a> AnalysisReport<'a> {
    pub fn from_result(result: &'a AnalysisResult, config: &AnalysisConfig) -> Self {
        let split = result.split();
        let best = result.best_model();

        Self {
            configuration: ReportConfiguration {
                data_points: split.train_size + split.test_size,
                train_size: split.train_size,
                train_ratio: config.train_ratio,
            },
            statistics: result.statistics(),
            seasonality: ReportSeasonality {
                detected: result.seasonality().detected(),
                period: result.seasonality().period,
            },
            models: result
                .models()
                .iter()
                .map(|m| ReportModel {
                    name: &m.name,
                    family: m.family,
                    metrics: &m.metrics,
                })
                .collect(),
            best_model: ReportBestModel {
                name: &best.name,
                metrics: &best.metrics,
            },
        }
    }

    /// Render as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ForecastError::Serialization(e.to_string()))
    }

    /// Render as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ForecastError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::core::Series;
    use serde_json::Value;

    fn report_json() -> Value {
        let series = Series::from_values(vec![
            10.0, 12.0, 13.0, 12.0, 15.0, 16.0, 14.0, 17.0, 19.0, 18.0, 20.0, 22.0,
        ])
        .unwrap();
        let config = AnalysisConfig::default();
        let result = analyze(&series, &config).unwrap();
        let json = AnalysisReport::from_result(&result, &config).to_json().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn report_has_export_sections() {
        let report = report_json();
        assert_eq!(report["configuration"]["data_points"], 12);
        assert_eq!(report["configuration"]["train_size"], 9);
        assert_eq!(report["configuration"]["train_ratio"], 0.8);
        assert_eq!(report["seasonality"]["detected"], false);
        assert!(report["seasonality"]["period"].is_null());
        assert!(report["statistics"]["mean"].is_number());
    }

    #[test]
    fn report_models_match_ranking() {
        let report = report_json();
        let models = report["models"].as_array().unwrap();
        assert_eq!(models.len(), 4);
        assert_eq!(report["best_model"]["name"], models[0]["name"]);
        assert_eq!(report["best_model"]["metrics"], models[0]["metrics"]);
        for model in models {
            let kind = model["type"].as_str().unwrap();
            assert!(kind == "classical" || kind == "smoothing");
            assert!(model["metrics"]["rmse"].is_number());
        }
    }
}
