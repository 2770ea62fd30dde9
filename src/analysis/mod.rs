//! End-to-end analysis of a series: statistics, seasonality, model
//! fitting and ranking.

mod analyzer;
mod config;
mod report;
mod result;

pub use analyzer::{analyze, candidate_models, Analyzer, AnalyzerStatus};
pub use config::{AnalysisConfig, MIN_OBSERVATIONS};
pub use report::{
    AnalysisReport, ReportBestModel, ReportConfiguration, ReportModel, ReportSeasonality,
};
pub use result::{AnalysisResult, FailedModel, ModelResult, Residual, SkipReason, SkippedModel};
