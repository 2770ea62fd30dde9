//! Error types for the series-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while building a series, fitting models or
/// running an analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A NaN or infinite observation was supplied.
    #[error("non-finite value at position {index}")]
    NonFiniteValue { index: usize },

    /// None of the predictions in the evaluation window were usable.
    #[error("no valid predictions in evaluation window")]
    NoValidPredictions,

    /// Another analysis is already running on this analyzer.
    #[error("an analysis is already running")]
    AnalysisInProgress,

    /// Every candidate model was skipped or failed.
    #[error("no model could be fitted and ranked")]
    NoRankedModels,

    /// A result could not be rendered.
    #[error("serialization error: {0}")]
    Serialization(String),
}
