//! # series-forecast
//!
//! Fit, score and rank forecasting models on a univariate series.
//!
//! An analysis splits the series into a training and a test segment,
//! describes it statistically, detects a seasonal period from its
//! autocorrelation, runs moving-average, linear-regression and
//! exponential-smoothing forecasters (Holt-Winters when a usable period
//! exists) and ranks them by test RMSE.
//!
//! ```
//! use series_forecast::prelude::*;
//!
//! let series = Series::from_records(vec![
//!     ("2024-01", 10.0), ("2024-02", 12.0), ("2024-03", 13.0), ("2024-04", 12.0),
//!     ("2024-05", 15.0), ("2024-06", 16.0), ("2024-07", 14.0), ("2024-08", 17.0),
//!     ("2024-09", 19.0), ("2024-10", 18.0), ("2024-11", 20.0), ("2024-12", 22.0),
//! ])
//! .unwrap();
//!
//! let result = analyze(&series, &AnalysisConfig::default()).unwrap();
//! for (rank, name, rmse) in result.ranking() {
//!     println!("{rank}. {name}: {rmse:.3}");
//! }
//! ```

// Allow some clippy warnings for cleaner code in specific cases
#![allow(clippy::too_many_arguments)]
#![allow(clippy::needless_range_loop)]

pub mod analysis;
pub mod core;
pub mod detection;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::analysis::{analyze, AnalysisConfig, AnalysisResult, Analyzer};
    pub use crate::core::{Predictions, Series};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::Forecaster;
    pub use crate::utils::{evaluate, MetricSet};
}
