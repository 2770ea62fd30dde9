//! Utility functions for forecasting models.

pub mod metrics;
pub mod ols;
pub mod stats;

pub use metrics::{evaluate, residuals, MetricSet, INFORMATION_CRITERION_PARAMS};
pub use ols::{ols_fit, ols_fit_positions, LinearFit};
pub use stats::{safe_divide, Statistics};
