//! Classical baseline forecasting models.
//!
//! This module provides:
//! - `MovingAverage`: Trailing mean of the last `window` observations
//! - `LinearTrend`: Least-squares line fitted on the training segment

mod linear_trend;
mod moving_average;

pub use linear_trend::LinearTrend;
pub use moving_average::MovingAverage;
