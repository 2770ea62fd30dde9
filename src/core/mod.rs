//! Core data structures for time series forecasting.

mod predictions;
mod series;

pub use predictions::Predictions;
pub use series::{MissingValuePolicy, Observation, Series, TrainTestSplit};
