//! Forecasting models.

mod traits;

pub mod baseline;
pub mod exponential;

pub use traits::{BoxedForecaster, Forecaster, ModelFamily, ModelRegistry};
