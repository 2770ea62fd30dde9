//! Exponential smoothing models.
//!
//! This module provides exponential smoothing forecasting methods:
//! - Simple Exponential Smoothing (SES)
//! - Holt's Linear Trend
//! - Holt-Winters (additive and multiplicative seasonality)

mod holt;
mod holt_winters;
mod ses;

pub use holt::{HoltComponents, HoltLinearTrend};
pub use holt_winters::{HoltWinters, SeasonalIndices, SeasonalType};
pub use ses::SimpleExponentialSmoothing;
