//! Detection utilities for time series analysis.
//!
//! This module provides tools for detecting seasonality patterns.

mod seasonality;

pub use seasonality::{
    autocorrelogram, detect_seasonality, detect_seasonality_auto, AutocorrelationPoint,
    SeasonalityConfig, SeasonalityResult,
};
