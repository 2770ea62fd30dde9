//! Prediction sequences aligned with a series.

use crate::error::{ForecastError, Result};
use serde::Serialize;
use std::ops::Range;

/// Model output aligned 1:1 with the positions of the input series.
///
/// `None` marks a position where the model has no value, such as the
/// warm-up of a moving average. Non-finite numbers are never stored; they
/// are normalized to `None` on construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Predictions {
    values: Vec<Option<f64>>,
}

impl Predictions {
    /// Create from optional values.
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| v.filter(|x| x.is_finite()))
                .collect(),
        }
    }

    /// Create from a fully defined sequence.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self::new(values.into_iter().map(Some).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a position, `None` if undefined or out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values.iter().copied()
    }

    /// Number of defined positions.
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Borrow a contiguous window of the predictions.
    pub fn window(&self, range: Range<usize>) -> Result<&[Option<f64>]> {
        if range.start > range.end || range.end > self.values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: range.end,
                got: self.values.len(),
            });
        }
        Ok(&self.values[range])
    }
}

impl From<Vec<f64>> for Predictions {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}
