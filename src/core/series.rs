//! Series data structure for an ordered sequence of observations.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Policy for handling non-finite values (NaN/Inf) at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingValuePolicy {
    /// Drop observations with non-finite values, keeping the original
    /// positions of the survivors.
    Drop,
    /// Return an error if a non-finite value is found.
    #[default]
    Error,
}

/// A single observation of the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Position in the original input.
    pub index: usize,
    /// Opaque timestamp label, carried through untouched.
    pub timestamp: String,
    /// Observed value. Always finite.
    pub value: f64,
}

/// An ordered, non-empty univariate series of finite observations.
///
/// # Example
/// ```
/// use series_forecast::core::Series;
///
/// let series = Series::from_values(vec![10.0, 12.0, 13.0]).unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.values(), &[10.0, 12.0, 13.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    observations: Vec<Observation>,
    /// Values cached contiguously for the numeric routines.
    #[serde(skip)]
    values: Vec<f64>,
}

impl Series {
    /// Build a series from `(timestamp, value)` records, rejecting
    /// non-finite values.
    pub fn from_records<I, S>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self::from_records_with_policy(records, MissingValuePolicy::Error)
    }

    /// Build a series from `(timestamp, value)` records using the given
    /// policy for non-finite values.
    pub fn from_records_with_policy<I, S>(records: I, policy: MissingValuePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut observations = Vec::new();
        for (index, (timestamp, value)) in records.into_iter().enumerate() {
            if !value.is_finite() {
                match policy {
                    MissingValuePolicy::Drop => continue,
                    MissingValuePolicy::Error => {
                        return Err(ForecastError::NonFiniteValue { index })
                    }
                }
            }
            observations.push(Observation {
                index,
                timestamp: timestamp.into(),
                value,
            });
        }
        Self::from_observations(observations)
    }

    /// Build a series from plain values. Timestamps are the positions.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        Self::from_records(
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v)),
        )
    }

    /// Build a series from already-constructed observations.
    pub fn from_observations(observations: Vec<Observation>) -> Result<Self> {
        if observations.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        for (pos, obs) in observations.iter().enumerate() {
            if !obs.value.is_finite() {
                return Err(ForecastError::NonFiniteValue { index: obs.index });
            }
            if pos > 0 && obs.index <= observations[pos - 1].index {
                return Err(ForecastError::InvalidParameter(
                    "observation indices must be strictly increasing".to_string(),
                ));
            }
        }
        let values = observations.iter().map(|o| o.value).collect();
        Ok(Self {
            observations,
            values,
        })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false; a series holds at least one observation.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Split into contiguous train and test segments.
    pub fn split(&self, train_ratio: f64) -> Result<TrainTestSplit> {
        TrainTestSplit::new(self.len(), train_ratio)
    }
}

/// Sizes of a contiguous train/test partition of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainTestSplit {
    /// Number of leading observations used for fitting.
    pub train_size: usize,
    /// Number of trailing observations held out for evaluation.
    pub test_size: usize,
}

impl TrainTestSplit {
    /// `train_size = floor(len * train_ratio)`.
    pub fn new(len: usize, train_ratio: f64) -> Result<Self> {
        if !(train_ratio > 0.0 && train_ratio < 1.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "train ratio must be in (0, 1), got {}",
                train_ratio
            )));
        }
        let train_size = (len as f64 * train_ratio).floor() as usize;
        if train_size == 0 {
            return Err(ForecastError::InsufficientData { needed: 1, got: 0 });
        }
        if train_size >= len {
            return Err(ForecastError::InsufficientData {
                needed: train_size + 1,
                got: len,
            });
        }
        Ok(Self {
            train_size,
            test_size: len - train_size,
        })
    }

    pub fn train_range(&self) -> Range<usize> {
        0..self.train_size
    }

    pub fn test_range(&self) -> Range<usize> {
        self.train_size..self.train_size + self.test_size
    }
}
