//! Common data types for probdist

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Divisor convention for dispersion statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleMode {
    /// Bessel-corrected, divides by `len - 1`.
    #[default]
    Sample,
    /// Divides by `len`.
    Population,
}

impl SampleMode {
    /// Build from the boolean `is_sample` flag.
    pub fn from_is_sample(is_sample: bool) -> Self {
        if is_sample { Self::Sample } else { Self::Population }
    }

    /// `true` for [`SampleMode::Sample`].
    pub fn is_sample(self) -> bool {
        matches!(self, Self::Sample)
    }

    /// Variance divisor for `len` observations. `None` when it would be zero.
    pub fn divisor(self, len: usize) -> Option<usize> {
        let d = match self {
            Self::Sample => len.checked_sub(1)?,
            Self::Population => len,
        };
        (d > 0).then_some(d)
    }
}

/// Ordered, immutable sequence of finite observations.
///
/// An empty dataset is representable; statistics computed on it fail with
/// [`Error::EmptyInput`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    /// Take ownership of `values`, rejecting NaN and infinities.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(Error::Validation(format!(
                "dataset values must be finite, got {} at index {}",
                v, i
            )));
        }
        Ok(Self { values })
    }

    /// Copy `values` into a new dataset.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }

    /// Observations, in the order supplied.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if there are no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest and largest observation. `None` when empty.
    pub fn range(&self) -> Option<(f64, f64)> {
        let first = *self.values.first()?;
        Some(self.values.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
    }
}

impl AsRef<[f64]> for Dataset {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for Dataset {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<Dataset> for Vec<f64> {
    fn from(d: Dataset) -> Self {
        d.values
    }
}
