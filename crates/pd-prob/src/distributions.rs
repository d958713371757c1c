//! Runtime-tagged form of the distribution variants.
//!
//! The concrete types make unsupported operations impossible to call. When the variant
//! is only known at runtime (config, FFI, collaborators), [`AnyDistribution`] offers the
//! full operation set and reports the inapplicable ones as
//! [`Error::UnsupportedOperation`].

use pd_core::{Combine, Dataset, Distribution, Error, Result, SampleMode};
use serde::{Deserialize, Serialize};

use crate::bernoulli::Bernoulli;
use crate::binomial::Binomial;
use crate::gaussian::Gaussian;
use crate::histogram::{Histogram, HistogramExt};

/// Which family to build from a dataset.
///
/// Deserializes from e.g. `{"kind": "gaussian", "mode": "population"}` or
/// `{"kind": "binomial"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionKind {
    Gaussian {
        #[serde(default)]
        mode: SampleMode,
    },
    Binomial,
    Bernoulli,
}

/// One of the supported distributions, chosen at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyDistribution {
    Gaussian(Gaussian),
    Binomial(Binomial),
    Bernoulli(Bernoulli),
}

impl From<Gaussian> for AnyDistribution {
    fn from(d: Gaussian) -> Self {
        Self::Gaussian(d)
    }
}

impl From<Binomial> for AnyDistribution {
    fn from(d: Binomial) -> Self {
        Self::Binomial(d)
    }
}

impl From<Bernoulli> for AnyDistribution {
    fn from(d: Bernoulli) -> Self {
        Self::Bernoulli(d)
    }
}

/// Interpret `x` as a count for a discrete variant.
fn as_count(x: f64) -> Result<u64> {
    if !x.is_finite() || x < 0.0 || x.fract() != 0.0 || x > u64::MAX as f64 {
        return Err(Error::InvalidOutcome(format!(
            "discrete outcome must be a non-negative integer, got {}",
            x
        )));
    }
    Ok(x as u64)
}

impl AnyDistribution {
    /// Build the family named by `kind` from `values`.
    ///
    /// Bernoulli is parametric only; asking for it here is unsupported.
    pub fn from_dataset(kind: &DistributionKind, values: &[f64]) -> Result<Self> {
        match kind {
            DistributionKind::Gaussian { mode } => {
                Ok(Gaussian::from_dataset(Dataset::from_slice(values)?, *mode)?.into())
            }
            DistributionKind::Binomial => Ok(Binomial::from_binary_data(values)?.into()),
            DistributionKind::Bernoulli => Err(Error::UnsupportedOperation(
                "bernoulli cannot be built from data".into(),
            )),
        }
    }

    /// Variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gaussian(_) => "gaussian",
            Self::Binomial(_) => "binomial",
            Self::Bernoulli(_) => "bernoulli",
        }
    }

    /// Mean of the wrapped distribution.
    pub fn mean(&self) -> f64 {
        match self {
            Self::Gaussian(d) => d.mean(),
            Self::Binomial(d) => d.mean(),
            Self::Bernoulli(d) => d.mean(),
        }
    }

    /// Standard deviation of the wrapped distribution.
    pub fn std(&self) -> f64 {
        match self {
            Self::Gaussian(d) => d.std(),
            Self::Binomial(d) => d.std(),
            Self::Bernoulli(d) => d.std(),
        }
    }

    /// Density for Gaussian; mass at the integer `x` for the discrete variants.
    pub fn pdf(&self, x: f64) -> Result<f64> {
        match self {
            Self::Gaussian(d) => d.pdf(x),
            Self::Binomial(d) => d.pdf(as_count(x)?),
            Self::Bernoulli(d) => d.pdf(as_count(x)?),
        }
    }

    /// Sum of two independent variables of the same combinable family.
    pub fn combine(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Self::Gaussian(a), Self::Gaussian(b)) => Ok(a.combine(b)?.into()),
            (Self::Binomial(a), Self::Binomial(b)) => Ok(a.combine(b)?.into()),
            (Self::Bernoulli(_), Self::Bernoulli(_)) => Err(Error::UnsupportedOperation(
                "sum of two bernoulli variables is not bernoulli".into(),
            )),
            (a, b) => {
                log::debug!("rejecting combine of {} with {}", a.name(), b.name());
                Err(Error::UnsupportedOperation(format!(
                    "cannot combine {} with {}",
                    a.name(),
                    b.name()
                )))
            }
        }
    }

    /// Histogram of the underlying dataset.
    pub fn histogram(&self, bins: usize) -> Result<Histogram> {
        match self {
            Self::Gaussian(d) => d.histogram(bins),
            Self::Binomial(d) => d.histogram(bins),
            Self::Bernoulli(_) => {
                Err(Error::UnsupportedOperation("bernoulli has no histogram".into()))
            }
        }
    }
}
