//! Probability distributions over datasets and parameters.
//!
//! - [`stats`]: mean and sample/population dispersion of a 1-D dataset
//! - [`gaussian`], [`binomial`], [`bernoulli`]: the distribution variants
//! - [`histogram`]: binned counts of a data-backed distribution
//! - [`distributions`]: runtime-tagged [`AnyDistribution`]

pub mod bernoulli;
pub mod binomial;
pub mod distributions;
pub mod gaussian;
pub mod histogram;
pub mod stats;

pub use bernoulli::Bernoulli;
pub use binomial::Binomial;
pub use distributions::{AnyDistribution, DistributionKind};
pub use gaussian::Gaussian;
pub use histogram::{Histogram, HistogramExt};
pub use pd_core::{Combine, DataBacked, Dataset, Distribution, Error, Result, SampleMode};
