//! Core traits for probdist
//!
//! Every distribution variant shares the [`Distribution`] capability set. Composition
//! and data access are separate traits so that a variant which cannot support them
//! (Bernoulli) simply does not implement them.

use crate::{Dataset, Result};

/// Shared read-only surface of a univariate distribution.
pub trait Distribution {
    /// Point at which mass or density is evaluated (`f64` for continuous, `u64` for counts).
    type Outcome: Copy;

    /// Mean, fixed at construction.
    fn mean(&self) -> f64;

    /// Standard deviation, fixed at construction.
    fn std(&self) -> f64;

    /// Variance (`std^2`).
    fn variance(&self) -> f64 {
        self.std() * self.std()
    }

    /// Density (continuous) or mass (discrete) at `x`.
    fn pdf(&self, x: Self::Outcome) -> Result<f64>;
}

/// Closed-form distribution of the sum of two independent variables of the same family.
pub trait Combine: Sized {
    /// Distribution of `self + other`.
    fn combine(&self, other: &Self) -> Result<Self>;
}

/// Distributions that may carry the observations they were built from.
pub trait DataBacked {
    /// Underlying observations. `None` for parametric instances.
    fn dataset(&self) -> Option<&Dataset>;
}
