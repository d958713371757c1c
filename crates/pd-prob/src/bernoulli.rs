//! Bernoulli distribution.
//!
//! A [`Binomial`] with `n = 1`. It implements [`Distribution`] only: there is no
//! data-driven constructor, no dataset (so no histogram), and no [`pd_core::Combine`],
//! since the sum of two Bernoulli variables is not Bernoulli.

use pd_core::{Distribution, Error, Result};
use serde::{Deserialize, Serialize};

use crate::binomial::{Binomial, check_p};

/// PMF of a Bernoulli distribution at `k ∈ {0, 1}` with success probability `p`.
///
/// Returns `p` or `1 - p` exactly.
pub fn pmf(k: u64, p: f64) -> Result<f64> {
    check_p(p)?;
    match k {
        0 => Ok(1.0 - p),
        1 => Ok(p),
        _ => Err(Error::InvalidOutcome(format!("k must be 0 or 1, got {}", k))),
    }
}

/// A single trial with success probability `p`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BernoulliRepr", into = "BernoulliRepr")]
pub struct Bernoulli {
    inner: Binomial,
}

#[derive(Serialize, Deserialize)]
struct BernoulliRepr {
    p: f64,
}

impl TryFrom<BernoulliRepr> for Bernoulli {
    type Error = Error;

    fn try_from(r: BernoulliRepr) -> Result<Self> {
        Bernoulli::new(r.p)
    }
}

impl From<Bernoulli> for BernoulliRepr {
    fn from(b: Bernoulli) -> Self {
        Self { p: b.p() }
    }
}

impl Bernoulli {
    /// Bernoulli trial with success probability `p`.
    pub fn new(p: f64) -> Result<Self> {
        Ok(Self { inner: Binomial::new(1, p)? })
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.inner.p()
    }

    /// Failure probability `1 - p`.
    pub fn q(&self) -> f64 {
        self.inner.q()
    }

    /// Probability of success (`true`) or failure (`false`).
    pub fn probability(&self, is_success: bool) -> f64 {
        if is_success { self.p() } else { self.q() }
    }

    /// The same distribution viewed as `Binom(1, p)`.
    pub fn as_binomial(&self) -> &Binomial {
        &self.inner
    }
}

impl Distribution for Bernoulli {
    type Outcome = u64;

    fn mean(&self) -> f64 {
        self.inner.mean()
    }

    fn std(&self) -> f64 {
        self.inner.std()
    }

    fn pdf(&self, k: u64) -> Result<f64> {
        pmf(k, self.p())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_values() {
        let b = Bernoulli::new(0.3).unwrap();
        assert_eq!(b.pdf(1).unwrap(), 0.3);
        assert_eq!(b.pdf(0).unwrap(), 0.7);
        assert_relative_eq!(b.pdf(0).unwrap() + b.pdf(1).unwrap(), 1.0, epsilon = 1e-15);
        assert_eq!(b.probability(true), b.pdf(1).unwrap());
        assert_eq!(b.probability(false), b.pdf(0).unwrap());
    }

    #[test]
    fn test_outcome_outside_support() {
        let b = Bernoulli::new(0.5).unwrap();
        assert!(matches!(b.pdf(2), Err(Error::InvalidOutcome(_))));
        assert!(matches!(pmf(7, 0.5), Err(Error::InvalidOutcome(_))));
    }

    #[test]
    fn test_invalid_p() {
        assert!(matches!(Bernoulli::new(-0.1), Err(Error::Validation(_))));
        assert!(Bernoulli::new(1.1).is_err());
        assert!(Bernoulli::new(f64::NAN).is_err());
    }

    #[test]
    fn test_degenerate_probs() {
        let never = Bernoulli::new(0.0).unwrap();
        assert_eq!(never.pdf(1).unwrap(), 0.0);
        assert_eq!(never.pdf(0).unwrap(), 1.0);
        assert_eq!(never.std(), 0.0);
    }

    #[test]
    fn test_moments_match_binomial() {
        let b = Bernoulli::new(0.25).unwrap();
        assert_eq!(b.as_binomial().n(), 1);
        assert_relative_eq!(b.mean(), 0.25, epsilon = 1e-15);
        assert_relative_eq!(b.std(), (0.25f64 * 0.75).sqrt(), epsilon = 1e-15);
        assert_relative_eq!(b.pdf(1).unwrap(), b.as_binomial().pdf(1).unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_serde_is_just_p() {
        let b = Bernoulli::new(0.3).unwrap();
        assert_eq!(serde_json::to_string(&b).unwrap(), r#"{"p":0.3}"#);
        let back: Bernoulli = serde_json::from_str(r#"{"p":0.3}"#).unwrap();
        assert_eq!(back, b);
    }
}
