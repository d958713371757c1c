//! Binomial distribution.

use pd_core::{Combine, DataBacked, Dataset, Distribution, Error, Result};
use serde::{Deserialize, Serialize};
use statrs::function::gamma::ln_gamma;

use crate::stats::mean_of;

pub(crate) fn check_p(p: f64) -> Result<()> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(Error::Validation(format!("p must be finite and in [0,1], got {}", p)));
    }
    Ok(())
}

fn ln_choose(n: u64, k: u64) -> f64 {
    // ln(n choose k) = ln Γ(n+1) - ln Γ(k+1) - ln Γ(n-k+1)
    let n1 = (n as f64) + 1.0;
    let k1 = (k as f64) + 1.0;
    let nk1 = ((n - k) as f64) + 1.0;
    ln_gamma(n1) - ln_gamma(k1) - ln_gamma(nk1)
}

/// Log-PMF of `Binom(n, p)` at `k` successes.
pub fn logpmf(k: u64, n: u64, p: f64) -> Result<f64> {
    check_p(p)?;
    if k > n {
        return Err(Error::InvalidOutcome(format!("k must be <= n, got k={} n={}", k, n)));
    }

    if p == 0.0 {
        return Ok(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
    }
    if p == 1.0 {
        return Ok(if k == n { 0.0 } else { f64::NEG_INFINITY });
    }
    let kf = k as f64;
    let nf = n as f64;
    Ok(ln_choose(n, k) + kf * p.ln() + (nf - kf) * (-p).ln_1p())
}

/// PMF of `Binom(n, p)` at `k` successes.
pub fn pmf(k: u64, n: u64, p: f64) -> Result<f64> {
    Ok(logpmf(k, n, p)?.exp())
}

/// Number of successes in `n` independent trials with success probability `p`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BinomialRepr")]
pub struct Binomial {
    n: u64,
    p: f64,
    #[serde(skip_serializing)]
    mean: f64,
    #[serde(skip_serializing)]
    std: f64,
    #[serde(skip_serializing)]
    dataset: Option<Dataset>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BinomialRepr {
    n: u64,
    p: f64,
}

impl TryFrom<BinomialRepr> for Binomial {
    type Error = Error;

    fn try_from(r: BinomialRepr) -> Result<Self> {
        Binomial::new(r.n, r.p)
    }
}

impl Binomial {
    /// `Binom(n, p)`; `n` must be at least 1.
    pub fn new(n: u64, p: f64) -> Result<Self> {
        if n == 0 {
            return Err(Error::Validation("n must be >= 1, got 0".into()));
        }
        check_p(p)?;
        let nf = n as f64;
        let mean = nf * p;
        let std = (nf * p * (1.0 - p)).sqrt();
        log::debug!("Binomial::new n={} p={} mean={} std={}", n, p, mean, std);
        Ok(Self { n, p, mean, std, dataset: None })
    }

    /// Estimate from 0/1 trial outcomes: `n = len`, `p = mean`.
    pub fn from_binary_data(values: &[f64]) -> Result<Self> {
        let dataset = Dataset::from_slice(values)?;
        if let Some((i, v)) =
            dataset.values().iter().enumerate().find(|&(_, &v)| v != 0.0 && v != 1.0)
        {
            return Err(Error::Validation(format!(
                "binary data must contain only 0 and 1, got {} at index {}",
                v, i
            )));
        }
        let p = mean_of(dataset.values())?;
        let mut b = Self::new(dataset.len() as u64, p)?;
        b.dataset = Some(dataset);
        Ok(b)
    }

    /// Trial count.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Failure probability `1 - p`.
    pub fn q(&self) -> f64 {
        1.0 - self.p
    }

    /// Log-mass at `k`.
    pub fn logpmf(&self, k: u64) -> Result<f64> {
        logpmf(k, self.n, self.p)
    }
}

impl Distribution for Binomial {
    type Outcome = u64;

    fn mean(&self) -> f64 {
        self.mean
    }

    fn std(&self) -> f64 {
        self.std
    }

    fn pdf(&self, k: u64) -> Result<f64> {
        pmf(k, self.n, self.p)
    }
}

impl Combine for Binomial {
    /// `Binom(n1, p) + Binom(n2, p) = Binom(n1 + n2, p)`. Differing `p` is rejected.
    fn combine(&self, other: &Self) -> Result<Self> {
        if self.p != other.p {
            return Err(Error::Validation(format!(
                "binomials can only be combined with equal p, got {} and {}",
                self.p, other.p
            )));
        }
        let n = self.n.checked_add(other.n).ok_or_else(|| {
            Error::Validation(format!("combined n overflows, got {} + {}", self.n, other.n))
        })?;
        Self::new(n, self.p)
    }
}

impl DataBacked for Binomial {
    fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }
}
