//! Gaussian (Normal) distribution.

use pd_core::{Combine, DataBacked, Dataset, Distribution, Error, Result, SampleMode};
use serde::{Deserialize, Serialize};

use crate::stats::{mean_of, standard_deviation_of};

/// `sqrt(2π)`.
const SQRT_2PI: f64 = 2.506_628_274_631_000_2;

/// Natural log of `sqrt(2π)`.
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

fn check_sigma(sigma: f64) -> Result<()> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(Error::Validation(format!("sigma must be finite and >= 0, got {}", sigma)));
    }
    if sigma == 0.0 {
        return Err(Error::DivisionByZero("sigma is zero, density is undefined".into()));
    }
    Ok(())
}

/// Standardized distance of `x` from `mu` in units of `sigma`.
pub fn z_score(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    check_sigma(sigma)?;
    Ok((x - mu) / sigma)
}

/// PDF of `N(mu, sigma)` at `x`.
///
/// `p(x) = 1/(sigma*sqrt(2π)) * exp(-0.5 * ((x-mu)/sigma)^2)`
///
/// A density is unbounded as `sigma -> 0`: for `sigma` below ~1.6e-309 the peak exceeds
/// `f64::MAX` and is returned as `inf`. Use [`logpdf`] there.
pub fn pdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    let z = z_score(x, mu, sigma)?;
    Ok((-0.5 * z * z).exp() / (sigma * SQRT_2PI))
}

/// Log-PDF of `N(mu, sigma)` at `x`.
///
/// `log p(x) = -0.5 * ((x-mu)/sigma)^2 - ln(sigma) - ln(sqrt(2π))`
pub fn logpdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    let z = z_score(x, mu, sigma)?;
    Ok(-0.5 * z * z - sigma.ln() - LN_SQRT_2PI)
}

/// A univariate Gaussian with mean and standard deviation fixed at construction.
///
/// Built either from observations ([`Gaussian::from_dataset`]) or from parameters
/// ([`Gaussian::new`], [`Combine::combine`]). Only the former keeps a dataset.
///
/// The serialized form is `{"mean", "std"}` only; a deserialized instance is parametric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GaussianRepr")]
pub struct Gaussian {
    mean: f64,
    std: f64,
    #[serde(skip_serializing)]
    dataset: Option<Dataset>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GaussianRepr {
    mean: f64,
    std: f64,
}

impl TryFrom<GaussianRepr> for Gaussian {
    type Error = Error;

    fn try_from(r: GaussianRepr) -> Result<Self> {
        Gaussian::new(r.mean, r.std)
    }
}

impl Gaussian {
    /// Parametric Gaussian `N(mean, std)`. `std == 0` is accepted as a degenerate case.
    pub fn new(mean: f64, std: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::Validation(format!("mean must be finite, got {}", mean)));
        }
        if !std.is_finite() || std < 0.0 {
            return Err(Error::Validation(format!("std must be finite and >= 0, got {}", std)));
        }
        if std == 0.0 {
            log::warn!("Gaussian with zero std; pdf and z_score will fail");
        }
        log::debug!("Gaussian::new mean={} std={}", mean, std);
        Ok(Self { mean, std, dataset: None })
    }

    /// Fit mean and std to `dataset`, using the divisor convention of `mode`.
    pub fn from_dataset(dataset: Dataset, mode: SampleMode) -> Result<Self> {
        let mean = mean_of(dataset.values())?;
        let std = standard_deviation_of(dataset.values(), mode, Some(mean))?;
        log::debug!("Gaussian::from_dataset n={} mode={:?}", dataset.len(), mode);
        let mut g = Self::new(mean, std)?;
        g.dataset = Some(dataset);
        Ok(g)
    }

    /// [`Gaussian::from_dataset`] in [`SampleMode::Sample`] over a copy of `values`.
    pub fn from_sample(values: &[f64]) -> Result<Self> {
        Self::from_dataset(Dataset::from_slice(values)?, SampleMode::Sample)
    }

    /// `(x - mean) / std`.
    pub fn z_score(&self, x: f64) -> Result<f64> {
        z_score(x, self.mean, self.std)
    }

    /// Log-density at `x`.
    pub fn logpdf(&self, x: f64) -> Result<f64> {
        logpdf(x, self.mean, self.std)
    }
}

impl Distribution for Gaussian {
    type Outcome = f64;

    fn mean(&self) -> f64 {
        self.mean
    }

    fn std(&self) -> f64 {
        self.std
    }

    fn pdf(&self, x: f64) -> Result<f64> {
        pdf(x, self.mean, self.std)
    }
}

impl Combine for Gaussian {
    /// Sum of two independent normals: means add, variances add.
    fn combine(&self, other: &Self) -> Result<Self> {
        let std = self.std.hypot(other.std);
        Self::new(self.mean + other.mean, std)
    }
}

impl DataBacked for Gaussian {
    fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_at_zero() {
        let p = pdf(0.0, 0.0, 1.0).unwrap();
        assert_relative_eq!(p, 1.0 / SQRT_2PI, epsilon = 1e-15);
        let lp = logpdf(0.0, 0.0, 1.0).unwrap();
        assert_relative_eq!(lp, -LN_SQRT_2PI, epsilon = 1e-12);
    }

    #[test]
    fn test_logpdf_matches_pdf() {
        for &x in &[-3.0, -0.4, 0.0, 1.7, 5.0] {
            let a = pdf(x, 0.5, 1.3).unwrap().ln();
            let b = logpdf(x, 0.5, 1.3).unwrap();
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_symmetry() {
        let g = Gaussian::new(0.0, 2.0).unwrap();
        assert_relative_eq!(g.pdf(1.3).unwrap(), g.pdf(-1.3).unwrap(), epsilon = 1e-15);
    }

    #[test]
    fn test_from_reference_dataset() {
        let g = Gaussian::from_sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_relative_eq!(g.mean(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(g.std(), 2.138, epsilon = 1e-3);
        assert_eq!(g.dataset().map(Dataset::len), Some(8));

        let values = Dataset::from_slice(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        let g = Gaussian::from_dataset(values, SampleMode::Population).unwrap();
        assert_relative_eq!(g.std(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(g.z_score(9.0).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_dataset() {
        assert!(matches!(Gaussian::from_sample(&[]), Err(Error::EmptyInput(_))));
        assert!(matches!(Gaussian::from_sample(&[1.0]), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_zero_std() {
        let g = Gaussian::from_sample(&[3.0, 3.0, 3.0]).unwrap();
        assert_eq!(g.std(), 0.0);
        assert!(matches!(g.z_score(3.0), Err(Error::DivisionByZero(_))));
        assert!(matches!(g.pdf(1.0), Err(Error::DivisionByZero(_))));
        assert!(matches!(g.logpdf(1.0), Err(Error::DivisionByZero(_))));
    }

    #[test]
    fn test_invalid_params() {
        assert!(matches!(Gaussian::new(0.0, -1.0), Err(Error::Validation(_))));
        assert!(Gaussian::new(f64::NAN, 1.0).is_err());
        assert!(Gaussian::new(0.0, f64::INFINITY).is_err());
        assert!(matches!(pdf(0.0, 0.0, -1.0), Err(Error::Validation(_))));
    }

    #[test]
    fn test_combine_standard_normals() {
        let a = Gaussian::new(0.0, 1.0).unwrap();
        let s = a.combine(&a).unwrap();
        assert_relative_eq!(s.mean(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(s.std(), 2f64.sqrt(), epsilon = 1e-15);
        assert!(s.dataset().is_none());
    }

    #[test]
    fn test_combine_is_commutative() {
        let a = Gaussian::from_sample(&[1.0, 2.5, 4.0, 8.0]).unwrap();
        let b = Gaussian::new(-3.0, 0.7).unwrap();
        let ab = a.combine(&b).unwrap();
        let ba = b.combine(&a).unwrap();
        assert_eq!(ab.mean(), ba.mean());
        assert_eq!(ab.std(), ba.std());
        assert_relative_eq!(ab.variance(), a.variance() + b.variance(), epsilon = 1e-12);
    }

    #[test]
    fn test_combine_large_std_does_not_overflow() {
        let a = Gaussian::new(0.0, 1e200).unwrap();
        let s = a.combine(&a).unwrap();
        assert_relative_eq!(s.std(), 1e200 * 2f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_from_wide_sample() {
        let g = Gaussian::from_sample(&[1e200, -1e200]).unwrap();
        assert_eq!(g.mean(), 0.0);
        assert_relative_eq!(g.std(), 1e200 * 2f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_tiny_sigma_peak_saturates() {
        let peak = pdf(0.0, 0.0, 1e-320).unwrap();
        assert!(peak.is_infinite() && peak.is_sign_positive());
        assert_eq!(pdf(1.0, 0.0, 1e-320).unwrap(), 0.0);
        assert!(logpdf(0.0, 0.0, 1e-320).unwrap().is_finite());
    }

    #[test]
    fn test_serde_drops_dataset() {
        let g = Gaussian::from_sample(&[1.0, 2.0, 3.0]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert!(!json.contains("dataset"));
        let back: Gaussian = serde_json::from_str(&json).unwrap();
        assert!(back.dataset().is_none());
        assert_eq!((back.mean(), back.std()), (g.mean(), g.std()));

        let forged = r#"{"mean": 0.0, "std": 1.0, "dataset": [5.0, 5.0]}"#;
        assert!(serde_json::from_str::<Gaussian>(forged).is_err());
    }

    #[test]
    fn test_serde_revalidates() {
        let g: Gaussian = serde_json::from_str(r#"{"mean": 1.0, "std": 2.0}"#).unwrap();
        assert_eq!(g, Gaussian::new(1.0, 2.0).unwrap());
        assert!(serde_json::from_str::<Gaussian>(r#"{"mean": 1.0, "std": -2.0}"#).is_err());
    }
}
