//! Equal-width binned counts of a dataset.
//!
//! Only the data half of plotting lives here; rendering is left to the caller.

use pd_core::{DataBacked, Dataset, Error, Result};
use serde::{Deserialize, Serialize};

/// Bin edges (`bins + 1`, ascending) and per-bin counts (`bins`).
///
/// Bins are half-open `[lo, hi)` except the last one, which also includes its right edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin boundaries, strictly increasing.
    pub edges: Vec<f64>,
    /// Observations per bin.
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Bin `dataset` into `bins` equal-width bins spanning its range.
    pub fn from_dataset(dataset: &Dataset, bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(Error::Validation("bins must be >= 1, got 0".into()));
        }
        let Some((mut lo, mut hi)) = dataset.range() else {
            return Err(Error::EmptyInput("cannot bin an empty dataset".into()));
        };
        if lo == hi {
            // Wide enough that every edge is a distinct float, even for large values.
            let pad = 0.5f64.max(lo.abs() * f64::EPSILON * bins as f64);
            lo -= pad;
            hi += pad;
        }

        let width = (hi - lo) / bins as f64;
        if !width.is_finite() {
            return Err(Error::Validation(format!("range [{}, {}] is too wide to bin", lo, hi)));
        }
        // Edges must stay distinct floats across the whole range.
        if width < lo.abs().max(hi.abs()) * f64::EPSILON {
            return Err(Error::Validation(format!(
                "range [{}, {}] is too narrow for {} bins",
                lo, hi, bins
            )));
        }
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + i as f64 * width).collect();
        edges.push(hi);

        let mut counts = vec![0u64; bins];
        for &x in dataset.values() {
            let idx = (((x - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Ok(Self { edges, counts })
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Total number of binned observations.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Counts scaled so the histogram integrates to 1 (comparable to a pdf).
    pub fn densities(&self) -> Vec<f64> {
        let total = self.total() as f64;
        self.counts
            .iter()
            .zip(self.edges.windows(2))
            .map(|(&c, e)| c as f64 / (total * (e[1] - e[0])))
            .collect()
    }
}

/// Histogram of the observations behind a data-backed distribution.
pub trait HistogramExt: DataBacked {
    /// Bin the underlying dataset. Parametric instances have nothing to bin.
    fn histogram(&self, bins: usize) -> Result<Histogram> {
        let dataset = self.dataset().ok_or_else(|| {
            Error::UnsupportedOperation("histogram of a parametric distribution".into())
        })?;
        Histogram::from_dataset(dataset, bins)
    }
}

impl<T: DataBacked + ?Sized> HistogramExt for T {}
