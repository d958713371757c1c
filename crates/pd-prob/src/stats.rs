//! Descriptive statistics over a 1-D sample.
//!
//! These are the building blocks the data-driven constructors rely on. They take plain
//! slices so collaborators can call them without building a [`pd_core::Dataset`].

use pd_core::{Error, Result, SampleMode};

/// Arithmetic mean of `data`.
pub fn mean_of(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::EmptyInput("mean of an empty dataset is undefined".into()));
    }
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    if mean.is_finite() {
        return Ok(mean);
    }
    // The running sum overflowed; dividing first keeps every term finite.
    Ok(data.iter().map(|&x| x / n).sum())
}

/// Divisor for `mode`, or `EmptyInput` when there are too few observations.
fn divisor_for(data: &[f64], mode: SampleMode) -> Result<f64> {
    mode.divisor(data.len()).map(|d| d as f64).ok_or_else(|| {
        Error::EmptyInput(format!(
            "{:?} variance needs at least {} observations, got {}",
            mode,
            if mode.is_sample() { 2 } else { 1 },
            data.len()
        ))
    })
}

/// `(scale, ss)` with `scale = max |x - mu|` and `ss = sum(((x - mu) / scale)^2)`.
///
/// The sum of squares is then `scale^2 * ss`, which is never formed directly.
fn scaled_sum_of_squares(data: &[f64], mu: f64) -> (f64, f64) {
    let scale = data.iter().fold(0.0f64, |m, &x| m.max((x - mu).abs()));
    if scale == 0.0 {
        return (0.0, 0.0);
    }
    if !scale.is_finite() {
        return (scale, 1.0);
    }
    let ss = data.iter().map(|&x| (x - mu) / scale).map(|d| d * d).sum();
    (scale, ss)
}

fn center(data: &[f64], mean_value: Option<f64>) -> Result<f64> {
    match mean_value {
        Some(m) => Ok(m),
        None => mean_of(data),
    }
}

/// Variance of `data` under `mode`.
///
/// `mean_value` is used as the center when given; otherwise the mean is computed.
/// The variance itself can exceed `f64::MAX` (spread beyond ~1.3e154) and then is `inf`;
/// [`standard_deviation_of`] stays finite in that range.
pub fn variance_of(data: &[f64], mode: SampleMode, mean_value: Option<f64>) -> Result<f64> {
    let divisor = divisor_for(data, mode)?;
    let mu = center(data, mean_value)?;
    let (scale, ss) = scaled_sum_of_squares(data, mu);
    Ok(scale * scale * ss / divisor)
}

/// Standard deviation of `data` under `mode`: `sqrt(variance_of(..))`.
///
/// Computed as `scale * sqrt(ss / divisor)`, so it is finite whenever every deviation
/// `x - mean` is. Deviations themselves overflow only for values near `f64::MAX`.
pub fn standard_deviation_of(
    data: &[f64],
    mode: SampleMode,
    mean_value: Option<f64>,
) -> Result<f64> {
    let divisor = divisor_for(data, mode)?;
    let mu = center(data, mean_value)?;
    let (scale, ss) = scaled_sum_of_squares(data, mu);
    Ok(scale * (ss / divisor).sqrt())
}
