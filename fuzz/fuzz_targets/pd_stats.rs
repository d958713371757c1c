#![no_main]

use libfuzzer_sys::fuzz_target;
use pd_prob::stats::{mean_of, standard_deviation_of};
use pd_prob::{Distribution, Gaussian, Histogram, SampleMode};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the mode and bin count; the rest is read as f64 values.
    let mode = SampleMode::from_is_sample(data[0] & 1 == 0);
    let bins = 1 + (data[0] >> 1) as usize;
    let values: Vec<f64> = data[1..]
        .chunks_exact(8)
        .map(|c| f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
        .filter(|v| v.is_finite())
        .take(4096)
        .collect();

    let _ = mean_of(&values);
    let _ = standard_deviation_of(&values, mode, None);

    if let Ok(ds) = pd_prob::Dataset::new(values) {
        let _ = Histogram::from_dataset(&ds, bins);
        if let Ok(g) = Gaussian::from_dataset(ds, mode) {
            let _ = g.pdf(g.mean());
        }
    }
});
