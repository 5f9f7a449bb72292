//! Reproducible input data for the numutils benchmarks.

use rand::prelude::*;
use rand_distr::Normal;

/// Generate a pair of sequences where `b` is `a` plus Gaussian noise of
/// standard deviation `noise`.
pub fn generate_noisy_pair(size: usize, noise: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, noise).unwrap();

    let a: Vec<f64> = (0..size).map(|i| (i as f64 * 0.01).sin()).collect();
    let b: Vec<f64> = a.iter().map(|&ai| ai + noise_dist.sample(&mut rng)).collect();
    (a, b)
}

/// Generate a pair of identical sequences except for one element at the end.
pub fn generate_late_mismatch(size: usize) -> (Vec<f64>, Vec<f64>) {
    let a: Vec<f64> = (0..size).map(|i| i as f64).collect();
    let mut b = a.clone();
    if let Some(last) = b.last_mut() {
        *last += 1.0;
    }
    (a, b)
}
