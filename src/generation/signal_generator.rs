//! Seeded sample sources for synthetic test cases
//! Location: src/generation/signal_generator.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GenerationConfig;

/// Seeded generator for the synthetic signals
pub struct SignalGenerator {
    rng: StdRng,
}

impl SignalGenerator {
    /// Deterministic when `seed` is set, otherwise seeded from the OS
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.seed)
    }

    /// One standard-normal sample
    pub fn gaussian(&mut self) -> f64 {
        // Box-Muller transform for Gaussian random numbers; u1 in (0, 1]
        let u1 = 1.0 - self.rng.gen::<f64>();
        let u2 = self.rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Zero-mean Gaussian noise with standard deviation `std`
    pub fn white_noise(&mut self, n: usize, std: f64) -> Vec<f64> {
        (0..n).map(|_| std * self.gaussian()).collect()
    }

    /// `sin(t)` over `n` evenly spaced points in `[0, duration]`
    pub fn sine(&self, n: usize, duration: f64) -> Vec<f64> {
        linspace(0.0, duration, n).into_iter().map(f64::sin).collect()
    }

    /// Narrowband interference `amplitude * sin(frequency * t)`
    pub fn colored_noise(&self, n: usize, duration: f64, amplitude: f64, frequency: f64) -> Vec<f64> {
        linspace(0.0, duration, n)
            .into_iter()
            .map(|t| amplitude * (frequency * t).sin())
            .collect()
    }
}

/// `n` evenly spaced samples from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
