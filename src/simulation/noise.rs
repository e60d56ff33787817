use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{CentroidError, Result};

/// Additive white Gaussian noise
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct NoiseConfig {
    pub std_dev: f64,
    pub seed: Option<u64>,
}

impl NoiseConfig {
    pub fn new(std_dev: f64) -> Self {
        Self {
            std_dev,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

pub fn signal_power(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().map(|&x| x * x).sum::<f64>() / signal.len() as f64
}

pub fn add_white_noise(signal: &mut [f64], config: &NoiseConfig) -> Result<()> {
    if !config.std_dev.is_finite() || config.std_dev < 0.0 {
        return Err(CentroidError::Config(format!(
            "noise std_dev must be finite and non-negative, got {}",
            config.std_dev
        )));
    }

    let normal = Normal::new(0.0, config.std_dev)
        .map_err(|e| CentroidError::Config(format!("noise distribution: {}", e)))?;
    let mut rng = create_rng(config.seed);

    for sample in signal.iter_mut() {
        *sample += normal.sample(&mut rng);
    }
    Ok(())
}
