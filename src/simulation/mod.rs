//! Synthetic detector waveforms for exercising the centroid kernel.
//!
//! Only built with the `simulation` feature.

mod noise;
mod pulse;

pub use noise::{NoiseConfig, add_white_noise, signal_power};
pub use pulse::{bipolar_pulse, gaussian_pulse, step_convolve, to_width};
