//! Centroid of step-convolved detector waveforms.
//!
//! A raw pulse convolved with a step function turns into a bipolar shape:
//! a minimum, a zero crossing, then a maximum. The centroid is the rounded
//! midpoint of the crossing region between those extrema, plus a caller
//! supplied shift. Invalid or degenerate waveforms yield NaN instead of an
//! error, so one bad row never aborts a batch.

pub mod batch;
pub mod centroid;
pub mod config;
pub mod constants;
pub mod error;
pub mod registration;
pub mod sample;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use batch::{BatchReport, Shifts};
pub use centroid::{Centroid, CentroidCalculator, CrossingWindow, wf_centroid};
pub use config::{BatchConfig, CentroidConfig, RoundingMode};
pub use error::{CentroidError, ErrorKind, Result};
pub use registration::ProcessorInfo;
pub use sample::Sample;
