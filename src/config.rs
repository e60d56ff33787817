//! Configuration for the centroid kernel.
//!
//! All structs implement `Default` and serde's `Serialize`/`Deserialize`,
//! so the surrounding pipeline can embed them in its own configuration.
//!
//! ```
//! use wfcentroid::config::{CentroidConfig, RoundingMode};
//!
//! let mut config = CentroidConfig::default();
//! config.rounding = "half-away".parse().unwrap();
//! config.batch.parallel = false;
//! assert_eq!(config.rounding, RoundingMode::HalfAwayFromZero);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MIN_ROWS_PER_TASK;
use crate::error::{CentroidError, Result};

/// Tie-breaking rule used when rounding the mean crossing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Ties go to the even neighbour (2.5 -> 2, 3.5 -> 4)
    #[default]
    HalfEven,
    /// Ties go away from zero (2.5 -> 3)
    HalfAwayFromZero,
}

impl RoundingMode {
    pub fn round(self, value: f64) -> f64 {
        match self {
            Self::HalfEven => value.round_ties_even(),
            Self::HalfAwayFromZero => value.round(),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfEven => write!(f, "half-even"),
            Self::HalfAwayFromZero => write!(f, "half-away-from-zero"),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-even" | "even" | "bankers" => Ok(Self::HalfEven),
            "half-away-from-zero" | "half-away" | "away" => Ok(Self::HalfAwayFromZero),
            other => Err(format!("invalid rounding mode: {}", other)),
        }
    }
}

/// Batch evaluation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Evaluate rows on the rayon thread pool
    pub parallel: bool,
    /// Minimum number of rows per rayon task
    pub min_rows_per_task: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_rows_per_task: DEFAULT_MIN_ROWS_PER_TASK,
        }
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_rows_per_task == 0 {
            return Err(CentroidError::Config(
                "min_rows_per_task must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level kernel configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentroidConfig {
    /// Rounding applied to the mean crossing position
    pub rounding: RoundingMode,
    /// Batch evaluation settings
    pub batch: BatchConfig,
}

impl CentroidConfig {
    pub fn validate(&self) -> Result<()> {
        self.batch.validate()
    }
}
