use thiserror::Error;

/// Broad class of a [`CentroidError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// NaN in the waveform or shift, or shift out of bounds.
    InvalidInput,
    /// No sign crossing inside the min/max window.
    DegenerateWaveform,
    /// The caller handed over inconsistent arguments.
    Contract,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CentroidError {
    #[error("NaN sample at index {index}")]
    NanSample { index: usize },

    #[error("shift is NaN")]
    NanShift,

    #[error("shift {shift} outside [0, {max}]")]
    ShiftOutOfRange { shift: f64, max: f64 },

    #[error("empty window: minimum at {min_index}, maximum at {max_index}")]
    EmptyWindow { min_index: usize, max_index: usize },

    #[error("no positive sample in window [{min_index}, {max_index})")]
    NoPositiveSample { min_index: usize, max_index: usize },

    #[error("no negative sample in window [{min_index}, {max_index})")]
    NoNegativeSample { min_index: usize, max_index: usize },

    #[error("shape mismatch: expected {expected} shifts, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CentroidError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NanSample { .. } | Self::NanShift | Self::ShiftOutOfRange { .. } => {
                ErrorKind::InvalidInput
            }
            Self::EmptyWindow { .. }
            | Self::NoPositiveSample { .. }
            | Self::NoNegativeSample { .. } => ErrorKind::DegenerateWaveform,
            Self::ShapeMismatch { .. } | Self::Config(_) => ErrorKind::Contract,
        }
    }
}

pub type Result<T> = std::result::Result<T, CentroidError>;
