use crate::config::CentroidConfig;
use crate::error::{CentroidError, Result};
use crate::sample::Sample;

/// Sample indices bounding the zero-crossing region of a waveform
///
/// All indices are absolute positions in the input waveform, before the
/// shift is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingWindow {
    /// First occurrence of the minimum sample (window start, inclusive)
    pub min_index: usize,
    /// First occurrence of the maximum sample (window end, exclusive)
    pub max_index: usize,
    /// First strictly positive sample inside the window
    pub first_positive: usize,
    /// Last strictly negative sample inside the window
    pub last_negative: usize,
}

/// A valid centroid together with the window it was derived from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid<T> {
    pub value: T,
    pub window: CrossingWindow,
}

/// Centroid of a step-convolved bipolar pulse
///
/// Finds the minimum and the maximum of the waveform, looks for the first
/// positive and the last negative sample between them, and reports the
/// rounded midpoint of those two positions plus `shift`.
///
/// The calculator holds only its configuration; every call is independent,
/// so one instance can be shared freely across threads.
///
/// # Example
/// ```
/// use wfcentroid::CentroidCalculator;
///
/// let calc = CentroidCalculator::default();
/// assert_eq!(calc.compute(&[-2.0_f32, -1.0, 0.0, 1.0, 2.0], 0.0), 2.0);
/// assert!(calc.compute(&[-2.0_f32, -1.0, 0.0, 1.0, 2.0], -1.0).is_nan());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CentroidCalculator {
    config: CentroidConfig,
}

impl CentroidCalculator {
    pub fn new(config: CentroidConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CentroidConfig {
        &self.config
    }

    /// Centroid of `waveform`, or NaN when it cannot be computed.
    ///
    /// NaN in the input, a shift outside `[0, len - 1]` and waveforms
    /// without a sign crossing between their extrema all yield NaN.
    pub fn compute<T: Sample>(&self, waveform: &[T], shift: T) -> T {
        match self.try_compute(waveform, shift) {
            Ok(centroid) => centroid.value,
            Err(e) => {
                log::trace!("centroid undefined: {}", e);
                T::nan()
            }
        }
    }

    /// Like [`compute`](Self::compute), but reports why a waveform was
    /// rejected and which window produced a valid result.
    pub fn try_compute<T: Sample>(&self, waveform: &[T], shift: T) -> Result<Centroid<T>> {
        if let Some(index) = waveform.iter().position(|s| s.is_nan()) {
            return Err(CentroidError::NanSample { index });
        }
        if shift.is_nan() {
            return Err(CentroidError::NanShift);
        }

        let shift = shift.to_f64();
        let max_shift = waveform.len() as f64 - 1.0;
        if shift < 0.0 || shift > max_shift {
            return Err(CentroidError::ShiftOutOfRange {
                shift,
                max: max_shift,
            });
        }

        let window = find_crossing_window(waveform)?;

        let c_a = window.first_positive as f64 + shift;
        let c_b = window.last_negative as f64 + shift;
        let value = self.config.rounding.round((c_a + c_b) / 2.0);

        Ok(Centroid {
            value: T::from_f64(value),
            window,
        })
    }
}

/// Centroid with the default configuration.
pub fn wf_centroid<T: Sample>(waveform: &[T], shift: T) -> T {
    CentroidCalculator::default().compute(waveform, shift)
}

/// Locate the extrema and the sign crossings between them.
///
/// Expects a non-empty, NaN-free waveform.
fn find_crossing_window<T: Sample>(waveform: &[T]) -> Result<CrossingWindow> {
    let (min_index, max_index) = first_extrema(waveform);

    if max_index <= min_index {
        return Err(CentroidError::EmptyWindow {
            min_index,
            max_index,
        });
    }

    let window = &waveform[min_index..max_index];

    let first_positive = window
        .iter()
        .position(|s| s.is_strictly_positive())
        .ok_or(CentroidError::NoPositiveSample {
            min_index,
            max_index,
        })?;
    let last_negative = window
        .iter()
        .rposition(|s| s.is_strictly_negative())
        .ok_or(CentroidError::NoNegativeSample {
            min_index,
            max_index,
        })?;

    Ok(CrossingWindow {
        min_index,
        max_index,
        first_positive: min_index + first_positive,
        last_negative: min_index + last_negative,
    })
}

/// Indices of the first minimum and the first maximum.
fn first_extrema<T: Sample>(waveform: &[T]) -> (usize, usize) {
    let mut min_index = 0;
    let mut max_index = 0;
    for (i, &sample) in waveform.iter().enumerate().skip(1) {
        // Strict comparisons keep the first occurrence on ties
        if sample < waveform[min_index] {
            min_index = i;
        }
        if sample > waveform[max_index] {
            max_index = i;
        }
    }
    (min_index, max_index)
}
