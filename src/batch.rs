//! Elementwise application of the centroid kernel over a batch of waveforms.
//!
//! A batch is a 2-D array of shape `(rows, samples)`. Each row is evaluated
//! independently, so results do not depend on evaluation order or on the
//! other rows. Only a malformed call (a per-row shift vector of the wrong
//! length) fails the whole batch; bad rows come back as NaN.

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use rayon::prelude::*;

use crate::centroid::CentroidCalculator;
use crate::error::{CentroidError, ErrorKind, Result};
use crate::sample::Sample;

/// Shift argument for a batch: one value for every row, or one per row.
#[derive(Debug, Clone)]
pub enum Shifts<'a, T> {
    Scalar(T),
    PerRow(ArrayView1<'a, T>),
}

impl<T: Sample> Shifts<'_, T> {
    fn for_row(&self, row: usize) -> T {
        match self {
            Self::Scalar(shift) => *shift,
            Self::PerRow(shifts) => shifts[row],
        }
    }

    fn check_len(&self, rows: usize) -> Result<()> {
        match self {
            Self::PerRow(shifts) if shifts.len() != rows => Err(CentroidError::ShapeMismatch {
                expected: rows,
                actual: shifts.len(),
            }),
            _ => Ok(()),
        }
    }
}

impl<T: Sample> From<T> for Shifts<'_, T> {
    fn from(shift: T) -> Self {
        Self::Scalar(shift)
    }
}

impl<'a, T: Sample> From<ArrayView1<'a, T>> for Shifts<'a, T> {
    fn from(shifts: ArrayView1<'a, T>) -> Self {
        Self::PerRow(shifts)
    }
}

impl<'a, T: Sample> From<&'a [T]> for Shifts<'a, T> {
    fn from(shifts: &'a [T]) -> Self {
        Self::PerRow(ArrayView1::from(shifts))
    }
}

/// Per-batch tally of outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub rows: usize,
    pub valid: usize,
    pub invalid_input: usize,
    pub degenerate: usize,
}

impl BatchReport {
    fn record<T>(&mut self, outcome: &Result<T>) {
        self.rows += 1;
        match outcome {
            Ok(_) => self.valid += 1,
            Err(e) => match e.kind() {
                ErrorKind::DegenerateWaveform => self.degenerate += 1,
                _ => self.invalid_input += 1,
            },
        }
    }

    /// Rows that produced NaN
    pub fn undefined(&self) -> usize {
        self.rows - self.valid
    }
}

impl CentroidCalculator {
    /// Centroid of every row of `waveforms`.
    ///
    /// The output has one element per row and the same float width as the
    /// input.
    ///
    /// # Example
    /// ```
    /// use ndarray::array;
    /// use wfcentroid::CentroidCalculator;
    ///
    /// let batch = array![[-2.0_f64, -1.0, 0.0, 1.0, 2.0], [0.0, 0.0, 0.0, 0.0, 0.0]];
    /// let out = CentroidCalculator::default()
    ///     .compute_batch(batch.view(), 0.0)
    ///     .unwrap();
    /// assert_eq!(out[0], 2.0);
    /// assert!(out[1].is_nan());
    /// ```
    pub fn compute_batch<'a, T: Sample>(
        &self,
        waveforms: ArrayView2<'_, T>,
        shifts: impl Into<Shifts<'a, T>>,
    ) -> Result<Array1<T>> {
        self.compute_batch_with_report(waveforms, shifts)
            .map(|(centroids, _)| centroids)
    }

    /// Same as [`compute_batch`](Self::compute_batch), also returning a
    /// tally of valid and rejected rows.
    pub fn compute_batch_with_report<'a, T: Sample>(
        &self,
        waveforms: ArrayView2<'_, T>,
        shifts: impl Into<Shifts<'a, T>>,
    ) -> Result<(Array1<T>, BatchReport)> {
        let shifts = shifts.into();
        let rows = waveforms.len_of(Axis(0));
        shifts.check_len(rows)?;

        let outcomes: Vec<Result<T>> = if self.config().batch.parallel {
            (0..rows)
                .into_par_iter()
                .with_min_len(self.config().batch.min_rows_per_task)
                .map(|i| self.row_centroid(waveforms.row(i), shifts.for_row(i)))
                .collect()
        } else {
            (0..rows)
                .map(|i| self.row_centroid(waveforms.row(i), shifts.for_row(i)))
                .collect()
        };

        let mut report = BatchReport::default();
        let centroids = outcomes
            .into_iter()
            .map(|outcome| {
                report.record(&outcome);
                outcome.unwrap_or_else(|e| {
                    log::trace!("centroid undefined: {}", e);
                    T::nan()
                })
            })
            .collect::<Array1<T>>();

        log::debug!(
            "Centroid batch: {} rows, {} valid, {} invalid input, {} degenerate",
            report.rows,
            report.valid,
            report.invalid_input,
            report.degenerate
        );
        if report.rows > 0 && report.valid == 0 {
            log::warn!("No valid centroid in batch of {} rows", report.rows);
        }

        Ok((centroids, report))
    }

    fn row_centroid<T: Sample>(&self, row: ArrayView1<'_, T>, shift: T) -> Result<T> {
        let centroid = match row.as_slice() {
            Some(samples) => self.try_compute(samples, shift)?,
            None => self.try_compute(&row.to_vec(), shift)?,
        };
        Ok(centroid.value)
    }
}
