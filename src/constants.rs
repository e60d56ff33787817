//! Default names and sizes shared across the crate.

/// Symbolic name the orchestration layer registers the kernel under.
pub const PROCESSOR_FUNCTION: &str = "get_wf_centroid";

/// Module path reported in the registration metadata.
pub const PROCESSOR_MODULE: &str = "wfcentroid";

/// Default event-record field supplying the waveform.
pub const DEFAULT_WAVEFORM_FIELD: &str = "waveform";

/// Default event-record field supplying the shift.
pub const DEFAULT_SHIFT_FIELD: &str = "shift";

/// Default event-record field receiving the centroid.
pub const DEFAULT_OUTPUT_FIELD: &str = "centroid";

/// Physical unit label attached to the output.
pub const DEFAULT_UNIT: &str = "ADC";

/// Rows handed to one rayon task at a time when a batch runs in parallel.
pub const DEFAULT_MIN_ROWS_PER_TASK: usize = 64;
