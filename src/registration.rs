//! Registration metadata handed to the orchestration layer.
//!
//! The pipeline looks processors up by name, binds their arguments to
//! fields of an event record and tags the output with a unit. This crate
//! only describes itself; it does not perform any of that lookup.
//!
//! ```
//! use wfcentroid::registration::ProcessorInfo;
//!
//! let info = ProcessorInfo::centroid().with_args("wf_cusp", "t0_shift", "tp_centroid");
//! assert_eq!(info.waveform_field(), "wf_cusp");
//! assert_eq!(info.unit, "ADC");
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_OUTPUT_FIELD, DEFAULT_SHIFT_FIELD, DEFAULT_UNIT, DEFAULT_WAVEFORM_FIELD,
    PROCESSOR_FUNCTION, PROCESSOR_MODULE,
};

/// One processor entry as the pipeline expects it:
/// `{"function": .., "module": .., "args": [waveform, shift, output], "unit": ..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorInfo {
    pub function: String,
    pub module: String,
    /// Event-record fields bound to waveform, shift and output, in that order
    pub args: [String; 3],
    pub unit: String,
}

impl ProcessorInfo {
    /// Metadata for the centroid kernel with the default field names.
    pub fn centroid() -> Self {
        Self {
            function: PROCESSOR_FUNCTION.to_string(),
            module: PROCESSOR_MODULE.to_string(),
            args: [
                DEFAULT_WAVEFORM_FIELD.to_string(),
                DEFAULT_SHIFT_FIELD.to_string(),
                DEFAULT_OUTPUT_FIELD.to_string(),
            ],
            unit: DEFAULT_UNIT.to_string(),
        }
    }

    pub fn with_args(
        mut self,
        waveform: impl Into<String>,
        shift: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        self.args = [waveform.into(), shift.into(), output.into()];
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn waveform_field(&self) -> &str {
        &self.args[0]
    }

    pub fn shift_field(&self) -> &str {
        &self.args[1]
    }

    pub fn output_field(&self) -> &str {
        &self.args[2]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for ProcessorInfo {
    fn default() -> Self {
        Self::centroid()
    }
}
