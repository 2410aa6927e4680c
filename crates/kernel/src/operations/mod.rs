pub mod extrude;
pub mod sweep;

/// Structured error type for kernel operations.
///
/// Synthesis itself never fails; these cover inputs the extruders and the
/// sequence generator cannot interpret, plus opt-in parameter validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OperationError {
    /// Single-profile extrusion needs a per-sample thickness for the inner hull.
    #[error("profile has no thickness; attach one with Profile::with_thickness")]
    MissingThickness,

    /// Sequence members must share one sample count to form a grid.
    #[error("profile {index} has {found} samples, expected {expected}")]
    ProfileMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A per-sample array or grid row disagrees with the sample count.
    #[error("{field} has {found} entries, expected {expected}")]
    SampleCountMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// Explicit progress lists must be finite and strictly increasing.
    #[error("progress value {value} at index {index} does not follow {previous}")]
    NonMonotonicProgress {
        index: usize,
        previous: f64,
        value: f64,
    },

    #[error("{parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: String,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl OperationError {
    pub(crate) fn invalid(parameter: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            reason: reason.into(),
        }
    }
}
