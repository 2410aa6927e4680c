//! Shared types for profile and mesh validation.
//!
//! Defines error codes, severity levels, finding locations, and the
//! `ValidationReport` returned by every check.

use std::fmt;

use serde::Serialize;

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// The data breaks an invariant downstream code relies on.
    Error,
    /// Informational; may be intentional (e.g. a zero-thickness lip tip).
    Warning,
}

/// Which point grid of a mesh a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Hull {
    Outer,
    Inner,
    Surface,
}

/// Where a finding was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    /// Sample `index` of a profile.
    Sample(usize),
    /// Sample `sample` of sequence member `member`.
    MemberSample { member: usize, sample: usize },
    /// Sequence member or mesh row, by index.
    Row(usize),
    /// One point of a mesh grid.
    GridPoint { hull: Hull, row: usize, col: usize },
    /// The object as a whole.
    Whole,
}

/// Enumeration of all validation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    // --- Profiles ---
    /// A coordinate, arc value, or thickness is NaN or infinite.
    NonFiniteValue,
    /// Thickness is below zero.
    NegativeThickness,
    /// Thickness is below the configured thin-wall threshold.
    ThinWall,
    /// Height is below still water outside the lip.
    BelowGround,
    /// Arc coordinates are not non-decreasing.
    ArcNotMonotonic,
    /// Arc or thickness array length differs from the point count.
    SampleCountMismatch,
    /// Curl region extends past the last sample.
    CurlRegionOutOfBounds,

    // --- Meshes and sequences ---
    /// Outer and inner hulls differ in shape.
    HullShapeMismatch,
    /// An inner point does not share its outer point's sweep coordinate.
    SweepCoordinateMismatch,
    /// Sweep or progress list length differs from the row count.
    RowCountMismatch,
    /// Progress values are not strictly increasing.
    ProgressNotIncreasing,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single validation finding (error or warning).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub location: Location,
    pub code: ErrorCode,
    /// Human-readable description.
    pub message: String,
    pub severity: Severity,
    /// Measured value that triggered the finding, if numeric.
    pub numeric_value: Option<f64>,
    /// Threshold that was exceeded.
    pub tolerance: Option<f64>,
}

impl ValidationError {
    pub(crate) fn error(location: Location, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            location,
            code,
            message: message.into(),
            severity: Severity::Error,
            numeric_value: None,
            tolerance: None,
        }
    }

    pub(crate) fn warning(location: Location, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(location, code, message)
        }
    }

    pub(crate) fn with_value(mut self, value: f64, tolerance: Option<f64>) -> Self {
        self.numeric_value = Some(value);
        self.tolerance = tolerance;
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sev = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        write!(f, "[{}] {:?}: {} (code: {})", sev, self.location, self.message, self.code)?;
        if let Some(val) = self.numeric_value {
            write!(f, " value={val:.2e}")?;
        }
        if let Some(tol) = self.tolerance {
            write!(f, " tol={tol:.2e}")?;
        }
        Ok(())
    }
}

/// Errors and warnings collected by one validation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// `true` when there are no errors. Warnings do not affect validity.
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

impl ValidationReport {
    pub(crate) fn from_findings(errors: Vec<ValidationError>, warnings: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Filter errors by a specific error code.
    pub fn errors_of(&self, code: ErrorCode) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.code == code).collect()
    }

    /// Filter warnings by a specific error code.
    pub fn warnings_of(&self, code: ErrorCode) -> Vec<&ValidationError> {
        self.warnings.iter().filter(|e| e.code == code).collect()
    }

    /// Check that no errors of a specific code exist.
    pub fn no_errors_of(&self, code: ErrorCode) -> bool {
        !self.errors.iter().any(|e| e.code == code)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ValidationReport: valid={}, errors={}, warnings={}",
            self.valid,
            self.errors.len(),
            self.warnings.len()
        )?;
        for e in &self.errors {
            writeln!(f, "  {e}")?;
        }
        for w in &self.warnings {
            writeln!(f, "  {w}")?;
        }
        Ok(())
    }
}
