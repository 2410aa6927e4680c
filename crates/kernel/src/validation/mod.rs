pub mod config;
pub mod grid;
pub mod samples;
pub mod types;

pub use config::*;
pub use types::*;

use tracing::{info, instrument};

use crate::mesh::{ExtrudedMesh, SequenceMesh};
use crate::profile::Profile;
use crate::sequence::ProfileSequence;

/// Read-only checker for profiles, sequences, and meshes.
///
/// - **Profiles**: finite samples, heights at or above still water outside
///   the lip, non-negative thickness, arc order, array lengths.
/// - **Sequences**: every member as a profile, plus strictly increasing
///   progress.
/// - **Meshes**: finite points, matching outer/inner shapes, inner points in
///   their outer point's cross-section plane, one sweep/progress value per row.
///
/// Nothing is ever repaired or clamped; findings are only reported.
#[derive(Debug, Clone, Default)]
pub struct ProfileValidator {
    config: ValidationConfig,
}

impl ProfileValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    #[instrument(skip(self, profile), fields(samples = profile.len()))]
    pub fn validate(&self, profile: &Profile) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        samples::check_profile(profile, &self.config, Location::Sample, &mut errors, &mut warnings);
        finish(errors, warnings)
    }

    #[instrument(skip(self, sequence), fields(members = sequence.len()))]
    pub fn validate_sequence(&self, sequence: &ProfileSequence) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        for (member, m) in sequence.iter().enumerate() {
            samples::check_profile(
                &m.profile,
                &self.config,
                |sample| Location::MemberSample { member, sample },
                &mut errors,
                &mut warnings,
            );
        }
        grid::check_progress_order(&sequence.progress(), &mut errors);
        finish(errors, warnings)
    }

    #[instrument(skip(self, mesh), fields(shape = ?mesh.shape()))]
    pub fn validate_mesh(&self, mesh: &ExtrudedMesh) -> ValidationReport {
        let mut errors = Vec::new();
        grid::check_finite(&mesh.outer, Hull::Outer, &mut errors);
        grid::check_finite(&mesh.inner, Hull::Inner, &mut errors);
        grid::check_hull_pair(&mesh.outer, &mesh.inner, &mut errors);
        grid::check_row_count(&mesh.outer, &mesh.sweep, "sweep", &mut errors);
        finish(errors, Vec::new())
    }

    #[instrument(skip(self, mesh), fields(shape = ?mesh.shape()))]
    pub fn validate_sequence_mesh(&self, mesh: &SequenceMesh) -> ValidationReport {
        let mut errors = Vec::new();
        grid::check_finite(&mesh.surface, Hull::Surface, &mut errors);
        grid::check_row_count(&mesh.surface, &mesh.sweep, "sweep", &mut errors);
        grid::check_row_count(&mesh.surface, &mesh.progress, "progress", &mut errors);
        grid::check_progress_order(&mesh.progress, &mut errors);
        finish(errors, Vec::new())
    }
}

fn finish(errors: Vec<ValidationError>, warnings: Vec<ValidationError>) -> ValidationReport {
    let report = ValidationReport::from_findings(errors, warnings);
    info!(
        valid = report.valid,
        error_count = report.error_count(),
        warning_count = report.warning_count(),
        "validation complete"
    );
    report
}

/// Validate a profile with the default configuration.
pub fn validate_profile(profile: &Profile) -> ValidationReport {
    ProfileValidator::default().validate(profile)
}

/// Validate an extruded mesh with the default configuration.
pub fn validate_mesh(mesh: &ExtrudedMesh) -> ValidationReport {
    ProfileValidator::default().validate_mesh(mesh)
}
