//! Breaking-wave profile synthesis and extrusion.
//!
//! The kernel turns a handful of [`ShapeParameters`] into arc-ordered 2D
//! wave silhouettes ([`Profile`]), families of them over time
//! ([`ProfileSequence`]), and 3D point grids ([`ExtrudedMesh`],
//! [`SequenceMesh`]). All 3D points use `(x, height, sweep)` axes.

pub mod config;
pub mod geometry;
pub mod mesh;
pub mod operations;
pub mod pipeline;
pub mod profile;
pub mod sequence;
pub mod validation;

pub use config::{ExtrusionConfig, WaveConfig};
pub use mesh::{ExtrudedMesh, PointGrid, SequenceMesh};
pub use operations::OperationError;
pub use operations::extrude::{extrude_profile, extrude_profile_with};
pub use operations::sweep::extrude_sequence;
pub use profile::{Profile, ProfileStrategy, ShapeParameters, StrategyKind};
pub use sequence::{ProfileSequence, SequenceDrift, generate_sequence, generate_sequence_at};
pub use validation::{ProfileValidator, ValidationReport};

/// Global tolerance configuration for numeric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Points closer than this are considered coincident.
    pub coincidence: f64,
    /// Added to `|tangent|²` before normalizing, so zero tangents give zero
    /// normals instead of NaN.
    pub normal_epsilon: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            coincidence: 1e-7,
            normal_epsilon: 1e-6,
        }
    }
}

pub fn default_tolerance() -> Tolerance {
    Tolerance::default()
}
