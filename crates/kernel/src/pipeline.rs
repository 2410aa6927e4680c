//! End-to-end builds driven by a [`WaveConfig`].

use tracing::{info, instrument};

use crate::config::WaveConfig;
use crate::geometry::sampling::interp;
use crate::mesh::{ExtrudedMesh, SequenceMesh};
use crate::operations::OperationError;
use crate::operations::extrude::extrude_profile;
use crate::operations::sweep::extrude_sequence;
use crate::profile::{Profile, ProfileStrategy, ShapeParameters};
use crate::sequence::{ProfileSequence, generate_sequence};

/// Linear base-to-lip taper used when a strategy supplies no thickness.
pub fn default_thickness(params: &ShapeParameters) -> impl Fn(f64) -> f64 + use<> {
    let base = params.base_thickness();
    let lip = params.lip_thickness();
    move |a| interp(a, 0.0, 1.0, base, lip)
}

/// Synthesize the configured strategy at `progress`, attaching the default
/// taper if the strategy is height-only.
pub fn build_profile(config: &WaveConfig, progress: f64) -> Profile {
    let profile = config.strategy.synthesize(&config.shape, progress);
    if profile.has_thickness() {
        profile
    } else {
        profile.with_thickness(default_thickness(&config.shape))
    }
}

/// Profile plus two-hull extrusion for one moment of the configured wave.
#[instrument(skip(config), fields(strategy = config.strategy.name()))]
pub fn build_profile_mesh(config: &WaveConfig, progress: f64) -> Result<ExtrudedMesh, OperationError> {
    let profile = build_profile(config, progress);
    extrude_profile(&profile, config.extrusion.extent, config.extrusion.sweep_count)
}

/// The configured sequence, drifted per member.
pub fn build_sequence(config: &WaveConfig) -> ProfileSequence {
    generate_sequence(&config.strategy, &config.shape, config.sequence_count, &config.drift)
}

/// Sequence of `sequence_count` profiles swept into one surface.
#[instrument(skip(config), fields(strategy = config.strategy.name(), count = config.sequence_count))]
pub fn build_sequence_mesh(config: &WaveConfig) -> Result<SequenceMesh, OperationError> {
    let sequence = build_sequence(config);
    let mesh = extrude_sequence(&sequence, config.extrusion.extent)?;
    info!(shape = ?mesh.shape(), "built sequence mesh");
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::StrategyKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_breaking_gets_default_taper() {
        let config = WaveConfig::default();
        let profile = build_profile(&config, 1.0);
        let t = profile.thickness.as_ref().unwrap();
        assert_relative_eq!(t[0], 5.0 * 0.35, epsilon = 1e-12);
        assert_relative_eq!(t[t.len() - 1], 5.0 * 0.08, epsilon = 1e-12);
    }

    #[test]
    fn test_catenary_keeps_own_thickness() {
        let config = WaveConfig {
            strategy: StrategyKind::Catenary,
            ..Default::default()
        };
        let profile = build_profile(&config, 0.0);
        assert_eq!(
            profile.thickness,
            config.strategy.synthesize(&config.shape, 0.0).thickness
        );
    }

    #[test]
    fn test_profile_mesh_shape() {
        let mesh = build_profile_mesh(&WaveConfig::default(), 0.7).unwrap();
        assert_eq!(mesh.shape(), (12, 200));
        assert_eq!(mesh.inner.shape(), mesh.outer.shape());
    }

    #[test]
    fn test_sequence_mesh_shape() {
        let mesh = build_sequence_mesh(&WaveConfig::default()).unwrap();
        assert_eq!(mesh.shape(), (15, 200));
        assert_eq!(mesh.progress.len(), 15);
    }
}
