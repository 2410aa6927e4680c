//! End-to-end scenarios with known numeric outcomes.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use breaker_kernel::pipeline::{build_profile_mesh, build_sequence_mesh};
use breaker_kernel::profile::breaking::{base_profile, plan_curl};
use breaker_kernel::validation::{ProfileValidator, validate_mesh};
use breaker_kernel::{
    OperationError, ProfileStrategy, ShapeParameters, StrategyKind, WaveConfig, extrude_profile,
    extrude_sequence, generate_sequence,
};

fn barrel_params() -> ShapeParameters {
    ShapeParameters {
        radius: 5.0,
        arc_segments: 24,
        spiral_tightness: 0.3,
        lip_droop: 0.4,
        ..Default::default()
    }
}

fn swell_params() -> ShapeParameters {
    ShapeParameters {
        amplitude: 0.6,
        peak_position: -1.5,
        width: 0.8,
        ..Default::default()
    }
}

#[test]
fn spiral_barrel_endpoints() {
    let profile = StrategyKind::Spiral.synthesize(&barrel_params(), 0.0);
    assert_eq!(profile.len(), 24);

    let first = profile.points[0];
    assert_abs_diff_eq!(first.x, -5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(first.y, 0.0, epsilon = 1e-12);

    // Angle -0.4 puts the tip below the horizontal: clamped to 0, then the
    // full droop of 0.4 * 5 * 0.5 is subtracted.
    let last = profile.points[23];
    let r = 5.0 * (-0.3f64).exp();
    assert_relative_eq!(last.x, (-0.4f64).cos() * r, epsilon = 1e-9);
    assert_relative_eq!(last.y, -1.0, epsilon = 1e-12);
    assert!(profile.in_curl_region(23));
}

#[test]
fn undisturbed_swell_is_sech_squared() {
    let profile = StrategyKind::Breaking.synthesize(&swell_params(), 0.0);
    assert!(profile.curl_region.is_none());
    for p in &profile.points {
        let expected = 0.6 / ((p.x + 1.5) / 0.8).cosh().powi(2);
        assert_relative_eq!(p.y, expected, max_relative = 1e-12);
    }
}

#[test]
fn full_curl_lands_on_control_point() {
    let params = swell_params();
    let base = base_profile(&params, 1.0);
    let splice = plan_curl(&params, 1.0, &base).unwrap();
    assert_eq!(splice.curl_t, 1.0);

    let profile = StrategyKind::Breaking.synthesize(&params, 1.0);
    let p0 = base.points[splice.range.start];
    let tip = profile.points[splice.range.end - 1];
    assert_relative_eq!(tip.x, p0.x + 0.8 * 1.2, epsilon = 1e-12);
    assert_relative_eq!(tip.y, (p0.y - 0.6 * 1.4).max(0.0), epsilon = 1e-12);
    assert_eq!(profile.curl_region, Some(splice.range));
}

#[test]
fn comparison_sequence_to_surface() {
    let seq = generate_sequence(
        &StrategyKind::Breaking,
        &swell_params(),
        15,
        &Default::default(),
    );
    let validator = ProfileValidator::default();
    assert!(validator.validate_sequence(&seq).valid);

    let mesh = extrude_sequence(&seq, 30.0).unwrap();
    assert_eq!(mesh.shape(), (15, 200));
    assert_eq!(mesh.sweep.first(), Some(&-15.0));
    assert_eq!(mesh.sweep.last(), Some(&15.0));
    assert!(validator.validate_sequence_mesh(&mesh).valid);
}

#[test]
fn height_only_profile_needs_thickness() {
    let profile = StrategyKind::Breaking.synthesize(&swell_params(), 0.5);
    assert_eq!(
        extrude_profile(&profile, 30.0, 12).unwrap_err(),
        OperationError::MissingThickness
    );
}

#[test]
fn config_driven_pipeline() {
    let config = WaveConfig::from_json_str(
        r#"{
            "strategy": "catenary",
            "shape": { "radius": 3.0, "arc_segments": 40 },
            "extrusion": { "extent": 10.0, "sweep_count": 6 }
        }"#,
    )
    .unwrap();
    let mesh = build_profile_mesh(&config, 0.0).unwrap();
    assert_eq!(mesh.shape(), (6, 40));
    assert_eq!(mesh.sweep, vec![-5.0, -3.0, -1.0, 1.0, 3.0, 5.0]);
    let report = validate_mesh(&mesh);
    assert!(report.valid, "{report}");

    let default_surface = build_sequence_mesh(&WaveConfig::default()).unwrap();
    assert_eq!(default_surface.shape(), (15, 200));
}
