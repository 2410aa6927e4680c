use tracing::{info, instrument};

use crate::geometry::point::{Point2d, Point3d};
use crate::geometry::sampling::{gradient, linspace};
use crate::geometry::vector::{Vec2, Vec3};
use crate::mesh::{ExtrudedMesh, PointGrid};
use crate::operations::OperationError;
use crate::profile::Profile;

/// Sweep-axis coordinates of `count` rows centred on zero.
pub fn sweep_positions(extent: f64, count: usize) -> Vec<f64> {
    linspace(-extent / 2.0, extent / 2.0, count)
}

/// Unit outward normal of each cross-section sample.
///
/// The tangent is a centered difference along the arc (one-sided at the
/// ends) and the normal is that tangent rotated 90° counter-clockwise,
/// divided by `sqrt(|t|² + epsilon)` so a zero tangent yields a zero normal.
pub fn outward_normals(points: &[Point2d], epsilon: f64) -> Vec<Vec2> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    gradient(&xs)
        .into_iter()
        .zip(gradient(&ys))
        .map(|(dx, dy)| Vec2::new(dx, dy).perpendicular().normalized_soft(epsilon))
        .collect()
}

/// Extrude a profile with thickness into outer and inner hulls.
///
/// The cross-section is replicated at `sweep_count` positions spread evenly
/// over `[-extent/2, extent/2]`. Each inner point is its outer point moved by
/// `normal * thickness` within the cross-section plane; the sweep coordinate
/// is shared.
///
/// # Errors
///
/// [`OperationError::MissingThickness`] if the profile is height-only, and
/// [`OperationError::SampleCountMismatch`] if its thickness does not have one
/// entry per point.
#[instrument(skip(profile), fields(samples = profile.len()))]
pub fn extrude_profile(
    profile: &Profile,
    extent: f64,
    sweep_count: usize,
) -> Result<ExtrudedMesh, OperationError> {
    let thickness = profile
        .thickness
        .as_ref()
        .ok_or(OperationError::MissingThickness)?;
    if thickness.len() != profile.len() {
        return Err(OperationError::SampleCountMismatch {
            field: "thickness",
            expected: profile.len(),
            found: thickness.len(),
        });
    }

    let epsilon = crate::default_tolerance().normal_epsilon;
    let offsets: Vec<Vec2> = outward_normals(&profile.points, epsilon)
        .into_iter()
        .zip(thickness)
        .map(|(n, &t)| n * t)
        .collect();

    let sweep = sweep_positions(extent, sweep_count);
    let cols = profile.len();

    let outer_rows: Vec<Vec<Point3d>> = sweep
        .iter()
        .map(|&z| profile.points.iter().map(|p| p.at_sweep(z)).collect())
        .collect();
    let inner_rows: Vec<Vec<Point3d>> = sweep
        .iter()
        .map(|&z| {
            profile
                .points
                .iter()
                .zip(&offsets)
                .map(|(p, off)| p.at_sweep(z) + Vec3::new(off.x, off.y, 0.0))
                .collect()
        })
        .collect();

    let mesh = ExtrudedMesh {
        outer: PointGrid::try_from_rows(cols, outer_rows)?,
        inner: PointGrid::try_from_rows(cols, inner_rows)?,
        sweep,
    };
    info!(shape = ?mesh.shape(), extent, "extruded profile");
    Ok(mesh)
}

/// Attach `thickness_at(arc)` to `profile`, then extrude it.
///
/// Used for height-only profiles such as the breaking strategy's, whose
/// thickness is not part of the synthesis.
pub fn extrude_profile_with(
    profile: &Profile,
    thickness_at: impl Fn(f64) -> f64,
    extent: f64,
    sweep_count: usize,
) -> Result<ExtrudedMesh, OperationError> {
    extrude_profile(&profile.with_thickness(thickness_at), extent, sweep_count)
}
