use std::f64::consts::PI;

use tracing::{debug, instrument};

use super::{Profile, ProfileStrategy, ShapeParameters};
use crate::geometry::point::Point2d;
use crate::geometry::sampling::{linspace, smoothstep};

/// Logarithmic-spiral barrel with a smoothstep lip droop.
///
/// The arc sweeps from angle π (the still-water attachment on the left)
/// through the crest and `lip_droop` radians past the horizontal while the
/// radius decays by `exp(-spiral_tightness · a)`. Heights are clamped to the
/// ground before the droop is subtracted, so only the lip can go negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpiralStrategy;

impl ProfileStrategy for SpiralStrategy {
    fn name(&self) -> &'static str {
        "spiral"
    }

    fn synthesize(&self, params: &ShapeParameters, _progress: f64) -> Profile {
        spiral_profile(params)
    }
}

/// Build the spiral cross-section for `params`.
#[instrument(skip(params), fields(radius = params.radius, segments = params.arc_segments))]
pub fn spiral_profile(params: &ShapeParameters) -> Profile {
    let arc = linspace(0.0, 1.0, params.arc_segments);
    let total_arc = PI + params.lip_droop;
    let droop_scale = params.lip_droop * params.radius * 0.5;

    let points: Vec<Point2d> = arc
        .iter()
        .map(|&a| {
            let r = params.radius * (-params.spiral_tightness * a).exp();
            let angle = PI - a * total_arc;
            let x = angle.cos() * r;
            let y = (angle.sin() * r).max(0.0);
            let droop = smoothstep(params.droop_start, params.droop_end, a) * droop_scale;
            Point2d::new(x, y - droop)
        })
        .collect();

    let thickness = linspace(
        params.base_thickness(),
        params.lip_thickness(),
        params.arc_segments,
    );

    let curl_start = arc
        .iter()
        .position(|&a| a > params.droop_start)
        .unwrap_or(arc.len());
    debug!(curl_start, "spiral lip region");

    Profile {
        points,
        arc,
        thickness: Some(thickness),
        curl_region: Some(curl_start..params.arc_segments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_is_leftmost_attachment() {
        let p = spiral_profile(&ShapeParameters::default());
        let first = p.points[0];
        assert!((first.x + 5.0).abs() < 1e-12);
        assert!(first.y.abs() < 1e-12);
    }

    #[test]
    fn test_last_sample_clamped_then_drooped() {
        let params = ShapeParameters::default();
        let p = spiral_profile(&params);
        let last = *p.points.last().unwrap();
        let r = 5.0 * (-0.3f64).exp();
        assert!((last.x - (-0.4f64).cos() * r).abs() < 1e-9);
        // sin(-0.4) < 0 clamps to 0, then the full droop 0.4 * 5 * 0.5 applies.
        assert!((last.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_heights_non_negative_outside_lip() {
        let p = spiral_profile(&ShapeParameters::default());
        for (i, pt) in p.points.iter().enumerate() {
            if !p.in_curl_region(i) {
                assert!(pt.y >= 0.0, "sample {i} below ground: {}", pt.y);
            }
        }
    }

    #[test]
    fn test_thickness_tapers_linearly() {
        let p = spiral_profile(&ShapeParameters::default());
        let t = p.thickness.as_ref().unwrap();
        assert_eq!(t.len(), 24);
        assert!((t[0] - 1.75).abs() < 1e-12);
        assert!((t[23] - 0.4).abs() < 1e-12);
        assert!(t.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_lip_region_starts_after_droop_start() {
        let p = spiral_profile(&ShapeParameters::default());
        let region = p.curl_region.clone().unwrap();
        assert_eq!(region.end, 24);
        assert!(p.arc[region.start] > 0.7);
        assert!(p.arc[region.start - 1] <= 0.7);
    }

    #[test]
    fn test_progress_is_ignored() {
        let params = ShapeParameters::default();
        assert_eq!(
            SpiralStrategy.synthesize(&params, 0.0),
            SpiralStrategy.synthesize(&params, 1.0)
        );
    }
}
