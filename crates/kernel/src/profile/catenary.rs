use tracing::{debug, instrument};

use super::{Profile, ProfileStrategy, ShapeParameters};
use crate::geometry::curves::CubicBezier2d;
use crate::geometry::point::Point2d;
use crate::geometry::sampling::{interp, linspace};
use crate::geometry::vector::Vec2;

/// Arc coordinate where the catenary wall hands over to the Bézier lip.
const WALL_END: f64 = 0.5;

/// Catenary wall with a Bézier lip, giving an almond-shaped barrel rather
/// than a circular one.
///
/// The first half of the arc (`a <= 0.5`) hangs as a catenary from the
/// attachment point up to the crest; the second half is a cubic Bézier
/// anchored at the last wall sample that pitches forward and down by
/// `curl_factor` radii. Thickness swells slightly towards the crest and thins
/// sharply in the lip.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatenaryStrategy;

impl ProfileStrategy for CatenaryStrategy {
    fn name(&self) -> &'static str {
        "catenary"
    }

    fn synthesize(&self, params: &ShapeParameters, _progress: f64) -> Profile {
        catenary_profile(params)
    }
}

/// Control polygon of the lip anchored at the crest `p0`.
pub fn lip_curve(params: &ShapeParameters, p0: Point2d) -> CubicBezier2d {
    let r = params.radius;
    CubicBezier2d::new(
        p0,
        p0 + Vec2::new(r * 0.3, r * 0.1),
        p0 + Vec2::new(r * 0.6, -r * 0.1),
        p0 + Vec2::new(r * params.curl_factor, -r * 0.5),
    )
}

/// Piecewise thickness: base → crest over `[0, 0.3)`, flat crest over
/// `[0.3, 0.6)`, crest → thin lip over `[0.6, 1]`.
pub fn catenary_thickness(params: &ShapeParameters, a: f64) -> f64 {
    let base = params.base_thickness();
    let crest = params.radius * 0.4;
    let lip = params.radius * 0.05;
    if a < 0.3 {
        interp(a, 0.0, 0.3, base, crest)
    } else if a < 0.6 {
        crest
    } else {
        interp(a, 0.6, 1.0, crest, lip)
    }
}

/// Build the catenary cross-section for `params`.
#[instrument(skip(params), fields(radius = params.radius, segments = params.arc_segments))]
pub fn catenary_profile(params: &ShapeParameters) -> Profile {
    let arc = linspace(0.0, 1.0, params.arc_segments);
    if arc.is_empty() {
        return Profile {
            thickness: Some(Vec::new()),
            ..Profile::from_points(Vec::new())
        };
    }

    let r = params.radius;
    let hang = r * 0.6;

    let mut points: Vec<Point2d> = arc
        .iter()
        .take_while(|&&a| a <= WALL_END)
        .map(|&a| {
            let p = a * 2.0;
            let x = -r * (1.0 - p * 0.3);
            let y = hang * (p * 1.5).cosh() - hang + r * 0.2 * p;
            Point2d::new(x, y)
        })
        .collect();
    let wall_len = points.len();

    // a[0] = 0 always lies on the wall, so the crest exists.
    let lip = lip_curve(params, points[wall_len - 1]);
    points.extend(arc[wall_len..].iter().map(|&a| lip.evaluate((a - WALL_END) * 2.0)));
    debug!(wall_len, lip_len = arc.len() - wall_len, "catenary wall/lip split");

    let thickness = arc.iter().map(|&a| catenary_thickness(params, a)).collect();
    let len = arc.len();
    Profile {
        points,
        arc,
        thickness: Some(thickness),
        curl_region: Some(wall_len..len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_starts_at_attachment() {
        let p = catenary_profile(&ShapeParameters::default());
        assert!((p.points[0].x + 5.0).abs() < 1e-12);
        assert!(p.points[0].y.abs() < 1e-12);
    }

    #[test]
    fn test_wall_rises_monotonically() {
        let p = catenary_profile(&ShapeParameters::default());
        let wall = p.curl_region.clone().unwrap().start;
        for w in p.points[..wall].windows(2) {
            assert!(w[1].y > w[0].y);
            assert!(w[1].x > w[0].x);
        }
    }

    #[test]
    fn test_split_even_segment_count() {
        // 24 samples: a = 11/23 < 0.5 is the last wall sample.
        let p = catenary_profile(&ShapeParameters::default());
        assert_eq!(p.curl_region, Some(12..24));
    }

    #[test]
    fn test_lip_ends_at_control_point() {
        let params = ShapeParameters {
            arc_segments: 25,
            ..Default::default()
        };
        let p = catenary_profile(&params);
        // With 25 samples a = 0.5 is a wall sample and a = 1 maps to q = 1.
        let crest = p.points[12];
        let tip = *p.points.last().unwrap();
        assert!((tip.x - (crest.x + 5.0 * 1.2)).abs() < 1e-12);
        assert!((tip.y - (crest.y - 2.5)).abs() < 1e-12);
    }

    #[test]
    fn test_thickness_profile_shape() {
        let params = ShapeParameters::default();
        assert!((catenary_thickness(&params, 0.0) - 1.75).abs() < 1e-12);
        assert!((catenary_thickness(&params, 0.45) - 2.0).abs() < 1e-12);
        assert!((catenary_thickness(&params, 1.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_single_segment_is_wall_only() {
        let params = ShapeParameters {
            arc_segments: 1,
            ..Default::default()
        };
        let p = catenary_profile(&params);
        assert_eq!(p.len(), 1);
        assert_eq!(p.curl_region, Some(1..1));
    }

    #[test]
    fn test_empty_profile() {
        let params = ShapeParameters {
            arc_segments: 0,
            ..Default::default()
        };
        assert!(catenary_profile(&params).is_empty());
    }
}
