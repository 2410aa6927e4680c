use serde::{Deserialize, Serialize};

use super::point::Point2d;
use super::vector::Vec2;

/// A planar cubic Bézier segment.
///
/// Used for every lip in the kernel: the catenary strategy appends one after
/// its wall, and the breaking strategy splices one over the samples downstream
/// of the crest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier2d {
    pub control_points: [Point2d; 4],
}

impl CubicBezier2d {
    pub fn new(p0: Point2d, p1: Point2d, p2: Point2d, p3: Point2d) -> Self {
        Self {
            control_points: [p0, p1, p2, p3],
        }
    }

    pub fn start(&self) -> Point2d {
        self.control_points[0]
    }

    pub fn end(&self) -> Point2d {
        self.control_points[3]
    }

    /// Bernstein blend at `t`. Values outside `[0, 1]` extrapolate.
    ///
    /// The endpoint terms vanish exactly at `t = 0` and `t = 1`, so those
    /// parameters reproduce `P0` and `P3` bit-for-bit.
    pub fn evaluate(&self, t: f64) -> Point2d {
        let [p0, p1, p2, p3] = self.control_points;
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point2d::new(
            b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
            b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
        )
    }

    /// Evaluate at every parameter in `ts`, preserving order and duplicates.
    pub fn evaluate_many(&self, ts: &[f64]) -> Vec<Point2d> {
        ts.iter().map(|&t| self.evaluate(t)).collect()
    }

    /// First derivative with respect to `t`.
    pub fn derivative(&self, t: f64) -> Vec2 {
        let [p0, p1, p2, p3] = self.control_points;
        let u = 1.0 - t;
        (p1 - p0) * (3.0 * u * u) + (p2 - p1) * (6.0 * u * t) + (p3 - p2) * (3.0 * t * t)
    }

    /// Polyline approximation of the arc length over `[0, 1]`.
    pub fn approximate_length(&self, num_samples: usize) -> f64 {
        let mut length = 0.0;
        let mut prev = self.evaluate(0.0);
        for i in 1..=num_samples {
            let curr = self.evaluate(i as f64 / num_samples as f64);
            length += prev.distance_to(&curr);
            prev = curr;
        }
        length
    }
}

/// Evaluate the cubic Bézier with control points `p0..p3` at each `t`.
pub fn evaluate_cubic_bezier(
    p0: Point2d,
    p1: Point2d,
    p2: Point2d,
    p3: Point2d,
    ts: &[f64],
) -> Vec<Point2d> {
    CubicBezier2d::new(p0, p1, p2, p3).evaluate_many(ts)
}
