//! Time-evolving breaking wave.
//!
//! A solitary sech² swell shoals as `progress` advances: it grows, its crest
//! drifts back, and a quadratic penalty steepens the front face. Past
//! [`CURL_ONSET`] a Bézier lip is spliced over the samples just downstream of
//! the crest, reaching further forward and dropping lower as the curl
//! develops. The splice never changes the sample count or order.

use std::ops::Range;

use tracing::{debug, instrument};

use super::{Profile, ProfileStrategy, ShapeParameters};
use crate::geometry::curves::CubicBezier2d;
use crate::geometry::point::Point2d;
use crate::geometry::sampling::linspace;
use crate::geometry::vector::Vec2;

/// Progress after which the lip starts to curl.
pub const CURL_ONSET: f64 = 0.4;

/// Fraction of the sample count covered by the spliced lip.
const CURL_SPAN_FRACTION: f64 = 0.3;

#[derive(Debug, Clone, Copy, Default)]
pub struct BreakingStrategy;

impl ProfileStrategy for BreakingStrategy {
    fn name(&self) -> &'static str {
        "breaking"
    }

    fn synthesize(&self, params: &ShapeParameters, progress: f64) -> Profile {
        breaking_profile(params, progress)
    }
}

/// A planned lip splice: which samples to replace and the curve replacing them.
#[derive(Debug, Clone, PartialEq)]
pub struct CurlSplice {
    /// Samples overwritten by the lip, starting at the crest.
    pub range: Range<usize>,
    pub curve: CubicBezier2d,
    /// Curl development in `[0, 1]`.
    pub curl_t: f64,
}

impl CurlSplice {
    /// Curve parameters for the samples in `range`, evenly spaced over `[0, 1]`.
    pub fn parameters(&self) -> Vec<f64> {
        let len = self.range.len();
        let denom = len.saturating_sub(1).max(1) as f64;
        (0..len).map(|i| i as f64 / denom).collect()
    }
}

/// Horizontal crest position at `progress`; the crest slides back as the
/// front steepens.
pub fn crest_position(params: &ShapeParameters, progress: f64) -> f64 {
    params.peak_position - progress * params.width * 0.3
}

/// Curl development: 0 up to [`CURL_ONSET`], ramping to 1 at `progress = 1`.
pub fn curl_progress(progress: f64) -> f64 {
    ((progress - CURL_ONSET) / (1.0 - CURL_ONSET)).clamp(0.0, 1.0)
}

/// Undisturbed sech² swell height at `x`.
pub fn solitary_height(x: f64, amplitude: f64, center: f64, width: f64) -> f64 {
    let sech = 1.0 / ((x - center) / width).cosh();
    amplitude * sech * sech
}

/// Shoaled profile before any curl: bell, growth, and forward lean, clamped
/// to still water.
#[instrument(skip(params), fields(amplitude = params.amplitude, width = params.width))]
pub fn base_profile(params: &ShapeParameters, progress: f64) -> Profile {
    let xs = linspace(params.sample_start, params.sample_end, params.sample_count);
    let shoaling = 1.0 + progress * 0.8;
    let steepening = progress * 1.5;
    let crest = crest_position(params, progress);
    let width_sq = params.width * params.width;

    let points = xs
        .into_iter()
        .map(|x| {
            let bell = solitary_height(x, params.amplitude, params.peak_position, params.width);
            let lean = if x > crest {
                -steepening * (x - crest).powi(2) / width_sq
            } else {
                0.0
            };
            let z = (bell * shoaling + lean * params.amplitude).max(0.0);
            Point2d::new(x, z)
        })
        .collect();

    Profile::from_points(points)
}

/// Work out where the lip goes on `base`, or `None` if there is no curl yet
/// or the window around the crest is too small to hold one.
pub fn plan_curl(params: &ShapeParameters, progress: f64, base: &Profile) -> Option<CurlSplice> {
    if progress <= CURL_ONSET {
        return None;
    }
    let curl_t = curl_progress(progress);
    let crest = crest_position(params, progress);
    let half_window = params.width * 0.5;

    let window: Vec<usize> = base
        .points
        .iter()
        .enumerate()
        .filter(|(_, p)| (p.x - crest).abs() < half_window)
        .map(|(i, _)| i)
        .collect();
    if window.is_empty() {
        debug!(progress, crest, "no samples near crest, skipping curl splice");
        return None;
    }

    let n = base.len();
    let peak_idx = window[window.len() / 2];
    let span = (n as f64 * CURL_SPAN_FRACTION) as usize;
    let end = (peak_idx + span).min(n - 1);
    if end - peak_idx <= 2 {
        debug!(progress, peak_idx, end, "curl run too short, skipping splice");
        return None;
    }

    let forward = params.width * (0.8 + 0.4 * curl_t);
    let drop = params.amplitude * (0.6 + 0.8 * curl_t);
    let lift = params.amplitude * 0.15 * (1.0 - curl_t);
    let p0 = base.points[peak_idx];
    let curve = CubicBezier2d::new(
        p0,
        p0 + Vec2::new(forward * 0.25, lift),
        p0 + Vec2::new(forward * 0.7, -drop * 0.5),
        p0 + Vec2::new(forward, -drop),
    );

    Some(CurlSplice {
        range: peak_idx..end,
        curve,
        curl_t,
    })
}

/// New profile equal to `base` with the splice range replaced by the lip.
/// Spliced heights are clamped to still water.
pub fn apply_curl(base: &Profile, splice: &CurlSplice) -> Profile {
    let mut points = base.points.clone();
    let lip = splice.curve.evaluate_many(&splice.parameters());
    for (slot, p) in points[splice.range.clone()].iter_mut().zip(lip) {
        *slot = Point2d::new(p.x, p.y.max(0.0));
    }
    Profile {
        points,
        curl_region: Some(splice.range.clone()),
        ..base.clone()
    }
}

/// Breaking-wave silhouette at `progress` in `[0, 1]`. Height only; attach a
/// thickness with [`Profile::with_thickness`] before extruding an inner hull.
#[instrument(skip(params), fields(samples = params.sample_count))]
pub fn breaking_profile(params: &ShapeParameters, progress: f64) -> Profile {
    let base = base_profile(params, progress);
    match plan_curl(params, progress, &base) {
        Some(splice) => {
            debug!(range = ?splice.range, curl_t = splice.curl_t, "splicing lip");
            apply_curl(&base, &splice)
        }
        None => base,
    }
}
