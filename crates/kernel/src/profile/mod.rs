//! 2D wave silhouettes and the strategies that synthesize them.
//!
//! Every strategy shares one shape language: an analytic wall rising from
//! still water followed by a cubic Bézier lip. They differ in the wall curve
//! and in whether `progress` drives the shape:
//!
//! - [`SpiralStrategy`]: logarithmic spiral with a smoothstep droop; static.
//! - [`CatenaryStrategy`]: catenary wall with an appended Bézier lip; static.
//! - [`BreakingStrategy`]: sech² swell that shoals and then curls as
//!   `progress` runs from 0 to 1.

pub mod breaking;
pub mod catenary;
pub mod params;
pub mod spiral;

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::geometry::point::Point2d;
use crate::geometry::sampling::linspace;
use crate::operations::OperationError;

pub use breaking::{BreakingStrategy, CurlSplice};
pub use catenary::CatenaryStrategy;
pub use params::ShapeParameters;
pub use spiral::SpiralStrategy;

/// One sample of a [`Profile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    pub position: Point2d,
    /// Normalized arc coordinate, 0 at the base and 1 at the lip tip.
    pub arc: f64,
    pub thickness: Option<f64>,
}

/// An arc-ordered wave cross-section.
///
/// Sample order is the traversal direction of the curve and defines the
/// adjacency used for normal estimation. Heights are non-negative except
/// inside `curl_region`, where the lip may dip below still water.
///
/// `points`, `arc` and `thickness` hold one entry per sample. [`Profile::new`]
/// and deserialization reject mismatched lengths; code that edits the public
/// fields directly can re-check with [`Profile::check_lengths`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileData")]
pub struct Profile {
    pub points: Vec<Point2d>,
    pub arc: Vec<f64>,
    /// Per-sample wall thickness. `None` for height-only profiles.
    pub thickness: Option<Vec<f64>>,
    /// Index range of the lip, where heights are not clamped to the ground.
    pub curl_region: Option<Range<usize>>,
}

/// Unchecked wire form of a [`Profile`].
#[derive(Deserialize)]
struct ProfileData {
    points: Vec<Point2d>,
    arc: Vec<f64>,
    #[serde(default)]
    thickness: Option<Vec<f64>>,
    #[serde(default)]
    curl_region: Option<Range<usize>>,
}

impl TryFrom<ProfileData> for Profile {
    type Error = OperationError;

    fn try_from(data: ProfileData) -> Result<Self, Self::Error> {
        Self::new(data.points, data.arc, data.thickness, data.curl_region)
    }
}

impl Profile {
    /// # Errors
    ///
    /// [`OperationError::SampleCountMismatch`] if `arc` or `thickness` does
    /// not have one entry per point.
    pub fn new(
        points: Vec<Point2d>,
        arc: Vec<f64>,
        thickness: Option<Vec<f64>>,
        curl_region: Option<Range<usize>>,
    ) -> Result<Self, OperationError> {
        let profile = Self {
            points,
            arc,
            thickness,
            curl_region,
        };
        profile.check_lengths()?;
        Ok(profile)
    }

    /// Height-only profile with the arc coordinate spread uniformly by index.
    pub fn from_points(points: Vec<Point2d>) -> Self {
        let arc = linspace(0.0, 1.0, points.len());
        Self {
            points,
            arc,
            thickness: None,
            curl_region: None,
        }
    }

    /// Confirm that every per-sample array matches the point count.
    pub fn check_lengths(&self) -> Result<(), OperationError> {
        let expected = self.points.len();
        if self.arc.len() != expected {
            return Err(OperationError::SampleCountMismatch {
                field: "arc",
                expected,
                found: self.arc.len(),
            });
        }
        match &self.thickness {
            Some(t) if t.len() != expected => Err(OperationError::SampleCountMismatch {
                field: "thickness",
                expected,
                found: t.len(),
            }),
            _ => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn heights(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn has_thickness(&self) -> bool {
        self.thickness.is_some()
    }

    pub fn sample(&self, index: usize) -> Option<ProfileSample> {
        let position = *self.points.get(index)?;
        let arc = *self.arc.get(index)?;
        let thickness = match &self.thickness {
            Some(t) => Some(*t.get(index)?),
            None => None,
        };
        Some(ProfileSample {
            position,
            arc,
            thickness,
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = ProfileSample> + '_ {
        (0..self.len()).filter_map(|i| self.sample(i))
    }

    /// Whether `index` lies in the lip, where heights may go below zero.
    pub fn in_curl_region(&self, index: usize) -> bool {
        self.curl_region
            .as_ref()
            .is_some_and(|r| r.contains(&index))
    }

    /// Copy of this profile with thickness taken from `thickness_at(arc)`.
    ///
    /// This is how height-only profiles (the breaking strategy) get an inner
    /// hull. Any existing thickness is replaced.
    pub fn with_thickness(&self, thickness_at: impl Fn(f64) -> f64) -> Self {
        let thickness = self.arc.iter().map(|&a| thickness_at(a)).collect();
        Self {
            thickness: Some(thickness),
            ..self.clone()
        }
    }
}

/// Capability shared by all silhouette generators.
pub trait ProfileStrategy {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Build the profile for `params` at `progress` in `[0, 1]`.
    ///
    /// Static strategies ignore `progress`. Behaviour for parameters outside
    /// their documented domains is unspecified.
    fn synthesize(&self, params: &ShapeParameters, progress: f64) -> Profile;
}

/// Configuration flag selecting a [`ProfileStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Spiral,
    Catenary,
    #[default]
    Breaking,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [Self::Spiral, Self::Catenary, Self::Breaking];

    /// Whether synthesized profiles carry their own thickness.
    pub fn provides_thickness(&self) -> bool {
        !matches!(self, Self::Breaking)
    }
}

impl ProfileStrategy for StrategyKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Spiral => SpiralStrategy.name(),
            Self::Catenary => CatenaryStrategy.name(),
            Self::Breaking => BreakingStrategy.name(),
        }
    }

    fn synthesize(&self, params: &ShapeParameters, progress: f64) -> Profile {
        match self {
            Self::Spiral => SpiralStrategy.synthesize(params, progress),
            Self::Catenary => CatenaryStrategy.synthesize(params, progress),
            Self::Breaking => BreakingStrategy.synthesize(params, progress),
        }
    }
}
