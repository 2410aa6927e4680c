//! Time-ordered families of profiles.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::geometry::sampling::linspace;
use crate::operations::OperationError;
use crate::profile::{Profile, ProfileStrategy, ShapeParameters};

/// Deterministic per-step change of the shape parameters.
///
/// At progress `t` the crest moves `t * peak_advance` shoreward and the
/// amplitude grows by a factor `1 + t * amplitude_growth`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceDrift {
    pub peak_advance: f64,
    pub amplitude_growth: f64,
}

impl Default for SequenceDrift {
    fn default() -> Self {
        Self::comparison()
    }
}

impl SequenceDrift {
    /// Profile family for side-by-side comparison plots.
    pub fn comparison() -> Self {
        Self {
            peak_advance: 1.0,
            amplitude_growth: 0.5,
        }
    }

    /// Longer travel and stronger growth, for frame-by-frame animation.
    pub fn animation() -> Self {
        Self {
            peak_advance: 1.5,
            amplitude_growth: 0.6,
        }
    }

    /// Every member uses the base parameters unchanged.
    pub fn none() -> Self {
        Self {
            peak_advance: 0.0,
            amplitude_growth: 0.0,
        }
    }

    /// Parameters for the member at progress `t`.
    pub fn apply(&self, base: &ShapeParameters, t: f64) -> ShapeParameters {
        ShapeParameters {
            peak_position: base.peak_position + t * self.peak_advance,
            amplitude: base.amplitude * (1.0 + t * self.amplitude_growth),
            ..base.clone()
        }
    }
}

/// One member of a [`ProfileSequence`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceMember {
    pub profile: Profile,
    pub progress: f64,
}

/// Profiles ordered by strictly increasing progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSequence {
    pub members: Vec<SequenceMember>,
}

impl ProfileSequence {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn progress(&self) -> Vec<f64> {
        self.members.iter().map(|m| m.progress).collect()
    }

    pub fn first(&self) -> Option<&SequenceMember> {
        self.members.first()
    }

    pub fn last(&self) -> Option<&SequenceMember> {
        self.members.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SequenceMember> {
        self.members.iter()
    }
}

/// `count` evenly spaced progress values over `[0, 1]`.
pub fn uniform_progress(count: usize) -> Vec<f64> {
    linspace(0.0, 1.0, count)
}

fn check_progress(progress: &[f64]) -> Result<(), OperationError> {
    let error = |index: usize| OperationError::NonMonotonicProgress {
        index,
        previous: index.checked_sub(1).map_or(f64::NEG_INFINITY, |i| progress[i]),
        value: progress[index],
    };
    if let Some(index) = progress.iter().position(|t| !t.is_finite()) {
        return Err(error(index));
    }
    match progress.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(error(i + 1)),
        None => Ok(()),
    }
}

/// Synthesize one profile per progress value in an explicit list.
///
/// # Errors
///
/// [`OperationError::NonMonotonicProgress`] unless `progress` is finite and
/// strictly increasing.
pub fn generate_sequence_at(
    strategy: &impl ProfileStrategy,
    base: &ShapeParameters,
    progress: &[f64],
    drift: &SequenceDrift,
) -> Result<ProfileSequence, OperationError> {
    check_progress(progress)?;
    Ok(synthesize_members(strategy, base, progress, drift))
}

/// Synthesize `count` profiles over a uniform partition of `[0, 1]`.
///
/// `count > 1` includes both endpoints exactly; `count == 1` yields the
/// undisturbed profile at progress 0.
pub fn generate_sequence(
    strategy: &impl ProfileStrategy,
    base: &ShapeParameters,
    count: usize,
    drift: &SequenceDrift,
) -> ProfileSequence {
    synthesize_members(strategy, base, &uniform_progress(count), drift)
}

#[instrument(skip_all, fields(strategy = strategy.name(), count = progress.len()))]
fn synthesize_members(
    strategy: &impl ProfileStrategy,
    base: &ShapeParameters,
    progress: &[f64],
    drift: &SequenceDrift,
) -> ProfileSequence {
    let members: Vec<SequenceMember> = progress
        .iter()
        .map(|&t| SequenceMember {
            profile: strategy.synthesize(&drift.apply(base, t), t),
            progress: t,
        })
        .collect();
    info!(members = members.len(), "generated profile sequence");
    ProfileSequence { members }
}
