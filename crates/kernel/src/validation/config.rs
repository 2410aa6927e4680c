//! Thresholds for profile and mesh validation.

use serde::{Deserialize, Serialize};

/// Configuration controlling which checks are run and their thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Heights down to `-ground_tolerance` count as still water.
    pub ground_tolerance: f64,
    /// Warn about samples thinner than this. `None` disables the check.
    pub thin_wall: Option<f64>,
    /// Whether to require non-decreasing arc coordinates.
    pub check_arc_order: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            ground_tolerance: crate::default_tolerance().coincidence,
            thin_wall: None,
            check_arc_order: true,
        }
    }
}

impl ValidationConfig {
    /// Default checks plus a warning for any wall thinner than `min_thickness`.
    pub fn strict(min_thickness: f64) -> Self {
        Self {
            thin_wall: Some(min_thickness),
            ..Self::default()
        }
    }
}
