//! Shape parameters with documented units and defaults.

use serde::{Deserialize, Serialize};

use crate::operations::OperationError;

/// Immutable shape configuration shared by all profile strategies.
///
/// Each strategy reads only its own fields. Lengths are in meters. Values
/// outside the documented ranges are not clamped; the resulting shape is
/// unspecified. Call [`ShapeParameters::validate`] to reject them explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParameters {
    // === Static cross-sections (spiral, catenary) ===
    /// Barrel radius (> 0).
    pub radius: f64,

    /// Number of samples along the arc (>= 2 for a meaningful curve).
    pub arc_segments: usize,

    /// Exponential decay of the spiral radius along the arc (>= 0).
    pub spiral_tightness: f64,

    /// Extra sweep angle past the horizontal, in radians, and the scale of
    /// the lip droop.
    pub lip_droop: f64,

    /// Forward reach of the catenary lip, as a multiple of `radius`.
    pub curl_factor: f64,

    /// Arc coordinate where the spiral lip begins to droop.
    pub droop_start: f64,

    /// Arc coordinate where the droop reaches full strength (> `droop_start`).
    pub droop_end: f64,

    // === Time evolution (breaking) ===
    /// Crest height of the initial swell (>= 0).
    pub amplitude: f64,

    /// Horizontal crest position of the initial swell.
    pub peak_position: f64,

    /// Swell half-width of the sech² bell (> 0).
    pub width: f64,

    /// Sea-floor slope. Carried with the parameter set; no current formula
    /// reads it.
    pub bottom_slope: f64,

    /// Left end of the horizontal sample grid.
    pub sample_start: f64,

    /// Right end of the horizontal sample grid (> `sample_start`).
    pub sample_end: f64,

    /// Number of horizontal samples.
    pub sample_count: usize,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            radius: 5.0,
            arc_segments: 24,
            spiral_tightness: 0.3,
            lip_droop: 0.4,
            curl_factor: 1.2,
            droop_start: 0.7,
            droop_end: 1.0,

            amplitude: 0.6,
            peak_position: -1.5,
            width: 0.8,
            bottom_slope: 0.1,
            sample_start: -3.0,
            sample_end: 1.0,
            sample_count: 200,
        }
    }
}

impl ShapeParameters {
    /// Base (attachment) wall thickness of the static strategies.
    pub fn base_thickness(&self) -> f64 {
        self.radius * 0.35
    }

    /// Lip thickness of the spiral strategy.
    pub fn lip_thickness(&self) -> f64 {
        self.radius * 0.08
    }

    /// Reject values outside the documented domains.
    ///
    /// Reports the first offending field; never adjusts anything.
    pub fn validate(&self) -> Result<(), OperationError> {
        let finite = [
            ("radius", self.radius),
            ("spiral_tightness", self.spiral_tightness),
            ("lip_droop", self.lip_droop),
            ("curl_factor", self.curl_factor),
            ("droop_start", self.droop_start),
            ("droop_end", self.droop_end),
            ("amplitude", self.amplitude),
            ("peak_position", self.peak_position),
            ("width", self.width),
            ("bottom_slope", self.bottom_slope),
            ("sample_start", self.sample_start),
            ("sample_end", self.sample_end),
        ];
        for (parameter, value) in finite {
            if !value.is_finite() {
                return Err(OperationError::invalid(parameter, value, "must be finite"));
            }
        }

        if self.radius <= 0.0 {
            return Err(OperationError::invalid("radius", self.radius, "must be positive"));
        }
        if self.spiral_tightness < 0.0 {
            return Err(OperationError::invalid(
                "spiral_tightness",
                self.spiral_tightness,
                "must be non-negative",
            ));
        }
        if self.droop_end <= self.droop_start {
            return Err(OperationError::invalid(
                "droop_end",
                self.droop_end,
                "must be greater than droop_start",
            ));
        }
        if self.amplitude < 0.0 {
            return Err(OperationError::invalid("amplitude", self.amplitude, "must be non-negative"));
        }
        if self.width <= 0.0 {
            return Err(OperationError::invalid("width", self.width, "must be positive"));
        }
        if self.sample_end <= self.sample_start {
            return Err(OperationError::invalid(
                "sample_end",
                self.sample_end,
                "must be greater than sample_start",
            ));
        }
        if self.arc_segments < 2 {
            return Err(OperationError::invalid(
                "arc_segments",
                self.arc_segments as f64,
                "need at least 2 samples",
            ));
        }
        if self.sample_count < 2 {
            return Err(OperationError::invalid(
                "sample_count",
                self.sample_count as f64,
                "need at least 2 samples",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ShapeParameters::default().validate().is_ok());
    }

    #[test]
    fn test_thickness_ratios() {
        let p = ShapeParameters::default();
        assert!((p.base_thickness() - 1.75).abs() < 1e-12);
        assert!((p.lip_thickness() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let p = ShapeParameters {
            width: 0.0,
            ..Default::default()
        };
        match p.validate() {
            Err(OperationError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "width"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_nan() {
        let p = ShapeParameters {
            amplitude: f64::NAN,
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_does_not_clamp() {
        let p = ShapeParameters {
            radius: -1.0,
            ..Default::default()
        };
        let before = p.clone();
        assert!(p.validate().is_err());
        assert_eq!(p, before);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let p: ShapeParameters = serde_json::from_str(r#"{ "amplitude": 0.9 }"#).unwrap();
        assert_eq!(p.amplitude, 0.9);
        assert_eq!(p.width, 0.8);
        assert_eq!(p.sample_count, 200);
    }
}
