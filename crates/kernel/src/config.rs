//! Serializable configuration for a full synthesis run.

use serde::{Deserialize, Serialize};

use crate::operations::OperationError;
use crate::profile::{ShapeParameters, StrategyKind};
use crate::sequence::SequenceDrift;

/// How profiles are swept along the third axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrusionConfig {
    /// Total sweep length, centred on zero.
    pub extent: f64,
    /// Cross-section copies for a single-profile extrusion.
    pub sweep_count: usize,
}

impl Default for ExtrusionConfig {
    fn default() -> Self {
        Self {
            extent: 30.0,
            sweep_count: 12,
        }
    }
}

/// Everything needed to go from parameters to a mesh.
///
/// Every field falls back to its default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub strategy: StrategyKind,
    pub shape: ShapeParameters,
    pub drift: SequenceDrift,
    pub extrusion: ExtrusionConfig,
    /// Members in a generated sequence.
    pub sequence_count: usize,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            shape: ShapeParameters::default(),
            drift: SequenceDrift::default(),
            extrusion: ExtrusionConfig::default(),
            sequence_count: 15,
        }
    }
}

impl WaveConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, OperationError> {
        serde_json::from_str(text).map_err(|e| OperationError::Config(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String, OperationError> {
        serde_json::to_string_pretty(self).map_err(|e| OperationError::Config(e.to_string()))
    }

    /// Parse and then check the shape parameters against their domains.
    pub fn from_json_str_validated(text: &str) -> Result<Self, OperationError> {
        let config = Self::from_json_str(text)?;
        config.shape.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = WaveConfig::from_json_str("{}").unwrap();
        assert_eq!(config, WaveConfig::default());
        assert_eq!(config.extrusion.extent, 30.0);
        assert_eq!(config.extrusion.sweep_count, 12);
        assert_eq!(config.sequence_count, 15);
    }

    #[test]
    fn test_partial_override() {
        let config = WaveConfig::from_json_str(
            r#"{ "strategy": "spiral", "shape": { "radius": 2.5 }, "drift": { "peak_advance": 1.5 } }"#,
        )
        .unwrap();
        assert_eq!(config.strategy, StrategyKind::Spiral);
        assert_eq!(config.shape.radius, 2.5);
        assert_eq!(config.shape.arc_segments, 24);
        assert_eq!(config.drift.peak_advance, 1.5);
        assert_eq!(config.drift.amplitude_growth, 0.5);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = WaveConfig::from_json_str(r#"{ "strategy": "tsunami" }"#).unwrap_err();
        assert!(matches!(err, OperationError::Config(_)));
    }

    #[test]
    fn test_validated_parse_rejects_bad_radius() {
        let err = WaveConfig::from_json_str_validated(r#"{ "shape": { "radius": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, OperationError::InvalidParameter { parameter: "radius", .. }));
    }

    #[test]
    fn test_serializes_strategy_as_snake_case() {
        let config = WaveConfig {
            strategy: StrategyKind::Catenary,
            ..Default::default()
        };
        let text = config.to_json_string().unwrap();
        assert!(text.contains(r#""strategy": "catenary""#));
        assert!(text.contains(r#""sequence_count": 15"#));
    }
}
