//! # Collider Configuration
//!
//! Construction parameters for one collider subsystem instance: which Tiled
//! layer holds the solid geometry, where the map export lives, and how the
//! actor's extents relate to its center.

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};

/// Half width of the actor used for the top and bottom transverse samples
pub const DEFAULT_HALF_WIDTH: f32 = 6.0;

/// Map export read by [`crate::Colliders::load_colliders`] when no path is configured
pub const DEFAULT_MAP_PATH: &str = "map.json";

/// Offsets from the actor center to each of its four extents
///
/// Offsets are added to the center for top, bottom and right, and subtracted
/// for left. With y growing downwards a sprite's top gap is therefore usually
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActorGaps {
    /// Center to top extent
    pub top: f32,
    /// Center to bottom extent
    pub bottom: f32,
    /// Center to left extent
    pub left: f32,
    /// Center to right extent
    pub right: f32,
}

impl ActorGaps {
    /// Create gaps from the four directional offsets
    pub const fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self { top, bottom, left, right }
    }
}

/// Collider subsystem configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderConfig {
    /// Name of the collider layer in the map export
    pub collider_layer_name: String,
    /// Path of the map export document
    pub map_path: String,
    /// Proximity threshold and look-ahead margin
    pub buffer: f32,
    /// Half width used to sample the actor's top and bottom edges
    pub half_width: f32,
    /// Actor extents relative to its center
    pub gaps: ActorGaps,
}

impl ColliderConfig {
    /// Create a configuration for the given collider layer
    pub fn new(collider_layer_name: impl Into<String>) -> Self {
        Self {
            collider_layer_name: collider_layer_name.into(),
            map_path: DEFAULT_MAP_PATH.to_string(),
            buffer: 0.0,
            half_width: DEFAULT_HALF_WIDTH,
            gaps: ActorGaps::default(),
        }
    }

    /// Set the map export path
    pub fn with_map_path(mut self, path: impl Into<String>) -> Self {
        self.map_path = path.into();
        self
    }

    /// Set the buffer distance
    pub fn with_buffer(mut self, buffer: f32) -> Self {
        self.buffer = buffer;
        self
    }

    /// Set all four gaps
    pub fn with_gaps(mut self, gaps: ActorGaps) -> Self {
        self.gaps = gaps;
        self
    }

    /// Set the half width used for top/bottom sampling
    pub fn with_half_width(mut self, half_width: f32) -> Self {
        self.half_width = half_width;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collider_layer_name.is_empty() {
            return Err(ConfigError::Invalid("collider layer name cannot be empty".to_string()));
        }

        let numbers = [
            ("buffer", self.buffer),
            ("gaps.top", self.gaps.top),
            ("gaps.bottom", self.gaps.bottom),
            ("gaps.left", self.gaps.left),
            ("gaps.right", self.gaps.right),
            ("half_width", self.half_width),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("{name} must be finite, got {value}")));
        }

        if self.buffer < 0.0 {
            return Err(ConfigError::Invalid(format!("buffer must not be negative, got {}", self.buffer)));
        }
        if self.half_width < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "half_width must not be negative, got {}",
                self.half_width
            )));
        }

        Ok(())
    }
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self::new("colliders")
    }
}

impl Config for ColliderConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ColliderConfig {
        ColliderConfig::new("walls")
            .with_map_path("levels/one.json")
            .with_buffer(3.0)
            .with_gaps(ActorGaps::new(-5.0, 7.0, 4.0, 4.0))
            .with_half_width(5.0)
    }

    #[test]
    fn test_defaults() {
        let config = ColliderConfig::new("walls");
        assert_eq!(config.map_path, DEFAULT_MAP_PATH);
        assert_eq!(config.half_width, DEFAULT_HALF_WIDTH);
        assert_eq!(config.buffer, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = sample();
        let text = config.to_string_with_format("collider.toml").unwrap();
        let parsed = ColliderConfig::from_str_with_format(&text, "collider.toml").unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = sample();
        let text = config.to_string_with_format("collider.ron").unwrap();
        let parsed = ColliderConfig::from_str_with_format(&text, "collider.ron").unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let text = r#"
            collider_layer_name = "platforms"
            buffer = 2.5

            [gaps]
            top = -8.0
            bottom = 8.0
            left = 5.0
            right = 5.0
        "#;
        let parsed = ColliderConfig::from_str_with_format(text, "collider.toml").unwrap();
        assert_eq!(parsed.collider_layer_name, "platforms");
        assert_eq!(parsed.buffer, 2.5);
        assert_eq!(parsed.gaps, ActorGaps::new(-8.0, 8.0, 5.0, 5.0));
        assert_eq!(parsed.map_path, DEFAULT_MAP_PATH);
        assert_eq!(parsed.half_width, DEFAULT_HALF_WIDTH);
    }

    #[test]
    fn test_unsupported_format() {
        let result = ColliderConfig::from_str_with_format("{}", "collider.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("tiled_collision_config_{}.toml", std::process::id()));
        let path = path.to_string_lossy().into_owned();

        let config = sample();
        config.save_to_file(&path).unwrap();
        let loaded = ColliderConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(matches!(ColliderConfig::new("").validate(), Err(ConfigError::Invalid(_))));
        assert!(matches!(sample().with_buffer(-1.0).validate(), Err(ConfigError::Invalid(_))));
        assert!(matches!(sample().with_buffer(f32::NAN).validate(), Err(ConfigError::Invalid(_))));
        assert!(matches!(sample().with_half_width(-0.5).validate(), Err(ConfigError::Invalid(_))));
        assert!(matches!(
            sample().with_gaps(ActorGaps::new(f32::INFINITY, 0.0, 0.0, 0.0)).validate(),
            Err(ConfigError::Invalid(_))
        ));
    }
}
