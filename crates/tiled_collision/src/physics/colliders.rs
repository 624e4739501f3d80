//! Collider subsystem for one actor
//!
//! [`Colliders`] owns the configuration, the currently installed
//! [`ColliderSet`] and the result of the most recent check in each direction.
//! Every check returns its result; the stored flags are only a convenience for
//! code that polls them later in the frame.

use thiserror::Error;

use crate::config::{ColliderConfig, ConfigError};
use crate::geometry::{ColliderSet, GeometryLoader, LoadError};
use crate::map::TiledMap;

use super::directional::{check_direction, ActorProbe, Direction};
use super::flags::CollisionFlags;

/// Errors raised by directional queries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// A check was run before any collider set was installed
    #[error("collision check before colliders for layer '{layer}' were loaded")]
    NotLoaded {
        /// Configured layer name
        layer: String,
    },

    /// Position or speed is NaN or infinite
    #[error("non-finite collision query: x={x}, y={y}, speed={speed}")]
    NonFiniteInput {
        /// Queried x
        x: f32,
        /// Queried y
        y: f32,
        /// Queried speed
        speed: f32,
    },
}

/// Directional collision checker bound to one collider layer
///
/// One instance per actor. The collider set itself is shared and immutable;
/// reloading swaps in a new set only once it has loaded successfully.
#[derive(Debug, Clone)]
pub struct Colliders {
    config: ColliderConfig,
    probe: ActorProbe,
    colliders: Option<ColliderSet>,
    flags: CollisionFlags,
}

impl Colliders {
    /// Create a checker; colliders must be loaded before querying
    pub fn new(config: ColliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let probe = ActorProbe::from_config(&config);
        Ok(Self {
            config,
            probe,
            colliders: None,
            flags: CollisionFlags::empty(),
        })
    }

    /// Create a checker over an already loaded collider set
    pub fn with_collider_set(config: ColliderConfig, colliders: ColliderSet) -> Result<Self, ConfigError> {
        let mut checker = Self::new(config)?;
        checker.install(colliders);
        Ok(checker)
    }

    /// Configuration this checker was built with
    pub fn config(&self) -> &ColliderConfig {
        &self.config
    }

    /// Actor measurements used by the checks
    pub fn probe(&self) -> &ActorProbe {
        &self.probe
    }

    /// Load the configured layer from the configured map file
    pub fn load_colliders(&mut self) -> Result<&ColliderSet, LoadError> {
        let set = GeometryLoader::load_from_path(&self.config.map_path, &self.config.collider_layer_name)?;
        Ok(self.install(set))
    }

    /// Load the configured layer from an already parsed map
    pub fn load_colliders_from_map(&mut self, map: &TiledMap) -> Result<&ColliderSet, LoadError> {
        let set = GeometryLoader::load(map, &self.config.collider_layer_name)?;
        Ok(self.install(set))
    }

    /// Load the configured layer from JSON map text
    pub fn load_colliders_from_str(&mut self, json: &str) -> Result<&ColliderSet, LoadError> {
        let set = GeometryLoader::load_from_str(json, &self.config.collider_layer_name)?;
        Ok(self.install(set))
    }

    /// Install a collider set, replacing the current one and clearing flags
    pub fn install(&mut self, colliders: ColliderSet) -> &ColliderSet {
        if colliders.layer_name() != self.config.collider_layer_name {
            log::debug!(
                "Installing colliders from layer '{}' into checker configured for '{}'",
                colliders.layer_name(),
                self.config.collider_layer_name
            );
        }
        self.flags = CollisionFlags::empty();
        self.colliders.insert(colliders)
    }

    /// Whether a collider set is installed
    pub fn is_loaded(&self) -> bool {
        self.colliders.is_some()
    }

    /// The installed collider set
    pub fn line_ranges(&self) -> Option<&ColliderSet> {
        self.colliders.as_ref()
    }

    /// Check one direction and remember the result
    pub fn check(&mut self, direction: Direction, x: f32, y: f32, speed: f32) -> Result<bool, CollisionError> {
        let colliders = self.ready(x, y, speed)?;
        let collision = check_direction(colliders.ranges(), &self.probe, direction, x, y, speed);
        self.flags.set(direction.flag(), collision);
        Ok(collision)
    }

    /// Will the actor's top edge hit a collider
    pub fn check_top(&mut self, x: f32, y: f32, speed: f32) -> Result<bool, CollisionError> {
        self.check(Direction::Top, x, y, speed)
    }

    /// Will the actor's bottom edge hit a collider
    pub fn check_bottom(&mut self, x: f32, y: f32, speed: f32) -> Result<bool, CollisionError> {
        self.check(Direction::Bottom, x, y, speed)
    }

    /// Will the actor's left edge hit a collider
    pub fn check_left(&mut self, x: f32, y: f32, speed: f32) -> Result<bool, CollisionError> {
        self.check(Direction::Left, x, y, speed)
    }

    /// Will the actor's right edge hit a collider
    pub fn check_right(&mut self, x: f32, y: f32, speed: f32) -> Result<bool, CollisionError> {
        self.check(Direction::Right, x, y, speed)
    }

    /// Run all four checks and return the combined flags
    pub fn check_all(&mut self, x: f32, y: f32, speed: f32) -> Result<CollisionFlags, CollisionError> {
        self.ready(x, y, speed)?;
        for direction in Direction::ALL {
            self.check(direction, x, y, speed)?;
        }
        Ok(self.flags)
    }

    /// Result of the last top check
    pub fn top_collision(&self) -> bool {
        self.flags.contains(CollisionFlags::TOP)
    }

    /// Result of the last bottom check
    pub fn bottom_collision(&self) -> bool {
        self.flags.contains(CollisionFlags::BOTTOM)
    }

    /// Result of the last left check
    pub fn left_collision(&self) -> bool {
        self.flags.contains(CollisionFlags::LEFT)
    }

    /// Result of the last right check
    pub fn right_collision(&self) -> bool {
        self.flags.contains(CollisionFlags::RIGHT)
    }

    /// Last result of every direction
    pub fn last_flags(&self) -> CollisionFlags {
        self.flags
    }

    fn ready(&self, x: f32, y: f32, speed: f32) -> Result<&ColliderSet, CollisionError> {
        let colliders = self.colliders.as_ref().ok_or_else(|| CollisionError::NotLoaded {
            layer: self.config.collider_layer_name.clone(),
        })?;
        if !(x.is_finite() && y.is_finite() && speed.is_finite()) {
            return Err(CollisionError::NonFiniteInput { x, y, speed });
        }
        Ok(colliders)
    }
}
