//! # Tiled Collision
//!
//! Directional collision checks for a 2D actor against polyline colliders
//! drawn in the Tiled map editor.
//!
//! ## Features
//!
//! - **Geometry loading**: one named object layer becomes a flat, immutable set
//!   of segment ranges in absolute level coordinates
//! - **Directional checks**: top, bottom, left and right proximity tests with a
//!   buffer distance and speed based look-ahead
//! - **Configuration**: collider settings from TOML or RON files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tiled_collision::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ColliderConfig::new("walls")
//!         .with_map_path("map.json")
//!         .with_buffer(3.0)
//!         .with_gaps(ActorGaps::new(-12.0, 12.0, 6.0, 6.0));
//!
//!     let mut colliders = Colliders::new(config)?;
//!     colliders.load_colliders()?;
//!
//!     if colliders.check_bottom(120.0, 64.0, 2.0)? {
//!         // standing on something
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod map;
pub mod geometry;
pub mod physics;

#[cfg(test)]
mod tests;

pub use config::{ActorGaps, ColliderConfig, Config, ConfigError};
pub use geometry::{ColliderSet, GeometryLoader, LoadError, Segment, SegmentRange};
pub use map::{MapError, TiledMap};
pub use physics::{Colliders, CollisionError, CollisionFlags, Direction};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{ActorGaps, ColliderConfig, Config},
        geometry::{ColliderSet, GeometryLoader, SegmentRange},
        map::TiledMap,
        physics::{ActorProbe, Colliders, CollisionError, CollisionFlags, Direction},
        LoadError,
    };
}
