//! Directional collision detection against static level geometry
//!
//! - [`directional`] - stateless per-direction predicates over segment ranges
//! - [`colliders`] - [`Colliders`], the per-actor checker holding a collider set
//! - [`flags`] - [`CollisionFlags`] bit set of blocked directions

pub mod directional;
pub mod colliders;
pub mod flags;

pub use directional::{ActorProbe, Direction, LeadingEdge};
pub use colliders::{Colliders, CollisionError};
pub use flags::CollisionFlags;
