//! Level geometry: polyline segments, their ranges, and layer loading
//!
//! - [`segment`] - [`Segment`] and the [`SegmentRange`] consumed by collision checks
//! - [`collider_set`] - the immutable per-layer [`ColliderSet`]
//! - [`loader`] - [`GeometryLoader`] turning a map layer into a collider set

pub mod segment;
pub mod collider_set;
pub mod loader;

pub use segment::{Segment, SegmentRange};
pub use collider_set::ColliderSet;
pub use loader::{GeometryLoader, LoadError};
