//! Math utilities and types
//!
//! Provides the 2D math types used for level geometry. Level coordinates follow
//! the map editor convention: x grows to the right, y grows downwards.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type (absolute level coordinates)
pub type Point2 = nalgebra::Point2<f32>;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: &Point2, b: &Point2) -> f32 {
    nalgebra::distance(a, b)
}

/// Translate an editor-relative point by its object origin
#[inline]
pub fn to_absolute(origin: Vec2, relative: Vec2) -> Point2 {
    Point2::new(relative.x + origin.x, relative.y + origin.y)
}

/// Sort two values ascending
#[inline]
pub fn ordered(a: f32, b: f32) -> [f32; 2] {
    if b < a {
        [b, a]
    } else {
        [a, b]
    }
}
