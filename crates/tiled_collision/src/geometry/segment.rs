//! Line segments and their axis-aligned ranges

use crate::foundation::math::{ordered, Point2};

/// One straight wall piece: two adjacent absolute points of a polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First point, in authoring order
    pub start: Point2,
    /// Second point, in authoring order
    pub end: Point2,
}

impl Segment {
    /// Creates a segment between two absolute points
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Pair every point with its successor
    ///
    /// Polylines are open: the last point starts no segment, and fewer than two
    /// points yield nothing.
    pub fn chain(points: &[Point2]) -> impl Iterator<Item = Segment> + '_ {
        points.windows(2).map(|pair| Segment::new(pair[0], pair[1]))
    }

    /// Reduce this segment to its axis-aligned range
    pub fn range(&self) -> SegmentRange {
        SegmentRange {
            x_range: ordered(self.start.x, self.end.x),
            y_range: ordered(self.start.y, self.end.y),
        }
    }
}

/// Axis-aligned extent of a segment
///
/// Both ranges are sorted ascending. This is the only form collision checks
/// consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRange {
    /// `[min x, max x]`
    pub x_range: [f32; 2],
    /// `[min y, max y]`
    pub y_range: [f32; 2],
}

impl SegmentRange {
    /// Build a range from two points in any order
    pub fn from_points(a: Point2, b: Point2) -> Self {
        Segment::new(a, b).range()
    }

    /// Leftmost x
    #[inline]
    pub fn left(&self) -> f32 {
        self.x_range[0]
    }

    /// Rightmost x
    #[inline]
    pub fn right(&self) -> f32 {
        self.x_range[1]
    }

    /// Smallest y (topmost, y grows downwards)
    #[inline]
    pub fn top(&self) -> f32 {
        self.y_range[0]
    }

    /// Largest y
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y_range[1]
    }

    /// Zero horizontal span
    #[inline]
    #[allow(clippy::float_cmp)]
    pub fn is_vertical(&self) -> bool {
        self.x_range[0] == self.x_range[1]
    }

    /// Zero vertical span
    #[inline]
    #[allow(clippy::float_cmp)]
    pub fn is_horizontal(&self) -> bool {
        self.y_range[0] == self.y_range[1]
    }
}
