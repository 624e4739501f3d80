//! Directional proximity tests
//!
//! Each direction tests one leading edge of the actor against every segment
//! range. A range is considered when:
//!
//! 1. its span across the direction of travel is not degenerate (vertical
//!    ranges never block top/bottom movement, horizontal ones never block
//!    left/right movement),
//! 2. one of the two corners of the leading edge lies inside that span,
//!    inclusive of both ends,
//! 3. the leading edge is still on the approaching side of the range's near
//!    boundary.
//!
//! A considered range collides when the leading edge, pulled back by the
//! current speed, is within `buffer` of the near boundary.
//!
//! | Direction | Leading edge            | Near boundary | Side      | Look-ahead     |
//! |-----------|-------------------------|---------------|-----------|----------------|
//! | Top       | `y + gap.top + buffer`  | `y_range[0]`  | edge `>`  | `edge - speed` |
//! | Bottom    | `y + gap.bottom - buffer` | `y_range[0]` | edge `<` | `edge + speed` |
//! | Left      | `x - gap.left + buffer` | `x_range[0]`  | edge `>`  | `edge - speed` |
//! | Right     | `x + gap.right - buffer` | `x_range[1]` | edge `<`  | `edge + speed` |
//!
//! Bottom measures against the range's smaller y, the same boundary as top.

use crate::config::{ActorGaps, ColliderConfig};
use crate::foundation::math::{distance, Point2};
use crate::geometry::SegmentRange;

use super::flags::CollisionFlags;

/// One of the four directions an actor can bump into geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Moving towards smaller y
    Top,
    /// Moving towards larger y
    Bottom,
    /// Moving towards smaller x
    Left,
    /// Moving towards larger x
    Right,
}

impl Direction {
    /// All directions in check order
    pub const ALL: [Direction; 4] = [Direction::Top, Direction::Bottom, Direction::Left, Direction::Right];

    /// Flag bit for this direction
    pub const fn flag(self) -> CollisionFlags {
        match self {
            Direction::Top => CollisionFlags::TOP,
            Direction::Bottom => CollisionFlags::BOTTOM,
            Direction::Left => CollisionFlags::LEFT,
            Direction::Right => CollisionFlags::RIGHT,
        }
    }

    /// True when travel is along the y axis
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Top | Direction::Bottom)
    }

    /// True when the leading edge must be past the boundary (larger coordinate)
    const fn approaches_from_greater(self) -> bool {
        matches!(self, Direction::Top | Direction::Left)
    }

    fn transverse_span(self, range: &SegmentRange) -> [f32; 2] {
        if self.is_vertical() {
            range.x_range
        } else {
            range.y_range
        }
    }

    fn near_boundary(self, range: &SegmentRange) -> f32 {
        match self {
            Direction::Top | Direction::Bottom => range.y_range[0],
            Direction::Left => range.x_range[0],
            Direction::Right => range.x_range[1],
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Fixed actor measurements used by every check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorProbe {
    /// Proximity threshold and look-ahead margin
    pub buffer: f32,
    /// Center to extent offsets
    pub gaps: ActorGaps,
    /// Half width used for the top and bottom corners
    pub half_width: f32,
}

impl ActorProbe {
    /// Creates a probe from explicit measurements
    pub const fn new(buffer: f32, gaps: ActorGaps, half_width: f32) -> Self {
        Self { buffer, gaps, half_width }
    }

    /// Creates a probe from a collider configuration
    pub fn from_config(config: &ColliderConfig) -> Self {
        Self::new(config.buffer, config.gaps, config.half_width)
    }

    /// Leading edge of an actor centered at `(x, y)` moving in `direction`
    pub fn leading_edge(&self, direction: Direction, x: f32, y: f32) -> LeadingEdge {
        let gaps = &self.gaps;
        let (edge, corners, center) = match direction {
            Direction::Top => (
                y + gaps.top + self.buffer,
                [x - self.half_width, x + self.half_width],
                x,
            ),
            Direction::Bottom => (
                y + gaps.bottom - self.buffer,
                [x - self.half_width, x + self.half_width],
                x,
            ),
            Direction::Left => (x - gaps.left + self.buffer, [y + gaps.top, y + gaps.bottom], y),
            Direction::Right => (x + gaps.right - self.buffer, [y + gaps.top, y + gaps.bottom], y),
        };

        LeadingEdge {
            direction,
            edge,
            corners,
            center,
            buffer: self.buffer,
        }
    }
}

/// Leading edge of the actor for one direction, computed per call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadingEdge {
    /// Direction of travel
    pub direction: Direction,
    /// Edge coordinate on the axis of travel, buffer included
    pub edge: f32,
    /// The two corners of the edge on the transverse axis
    pub corners: [f32; 2],
    /// Actor center on the transverse axis
    pub center: f32,
    /// Proximity threshold
    pub buffer: f32,
}

impl LeadingEdge {
    /// Edge position pulled back by `speed` against the direction of travel
    pub fn look_ahead(&self, speed: f32) -> f32 {
        if self.direction.approaches_from_greater() {
            self.edge - speed
        } else {
            self.edge + speed
        }
    }

    /// Whether either corner lies within the range's transverse span
    ///
    /// Degenerate spans never overlap.
    pub fn overlaps(&self, range: &SegmentRange) -> bool {
        let [lo, hi] = self.direction.transverse_span(range);
        if lo >= hi {
            return false;
        }
        self.corners.iter().any(|&corner| corner >= lo && corner <= hi)
    }

    /// Whether the edge is still on the approaching side of the near boundary
    pub fn is_approaching(&self, range: &SegmentRange) -> bool {
        let boundary = self.direction.near_boundary(range);
        if self.direction.approaches_from_greater() {
            self.edge > boundary
        } else {
            self.edge < boundary
        }
    }

    /// Full test of this edge against one range
    pub fn collides_with(&self, range: &SegmentRange, speed: f32) -> bool {
        if !self.overlaps(range) || !self.is_approaching(range) {
            return false;
        }

        let boundary = self.direction.near_boundary(range);
        let ahead = self.look_ahead(speed);
        let (from, to) = if self.direction.is_vertical() {
            (Point2::new(self.center, ahead), Point2::new(self.center, boundary))
        } else {
            (Point2::new(ahead, self.center), Point2::new(boundary, self.center))
        };

        distance(&from, &to) <= self.buffer
    }
}

/// Run one directional check against every range
///
/// Every range is visited; a single hit makes the result true.
pub fn check_direction(
    ranges: &[SegmentRange],
    probe: &ActorProbe,
    direction: Direction,
    x: f32,
    y: f32,
    speed: f32,
) -> bool {
    let edge = probe.leading_edge(direction, x, y);
    let mut collision = false;
    for (index, range) in ranges.iter().enumerate() {
        if edge.collides_with(range, speed) {
            log::trace!("{direction} collision with range #{index} {range:?} at ({x}, {y}) speed {speed}");
            collision = true;
        }
    }
    collision
}

/// Top check, see the module table
pub fn check_top(ranges: &[SegmentRange], probe: &ActorProbe, x: f32, y: f32, speed: f32) -> bool {
    check_direction(ranges, probe, Direction::Top, x, y, speed)
}

/// Bottom check, see the module table
pub fn check_bottom(ranges: &[SegmentRange], probe: &ActorProbe, x: f32, y: f32, speed: f32) -> bool {
    check_direction(ranges, probe, Direction::Bottom, x, y, speed)
}

/// Left check, see the module table
pub fn check_left(ranges: &[SegmentRange], probe: &ActorProbe, x: f32, y: f32, speed: f32) -> bool {
    check_direction(ranges, probe, Direction::Left, x, y, speed)
}

/// Right check, see the module table
pub fn check_right(ranges: &[SegmentRange], probe: &ActorProbe, x: f32, y: f32, speed: f32) -> bool {
    check_direction(ranges, probe, Direction::Right, x, y, speed)
}

/// All four checks, combined into flags
pub fn check_all(ranges: &[SegmentRange], probe: &ActorProbe, x: f32, y: f32, speed: f32) -> CollisionFlags {
    Direction::ALL
        .iter()
        .filter(|&&direction| check_direction(ranges, probe, direction, x, y, speed))
        .fold(CollisionFlags::empty(), |flags, direction| flags | direction.flag())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn range(x0: f32, y0: f32, x1: f32, y1: f32) -> SegmentRange {
        SegmentRange::from_points(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    // Sprite 10 wide, 20 tall, 3 units of buffer.
    fn probe() -> ActorProbe {
        ActorProbe::new(3.0, ActorGaps::new(-10.0, 10.0, 5.0, 5.0), 6.0)
    }

    #[test]
    fn test_leading_edges() {
        let p = probe();

        let top = p.leading_edge(Direction::Top, 50.0, 40.0);
        assert_relative_eq!(top.edge, 40.0 - 10.0 + 3.0);
        assert_eq!(top.corners, [44.0, 56.0]);
        assert_relative_eq!(top.look_ahead(2.0), 31.0);

        let bottom = p.leading_edge(Direction::Bottom, 50.0, 40.0);
        assert_relative_eq!(bottom.edge, 40.0 + 10.0 - 3.0);
        assert_relative_eq!(bottom.look_ahead(2.0), 49.0);

        let left = p.leading_edge(Direction::Left, 50.0, 40.0);
        assert_relative_eq!(left.edge, 50.0 - 5.0 + 3.0);
        assert_eq!(left.corners, [30.0, 50.0]);
        assert_relative_eq!(left.look_ahead(2.0), 46.0);

        let right = p.leading_edge(Direction::Right, 50.0, 40.0);
        assert_relative_eq!(right.edge, 50.0 + 5.0 - 3.0);
        assert_relative_eq!(right.look_ahead(2.0), 54.0);
    }

    #[test]
    fn test_top_hits_ceiling_just_above() {
        // Top edge with buffer at 33, ceiling at 31.
        let ceiling = [range(0.0, 31.0, 100.0, 31.0)];
        assert!(check_top(&ceiling, &probe(), 50.0, 40.0, 0.0));
    }

    #[test]
    fn test_top_misses_ceiling_far_above() {
        let ceiling = [range(0.0, 0.0, 100.0, 0.0)];
        assert!(!check_top(&ceiling, &probe(), 50.0, 40.0, 0.0));
    }

    #[test]
    fn test_top_ignores_ceiling_already_passed() {
        // Edge (with buffer) at 33 is above the line at 35.
        let line = [range(0.0, 35.0, 100.0, 35.0)];
        assert!(!check_top(&line, &probe(), 50.0, 40.0, 0.0));
    }

    #[test]
    fn test_speed_shifts_look_ahead() {
        // Edge at 33, line at 27: distance 6 at rest, 3 at speed 3.
        let line = [range(0.0, 27.0, 100.0, 27.0)];
        assert!(!check_top(&line, &probe(), 50.0, 40.0, 0.0));
        assert!(check_top(&line, &probe(), 50.0, 40.0, 3.0));
        // Overshooting by more than the buffer is not a hit either.
        assert!(!check_top(&line, &probe(), 50.0, 40.0, 12.5));
    }

    #[test]
    fn test_bottom_hits_floor_just_below() {
        // Bottom edge with buffer at 47, floor at 49.
        let floor = [range(0.0, 49.0, 100.0, 49.0)];
        assert!(check_bottom(&floor, &probe(), 50.0, 40.0, 0.0));
        assert!(!check_bottom(&floor, &probe(), 50.0, 20.0, 0.0));
    }

    #[test]
    fn test_bottom_uses_smaller_y_of_slope() {
        // Slope from y=49 to y=80: boundary is 49, not 80.
        let slope = [range(0.0, 49.0, 100.0, 80.0)];
        assert!(check_bottom(&slope, &probe(), 50.0, 40.0, 0.0));
        let steep = [range(0.0, 60.0, 100.0, 80.0)];
        assert!(!check_bottom(&steep, &probe(), 50.0, 40.0, 0.0));
    }

    #[test]
    fn test_left_and_right_walls() {
        let p = probe();
        // Left edge with buffer at 48, right edge with buffer at 52.
        let left_wall = [range(46.0, 0.0, 46.0, 100.0)];
        let right_wall = [range(54.0, 0.0, 54.0, 100.0)];

        assert!(check_left(&left_wall, &p, 50.0, 40.0, 0.0));
        assert!(!check_right(&left_wall, &p, 50.0, 40.0, 0.0));
        assert!(check_right(&right_wall, &p, 50.0, 40.0, 0.0));
        assert!(!check_left(&right_wall, &p, 50.0, 40.0, 0.0));
    }

    #[test]
    fn test_right_uses_larger_x() {
        // Slanted wall spanning x 54..90: right boundary is 90, far away.
        let wall = [range(54.0, 0.0, 90.0, 100.0)];
        assert!(!check_right(&wall, &probe(), 50.0, 40.0, 0.0));
        assert!(check_right(&wall, &probe(), 86.0, 40.0, 0.0));
    }

    #[test]
    fn test_vertical_range_never_blocks_top_or_bottom() {
        let p = probe();
        let wall = [range(50.0, 0.0, 50.0, 100.0)];
        for y in [-20.0, 0.0, 28.0, 40.0, 49.0, 120.0] {
            for speed in [0.0, 1.0, 5.0] {
                assert!(!check_top(&wall, &p, 50.0, y, speed));
                assert!(!check_bottom(&wall, &p, 50.0, y, speed));
            }
        }
    }

    #[test]
    fn test_horizontal_range_never_blocks_left_or_right() {
        let p = probe();
        let floor = [range(0.0, 40.0, 100.0, 40.0)];
        for x in [-20.0, 0.0, 46.0, 50.0, 54.0, 120.0] {
            for speed in [0.0, 1.0, 5.0] {
                assert!(!check_left(&floor, &p, x, 40.0, speed));
                assert!(!check_right(&floor, &p, x, 40.0, speed));
            }
        }
    }

    #[test]
    fn test_corner_containment_is_inclusive() {
        let p = probe();
        let ceiling = [range(0.0, 31.0, 100.0, 31.0)];

        // Right corner exactly on the line's left end.
        assert!(check_top(&ceiling, &p, -6.0, 40.0, 0.0));
        // Left corner exactly on the line's right end.
        assert!(check_top(&ceiling, &p, 106.0, 40.0, 0.0));
        // Just beyond either end.
        assert!(!check_top(&ceiling, &p, -6.5, 40.0, 0.0));
        assert!(!check_top(&ceiling, &p, 106.5, 40.0, 0.0));
    }

    #[test]
    fn test_bottom_corner_containment_is_inclusive() {
        let p = probe();
        let floor = [range(0.0, 49.0, 100.0, 49.0)];

        assert!(check_bottom(&floor, &p, -6.0, 40.0, 0.0));
        assert!(check_bottom(&floor, &p, 106.0, 40.0, 0.0));
        assert!(!check_bottom(&floor, &p, -6.5, 40.0, 0.0));
        assert!(!check_bottom(&floor, &p, 106.5, 40.0, 0.0));
    }

    #[test]
    fn test_side_corner_containment_is_inclusive() {
        let p = probe();
        // Corners sit at y - 10 and y + 10; both walls span y 0..100.
        let left_wall = [range(46.0, 0.0, 46.0, 100.0)];
        let right_wall = [range(54.0, 0.0, 54.0, 100.0)];

        for (y, expected) in [(110.0, true), (-10.0, true), (110.5, false), (-10.5, false)] {
            assert_eq!(check_left(&left_wall, &p, 50.0, y, 0.0), expected, "left at y={y}");
            assert_eq!(check_right(&right_wall, &p, 50.0, y, 0.0), expected, "right at y={y}");
        }
    }

    #[test]
    fn test_one_hit_is_enough() {
        let ranges = [
            range(0.0, 0.0, 100.0, 0.0),
            range(0.0, 31.0, 100.0, 31.0),
            range(200.0, 31.0, 300.0, 31.0),
        ];
        assert!(check_top(&ranges, &probe(), 50.0, 40.0, 0.0));
    }

    #[test]
    fn test_empty_ranges_never_collide() {
        assert!(check_all(&[], &probe(), 50.0, 40.0, 10.0).is_empty());
    }

    #[test]
    fn test_check_all_combines_flags() {
        let box_ranges = [
            range(0.0, 31.0, 100.0, 31.0),
            range(0.0, 49.0, 100.0, 49.0),
            range(46.0, 0.0, 46.0, 100.0),
        ];
        let flags = check_all(&box_ranges, &probe(), 50.0, 40.0, 0.0);
        assert_eq!(flags, CollisionFlags::TOP | CollisionFlags::BOTTOM | CollisionFlags::LEFT);
    }
}
