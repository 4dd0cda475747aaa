use crate::error::Result;
use crate::math::intersect_2d::{intersection_two_segments, is_point_on_line_segment};
use crate::math::{Point2, Vector2};

/// A finite, ordered line segment in the sketch plane.
///
/// Construction never fails; routines that need a direction reject
/// zero-length segments themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Vector from start to end.
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    /// Same segment, walked the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Bounding-box containment, see [`is_point_on_line_segment`].
    #[must_use]
    pub fn bounds_contain(&self, point: Point2) -> bool {
        is_point_on_line_segment(point, self.start, self.end)
    }

    /// Bounding-box containment with the box grown by `tolerance` on every side.
    #[must_use]
    pub fn bounds_contain_within(&self, point: Point2, tolerance: f64) -> bool {
        self.start.x.min(self.end.x) - tolerance <= point.x
            && point.x <= self.start.x.max(self.end.x) + tolerance
            && self.start.y.min(self.end.y) - tolerance <= point.y
            && point.y <= self.start.y.max(self.end.y) + tolerance
    }

    /// Intersection of the infinite lines through `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParallelLines` for parallel lines and
    /// `GeometryError::ZeroLengthSegment` for a degenerate segment.
    pub fn line_intersection(&self, other: &LineSegment) -> Result<Point2> {
        intersection_two_segments(self.start, self.end, other.start, other.end)
    }
}
