use crate::geometry::LineSegment;
use crate::math::polar::{normalize_degrees, perpendicular_offset, polar_to_vector};
use crate::math::{Point2, Vector2};

/// A rectangular arm radiating from the hub.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arm {
    /// Direction of the arm, degrees counter-clockwise from +X.
    pub angle_deg: f64,
    /// Distance from the hub centre to the middle of the arm's end.
    pub length: f64,
}

impl Arm {
    #[must_use]
    pub const fn new(angle_deg: f64, length: f64) -> Self {
        Self { angle_deg, length }
    }

    /// The arm's direction normalized to `[0, 360)`.
    #[must_use]
    pub fn heading(&self) -> f64 {
        normalize_degrees(self.angle_deg)
    }

    /// Derives the arm's corner points for the given width.
    #[must_use]
    pub fn layout(&self, width: f64) -> ArmLayout {
        let mid = Point2::origin() + polar_to_vector(self.length, self.angle_deg);
        let half = perpendicular_offset(width / 2.0, self.angle_deg);
        ArmLayout {
            arm: *self,
            mid,
            half,
            end_forward: mid + half,
            end_back: mid - half,
        }
    }
}

/// Derived points of one arm.
///
/// "Forward" is the counter-clockwise side of the arm, "back" the
/// clockwise side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmLayout {
    pub arm: Arm,
    /// Middle of the arm's end line.
    pub mid: Point2,
    /// Perpendicular half-width offset towards the forward side.
    pub half: Vector2,
    pub end_forward: Point2,
    pub end_back: Point2,
}

impl ArmLayout {
    /// Long edge on the forward side, from the arm end towards the hub.
    ///
    /// It stops on the line through the hub centre perpendicular to the
    /// arm, so it always spans the hub boundary.
    #[must_use]
    pub fn forward_edge(&self) -> LineSegment {
        LineSegment::new(self.end_forward, Point2::origin() + self.half)
    }

    /// Long edge on the back side, from the arm end towards the hub.
    #[must_use]
    pub fn back_edge(&self) -> LineSegment {
        LineSegment::new(self.end_back, Point2::origin() - self.half)
    }

    /// Short line closing the arm's end.
    #[must_use]
    pub fn end_line(&self) -> LineSegment {
        LineSegment::new(self.end_forward, self.end_back)
    }
}
