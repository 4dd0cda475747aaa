use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{circle_line_segment_intersection_at, nearest_point};
use crate::math::{Point2, TOLERANCE};

use super::LineSegment;

/// A circle in the sketch plane.
///
/// Used for the hub of a corner piece, the glue disc under it, and the
/// screw holes of the glass panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonPositiveRadius` if the radius is not a
    /// positive finite number.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(GeometryError::NonPositiveRadius { radius }.into());
        }
        Ok(Self { center, radius })
    }

    /// Creates a circle centred on the origin.
    ///
    /// # Errors
    ///
    /// Same as [`Circle::new`].
    pub fn at_origin(radius: f64) -> Result<Self> {
        Self::new(Point2::origin(), radius)
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether `point` lies strictly outside the circle.
    #[must_use]
    pub fn is_outside(&self, point: Point2) -> bool {
        (point - self.center).norm() > self.radius + TOLERANCE
    }

    /// Whether `point` lies inside or on the circle.
    #[must_use]
    pub fn contains(&self, point: Point2) -> bool {
        !self.is_outside(point)
    }

    /// Points where `segment` crosses this circle, "+" branch first.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroLengthSegment` for a degenerate segment.
    pub fn intersect_segment(&self, segment: &LineSegment) -> Result<Vec<Point2>> {
        circle_line_segment_intersection_at(self.center, self.radius, segment.start, segment.end)
    }

    /// The crossing of `segment` with this circle nearest to its start.
    ///
    /// Arm edges run from the arm end inwards, so the nearest crossing is
    /// where the edge first meets the hub. `Ok(None)` if the segment never
    /// reaches the circle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroLengthSegment` for a degenerate segment.
    pub fn trim_point(&self, segment: &LineSegment) -> Result<Option<Point2>> {
        let hits = self.intersect_segment(segment)?;
        if hits.len() > 1 {
            tracing::warn!(
                start = ?segment.start,
                end = ?segment.end,
                "segment crosses the circle twice, keeping the crossing nearest its start"
            );
        }
        Ok(nearest_point(&hits, segment.start))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn invalid_radius() {
        assert!(Circle::at_origin(0.0).is_err());
        assert!(Circle::at_origin(-5.0).is_err());
        assert!(Circle::at_origin(f64::INFINITY).is_err());
    }

    #[test]
    fn contains_boundary() {
        let c = Circle::at_origin(5.0).unwrap();
        assert!(c.contains(Point2::new(3.0, 4.0)));
        assert!(c.contains(Point2::new(0.0, 0.0)));
        assert!(c.is_outside(Point2::new(3.0, 5.2)));
    }

    #[test]
    fn intersect_segment_matches_free_function() {
        let c = Circle::at_origin(5.0).unwrap();
        let hits = c.intersect_segment(&seg(40.0, 3.0, 3.0, 3.0)).unwrap();
        assert_eq!(hits, vec![Point2::new(4.0, 3.0)]);
    }

    #[test]
    fn trim_point_prefers_segment_start() {
        let c = Circle::at_origin(5.0).unwrap();
        let through = seg(-10.0, 3.0, 10.0, 3.0);
        assert_eq!(c.trim_point(&through).unwrap(), Some(Point2::new(-4.0, 3.0)));
        assert_eq!(
            c.trim_point(&through.reversed()).unwrap(),
            Some(Point2::new(4.0, 3.0))
        );
    }

    #[test]
    fn trim_point_missing() {
        let c = Circle::at_origin(2.0).unwrap();
        assert_eq!(c.trim_point(&seg(20.0, 3.0, 0.0, 3.0)).unwrap(), None);
    }

    #[test]
    fn trim_point_offset_circle() {
        let c = Circle::new(Point2::new(-3.0, 7.0), 5.0).unwrap();
        let p = c.trim_point(&seg(-3.0, 30.0, -3.0, 7.0)).unwrap().unwrap();
        assert_abs_diff_eq!(p.x, -3.0);
        assert_abs_diff_eq!(p.y, 12.0);
    }
}
