use crate::math::arc_2d::BulgeArc;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// Polyline vertex; `bulge` describes the segment to the next vertex.
///
/// See [`crate::math::arc_2d`] for the bulge encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlineVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl PlineVertex {
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Vertex followed by a straight segment.
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Vertex at `p` followed by an arc with the given bulge.
    #[must_use]
    pub fn arc(p: Point2, bulge: f64) -> Self {
        Self::new(p.x, p.y, bulge)
    }

    #[must_use]
    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    #[must_use]
    pub fn is_line(&self) -> bool {
        self.bulge.abs() < 1e-12
    }
}

/// An outline of straight and circular segments.
///
/// This is the hand-off format for every profile: the CAD side turns each
/// segment into a sketch line or arc. A closed pline runs from its last
/// vertex back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Pline {
    pub vertices: Vec<PlineVertex>,
    pub closed: bool,
}

impl Pline {
    /// Straight-segment pline through `points`.
    #[must_use]
    pub fn from_points(points: &[Point2], closed: bool) -> Self {
        Self {
            vertices: points.iter().map(|p| PlineVertex::line(p.x, p.y)).collect(),
            closed,
        }
    }

    /// Vertex positions, ignoring bulges.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.vertices.iter().map(PlineVertex::point).collect()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        match self.vertices.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Number of segments that are arcs.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.vertices[..self.segment_count()]
            .iter()
            .filter(|v| !v.is_line())
            .count()
    }

    /// The arc leaving vertex `i`, if that segment is one.
    #[must_use]
    pub fn arc_at(&self, i: usize) -> Option<BulgeArc> {
        if i >= self.segment_count() {
            return None;
        }
        let from = self.vertices[i];
        let to = self.vertices[(i + 1) % self.vertices.len()];
        BulgeArc::from_bulge(from.point(), to.point(), from.bulge)
    }

    /// Flattens the pline to points, replacing arcs with chords that stay
    /// within `tolerance` of the arc.
    ///
    /// A closed pline does not repeat its first point at the end.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let Some(first) = self.vertices.first() else {
            return Vec::new();
        };
        let n = self.vertices.len();
        let mut points = vec![first.point()];

        for i in 0..self.segment_count() {
            if let Some(arc) = self.arc_at(i) {
                let chords = arc.chord_count(tolerance);
                points.extend((1..chords).map(|j| arc.point_at(f64::from(j) / f64::from(chords))));
            }
            let next = (i + 1) % n;
            if next != 0 {
                points.push(self.vertices[next].point());
            }
        }
        points
    }

    /// Signed area of the flattened outline, positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self, tolerance: f64) -> f64 {
        signed_area_2d(&self.to_points(tolerance))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn triangle() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ]
    }

    #[test]
    fn open_triangle() {
        let pline = Pline::from_points(&triangle(), false);
        assert_eq!(pline.segment_count(), 2);
        assert_eq!(pline.arc_count(), 0);
        assert_eq!(pline.to_points(0.01), triangle());
    }

    #[test]
    fn closed_triangle() {
        let pline = Pline::from_points(&triangle(), true);
        assert_eq!(pline.segment_count(), 3);
        assert_eq!(pline.to_points(0.01).len(), 3);
        assert_abs_diff_eq!(pline.signed_area(0.01), 0.5);
    }

    #[test]
    fn clockwise_area_is_negative() {
        let mut pts = triangle();
        pts.reverse();
        assert!(Pline::from_points(&pts, true).signed_area(0.01) < 0.0);
    }

    #[test]
    fn half_circle_is_flattened() {
        let pline = Pline {
            vertices: vec![PlineVertex::new(0.0, 0.0, 1.0), PlineVertex::line(2.0, 0.0)],
            closed: false,
        };
        assert_eq!(pline.arc_count(), 1);
        let pts = pline.to_points(0.01);
        assert!(pts.len() > 2);
        assert_eq!(pts.last().copied(), Some(Point2::new(2.0, 0.0)));
        assert!(pts.iter().all(|p| p.y <= 1e-10));
    }

    #[test]
    fn circle_from_two_arcs() {
        let pline = Pline {
            vertices: vec![PlineVertex::new(1.0, 0.0, 1.0), PlineVertex::new(-1.0, 0.0, 1.0)],
            closed: true,
        };
        assert_eq!(pline.arc_count(), 2);
        assert!(pline.arc_at(1).is_some());
        assert_abs_diff_eq!(pline.signed_area(1e-4), std::f64::consts::PI, epsilon = 1e-2);
    }

    #[test]
    fn last_vertex_of_open_pline_has_no_segment() {
        let pline = Pline {
            vertices: vec![PlineVertex::line(0.0, 0.0), PlineVertex::new(1.0, 0.0, 1.0)],
            closed: false,
        };
        assert_eq!(pline.arc_count(), 0);
        assert!(pline.arc_at(1).is_none());
    }

    #[test]
    fn degenerate_plines() {
        let empty = Pline { vertices: vec![], closed: true };
        assert_eq!(empty.segment_count(), 0);
        assert!(empty.to_points(0.01).is_empty());
        let single = Pline { vertices: vec![PlineVertex::line(0.0, 0.0)], closed: true };
        assert_eq!(single.segment_count(), 0);
        assert_eq!(single.to_points(0.01).len(), 1);
    }
}
