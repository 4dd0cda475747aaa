use super::{round_point, Point2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Intersection of an origin-centred circle with a finite line segment.
///
/// See [`circle_line_segment_intersection_at`].
///
/// # Errors
///
/// Returns `GeometryError::NonPositiveRadius` for `circle_radius <= 0` and
/// `GeometryError::ZeroLengthSegment` if the two endpoints coincide.
pub fn circle_line_segment_intersection(
    circle_radius: f64,
    line_start: Point2,
    line_end: Point2,
) -> Result<Vec<Point2>> {
    circle_line_segment_intersection_at(Point2::origin(), circle_radius, line_start, line_end)
}

/// Intersection of a circle with a finite line segment.
///
/// The infinite line through `line_start`/`line_end` is intersected with
/// the circle in closed form, each candidate is rounded to
/// [`COORD_DECIMALS`](super::COORD_DECIMALS) places, and only candidates
/// inside the segment's bounding box are kept (see
/// [`is_point_on_line_segment`]).
///
/// The filter runs on the rounded candidates, with no slack. A crossing
/// within half a grid step of an endpoint can therefore round outside the
/// segment and be dropped; callers that need it pass a segment reaching a
/// little past the crossing, as arm edges do.
///
/// Returns 0, 1 or 2 points with the "+" branch of the quadratic first.
/// A tangent line yields a single point. A line that misses the circle
/// yields an empty list; that is a valid outcome, not an error.
///
/// # Errors
///
/// Returns `GeometryError::NonPositiveRadius` for a non-positive or
/// non-finite radius and `GeometryError::ZeroLengthSegment` if the two
/// endpoints coincide.
pub fn circle_line_segment_intersection_at(
    circle_center: Point2,
    circle_radius: f64,
    line_start: Point2,
    line_end: Point2,
) -> Result<Vec<Point2>> {
    if !(circle_radius > 0.0 && circle_radius.is_finite()) {
        return Err(GeometryError::NonPositiveRadius {
            radius: circle_radius,
        }
        .into());
    }

    // Solve in the circle's frame.
    let x1 = line_start.x - circle_center.x;
    let y1 = line_start.y - circle_center.y;
    let x2 = line_end.x - circle_center.x;
    let y2 = line_end.y - circle_center.y;

    let dx = x2 - x1;
    let dy = y2 - y1;
    let dr_sq = dx * dx + dy * dy;
    if dr_sq < TOLERANCE * TOLERANCE {
        return Err(GeometryError::ZeroLengthSegment.into());
    }

    let det = x1 * y2 - x2 * y1;
    let discriminant = circle_radius * circle_radius * dr_sq - det * det;
    if discriminant < 0.0 {
        return Ok(Vec::new());
    }
    let sqrt_disc = discriminant.sqrt();

    // sgn(0) = +1 keeps horizontal segments on the same branch pairing.
    let sgn_dy = if dy < 0.0 { -1.0 } else { 1.0 };
    let x_off = sgn_dy * dx * sqrt_disc;
    let y_off = dy.abs() * sqrt_disc;

    let plus = Point2::new(
        (det * dy + x_off) / dr_sq + circle_center.x,
        (-det * dx + y_off) / dr_sq + circle_center.y,
    );
    let minus = Point2::new(
        (det * dy - x_off) / dr_sq + circle_center.x,
        (-det * dx - y_off) / dr_sq + circle_center.y,
    );

    let mut candidates = vec![round_point(plus)];
    let minus = round_point(minus);
    if minus != candidates[0] {
        candidates.push(minus);
    }

    Ok(candidates
        .into_iter()
        .filter(|p| is_point_on_line_segment(*p, line_start, line_end))
        .collect())
}

/// Checks whether `point` lies inside the axis-aligned bounding box of the
/// segment `line_start`→`line_end`, bounds inclusive.
///
/// This is only an on-segment test for points already known to lie on the
/// segment's line, which is how the intersection routines use it.
#[must_use]
pub fn is_point_on_line_segment(point: Point2, line_start: Point2, line_end: Point2) -> bool {
    line_start.x.min(line_end.x) <= point.x
        && point.x <= line_start.x.max(line_end.x)
        && line_start.y.min(line_end.y) <= point.y
        && point.y <= line_start.y.max(line_end.y)
}

/// Intersection of the infinite lines through two segments.
///
/// No check is made that the point falls within either finite segment;
/// callers pass edges that cross by construction.
///
/// # Errors
///
/// Returns `GeometryError::ZeroLengthSegment` if either segment has
/// coincident endpoints and `GeometryError::ParallelLines` if the lines are
/// parallel or coincident.
pub fn intersection_two_segments(
    seg1_start: Point2,
    seg1_end: Point2,
    seg2_start: Point2,
    seg2_end: Point2,
) -> Result<Point2> {
    if (seg1_end - seg1_start).norm() < TOLERANCE || (seg2_end - seg2_start).norm() < TOLERANCE {
        return Err(GeometryError::ZeroLengthSegment.into());
    }

    let (x1, y1) = (seg1_start.x, seg1_start.y);
    let (x2, y2) = (seg1_end.x, seg1_end.y);
    let (x3, y3) = (seg2_start.x, seg2_start.y);
    let (x4, y4) = (seg2_end.x, seg2_end.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < TOLERANCE {
        return Err(GeometryError::ParallelLines.into());
    }

    let a = x1 * y2 - y1 * x2;
    let b = x3 * y4 - y3 * x4;
    let x = (a * (x3 - x4) - (x1 - x2) * b) / denom;
    let y = (a * (y3 - y4) - (y1 - y2) * b) / denom;
    Ok(Point2::new(x, y))
}

/// Picks the candidate closest to `reference`.
///
/// Use this instead of taking the first element of a multi-solution
/// intersection result. Returns `None` for an empty slice.
#[must_use]
pub fn nearest_point(points: &[Point2], reference: Point2) -> Option<Point2> {
    points.iter().copied().min_by(|a, b| {
        let da = (a - reference).norm_squared();
        let db = (b - reference).norm_squared();
        da.total_cmp(&db)
    })
}
