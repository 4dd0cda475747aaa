use super::Point2;

/// Shoelace area of a closed point ring; the last point joins the first.
///
/// Positive for a counter-clockwise ring. Fewer than three points have no area.
#[must_use]
pub fn signed_area_2d(ring: &[Point2]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let twice: f64 = ring
        .iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice / 2.0
}
