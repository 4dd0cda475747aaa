use super::{round_to, Vector2, COORD_DECIMALS};

/// Converts a polar offset to a Cartesian displacement.
///
/// `angle_degrees` is measured counter-clockwise from +X. Both components
/// are rounded to [`COORD_DECIMALS`] places, so the result is stable
/// enough to be summed with other offsets and handed to a sketch as-is.
#[must_use]
pub fn polar_to_vector(radius: f64, angle_degrees: f64) -> Vector2 {
    let angle = angle_degrees.to_radians();
    Vector2::new(
        round_to(radius * angle.cos(), COORD_DECIMALS),
        round_to(radius * angle.sin(), COORD_DECIMALS),
    )
}

/// Offset of `distance` perpendicular to the direction `angle_degrees`,
/// on its counter-clockwise side.
#[must_use]
pub fn perpendicular_offset(distance: f64, angle_degrees: f64) -> Vector2 {
    polar_to_vector(distance, angle_degrees + 90.0)
}

/// Normalizes an angle in degrees to `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle_degrees: f64) -> f64 {
    let a = angle_degrees.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}
