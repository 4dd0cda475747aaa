pub mod arc_2d;
pub mod intersect_2d;
pub mod polar;
pub mod polygon_2d;

/// 2D point type, millimetres.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type, millimetres.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Decimal places kept on every coordinate the kit hands out.
///
/// Sketch construction downstream is sensitive to floating noise, so
/// derived points are snapped to a 0.01 mm grid.
pub const COORD_DECIMALS: i32 = 2;

/// Rounds `value` to `decimals` decimal places, half away from zero.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    // Normalize -0.0 so that printed coordinates stay clean.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Rounds both coordinates of a point to [`COORD_DECIMALS`].
#[must_use]
pub fn round_point(p: Point2) -> Point2 {
    Point2::new(round_to(p.x, COORD_DECIMALS), round_to(p.y, COORD_DECIMALS))
}
