use crate::dimensions::PartDimensions;
use crate::error::{OutlineError, Result};
use crate::geometry::Pline;
use crate::math::polar::{perpendicular_offset, polar_to_vector};
use crate::math::Point2;

use super::Arm;

/// Rectangular slot cut along an arm to take the edge of a side panel.
///
/// The slot is centred on the arm, `hole_width` wide, and runs from the
/// hub boundary to the arm end plus `overshoot`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotProfile {
    hub_radius: f64,
    arm_width: f64,
    hole_width: f64,
    overshoot: f64,
}

impl SlotProfile {
    #[must_use]
    pub fn new(hub_radius: f64, arm_width: f64, hole_width: f64, overshoot: f64) -> Self {
        Self {
            hub_radius,
            arm_width,
            hole_width,
            overshoot,
        }
    }

    /// Pocket in the top face; overshoots the arm end so it cuts cleanly through.
    #[must_use]
    pub fn pocket(dims: &PartDimensions) -> Self {
        Self::new(dims.hub_radius, dims.arm_width, dims.hole_width, dims.slot_overshoot)
    }

    /// Ridge on the bottom face that sits against the glass panel.
    #[must_use]
    pub fn ridge(dims: &PartDimensions) -> Self {
        Self::new(dims.hub_radius, dims.arm_width, dims.hole_width, 0.0)
    }

    /// Closed, counter-clockwise outline of the slot on `arm`.
    ///
    /// # Errors
    ///
    /// Returns `OutlineError::InvalidDimension` if the hole is wider than
    /// the arm or a width is not positive.
    pub fn outline(&self, arm: &Arm) -> Result<Pline> {
        if !(self.hole_width > 0.0 && self.hole_width.is_finite()) {
            return Err(OutlineError::InvalidDimension {
                name: "hole_width",
                value: self.hole_width,
            }
            .into());
        }
        let cover = self.arm_width / 2.0 - self.hole_width / 2.0;
        if cover.is_nan() || cover < 0.0 {
            return Err(OutlineError::InvalidDimension {
                name: "arm_width",
                value: self.arm_width,
            }
            .into());
        }

        let layout = arm.layout(self.arm_width);
        let phi = arm.angle_deg;
        let cover_off = perpendicular_offset(cover, phi);
        let run_out = polar_to_vector(self.overshoot, phi);
        let hole_half = perpendicular_offset(self.hole_width / 2.0, phi);
        let hub_edge = Point2::origin() + polar_to_vector(self.hub_radius, phi);

        let points = [
            layout.end_back + cover_off + run_out,
            layout.end_forward - cover_off + run_out,
            hub_edge + hole_half,
            hub_edge - hole_half,
        ];
        Ok(Pline::from_points(&points, true))
    }
}

/// Notch on the forward half of `arm`'s end where a shelf rests.
///
/// Half the arm wide and `notch_length` deep, measured inwards from the end.
#[must_use]
pub fn shelf_notch(arm: &Arm, arm_width: f64, notch_length: f64) -> Pline {
    let layout = arm.layout(arm_width);
    let depth = polar_to_vector(notch_length, arm.angle_deg);
    let points = [
        layout.mid,
        layout.end_forward,
        layout.end_forward - depth,
        layout.mid - depth,
    ];
    Pline::from_points(&points, true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HexwallError;
    use approx::assert_abs_diff_eq;

    fn assert_points(actual: &[Point2], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len());
        for (a, (x, y)) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(a.x, *x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, *y, epsilon = 1e-9);
        }
    }

    #[test]
    fn pocket_on_horizontal_arm() {
        let dims = PartDimensions::default();
        let slot = SlotProfile::pocket(&dims).outline(&Arm::new(0.0, 20.0)).unwrap();
        assert!(slot.closed);
        assert_points(
            &slot.points(),
            &[(20.1, -1.0), (20.1, 1.0), (5.0, 1.0), (5.0, -1.0)],
        );
        assert!(slot.signed_area(0.01) > 0.0);
    }

    #[test]
    fn ridge_stops_at_arm_end() {
        let dims = PartDimensions::default();
        let slot = SlotProfile::ridge(&dims).outline(&Arm::new(0.0, 20.0)).unwrap();
        assert_points(
            &slot.points(),
            &[(20.0, -1.0), (20.0, 1.0), (5.0, 1.0), (5.0, -1.0)],
        );
    }

    #[test]
    fn pocket_on_downward_arm() {
        let dims = PartDimensions::default();
        let slot = SlotProfile::pocket(&dims).outline(&Arm::new(-90.0, 20.0)).unwrap();
        assert_points(
            &slot.points(),
            &[(-1.0, -20.1), (1.0, -20.1), (1.0, -5.0), (-1.0, -5.0)],
        );
        assert!(slot.signed_area(0.01) > 0.0);
    }

    #[test]
    fn slot_area_matches_size() {
        let dims = PartDimensions::default();
        let slot = SlotProfile::pocket(&dims).outline(&Arm::new(30.0, 20.0)).unwrap();
        // 2 wide, 15.1 long, within the rounding grid.
        assert_abs_diff_eq!(slot.signed_area(0.01), 30.2, epsilon = 0.3);
    }

    #[test]
    fn hole_wider_than_arm() {
        let slot = SlotProfile::new(5.0, 6.0, 8.0, 0.1);
        let err = slot.outline(&Arm::new(0.0, 20.0)).unwrap_err();
        assert!(matches!(
            err,
            HexwallError::Outline(OutlineError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn notch_on_upward_arm() {
        let notch = shelf_notch(&Arm::new(90.0, 42.0), 6.0, 10.0);
        assert_points(
            &notch.points(),
            &[(0.0, 42.0), (-3.0, 42.0), (-3.0, 32.0), (0.0, 32.0)],
        );
        assert!(notch.signed_area(0.01) > 0.0);
    }
}
