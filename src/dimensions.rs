//! Named part dimensions shared by every outline.
//!
//! All lengths are millimetres. The defaults are the values the printed
//! wall display is built with.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{OutlineError, Result};

/// Dimensions of the corner connectors.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartDimensions {
    /// Radius of the hub circle every arm is trimmed against.
    pub hub_radius: f64,
    /// Length of a standard arm, hub centre to end.
    pub arm_length: f64,
    /// Width of every arm.
    pub arm_width: f64,
    /// Width of the slot that takes a side panel.
    pub hole_width: f64,
    /// How far a pocket slot runs past the arm end.
    pub slot_overshoot: f64,
    /// Length of the long arm a shelf rests on (four-way corner).
    pub shelf_arm_length: f64,
    /// Length of the shelf-rest notch cut into the long arm.
    pub shelf_notch_length: f64,
    /// Arm length of the glue-base corner.
    pub glue_arm_length: f64,
    /// Radius of the disc glued to the wall under a glue-base corner.
    pub glue_radius: f64,
}

impl Default for PartDimensions {
    fn default() -> Self {
        Self {
            hub_radius: 5.0,
            arm_length: 20.0,
            arm_width: 6.0,
            hole_width: 2.0,
            slot_overshoot: 0.1,
            shelf_arm_length: 42.0,
            shelf_notch_length: 10.0,
            glue_arm_length: 40.0,
            glue_radius: 12.0,
        }
    }
}

impl PartDimensions {
    /// Wall thickness left on each side of a slot.
    #[must_use]
    pub fn cover_width(&self) -> f64 {
        self.arm_width / 2.0 - self.hole_width / 2.0
    }

    /// Checks that every dimension can produce a valid outline.
    ///
    /// # Errors
    ///
    /// Returns `OutlineError::InvalidDimension` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("hub_radius", self.hub_radius),
            ("arm_length", self.arm_length),
            ("arm_width", self.arm_width),
            ("hole_width", self.hole_width),
            ("shelf_arm_length", self.shelf_arm_length),
            ("shelf_notch_length", self.shelf_notch_length),
            ("glue_arm_length", self.glue_arm_length),
            ("glue_radius", self.glue_radius),
        ];
        for (name, value) in positive {
            ensure_positive(name, value)?;
        }
        if !(self.slot_overshoot >= 0.0 && self.slot_overshoot.is_finite()) {
            return Err(invalid("slot_overshoot", self.slot_overshoot));
        }
        if self.cover_width() < 0.0 {
            return Err(invalid("hole_width", self.hole_width));
        }
        if self.arm_width >= 2.0 * self.hub_radius {
            return Err(invalid("arm_width", self.arm_width));
        }
        if self.arm_length <= self.hub_radius {
            return Err(invalid("arm_length", self.arm_length));
        }
        if self.shelf_notch_length >= self.shelf_arm_length - self.hub_radius {
            return Err(invalid("shelf_notch_length", self.shelf_notch_length));
        }
        Ok(())
    }
}

/// Dimensions of the plexiglass panel that covers one hexagon.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelDimensions {
    /// Centre-to-vertex radius of the unrounded hexagon.
    pub outer_radius: f64,
    /// Radius of the six rounded corners.
    pub corner_radius: f64,
    /// Width of the hinge notch in the top edge.
    pub hinge_width: f64,
    /// Depth of the hinge notch.
    pub hinge_depth: f64,
    /// Radius of the screw holes.
    pub hole_radius: f64,
    /// Distance between the two hinge screw holes.
    pub hinge_hole_distance: f64,
    /// Distance of the screw holes from the top and bottom edges.
    pub hole_inset: f64,
}

impl Default for PanelDimensions {
    fn default() -> Self {
        Self {
            outer_radius: 166.0,
            corner_radius: 20.0,
            hinge_width: 64.0,
            hinge_depth: 5.0,
            hole_radius: 1.5,
            hinge_hole_distance: 20.0,
            hole_inset: 10.0,
        }
    }
}

impl PanelDimensions {
    /// Radius of the hexagon through the corner arc centres.
    #[must_use]
    pub fn corner_center_radius(&self) -> f64 {
        self.outer_radius - self.corner_radius
    }

    /// Checks that every dimension can produce a valid panel.
    ///
    /// # Errors
    ///
    /// Returns `OutlineError::InvalidDimension` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("outer_radius", self.outer_radius),
            ("corner_radius", self.corner_radius),
            ("hinge_width", self.hinge_width),
            ("hinge_depth", self.hinge_depth),
            ("hole_radius", self.hole_radius),
            ("hinge_hole_distance", self.hinge_hole_distance),
            ("hole_inset", self.hole_inset),
        ];
        for (name, value) in positive {
            ensure_positive(name, value)?;
        }
        if self.corner_radius >= self.outer_radius {
            return Err(invalid("corner_radius", self.corner_radius));
        }
        // Notch and holes stay clear of the panel centre.
        let reach = self.corner_center_radius();
        if self.hinge_depth >= reach {
            return Err(invalid("hinge_depth", self.hinge_depth));
        }
        if self.hole_inset <= self.hole_radius || self.hole_inset + self.hole_radius >= reach {
            return Err(invalid("hole_inset", self.hole_inset));
        }
        Ok(())
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, value))
    }
}

fn invalid(name: &'static str, value: f64) -> crate::error::HexwallError {
    OutlineError::InvalidDimension { name, value }.into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HexwallError;

    #[test]
    fn defaults_are_valid() {
        PartDimensions::default().validate().unwrap();
        PanelDimensions::default().validate().unwrap();
    }

    #[test]
    fn cover_width_default() {
        assert!((PartDimensions::default().cover_width() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn hole_wider_than_arm() {
        let dims = PartDimensions {
            hole_width: 7.0,
            ..PartDimensions::default()
        };
        let err = dims.validate().unwrap_err();
        assert!(matches!(
            err,
            HexwallError::Outline(OutlineError::InvalidDimension { name: "hole_width", .. })
        ));
    }

    #[test]
    fn arm_as_wide_as_hub() {
        let dims = PartDimensions {
            arm_width: 10.0,
            hole_width: 2.0,
            ..PartDimensions::default()
        };
        assert!(dims.validate().is_err());
    }

    #[test]
    fn negative_overshoot() {
        let dims = PartDimensions {
            slot_overshoot: -0.1,
            ..PartDimensions::default()
        };
        assert!(dims.validate().is_err());
    }

    #[test]
    fn zero_overshoot_is_allowed() {
        let dims = PartDimensions {
            slot_overshoot: 0.0,
            ..PartDimensions::default()
        };
        dims.validate().unwrap();
    }

    #[test]
    fn nan_dimension() {
        let dims = PartDimensions {
            hub_radius: f64::NAN,
            ..PartDimensions::default()
        };
        assert!(dims.validate().is_err());
    }

    #[test]
    fn panel_corner_radius_too_large() {
        let dims = PanelDimensions {
            corner_radius: 200.0,
            ..PanelDimensions::default()
        };
        assert!(dims.validate().is_err());
    }

    #[test]
    fn panel_notch_deeper_than_panel() {
        let dims = PanelDimensions {
            hinge_depth: 300.0,
            ..PanelDimensions::default()
        };
        let err = dims.validate().unwrap_err();
        assert!(matches!(
            err,
            HexwallError::Outline(OutlineError::InvalidDimension { name: "hinge_depth", .. })
        ));
    }

    #[test]
    fn panel_holes_outside_panel() {
        for inset in [1.0, 150.0] {
            let dims = PanelDimensions {
                hole_inset: inset,
                ..PanelDimensions::default()
            };
            let err = dims.validate().unwrap_err();
            assert!(matches!(
                err,
                HexwallError::Outline(OutlineError::InvalidDimension { name: "hole_inset", .. })
            ));
        }
    }

    #[test]
    fn panel_corner_center_radius() {
        assert!((PanelDimensions::default().corner_center_radius() - 146.0).abs() < 1e-12);
    }
}
