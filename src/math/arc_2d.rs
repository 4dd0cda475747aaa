//! Circular arcs encoded as polyline bulges.
//!
//! `bulge = tan(sweep / 4)`: zero is a straight segment, positive sweeps
//! counter-clockwise, and `|bulge| = 1` is a half circle.

use std::f64::consts::PI;

use super::{Point2, Vector2};

/// An arc in centre/radius/angle form, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulgeArc {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl BulgeArc {
    /// Recovers the arc running from `from` to `to` with the given bulge.
    ///
    /// `None` for a straight segment or coincident endpoints.
    #[must_use]
    pub fn from_bulge(from: Point2, to: Point2, bulge: f64) -> Option<Self> {
        let chord = to - from;
        let half_chord = chord.norm() / 2.0;
        if half_chord < 1e-12 || bulge.abs() < 1e-12 {
            return None;
        }

        // Apex offset of the centre from the chord midpoint, along the
        // chord's left normal, in half-chord units.
        let apex = (1.0 - bulge * bulge) / (2.0 * bulge);
        let left = Vector2::new(-chord.y, chord.x) / (2.0 * half_chord);
        let center = from + chord / 2.0 + left * (apex * half_chord);

        let radius = half_chord * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
        let start = from - center;
        Some(Self {
            center,
            radius,
            start_angle: start.y.atan2(start.x),
            sweep: 4.0 * bulge.atan(),
        })
    }

    /// Point at parameter `t` in `[0, 1]` along the arc.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + self.sweep * t;
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Number of chords that keep within `tolerance` of the arc.
    #[must_use]
    pub fn chord_count(&self, tolerance: f64) -> u32 {
        let sweep = self.sweep.abs();
        if sweep < 1e-12 || tolerance <= 0.0 {
            return 1;
        }
        // Sagitta of one chord: r * (1 - cos(step / 2)).
        let step = if tolerance >= self.radius {
            PI
        } else {
            2.0 * (1.0 - tolerance / self.radius).acos()
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (sweep / step).ceil() as u32;
        n.max(1)
    }
}

/// Bulge of an arc sweeping `sweep` radians.
#[must_use]
pub fn bulge_from_sweep(sweep: f64) -> f64 {
    (sweep / 4.0).tan()
}
