use tracing::debug;

use crate::dimensions::PanelDimensions;
use crate::error::{OutlineError, Result};
use crate::geometry::{Circle, Pline, PlineVertex};
use crate::math::arc_2d::bulge_from_sweep;
use crate::math::polar::polar_to_vector;
use crate::math::Point2;

/// Corner arcs of the panel as `(corner index, start, end)` in degrees.
///
/// Corner `i` sits at `60 * i` degrees. The two top corners only get
/// half an arc: the top edge is lowered to make room for the lid.
const CORNER_ARCS: [(u8, f64, f64); 6] = [
    (0, -30.0, 30.0),
    (1, 30.0, 60.0),
    (2, 120.0, 150.0),
    (3, 150.0, 210.0),
    (4, 210.0, 270.0),
    (5, 270.0, 330.0),
];

/// Index in [`CORNER_ARCS`] of the arc the top edge starts from.
const TOP_RIGHT_ARC: usize = 1;

/// The plexiglass panel covering one hexagon: rounded corners, a lowered
/// top edge with a hinge notch, and three screw holes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassPanel {
    dims: PanelDimensions,
}

impl GlassPanel {
    #[must_use]
    pub fn new(dims: PanelDimensions) -> Self {
        Self { dims }
    }

    #[must_use]
    pub fn dimensions(&self) -> &PanelDimensions {
        &self.dims
    }

    fn corner_center(&self, index: u8) -> Point2 {
        Point2::origin()
            + polar_to_vector(self.dims.corner_center_radius(), 60.0 * f64::from(index))
    }

    fn arc_point(&self, index: u8, angle_deg: f64) -> Point2 {
        self.corner_center(index) + polar_to_vector(self.dims.corner_radius, angle_deg)
    }

    /// Height of the lowered top edge.
    #[must_use]
    pub fn top_edge_y(&self) -> f64 {
        let (index, _, end) = CORNER_ARCS[TOP_RIGHT_ARC];
        self.arc_point(index, end).y
    }

    /// Closed, counter-clockwise outline of the panel.
    ///
    /// # Errors
    ///
    /// Returns `OutlineError::InvalidDimension` for invalid dimensions or a
    /// hinge notch wider than the top edge.
    pub fn outline(&self) -> Result<Pline> {
        self.dims.validate()?;

        let (index, _, end) = CORNER_ARCS[TOP_RIGHT_ARC];
        let top_right = self.arc_point(index, end);
        let half_hinge = self.dims.hinge_width / 2.0;
        if half_hinge >= top_right.x {
            return Err(OutlineError::InvalidDimension {
                name: "hinge_width",
                value: self.dims.hinge_width,
            }
            .into());
        }

        let mut vertices = Vec::with_capacity(CORNER_ARCS.len() * 2 + 4);
        for (i, &(index, start, end)) in CORNER_ARCS.iter().enumerate() {
            let bulge = bulge_from_sweep((end - start).to_radians());
            vertices.push(PlineVertex::arc(self.arc_point(index, start), bulge));
            let arc_end = self.arc_point(index, end);
            vertices.push(PlineVertex::line(arc_end.x, arc_end.y));

            if i == TOP_RIGHT_ARC {
                let top = arc_end.y;
                let notch = top - self.dims.hinge_depth;
                vertices.extend([
                    PlineVertex::line(half_hinge, top),
                    PlineVertex::line(half_hinge, notch),
                    PlineVertex::line(-half_hinge, notch),
                    PlineVertex::line(-half_hinge, top),
                ]);
            }
        }

        debug!(vertices = vertices.len(), "glass panel outline built");
        Ok(Pline {
            vertices,
            closed: true,
        })
    }

    /// Screw holes: two beside the hinge, one at the bottom.
    ///
    /// # Errors
    ///
    /// Returns `OutlineError::InvalidDimension` for invalid dimensions.
    pub fn holes(&self) -> Result<Vec<Circle>> {
        self.dims.validate()?;
        let top = self.top_edge_y();
        let inset = self.dims.hole_inset;
        let half_dist = self.dims.hinge_hole_distance / 2.0;
        let r = self.dims.hole_radius;
        Ok(vec![
            Circle::new(Point2::new(half_dist, top - inset), r)?,
            Circle::new(Point2::new(-half_dist, top - inset), r)?,
            Circle::new(Point2::new(0.0, -top + inset), r)?,
        ])
    }
}

impl Default for GlassPanel {
    fn default() -> Self {
        Self::new(PanelDimensions::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HexwallError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn top_edge_height() {
        let panel = GlassPanel::default();
        // 166 * sin(60), on the 0.01 grid.
        assert_abs_diff_eq!(panel.top_edge_y(), 143.76, epsilon = 1e-9);
    }

    #[test]
    fn outline_shape() {
        let outline = GlassPanel::default().outline().unwrap();
        assert!(outline.closed);
        assert_eq!(outline.vertices.len(), 16);
        assert_eq!(outline.arc_count(), 6);
        assert!(outline.signed_area(0.01) > 0.0);
    }

    #[test]
    fn arcs_have_corner_radius() {
        let outline = GlassPanel::default().outline().unwrap();
        let arcs: Vec<_> = (0..outline.segment_count())
            .filter_map(|i| outline.arc_at(i))
            .collect();
        assert_eq!(arcs.len(), 6);
        for arc in arcs {
            assert_abs_diff_eq!(arc.radius, 20.0, epsilon = 0.1);
            assert!(arc.sweep > 0.0);
        }
    }

    #[test]
    fn hinge_notch() {
        let points = GlassPanel::default().outline().unwrap().points();
        let near = |x: f64, y: f64| {
            points
                .iter()
                .any(|p| (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9)
        };
        assert!(near(32.0, 143.76));
        assert!(near(-32.0, 143.76));
        assert!(near(32.0, 138.76));
        assert!(near(-32.0, 138.76));
        let down: Vec<_> = points
            .iter()
            .filter(|p| (p.y - 138.76).abs() < 1e-9)
            .collect();
        assert_eq!(down.len(), 2);
    }

    #[test]
    fn outline_stays_within_outer_radius() {
        let pts = GlassPanel::default().outline().unwrap().to_points(0.01);
        for p in pts {
            assert!(p.coords.norm() <= 166.0 + 0.05, "{p:?}");
        }
    }

    #[test]
    fn bottom_edge_is_not_lowered() {
        let pts = GlassPanel::default().outline().unwrap().points();
        let lowest = pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        assert_abs_diff_eq!(lowest, -146.44, epsilon = 1e-9);
    }

    #[test]
    fn holes() {
        let holes = GlassPanel::default().holes().unwrap();
        assert_eq!(holes.len(), 3);
        for h in &holes {
            assert_abs_diff_eq!(h.radius(), 1.5);
        }
        assert_abs_diff_eq!(holes[0].center().x, 10.0);
        assert_abs_diff_eq!(holes[0].center().y, 133.76, epsilon = 1e-9);
        assert_abs_diff_eq!(holes[1].center().x, -10.0);
        assert_abs_diff_eq!(holes[2].center().y, -133.76, epsilon = 1e-9);
    }

    #[test]
    fn hinge_too_wide() {
        let panel = GlassPanel::new(PanelDimensions {
            hinge_width: 200.0,
            ..PanelDimensions::default()
        });
        let err = panel.outline().unwrap_err();
        assert!(matches!(
            err,
            HexwallError::Outline(OutlineError::InvalidDimension { name: "hinge_width", .. })
        ));
    }

    #[test]
    fn notch_through_panel_is_rejected() {
        let panel = GlassPanel::new(PanelDimensions {
            hinge_depth: 290.0,
            ..PanelDimensions::default()
        });
        assert!(panel.outline().is_err());
        let panel = GlassPanel::new(PanelDimensions {
            hole_inset: 280.0,
            ..PanelDimensions::default()
        });
        assert!(panel.holes().is_err());
    }

    #[test]
    fn invalid_hole_radius() {
        let panel = GlassPanel::new(PanelDimensions {
            hole_radius: 0.0,
            ..PanelDimensions::default()
        });
        assert!(panel.holes().is_err());
    }
}
