use tracing::{debug, trace};

use crate::dimensions::PartDimensions;
use crate::error::{OutlineError, Result};
use crate::geometry::{Circle, Pline};
use crate::math::polar::normalize_degrees;
use crate::math::{round_point, Point2};

use super::slot::{shelf_notch, SlotProfile};
use super::{Arm, ArmLayout};

/// Direction of the first arm of every preset; it points straight down.
const FIRST_ARM_DEG: f64 = -90.0;

/// Gap tolerance in degrees below which two arms count as overlapping.
const ANGLE_TOLERANCE: f64 = 1e-9;

/// Slack allowed when checking an edge crossing against the edges'
/// bounding boxes; one step of the coordinate grid.
const JOIN_TOLERANCE: f64 = 0.01;

/// Builds the closed outline of a corner piece: arms radiating from a hub.
///
/// Every arm is a rectangle of `arm_width` from the hub to its end. Between
/// neighbouring arms the outline either follows a straight chord between
/// the points where both arms' edges meet the hub circle, or, when the
/// arms are so close that their edges cross outside the hub, runs through
/// that single crossing point.
#[derive(Debug, Clone)]
pub struct CornerOutline {
    hub_radius: f64,
    arm_width: f64,
    arms: Vec<Arm>,
}

/// How the outline gets from one arm to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Junction {
    /// The edges cross outside the hub.
    Crossing(Point2),
    /// Both edges are trimmed at the hub and joined by a chord.
    HubChord { forward: Point2, back: Point2 },
}

impl CornerOutline {
    /// Creates a new corner outline operation.
    #[must_use]
    pub fn new(hub_radius: f64, arm_width: f64, arms: Vec<Arm>) -> Self {
        Self {
            hub_radius,
            arm_width,
            arms,
        }
    }

    /// Executes the outline construction.
    ///
    /// The result is closed, line-only and counter-clockwise. Per arm it
    /// holds the back and forward end corners followed by the junction
    /// vertices towards the next arm.
    ///
    /// # Errors
    ///
    /// Returns `OutlineError::TooFewArms` for fewer than two arms,
    /// `OutlineError::InvalidDimension` for a non-positive arm width or
    /// arm length,
    /// `GeometryError::NonPositiveRadius` for a bad hub,
    /// `OutlineError::ArmMissesHub` if an arm is too wide for the hub and
    /// `OutlineError::EdgesDoNotMeet` if neighbouring arms overlap or cross
    /// beyond their ends.
    pub fn execute(&self) -> Result<Pline> {
        if self.arms.len() < 2 {
            return Err(OutlineError::TooFewArms {
                count: self.arms.len(),
            }
            .into());
        }
        if !(self.arm_width > 0.0 && self.arm_width.is_finite()) {
            return Err(OutlineError::InvalidDimension {
                name: "arm_width",
                value: self.arm_width,
            }
            .into());
        }
        if let Some(arm) = self
            .arms
            .iter()
            .find(|arm| !(arm.length > 0.0 && arm.length.is_finite()))
        {
            return Err(OutlineError::InvalidDimension {
                name: "arm_length",
                value: arm.length,
            }
            .into());
        }
        let hub = Circle::at_origin(self.hub_radius)?;

        let mut layouts: Vec<ArmLayout> =
            self.arms.iter().map(|arm| arm.layout(self.arm_width)).collect();
        layouts.sort_by(|a, b| a.arm.heading().total_cmp(&b.arm.heading()));

        let n = layouts.len();
        let mut points: Vec<Point2> = Vec::with_capacity(n * 4);
        for (i, layout) in layouts.iter().enumerate() {
            let next = &layouts[(i + 1) % n];
            push_distinct(&mut points, layout.end_back);
            push_distinct(&mut points, layout.end_forward);
            match junction(&hub, layout, next)? {
                Junction::Crossing(p) => push_distinct(&mut points, p),
                Junction::HubChord { forward, back } => {
                    push_distinct(&mut points, forward);
                    push_distinct(&mut points, back);
                }
            }
        }
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        debug!(
            arms = n,
            vertices = points.len(),
            hub_radius = self.hub_radius,
            "corner outline built"
        );
        Ok(Pline::from_points(&points, true))
    }
}

fn push_distinct(points: &mut Vec<Point2>, p: Point2) {
    if points.last() != Some(&p) {
        points.push(p);
    }
}

/// Joins the forward edge of `arm` to the back edge of `next`.
fn junction(hub: &Circle, arm: &ArmLayout, next: &ArmLayout) -> Result<Junction> {
    let gap = normalize_degrees(next.arm.heading() - arm.arm.heading());
    if gap < ANGLE_TOLERANCE {
        return Err(OutlineError::EdgesDoNotMeet {
            first_deg: arm.arm.angle_deg,
            second_deg: next.arm.angle_deg,
        }
        .into());
    }

    let forward_edge = arm.forward_edge();
    let back_edge = next.back_edge();

    // Edges of arms less than a half turn apart converge; they may cross
    // before they reach the hub.
    if gap < 180.0 - ANGLE_TOLERANCE {
        let crossing = forward_edge.line_intersection(&back_edge)?;
        if hub.is_outside(crossing) {
            let crossing = round_point(crossing);
            if !(forward_edge.bounds_contain_within(crossing, JOIN_TOLERANCE)
                && back_edge.bounds_contain_within(crossing, JOIN_TOLERANCE))
            {
                return Err(OutlineError::EdgesDoNotMeet {
                    first_deg: arm.arm.angle_deg,
                    second_deg: next.arm.angle_deg,
                }
                .into());
            }
            trace!(
                from = arm.arm.angle_deg,
                to = next.arm.angle_deg,
                gap,
                x = crossing.x,
                y = crossing.y,
                "edges cross outside the hub"
            );
            return Ok(Junction::Crossing(crossing));
        }
    }

    let forward = hub
        .trim_point(&forward_edge)?
        .ok_or(OutlineError::ArmMissesHub {
            angle_deg: arm.arm.angle_deg,
        })?;
    let back = hub
        .trim_point(&back_edge)?
        .ok_or(OutlineError::ArmMissesHub {
            angle_deg: next.arm.angle_deg,
        })?;
    trace!(
        from = arm.arm.angle_deg,
        to = next.arm.angle_deg,
        gap,
        "edges trimmed at the hub"
    );
    Ok(Junction::HubChord { forward, back })
}

/// The corner pieces of the wall display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerKind {
    /// Two arms 120 degrees apart, for the top of the hexagon.
    TwoWay,
    /// Three arms 120 degrees apart, the regular hexagon corner.
    ThreeWay,
    /// Three regular arms plus a long upward arm a mid shelf rests on.
    FourWayShelf,
    /// Three long arms over a disc that is glued to the wall.
    GlueBase,
}

impl CornerKind {
    /// Arms that carry a panel slot.
    #[must_use]
    pub fn slotted_arms(self, dims: &PartDimensions) -> Vec<Arm> {
        let (count, length) = match self {
            Self::TwoWay => (2, dims.arm_length),
            Self::ThreeWay | Self::FourWayShelf => (3, dims.arm_length),
            Self::GlueBase => (3, dims.glue_arm_length),
        };
        (0..count)
            .map(|i| Arm::new(FIRST_ARM_DEG + 120.0 * f64::from(i), length))
            .collect()
    }

    /// The long arm a shelf rests on, if this corner has one.
    #[must_use]
    pub fn shelf_arm(self, dims: &PartDimensions) -> Option<Arm> {
        match self {
            Self::FourWayShelf => Some(Arm::new(FIRST_ARM_DEG + 180.0, dims.shelf_arm_length)),
            _ => None,
        }
    }

    /// Every arm of the corner.
    #[must_use]
    pub fn arms(self, dims: &PartDimensions) -> Vec<Arm> {
        let mut arms = self.slotted_arms(dims);
        arms.extend(self.shelf_arm(dims));
        arms
    }

    /// Whether the bottom face carries a ridge against the glass panel.
    #[must_use]
    pub fn has_ridges(self) -> bool {
        !matches!(self, Self::GlueBase)
    }
}

/// All 2D profiles needed to model one corner piece.
#[derive(Debug, Clone)]
pub struct CornerLayout {
    pub kind: CornerKind,
    /// Outline of the padded body.
    pub outline: Pline,
    /// Pocket slots in the top face, one per slotted arm.
    pub pockets: Vec<Pline>,
    /// Ridges on the bottom face, one per slotted arm.
    pub ridges: Vec<Pline>,
    pub shelf_notch: Option<Pline>,
    pub glue_disc: Option<Circle>,
}

impl CornerLayout {
    /// Lays out every profile of `kind` with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns the first validation or outline error encountered.
    pub fn build(kind: CornerKind, dims: &PartDimensions) -> Result<Self> {
        dims.validate()?;

        let outline = CornerOutline::new(dims.hub_radius, dims.arm_width, kind.arms(dims)).execute()?;

        let slotted = kind.slotted_arms(dims);
        let pocket = SlotProfile::pocket(dims);
        let pockets = slotted
            .iter()
            .map(|arm| pocket.outline(arm))
            .collect::<Result<Vec<_>>>()?;

        let ridges = if kind.has_ridges() {
            let ridge = SlotProfile::ridge(dims);
            slotted
                .iter()
                .map(|arm| ridge.outline(arm))
                .collect::<Result<Vec<_>>>()?
        } else {
            Vec::new()
        };

        let shelf_notch = kind
            .shelf_arm(dims)
            .map(|arm| shelf_notch(&arm, dims.arm_width, dims.shelf_notch_length));

        let glue_disc = match kind {
            CornerKind::GlueBase => Some(Circle::at_origin(dims.glue_radius)?),
            _ => None,
        };

        debug!(
            ?kind,
            pockets = pockets.len(),
            ridges = ridges.len(),
            "corner layout built"
        );
        Ok(Self {
            kind,
            outline,
            pockets,
            ridges,
            shelf_notch,
            glue_disc,
        })
    }
}
