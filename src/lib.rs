pub mod dimensions;
pub mod error;
pub mod geometry;
pub mod math;
pub mod outline;

pub use dimensions::{PanelDimensions, PartDimensions};
pub use error::{GeometryError, HexwallError, OutlineError, Result};
pub use geometry::{Circle, LineSegment, Pline, PlineVertex};
pub use math::intersect_2d::{
    circle_line_segment_intersection, circle_line_segment_intersection_at,
    intersection_two_segments, is_point_on_line_segment, nearest_point,
};
pub use math::polar::polar_to_vector;
pub use outline::{Arm, ArmLayout, CornerKind, CornerLayout, CornerOutline, GlassPanel, SlotProfile};
