pub mod circle;
pub mod pline;
pub mod segment;

pub use circle::Circle;
pub use pline::{Pline, PlineVertex};
pub use segment::LineSegment;
