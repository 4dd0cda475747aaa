mod arm;
mod corner;
mod panel;
mod slot;

pub use arm::{Arm, ArmLayout};
pub use corner::{CornerKind, CornerLayout, CornerOutline};
pub use panel::GlassPanel;
pub use slot::{shelf_notch, SlotProfile};
