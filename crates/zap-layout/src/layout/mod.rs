pub mod equivalence;
pub mod kind;
pub mod object_layout;

pub use equivalence::{delta_angle, euler_delta, is_equivalent};
pub use kind::{LayoutKind, TargetTransform};
pub use object_layout::ObjectLayout;
