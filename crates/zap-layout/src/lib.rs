pub mod api;
pub mod core;
pub mod components;
pub mod layout;
pub mod systems;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::LayoutConfig;
pub use api::error::{LayoutError, Result};
pub use api::types::{ContextChange, ContextTag, DisplayableId, SortingKey};
pub use components::displayable::{Displayable, Transform};
pub use crate::core::board::LayoutBoard;
pub use layout::{LayoutKind, ObjectLayout, TargetTransform};
pub use assets::manifest::{LayoutDescriptor, LayoutManifest};
pub use assets::registry::LayoutRegistry;
pub use systems::placement::{apply_placements, Placement};
pub use systems::debug::tick_debug_layouts;

pub use extensions::{
    Easing, lerp, ease, ease_vec3,
    Timeline, TimelineEntry, TweenChannel, TweenProperty,
    TweenState, Tween, TweenId, TweenTarget,
};
