use glam::Vec3;

use crate::api::types::{ContextTag, DisplayableId, SortingKey};

/// Current transform of a displayable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in world space.
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

/// A positionable, animatable visual object: a card, a zone, a UI panel.
///
/// Displayables are created by the game and handed to a `LayoutBoard`; which
/// layout owns one is tracked by the board, not by the displayable.
#[derive(Debug, Clone)]
pub struct Displayable {
    /// Unique identifier.
    pub id: DisplayableId,
    /// String tag for finding displayables by name.
    pub tag: String,
    /// Order within the owning layout, ascending.
    pub sorting_key: SortingKey,
    /// Scale used when the owning layout does not specify one.
    pub default_scale: f32,
    pub transform: Transform,
    /// Interaction context, copied from the owning layout on add.
    pub context: ContextTag,
}

impl Displayable {
    /// Create a new displayable with the given ID at the origin.
    pub fn new(id: DisplayableId) -> Self {
        Self {
            id,
            tag: String::new(),
            sorting_key: 0,
            default_scale: 1.0,
            transform: Transform::default(),
            context: ContextTag::default(),
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_sorting_key(mut self, key: SortingKey) -> Self {
        self.sorting_key = key;
        self
    }

    pub fn with_default_scale(mut self, scale: f32) -> Self {
        self.default_scale = scale;
        self.transform.scale = scale;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn with_context(mut self, context: ContextTag) -> Self {
        self.context = context;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }
}
