use std::collections::HashMap;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::error::Result;
use crate::api::types::{ContextTag, SortingKey};
use crate::layout::kind::LayoutKind;

/// Scene layout manifest: every zone of the battle screen and how it nests.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutManifest {
    /// Named layouts, e.g. "user_hand" or "enemy_battlefield".
    #[serde(default)]
    pub layouts: HashMap<String, LayoutDescriptor>,
}

/// Describes a single layout zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    /// Shape of the zone.
    pub kind: LayoutKind,
    /// Frame origin in world space (or a placeholder when nested).
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Context forwarded to objects placed in this zone.
    #[serde(default)]
    pub context: ContextTag,
    /// Name of the layout this one is nested in.
    #[serde(default)]
    pub parent: Option<String>,
    /// Order within the parent layout.
    #[serde(default)]
    pub sorting_key: SortingKey,
    #[serde(default)]
    pub debug_update_continuously: bool,
}

fn default_scale() -> f32 {
    1.0
}

impl LayoutManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
