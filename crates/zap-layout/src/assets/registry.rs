use std::collections::HashMap;

use crate::api::error::{LayoutError, Result};
use crate::api::types::DisplayableId;
use crate::assets::manifest::LayoutManifest;
use crate::components::displayable::Displayable;
use crate::core::board::LayoutBoard;
use crate::layout::object_layout::ObjectLayout;

/// Name-to-handle lookup for the layouts declared in a `LayoutManifest`.
pub struct LayoutRegistry {
    layouts: HashMap<String, DisplayableId>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self {
            layouts: HashMap::new(),
        }
    }

    /// Spawn every layout of `manifest` onto `board` and nest the ones that
    /// name a parent. Handles come from `next_id`, in name order.
    ///
    /// Parent names are checked before anything is spawned.
    pub fn from_manifest(
        manifest: &LayoutManifest,
        board: &mut LayoutBoard,
        mut next_id: impl FnMut() -> DisplayableId,
    ) -> Result<Self> {
        for desc in manifest.layouts.values() {
            if let Some(parent) = &desc.parent {
                if !manifest.layouts.contains_key(parent) {
                    return Err(LayoutError::UnknownLayout(parent.clone()));
                }
            }
        }

        let mut names: Vec<&String> = manifest.layouts.keys().collect();
        names.sort();

        let mut layouts = HashMap::with_capacity(names.len());
        for name in &names {
            let desc = &manifest.layouts[*name];
            let id = next_id();
            let displayable = Displayable::new(id)
                .with_tag(name.as_str())
                .with_sorting_key(desc.sorting_key)
                .with_position(desc.position)
                .with_rotation(desc.rotation)
                .with_default_scale(desc.scale);
            let mut layout = ObjectLayout::new(desc.kind.clone()).with_context(desc.context);
            layout.debug_update_continuously = desc.debug_update_continuously;
            board.spawn_layout(displayable, layout);
            layouts.insert((*name).clone(), id);
        }

        for name in &names {
            if let Some(parent) = &manifest.layouts[*name].parent {
                let parent_id = layouts[parent];
                board.add(parent_id, layouts[*name])?;
            }
        }

        log::debug!("registered {} layouts from manifest", layouts.len());
        Ok(Self { layouts })
    }

    /// Look up a layout by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<DisplayableId> {
        self.layouts.get(name).copied()
    }

    /// Look up a layout by name, failing with `UnknownLayout`.
    pub fn require(&self, name: &str) -> Result<DisplayableId> {
        self.get(name)
            .ok_or_else(|| LayoutError::UnknownLayout(name.to_string()))
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const JSON: &str = r#"{
        "layouts": {
            "battlefield": {
                "kind": { "type": "row", "spacing": [2.0, 0.0, 0.0] },
                "position": [0.0, 0.0, 4.0],
                "context": 2
            },
            "deck": {
                "kind": { "type": "stack", "step": [0.0, 0.1, 0.0] },
                "parent": "battlefield",
                "sorting_key": 5
            },
            "hand": {
                "kind": { "type": "fan", "radius": 12.0, "per_item_degrees": 4.0, "max_arc_degrees": 30.0 },
                "position": [0.0, -2.0, -6.0],
                "scale": 1.5
            }
        }
    }"#;

    fn counter() -> impl FnMut() -> DisplayableId {
        let mut next = 100;
        move || {
            next += 1;
            DisplayableId(next)
        }
    }

    #[test]
    fn builds_layouts_in_name_order() {
        let manifest = LayoutManifest::from_json(JSON).unwrap();
        let mut board = LayoutBoard::new();
        let reg = LayoutRegistry::from_manifest(&manifest, &mut board, counter()).unwrap();

        let battlefield = reg.get("battlefield").unwrap();
        let deck = reg.get("deck").unwrap();
        let hand = reg.get("hand").unwrap();
        assert_eq!((battlefield, deck, hand), (DisplayableId(101), DisplayableId(102), DisplayableId(103)));

        assert_eq!(board.owner(deck), Some(battlefield));
        assert_eq!(board.owner(hand), None);
        assert_eq!(board.get(hand).unwrap().default_scale, 1.5);
        assert_eq!(board.find_by_tag("deck").unwrap().id, deck);
        // Nested layouts adopt the parent's context.
        assert_eq!(board.get(deck).unwrap().context.0, 2);
    }

    #[test]
    fn nested_layout_is_placed_by_parent() {
        let manifest = LayoutManifest::from_json(JSON).unwrap();
        let mut board = LayoutBoard::new();
        let reg = LayoutRegistry::from_manifest(&manifest, &mut board, counter()).unwrap();
        let battlefield = reg.require("battlefield").unwrap();
        board.apply_layout(battlefield, None).unwrap();
        let deck = reg.require("deck").unwrap();
        assert_eq!(board.get(deck).unwrap().position(), Vec3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn missing_parent_fails_before_spawning() {
        let json = r#"{ "layouts": { "void": { "kind": { "type": "stack", "step": [0, 0, 0] }, "parent": "nowhere" } } }"#;
        let manifest = LayoutManifest::from_json(json).unwrap();
        let mut board = LayoutBoard::new();
        let err = LayoutRegistry::from_manifest(&manifest, &mut board, counter()).err();
        assert!(matches!(err, Some(LayoutError::UnknownLayout(name)) if name == "nowhere"));
        assert!(board.is_empty());
        assert!(LayoutRegistry::new().require("void").is_err());
    }
}
