use std::collections::HashMap;

use crate::api::config::LayoutConfig;
use crate::api::error::{LayoutError, Result};
use crate::api::types::{ContextChange, ContextTag, DisplayableId, SortingKey};
use crate::components::displayable::Displayable;
use crate::layout::object_layout::ObjectLayout;

/// Arena of displayables and the layouts that own them.
///
/// Ownership is a side-table (`child -> layout`) rather than a back-pointer
/// on the child, so layouts and members never reference each other directly.
/// A displayable has at most one owner; `add` moves it out of its previous
/// layout before inserting it into the new one.
pub struct LayoutBoard {
    pub(crate) displayables: HashMap<DisplayableId, Displayable>,
    layouts: HashMap<DisplayableId, ObjectLayout>,
    owners: HashMap<DisplayableId, DisplayableId>,
    context_changes: Vec<ContextChange>,
    pub(crate) config: LayoutConfig,
}

fn sorting_key(displayables: &HashMap<DisplayableId, Displayable>, id: DisplayableId) -> SortingKey {
    displayables.get(&id).map_or(0, |d| d.sorting_key)
}

impl LayoutBoard {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            displayables: HashMap::with_capacity(128),
            layouts: HashMap::new(),
            owners: HashMap::new(),
            context_changes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    // -- Registration --

    /// Register a displayable created by the game. Re-registering an id
    /// replaces its data but keeps its membership.
    pub fn spawn(&mut self, displayable: Displayable) {
        let id = displayable.id;
        self.displayables.insert(id, displayable);
        if let Some(owner) = self.owners.get(&id).copied() {
            self.resort(owner);
        }
    }

    /// Register a displayable that is itself a layout. Re-registering an
    /// existing layout replaces its kind, context and flags but keeps its members.
    pub fn spawn_layout(&mut self, displayable: Displayable, mut layout: ObjectLayout) {
        if let Some(previous) = self.layouts.remove(&displayable.id) {
            layout.take_members(previous);
        }
        self.layouts.insert(displayable.id, layout);
        self.spawn(displayable);
    }

    /// Unregister a displayable. It leaves its owning layout, and if it was a
    /// layout its members become unowned.
    pub fn despawn(&mut self, id: DisplayableId) -> Option<Displayable> {
        self.detach(id);
        if let Some(layout) = self.layouts.remove(&id) {
            for member in layout.objects() {
                self.owners.remove(member);
            }
        }
        self.displayables.remove(&id)
    }

    // -- Lookup --

    pub fn get(&self, id: DisplayableId) -> Option<&Displayable> {
        self.displayables.get(&id)
    }

    pub fn get_mut(&mut self, id: DisplayableId) -> Option<&mut Displayable> {
        self.displayables.get_mut(&id)
    }

    pub fn layout(&self, id: DisplayableId) -> Option<&ObjectLayout> {
        self.layouts.get(&id)
    }

    /// Mutable layout state. Membership can only change through `add`/`remove_if_present`.
    pub fn layout_mut(&mut self, id: DisplayableId) -> Option<&mut ObjectLayout> {
        self.layouts.get_mut(&id)
    }

    pub fn is_layout(&self, id: DisplayableId) -> bool {
        self.layouts.contains_key(&id)
    }

    /// Handles of every registered layout, in ascending id order.
    pub fn layout_ids(&self) -> Vec<DisplayableId> {
        let mut ids: Vec<DisplayableId> = self.layouts.keys().copied().collect();
        ids.sort();
        ids
    }

    /// The layout currently owning `id`, if any.
    pub fn owner(&self, id: DisplayableId) -> Option<DisplayableId> {
        self.owners.get(&id).copied()
    }

    /// Whether `ancestor` appears on the owner chain above `id`.
    pub fn has_ancestor(&self, id: DisplayableId, ancestor: DisplayableId) -> bool {
        let mut current = self.owner(id);
        while let Some(layout) = current {
            if layout == ancestor {
                return true;
            }
            current = self.owner(layout);
        }
        false
    }

    /// Members of `layout` in ascending sorting-key order.
    pub fn objects(&self, layout: DisplayableId) -> Result<&[DisplayableId]> {
        Ok(self.layout_state(layout)?.objects())
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Displayable> {
        self.displayables.values().find(|d| d.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.displayables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displayables.is_empty()
    }

    // -- Membership --

    /// Make `layout` the owner of `id`, moving it out of any previous layout.
    /// No-op if it is already a member.
    pub fn add(&mut self, layout: DisplayableId, id: DisplayableId) -> Result<()> {
        self.layout_state(layout)?;
        if !self.displayables.contains_key(&id) {
            return Err(LayoutError::InvalidArgument(id));
        }
        if self.owner(id) == Some(layout) {
            return Ok(());
        }
        if id == layout || self.has_ancestor(layout, id) {
            log::debug!("rejected add of {:?} to {:?}: ownership cycle", id, layout);
            return Err(LayoutError::CyclicOwnership { layout, child: id });
        }

        if let Some(previous) = self.detach(id) {
            log::debug!("moving {:?} from {:?} to {:?}", id, previous, layout);
        }

        self.owners.insert(id, layout);
        let displayables = &self.displayables;
        let Some(state) = self.layouts.get_mut(&layout) else {
            return Err(LayoutError::NotALayout(layout));
        };
        state.push_sorted(id, |k| sorting_key(displayables, k));
        let context = state.context;

        if let Some(displayable) = self.displayables.get_mut(&id) {
            if displayable.context != context {
                self.context_changes.push(ContextChange {
                    id,
                    old: displayable.context,
                    new: context,
                });
                displayable.context = context;
            }
        }
        Ok(())
    }

    /// `add` each displayable in iteration order.
    pub fn add_range(
        &mut self,
        layout: DisplayableId,
        ids: impl IntoIterator<Item = DisplayableId>,
    ) -> Result<()> {
        for id in ids {
            self.add(layout, id)?;
        }
        Ok(())
    }

    /// Remove `id` from `layout` if it is a member. Returns whether anything changed.
    pub fn remove_if_present(&mut self, layout: DisplayableId, id: DisplayableId) -> bool {
        if self.owner(id) != Some(layout) {
            return false;
        }
        self.owners.remove(&id);
        let displayables = &self.displayables;
        if let Some(state) = self.layouts.get_mut(&layout) {
            state.remove_sorted(id, |k| sorting_key(displayables, k));
        }
        true
    }

    /// Remove `id` from whichever layout owns it, returning that layout.
    /// Used when the player picks an object up and takes it out of layout control.
    pub fn detach(&mut self, id: DisplayableId) -> Option<DisplayableId> {
        let owner = self.owner(id)?;
        self.remove_if_present(owner, id);
        Some(owner)
    }

    /// Change a member's sorting key and re-sort its owner.
    pub fn set_sorting_key(&mut self, id: DisplayableId, key: SortingKey) -> Result<()> {
        let displayable = self
            .displayables
            .get_mut(&id)
            .ok_or(LayoutError::InvalidArgument(id))?;
        if displayable.sorting_key == key {
            return Ok(());
        }
        displayable.sorting_key = key;
        if let Some(owner) = self.owner(id) {
            self.resort(owner);
        }
        Ok(())
    }

    /// Change the context tag a layout forwards onto members it adopts from now on.
    pub fn set_layout_context(&mut self, layout: DisplayableId, context: ContextTag) -> Result<()> {
        self.layout_state(layout)?;
        if let Some(state) = self.layouts.get_mut(&layout) {
            state.context = context;
        }
        Ok(())
    }

    /// Context tag changes applied since the last drain.
    pub fn drain_context_changes(&mut self) -> impl Iterator<Item = ContextChange> + '_ {
        self.context_changes.drain(..)
    }

    fn resort(&mut self, layout: DisplayableId) {
        let displayables = &self.displayables;
        if let Some(state) = self.layouts.get_mut(&layout) {
            state.sort_by(|k| sorting_key(displayables, k));
        }
    }

    pub(crate) fn layout_state(&self, layout: DisplayableId) -> Result<&ObjectLayout> {
        if !self.displayables.contains_key(&layout) {
            return Err(LayoutError::InvalidArgument(layout));
        }
        self.layouts.get(&layout).ok_or(LayoutError::NotALayout(layout))
    }
}

impl Default for LayoutBoard {
    fn default() -> Self {
        Self::new()
    }
}
