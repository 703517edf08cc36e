use crate::api::types::{ContextTag, DisplayableId, SortingKey};
use crate::layout::kind::LayoutKind;

/// Layout state attached to a displayable that acts as a container.
///
/// Holds the ordered member handles; the members themselves live on the
/// `LayoutBoard`. Mutated only through the board's membership operations so
/// the owner side-table stays in sync.
#[derive(Debug, Clone)]
pub struct ObjectLayout {
    kind: LayoutKind,
    objects: Vec<DisplayableId>,
    /// Context tag forwarded onto members when they are added.
    pub context: ContextTag,
    /// Re-apply this layout immediately on every debug tick.
    pub debug_update_continuously: bool,
}

impl ObjectLayout {
    pub fn new(kind: LayoutKind) -> Self {
        Self {
            kind,
            objects: Vec::new(),
            context: ContextTag::default(),
            debug_update_continuously: false,
        }
    }

    pub fn with_context(mut self, context: ContextTag) -> Self {
        self.context = context;
        self
    }

    pub fn kind(&self) -> &LayoutKind {
        &self.kind
    }

    pub fn set_kind(&mut self, kind: LayoutKind) {
        self.kind = kind;
    }

    /// Members in ascending sorting-key order.
    pub fn objects(&self) -> &[DisplayableId] {
        &self.objects
    }

    pub fn contains(&self, id: DisplayableId) -> bool {
        self.objects.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Append and re-sort. Returns false if `id` was already a member.
    pub(crate) fn push_sorted(
        &mut self,
        id: DisplayableId,
        key_of: impl Fn(DisplayableId) -> SortingKey,
    ) -> bool {
        if self.contains(id) {
            return false;
        }
        self.objects.push(id);
        self.sort_by(key_of);
        true
    }

    /// Remove and re-sort. Returns false if `id` was not a member.
    pub(crate) fn remove_sorted(
        &mut self,
        id: DisplayableId,
        key_of: impl Fn(DisplayableId) -> SortingKey,
    ) -> bool {
        let Some(idx) = self.objects.iter().position(|&o| o == id) else {
            return false;
        };
        self.objects.remove(idx);
        self.sort_by(key_of);
        true
    }

    /// Carry over the member sequence of the layout this one replaces.
    pub(crate) fn take_members(&mut self, previous: ObjectLayout) {
        self.objects = previous.objects;
    }

    /// Stable sort: members with equal keys keep their insertion order.
    pub(crate) fn sort_by(&mut self, key_of: impl Fn(DisplayableId) -> SortingKey) {
        self.objects.sort_by_key(|&id| key_of(id));
    }
}
