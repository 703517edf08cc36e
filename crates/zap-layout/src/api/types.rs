use serde::{Deserialize, Serialize};

/// Handle to a displayable registered on a `LayoutBoard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DisplayableId(pub u32);

/// Ordering key of a member within its layout. Not required to be unique.
pub type SortingKey = i64;

/// Opaque interaction context forwarded from a layout onto its members.
/// The layout engine never interprets the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextTag(pub u32);

/// A context tag change recorded when a layout adopts a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextChange {
    pub id: DisplayableId,
    pub old: ContextTag,
    pub new: ContextTag,
}
