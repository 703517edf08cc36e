use thiserror::Error;

use crate::api::types::DisplayableId;

/// Errors surfaced by layout membership and reconciliation calls.
///
/// All of these are caller mistakes; nothing here is transient or worth
/// retrying.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The handle does not name a displayable registered on the board.
    #[error("no displayable registered for {0:?}")]
    InvalidArgument(DisplayableId),

    /// A layout operation was invoked on a plain displayable.
    #[error("{0:?} is not an object layout")]
    NotALayout(DisplayableId),

    /// Adding `child` to `layout` would make a layout its own ancestor.
    #[error("adding {child:?} to {layout:?} would create an ownership cycle")]
    CyclicOwnership {
        layout: DisplayableId,
        child: DisplayableId,
    },

    /// A manifest referenced a layout name that was never declared.
    #[error("unknown layout: {0}")]
    UnknownLayout(String),

    /// Layout manifest or config JSON could not be parsed.
    #[error("invalid layout JSON: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
