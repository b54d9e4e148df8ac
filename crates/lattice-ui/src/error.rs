use thiserror::Error;

use lattice_core::backend::BackendError;

use crate::tree::NodeId;

/// Failures surfaced by the per-frame tree walk and by tree construction.
///
/// Configuration errors (`EmptySlot`, `SlotOutOfRange`, `RowOutOfRange`)
/// indicate a malformed tree built at startup and fail fast. Backend errors
/// are host failures for this frame; the frame loop decides whether to skip
/// or terminate.
#[derive(Debug, Error)]
pub enum UiError {
    /// A container was rendered while one of its slots was never populated.
    #[error("container `{container}` rendered with empty slot {slot}")]
    EmptySlot { container: String, slot: usize },

    /// `set_widget` addressed a slot beyond the container's capacity.
    #[error("slot {slot} out of range for `{container}` (capacity {capacity})")]
    SlotOutOfRange {
        container: String,
        slot: usize,
        capacity: usize,
    },

    /// `set_widget` addressed a row beyond the grid's current row count.
    #[error("row {row} out of range for grid `{grid}` ({rows} rows)")]
    RowOutOfRange { grid: String, row: usize, rows: usize },

    /// `Scene::render` was called before a root was installed.
    #[error("no root node set")]
    MissingRoot,

    /// The id does not name a live arena node (stale id, or the node is
    /// currently being rendered by an ancestor).
    #[error("node {0:?} is not in the tree")]
    UnknownNode(NodeId),

    /// A required backend primitive failed; fatal for this frame.
    #[error(transparent)]
    Backend(#[from] BackendError),
}
