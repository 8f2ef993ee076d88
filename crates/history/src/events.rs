//! Notifications queued by [`CommandHistory`](crate::CommandHistory) for its owner.

/// Something a UI may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    /// The stacks changed: undo/redo labels, enablement and previews need refreshing.
    Changed,
    /// An undo or redo brought the document back to its last saved state.
    SavePointReached,
}
