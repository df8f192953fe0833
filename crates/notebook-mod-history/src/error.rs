/// Failure of an undo, redo, or shared-engine operation.
///
/// `E` is the document's own error type, surfaced when a stored snapshot
/// is rejected on restore.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError<E> {
    /// The undo stack is empty, or holds only entries identical to the
    /// live state.
    #[error("nothing to undo")]
    NothingToUndo,
    /// The redo stack is empty.
    #[error("nothing to redo")]
    NothingToRedo,
    /// The document refused the stored snapshot. History and document
    /// are left as they were before the call.
    #[error("failed to restore snapshot: {0}")]
    Restore(#[source] E),
    /// Another holder of a shared engine panicked while holding the lock.
    #[error("history lock poisoned")]
    Poisoned,
}

impl<E> HistoryError<E> {
    /// Whether this error only reports that there was nothing to step over.
    pub fn is_empty_history(&self) -> bool {
        matches!(self, Self::NothingToUndo | Self::NothingToRedo)
    }
}
