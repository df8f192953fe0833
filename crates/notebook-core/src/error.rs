/// Errors raised by notebook operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteBookError {
    /// A note with the same title already exists.
    #[error("a note titled '{0}' already exists")]
    DuplicateNote(String),
    /// No note has the given title.
    #[error("no note titled '{0}'")]
    NoteNotFound(String),
}
