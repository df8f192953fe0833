// Re-exports from notebook-mod-history and the NoteBook document bridge.
// Lets the history engine version a NoteBook without knowing about notes.
pub use notebook_mod_history::{
    History, HistoryConfig, HistoryDocument, HistoryEntry, HistoryError, SharedHistory, Snapshot,
};

use crate::error::NoteBookError;
use crate::note::Note;
use crate::notebook::NoteBook;
use crate::sort::SortCondition;

/// The undo/redo engine for a notebook session.
pub type NoteBookHistory = History<NoteBook>;

impl HistoryDocument for NoteBook {
    type Item = Note;
    type Sort = SortCondition;
    type Error = NoteBookError;

    fn items(&self) -> &[Note] {
        self.notes()
    }

    fn replace_items(&mut self, items: Vec<Note>) -> Result<(), NoteBookError> {
        self.set_notes(items)
    }

    fn sort_condition(&self) -> SortCondition {
        NoteBook::sort_condition(self)
    }

    fn set_sort_condition(&mut self, sort: SortCondition) {
        NoteBook::set_sort_condition(self, sort);
    }

    fn items_have_same_state(a: &Note, b: &Note) -> bool {
        a.has_same_state(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_matches_notebook() {
        let mut book = NoteBook::new();
        book.add_note(Note::new("a", "1")).unwrap();
        let snap = Snapshot::capture(&book);
        assert!(snap.matches(&book));

        book.edit_note("a", "2").unwrap();
        assert!(!snap.matches(&book));
    }

    #[test]
    fn test_replace_items_rejects_duplicates() {
        let mut book = NoteBook::new();
        let result = HistoryDocument::replace_items(
            &mut book,
            vec![Note::new("A", ""), Note::new("a", "")],
        );
        assert_eq!(result, Err(NoteBookError::DuplicateNote("a".to_string())));
        assert!(book.is_empty());
    }

    #[test]
    fn test_engine_undoes_sort_change() {
        let mut history = NoteBookHistory::default();
        history.execute("sort title", |book| {
            book.set_sort_condition(SortCondition::Title)
        });
        assert_eq!(history.undo().unwrap(), "sort title");
        assert_eq!(history.document().sort_condition(), SortCondition::Insertion);
    }
}
