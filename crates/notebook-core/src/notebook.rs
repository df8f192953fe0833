/// The notebook document: unique notes plus a display sort condition.
use crate::error::NoteBookError;
use crate::note::Note;
use crate::note_list::UniqueNoteList;
use crate::sort::SortCondition;

/// The live, editable collection of notes.
///
/// Notes are stored in insertion order and never contain two notes with
/// the same title. The sort condition only changes how `sorted_notes`
/// presents them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBook {
    notes: UniqueNoteList,
    sort_condition: SortCondition,
}

impl NoteBook {
    /// Creates an empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty notebook that displays notes by `sort_condition`.
    pub fn with_sort_condition(sort_condition: SortCondition) -> Self {
        Self {
            notes: UniqueNoteList::new(),
            sort_condition,
        }
    }

    /// Notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        self.notes.as_slice()
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the notebook holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The note titled `title`, ignoring ASCII case.
    pub fn find(&self, title: &str) -> Option<&Note> {
        self.notes.get(title)
    }

    /// Adds a note.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNote` if a note with the same title exists.
    pub fn add_note(&mut self, note: Note) -> Result<(), NoteBookError> {
        self.notes.add(note)
    }

    /// Deletes the note titled `title` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if there is no such note.
    pub fn delete_note(&mut self, title: &str) -> Result<Note, NoteBookError> {
        self.notes.remove(title)
    }

    /// Replaces the body of the note titled `title`.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if there is no such note.
    pub fn edit_note(&mut self, title: &str, content: &str) -> Result<(), NoteBookError> {
        self.notes.update(title, |note| note.set_content(content))
    }

    /// Tags the note titled `title`. Returns false if it already had the tag.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if there is no such note.
    pub fn tag_note(&mut self, title: &str, tag: &str) -> Result<bool, NoteBookError> {
        self.notes.update(title, |note| note.add_tag(tag))
    }

    /// Removes a tag. Returns false if the note did not have it.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if there is no such note.
    pub fn untag_note(&mut self, title: &str, tag: &str) -> Result<bool, NoteBookError> {
        self.notes.update(title, |note| note.remove_tag(tag))
    }

    /// Replaces every note at once.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNote` if `notes` holds two notes with the same
    /// title. The notebook is unchanged in that case.
    pub fn set_notes(&mut self, notes: Vec<Note>) -> Result<(), NoteBookError> {
        self.notes.set_notes(notes)
    }

    /// Removes every note. The sort condition is kept.
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// The condition `sorted_notes` orders by.
    pub fn sort_condition(&self) -> SortCondition {
        self.sort_condition
    }

    /// Changes the display order. Stored order is untouched.
    pub fn set_sort_condition(&mut self, sort_condition: SortCondition) {
        self.sort_condition = sort_condition;
    }

    /// Notes ordered by the current sort condition.
    ///
    /// The sort is stable, so ties keep insertion order.
    pub fn sorted_notes(&self) -> Vec<&Note> {
        let mut notes: Vec<&Note> = self.notes.iter().collect();
        let cond = self.sort_condition;
        notes.sort_by(|a, b| cond.compare(a, b));
        notes
    }
}
