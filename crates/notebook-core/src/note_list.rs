/// Insertion-ordered list of notes with unique titles.
use crate::error::NoteBookError;
use crate::note::Note;

/// A list of notes in which no two are the same note.
///
/// Uniqueness is decided by [`Note::is_same_note`]. Iteration follows
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueNoteList {
    notes: Vec<Note>,
}

impl UniqueNoteList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `notes`, rejecting duplicates.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNote` naming the first repeated title.
    pub fn from_notes(notes: Vec<Note>) -> Result<Self, NoteBookError> {
        let mut list = Self::new();
        list.set_notes(notes)?;
        Ok(list)
    }

    /// Whether a note equivalent to `note` is present.
    pub fn contains(&self, note: &Note) -> bool {
        self.notes.iter().any(|n| n.is_same_note(note))
    }

    /// Index of the note titled `title`.
    pub fn position(&self, title: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.has_title(title))
    }

    /// The note titled `title`, ignoring ASCII case.
    pub fn get(&self, title: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.has_title(title))
    }

    /// Appends a note.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNote` if an equivalent note is present.
    pub fn add(&mut self, note: Note) -> Result<(), NoteBookError> {
        if self.contains(&note) {
            return Err(NoteBookError::DuplicateNote(note.title().to_string()));
        }
        self.notes.push(note);
        Ok(())
    }

    /// Removes and returns the note titled `title`.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if no note has that title.
    pub fn remove(&mut self, title: &str) -> Result<Note, NoteBookError> {
        let index = self
            .position(title)
            .ok_or_else(|| NoteBookError::NoteNotFound(title.to_string()))?;
        Ok(self.notes.remove(index))
    }

    /// Replaces the note titled `title` with `edited`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if `title` is absent, or `DuplicateNote` if
    /// `edited` clashes with a different note.
    pub fn set_note(&mut self, title: &str, edited: Note) -> Result<(), NoteBookError> {
        let index = self
            .position(title)
            .ok_or_else(|| NoteBookError::NoteNotFound(title.to_string()))?;
        let clash = self
            .notes
            .iter()
            .enumerate()
            .any(|(i, n)| i != index && n.is_same_note(&edited));
        if clash {
            return Err(NoteBookError::DuplicateNote(edited.title().to_string()));
        }
        self.notes[index] = edited;
        Ok(())
    }

    /// Applies `f` to the note titled `title` in place.
    ///
    /// The title itself cannot change through this path, so uniqueness holds.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if no note has that title.
    pub fn update<R>(
        &mut self,
        title: &str,
        f: impl FnOnce(&mut Note) -> R,
    ) -> Result<R, NoteBookError> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.has_title(title))
            .ok_or_else(|| NoteBookError::NoteNotFound(title.to_string()))?;
        Ok(f(note))
    }

    /// Replaces every note at once.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNote` if `notes` holds two equivalent notes. The
    /// list is unchanged in that case.
    pub fn set_notes(&mut self, notes: Vec<Note>) -> Result<(), NoteBookError> {
        if let Some(duplicate) = first_duplicate(&notes) {
            return Err(NoteBookError::DuplicateNote(duplicate.title().to_string()));
        }
        self.notes = notes;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Notes in insertion order.
    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<'a> IntoIterator for &'a UniqueNoteList {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The first note that repeats an earlier one, if any.
fn first_duplicate(notes: &[Note]) -> Option<&Note> {
    notes
        .iter()
        .enumerate()
        .find(|(i, note)| notes[..*i].iter().any(|earlier| earlier.is_same_note(note)))
        .map(|(_, note)| note)
}
