pub mod error;
pub mod history;
pub mod note;
pub mod note_list;
pub mod notebook;
pub mod sort;

pub use error::NoteBookError;
pub use history::NoteBookHistory;
pub use note::Note;
pub use note_list::UniqueNoteList;
pub use notebook::NoteBook;
pub use sort::{ParseSortConditionError, SortCondition};
