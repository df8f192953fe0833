/// The command-dispatch loop state for one editing session.
use anyhow::Result;
use notebook_core::history::HistoryConfig;
use notebook_core::{Note, NoteBook, NoteBookError, NoteBookHistory};

use crate::command::{Command, HELP};

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the output (if any) and read the next line.
    Continue(Option<String>),
    Exit,
}

/// One editing session: owns the notebook's history engine.
#[derive(Debug)]
pub struct Session {
    history: NoteBookHistory,
}

impl Session {
    pub fn new(notebook: NoteBook, config: HistoryConfig) -> Self {
        Self {
            history: NoteBookHistory::new(notebook, config),
        }
    }

    pub fn history(&self) -> &NoteBookHistory {
        &self.history
    }

    /// Parses and runs one input line.
    ///
    /// Blank lines and `#` comments are ignored.
    ///
    /// # Errors
    ///
    /// Returns parse errors and notebook errors for the caller to report.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue(None));
        }

        let command = Command::parse(line)?;
        if command == Command::Exit {
            return Ok(Flow::Exit);
        }
        self.run(command, line).map(|out| Flow::Continue(Some(out)))
    }

    fn run(&mut self, command: Command, line: &str) -> Result<String> {
        let output = match command {
            Command::Add { title, content } => self.record(line, |book| {
                let message = format!("Added note: {title}");
                book.add_note(Note::new(title, content))?;
                Ok(message)
            })?,
            Command::Edit { title, content } => self.record(line, |book| {
                book.edit_note(&title, &content)?;
                Ok(format!("Edited note: {title}"))
            })?,
            Command::Delete { title } => self.record(line, |book| {
                let removed = book.delete_note(&title)?;
                Ok(format!("Deleted note: {}", removed.title()))
            })?,
            Command::Tag { title, tag } => self.record(line, |book| {
                Ok(if book.tag_note(&title, &tag)? {
                    format!("Tagged {title} with {tag}")
                } else {
                    format!("{title} is already tagged {tag}")
                })
            })?,
            Command::Untag { title, tag } => self.record(line, |book| {
                Ok(if book.untag_note(&title, &tag)? {
                    format!("Removed tag {tag} from {title}")
                } else {
                    format!("{title} is not tagged {tag}")
                })
            })?,
            Command::Sort(cond) => self.record(line, |book| {
                book.set_sort_condition(cond);
                Ok(format!("Sorted by {cond}"))
            })?,
            Command::Clear => self.record(line, |book| {
                book.clear();
                Ok("Cleared notebook.".to_string())
            })?,
            Command::List => list_notes(self.history.document()),
            Command::Find { title } => match self.history.document().find(&title) {
                Some(note) => note.to_string(),
                None => format!("No note titled '{title}'"),
            },
            Command::Undo => match self.history.undo() {
                Ok(label) => format!("Undid: {label}"),
                Err(e) if e.is_empty_history() => "Nothing to undo.".to_string(),
                Err(e) => return Err(e.into()),
            },
            Command::Redo => match self.history.redo() {
                Ok(label) => format!("Redid: {label}"),
                Err(e) if e.is_empty_history() => "Nothing to redo.".to_string(),
                Err(e) => return Err(e.into()),
            },
            Command::History => self.describe_history(),
            Command::Help => HELP.to_string(),
            Command::Exit => String::new(),
        };
        Ok(output)
    }

    /// Runs a notebook edit labelled with the line as typed. Edits that fail
    /// or change nothing leave no undo step.
    fn record(
        &mut self,
        line: &str,
        edit: impl FnOnce(&mut NoteBook) -> Result<String, NoteBookError>,
    ) -> Result<String> {
        Ok(self.history.execute(line, edit)?)
    }

    fn describe_history(&self) -> String {
        let mut out = String::from("Undo:");
        push_labels(&mut out, self.history.undo_labels());
        out.push_str("\nRedo:");
        push_labels(&mut out, self.history.redo_labels());
        out
    }
}

fn push_labels<'a>(out: &mut String, labels: impl Iterator<Item = &'a str>) {
    let mut any = false;
    for (i, label) in labels.enumerate() {
        out.push_str(&format!("\n  {}. {label}", i + 1));
        any = true;
    }
    if !any {
        out.push_str("\n  (none)");
    }
}

fn list_notes(book: &NoteBook) -> String {
    if book.is_empty() {
        return "No notes.".to_string();
    }
    book.sorted_notes()
        .iter()
        .enumerate()
        .map(|(i, note)| format!("{}. {note}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
