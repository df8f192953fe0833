/// A single note: title, body text, tags, and creation time.
use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};

/// A note stored in a `NoteBook`.
///
/// Two notes are the *same note* when their titles match ignoring ASCII
/// case (see [`Note::is_same_note`]). Full equality, used when comparing
/// history snapshots, covers every field (see [`Note::has_same_state`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    title: String,
    content: String,
    tags: BTreeSet<String>,
    created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: BTreeSet::new(),
            created_at: Utc::now(),
        }
    }

    /// Replaces the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Adds tags to the note.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// The note's title, which is also its identity.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The body text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Tags in sorted order.
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// When the note was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the body text.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Adds a tag. Returns false if it was already present.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        self.tags.insert(tag.into())
    }

    /// Removes a tag. Returns false if it was not present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    /// Identity predicate: whether `other` is the same note for uniqueness.
    pub fn is_same_note(&self, other: &Note) -> bool {
        self.has_title(&other.title)
    }

    /// Whether this note's title matches `title`, ignoring ASCII case.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.eq_ignore_ascii_case(title)
    }

    /// Full-state equality: every field matches.
    pub fn has_same_state(&self, other: &Note) -> bool {
        self == other
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
            write!(f, " [{}]", tags.join(", "))?;
        }
        if !self.content.is_empty() {
            write!(f, ": {}", self.content)?;
        }
        Ok(())
    }
}
