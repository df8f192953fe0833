/// Sort conditions for displaying notes.
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::note::Note;

/// How notes are ordered for display.
///
/// The stored insertion order is never changed; a sort condition only
/// affects `NoteBook::sorted_notes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortCondition {
    /// Keep insertion order.
    #[default]
    Insertion,
    /// Title, case-insensitive ascending.
    Title,
    /// Oldest first.
    CreatedAt,
    /// Newest first.
    CreatedAtDesc,
}

impl SortCondition {
    pub const ALL: [SortCondition; 4] = [
        SortCondition::Insertion,
        SortCondition::Title,
        SortCondition::CreatedAt,
        SortCondition::CreatedAtDesc,
    ];

    /// The name used in config files and commands.
    pub fn name(self) -> &'static str {
        match self {
            SortCondition::Insertion => "insertion",
            SortCondition::Title => "title",
            SortCondition::CreatedAt => "created",
            SortCondition::CreatedAtDesc => "created-desc",
        }
    }

    /// Compares two notes under this condition.
    pub fn compare(self, a: &Note, b: &Note) -> Ordering {
        match self {
            SortCondition::Insertion => Ordering::Equal,
            SortCondition::Title => a
                .title()
                .to_ascii_lowercase()
                .cmp(&b.title().to_ascii_lowercase()),
            SortCondition::CreatedAt => a.created_at().cmp(&b.created_at()),
            SortCondition::CreatedAtDesc => b.created_at().cmp(&a.created_at()),
        }
    }
}

impl fmt::Display for SortCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a sort condition name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort condition '{0}' (expected one of: insertion, title, created, created-desc)")]
pub struct ParseSortConditionError(pub String);

impl FromStr for SortCondition {
    type Err = ParseSortConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|cond| cond.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSortConditionError(wanted.to_string()))
    }
}
