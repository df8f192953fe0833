/// Snapshot and history entry types.
use crate::document::HistoryDocument;

/// An immutable copy of a document's items and sort condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<I, S> {
    items: Vec<I>,
    sort_condition: S,
}

impl<I, S> Snapshot<I, S> {
    /// Creates a snapshot from its parts.
    pub fn new(items: Vec<I>, sort_condition: S) -> Self {
        Self {
            items,
            sort_condition,
        }
    }

    /// Captures the current state of `document`.
    pub fn capture<D>(document: &D) -> Self
    where
        D: HistoryDocument<Item = I, Sort = S>,
    {
        Self::new(document.snapshot_items(), document.sort_condition())
    }

    /// Items held by this snapshot.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Sort condition held by this snapshot.
    pub fn sort_condition(&self) -> &S {
        &self.sort_condition
    }

    /// Whether this snapshot holds the same state as `document`.
    ///
    /// Items are compared pairwise in order with the document's full-value
    /// equality, never its identity predicate.
    pub fn matches<D>(&self, document: &D) -> bool
    where
        D: HistoryDocument<Item = I, Sort = S>,
        S: PartialEq,
    {
        let live = document.items();
        self.sort_condition == document.sort_condition()
            && self.items.len() == live.len()
            && self
                .items
                .iter()
                .zip(live)
                .all(|(stored, current)| D::items_have_same_state(stored, current))
    }

    /// Splits the snapshot into its items and sort condition.
    pub fn into_parts(self) -> (Vec<I>, S) {
        (self.items, self.sort_condition)
    }
}

/// One step of history: a snapshot and the command label attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry<I, S> {
    /// The stored document state.
    pub snapshot: Snapshot<I, S>,
    /// The command reported when this entry is undone or redone.
    pub command: String,
}

impl<I, S> HistoryEntry<I, S> {
    /// Pairs a snapshot with the label of the command it was recorded for.
    pub fn new(snapshot: Snapshot<I, S>, command: String) -> Self {
        Self { snapshot, command }
    }
}
