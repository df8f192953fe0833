/// Core undo/redo engine over whole-document snapshots.
///
/// The engine owns the live document. A command handler either runs through
/// `execute` or calls `commit` with the command's label before mutating the
/// document, so the undo stack always holds the state a command started from. `undo` and `redo` swap the
/// live state with the stored snapshot on top of the respective stack.
use crate::config::HistoryConfig;
use crate::document::HistoryDocument;
use crate::error::HistoryError;
use crate::snapshot::{HistoryEntry, Snapshot};

type Entry<D> = HistoryEntry<<D as HistoryDocument>::Item, <D as HistoryDocument>::Sort>;
type DocSnapshot<D> = Snapshot<<D as HistoryDocument>::Item, <D as HistoryDocument>::Sort>;

/// Manages linear undo/redo history for a single document.
pub struct History<D: HistoryDocument> {
    /// The single live document.
    document: D,
    /// Undo stack, most recent entry last.
    undo_stack: Vec<Entry<D>>,
    /// Redo stack, most recently undone entry last.
    redo_stack: Vec<Entry<D>>,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl<D: HistoryDocument> std::fmt::Debug for History<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("items", &self.document.items().len())
            .field("undo_len", &self.undo_stack.len())
            .field("redo_len", &self.redo_stack.len())
            .field("config", &self.config)
            .finish()
    }
}

impl<D: HistoryDocument + Default> Default for History<D> {
    fn default() -> Self {
        Self::new(D::default(), HistoryConfig::default())
    }
}

impl<D: HistoryDocument> History<D> {
    /// Creates an engine with empty history, taking ownership of `document`.
    pub fn new(document: D, config: HistoryConfig) -> Self {
        Self {
            document,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            config,
        }
    }

    /// Returns the live document.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Returns the live document for in-place mutation.
    ///
    /// Changes made here are not recorded until the next `commit`.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Consumes the engine and returns the live document.
    pub fn into_document(self) -> D {
        self.document
    }

    /// Returns the configuration.
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Records the current state under `command`.
    ///
    /// Nothing is pushed when the state equals the snapshot already on top
    /// of the undo stack. The redo stack is always cleared.
    pub fn commit(&mut self, command: impl Into<String>) {
        let command = command.into();

        let unchanged = self
            .undo_stack
            .last()
            .is_some_and(|top| top.snapshot.matches(&self.document));

        if unchanged {
            tracing::trace!("State unchanged since last commit, not recording '{command}'");
        } else {
            tracing::debug!("Committing '{command}'");
            self.undo_stack
                .push(HistoryEntry::new(Snapshot::capture(&self.document), command));
            self.enforce_depth();
        }

        if !self.redo_stack.is_empty() {
            tracing::debug!("Discarding {} redo entries", self.redo_stack.len());
            self.redo_stack.clear();
        }
    }

    /// Applies `f` to the live document and records it as `command` only if
    /// the document changed.
    ///
    /// The recorded snapshot is the state the command started from, exactly
    /// as a `commit` made just before `f` would have stored it. When `f`
    /// leaves the document as it was (a rejected or no-op command, whatever
    /// it returns) nothing is pushed and the redo stack is kept.
    pub fn execute<R>(&mut self, command: impl Into<String>, f: impl FnOnce(&mut D) -> R) -> R {
        let before = Snapshot::capture(&self.document);
        let top_is_current = self
            .undo_stack
            .last()
            .is_some_and(|top| top.snapshot.matches(&self.document));

        let result = f(&mut self.document);

        let command: String = command.into();
        if before.matches(&self.document) {
            tracing::trace!("'{command}' left the document unchanged, not recording");
            return result;
        }

        if top_is_current {
            tracing::trace!("Start state of '{command}' already on top of the undo stack");
        } else {
            tracing::debug!("Committing '{command}'");
            self.undo_stack.push(HistoryEntry::new(before, command));
            self.enforce_depth();
        }
        if !self.redo_stack.is_empty() {
            tracing::debug!("Discarding {} redo entries", self.redo_stack.len());
            self.redo_stack.clear();
        }
        result
    }

    /// Restores the most recent differing snapshot from the undo stack.
    ///
    /// Entries on top of the stack that already equal the live state are
    /// dropped first. Returns the label of the undone command.
    ///
    /// # Errors
    ///
    /// Returns `NothingToUndo` if no differing entry exists (any stale
    /// entries are dropped), or `Restore` if the document rejects the
    /// snapshot, in which case document and both stacks are unchanged.
    pub fn undo(&mut self) -> Result<String, HistoryError<D::Error>> {
        let target = self
            .undo_stack
            .iter()
            .rposition(|entry| !entry.snapshot.matches(&self.document));

        let Some(index) = target else {
            if !self.undo_stack.is_empty() {
                tracing::trace!(
                    "Dropping {} stale undo entries, nothing left to undo",
                    self.undo_stack.len()
                );
                self.undo_stack.clear();
            }
            return Err(HistoryError::NothingToUndo);
        };

        let current = Snapshot::capture(&self.document);
        let target = self.undo_stack[index].snapshot.clone();
        self.restore(target)?;

        let stale = self.undo_stack.len() - index - 1;
        if stale > 0 {
            tracing::trace!("Skipped {stale} stale undo entries");
        }
        self.undo_stack.truncate(index + 1);

        let Some(entry) = self.undo_stack.pop() else {
            return Err(HistoryError::NothingToUndo);
        };
        tracing::debug!("Undid '{}'", entry.command);
        self.redo_stack
            .push(HistoryEntry::new(current, entry.command.clone()));
        Ok(entry.command)
    }

    /// Restores the snapshot on top of the redo stack.
    ///
    /// Returns the label of the redone command.
    ///
    /// # Errors
    ///
    /// Returns `NothingToRedo` if the redo stack is empty, or `Restore` if the
    /// document rejects the snapshot, in which case document and both stacks
    /// are unchanged.
    pub fn redo(&mut self) -> Result<String, HistoryError<D::Error>> {
        let Some(top) = self.redo_stack.last() else {
            return Err(HistoryError::NothingToRedo);
        };

        let target = top.snapshot.clone();
        let current = Snapshot::capture(&self.document);
        self.restore(target)?;

        let Some(entry) = self.redo_stack.pop() else {
            return Err(HistoryError::NothingToRedo);
        };
        tracing::debug!("Redid '{}'", entry.command);
        self.undo_stack
            .push(HistoryEntry::new(current, entry.command.clone()));
        self.enforce_depth();
        Ok(entry.command)
    }

    /// Whether an undo entry exists.
    ///
    /// The entry may still be stale, in which case `undo` reports
    /// `NothingToUndo` after dropping it.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of entries on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of entries on the redo stack.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Labels on the undo stack, most recent first.
    pub fn undo_labels(&self) -> impl Iterator<Item = &str> {
        self.undo_stack.iter().rev().map(|e| e.command.as_str())
    }

    /// Labels on the redo stack, next to be redone first.
    pub fn redo_labels(&self) -> impl Iterator<Item = &str> {
        self.redo_stack.iter().rev().map(|e| e.command.as_str())
    }

    /// Discards all history. The live document is untouched.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Writes `snapshot` into the live document.
    ///
    /// Items are replaced first: it is the only fallible step, so a
    /// rejection leaves the document as it was.
    fn restore(&mut self, snapshot: DocSnapshot<D>) -> Result<(), HistoryError<D::Error>> {
        let (items, sort) = snapshot.into_parts();
        if let Err(e) = self.document.replace_items(items) {
            tracing::warn!("Stored snapshot rejected by document: {e}");
            return Err(HistoryError::Restore(e));
        }
        self.document.set_sort_condition(sort);
        Ok(())
    }

    /// Evicts the oldest undo entries beyond the configured depth.
    fn enforce_depth(&mut self) {
        let Some(max) = self.config.depth_limit() else {
            return;
        };
        if self.undo_stack.len() > max {
            let excess = self.undo_stack.len() - max;
            self.undo_stack.drain(..excess);
            tracing::debug!("Evicted {excess} oldest undo entries (limit {max})");
        }
    }
}
