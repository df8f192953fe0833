/// Linear undo/redo history over whole-document snapshots.
///
/// Provides a `History` engine that owns a live document, records a snapshot
/// of it each time a command is committed, and swaps stored snapshots back in
/// on undo and redo. There is a single redo branch: committing after an undo
/// discards it. History lives in memory for the duration of a session only.
pub mod config;
pub mod document;
pub mod error;
pub mod manager;
pub mod shared;
pub mod snapshot;

pub use config::HistoryConfig;
pub use document::HistoryDocument;
pub use error::HistoryError;
pub use manager::History;
pub use shared::SharedHistory;
pub use snapshot::{HistoryEntry, Snapshot};
