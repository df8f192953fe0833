/// A `History` handle that can be shared across threads.
use std::sync::{Arc, Mutex, MutexGuard};

use crate::document::HistoryDocument;
use crate::error::HistoryError;
use crate::manager::History;

/// Cloneable handle to one `History` behind a single mutex.
///
/// Every operation holds the lock for its whole duration, so commits, undos
/// and redos from different threads never interleave.
pub struct SharedHistory<D: HistoryDocument> {
    inner: Arc<Mutex<History<D>>>,
}

impl<D: HistoryDocument> Clone for SharedHistory<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: HistoryDocument> std::fmt::Debug for SharedHistory<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedHistory")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish()
    }
}

impl<D: HistoryDocument> From<History<D>> for SharedHistory<D> {
    fn from(history: History<D>) -> Self {
        Self::new(history)
    }
}

impl<D: HistoryDocument> SharedHistory<D> {
    /// Wraps `history` in a shareable handle.
    pub fn new(history: History<D>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(history)),
        }
    }

    /// Locks the engine for a sequence of calls.
    ///
    /// # Errors
    ///
    /// Returns `Poisoned` if a previous holder panicked.
    pub fn lock(&self) -> Result<MutexGuard<'_, History<D>>, HistoryError<D::Error>> {
        self.inner.lock().map_err(|_| HistoryError::Poisoned)
    }

    /// See [`History::commit`].
    ///
    /// # Errors
    ///
    /// Returns `Poisoned` if the lock is poisoned.
    pub fn commit(&self, command: impl Into<String>) -> Result<(), HistoryError<D::Error>> {
        self.lock()?.commit(command);
        Ok(())
    }

    /// See [`History::execute`]. Runs under one lock.
    ///
    /// # Errors
    ///
    /// Returns `Poisoned` if the lock is poisoned.
    pub fn execute<R>(
        &self,
        command: impl Into<String>,
        f: impl FnOnce(&mut D) -> R,
    ) -> Result<R, HistoryError<D::Error>> {
        Ok(self.lock()?.execute(command, f))
    }

    /// See [`History::undo`].
    ///
    /// # Errors
    ///
    /// Returns the engine's undo errors, or `Poisoned`.
    pub fn undo(&self) -> Result<String, HistoryError<D::Error>> {
        self.lock()?.undo()
    }

    /// See [`History::redo`].
    ///
    /// # Errors
    ///
    /// Returns the engine's redo errors, or `Poisoned`.
    pub fn redo(&self) -> Result<String, HistoryError<D::Error>> {
        self.lock()?.redo()
    }

    /// Runs `f` with read access to the live document.
    ///
    /// # Errors
    ///
    /// Returns `Poisoned` if the lock is poisoned.
    pub fn read<R>(&self, f: impl FnOnce(&D) -> R) -> Result<R, HistoryError<D::Error>> {
        Ok(f(self.lock()?.document()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Counter {
        values: Vec<u64>,
    }

    impl HistoryDocument for Counter {
        type Item = u64;
        type Sort = ();
        type Error = std::fmt::Error;

        fn items(&self) -> &[u64] {
            &self.values
        }

        fn replace_items(&mut self, items: Vec<u64>) -> Result<(), Self::Error> {
            self.values = items;
            Ok(())
        }

        fn sort_condition(&self) {}

        fn set_sort_condition(&mut self, _sort: ()) {}

        fn items_have_same_state(a: &u64, b: &u64) -> bool {
            a == b
        }
    }

    #[test]
    fn test_clones_share_one_engine() {
        let shared = SharedHistory::new(History::<Counter>::default());
        let other = shared.clone();

        shared
            .execute("push", |doc| doc.values.push(1))
            .expect("execute");
        assert_eq!(other.read(|doc| doc.values.len()).expect("read"), 1);
        assert_eq!(other.undo().expect("undo"), "push");
        assert_eq!(shared.redo().expect("redo"), "push");
    }

    #[test]
    fn test_concurrent_commands_do_not_interleave() {
        let shared = SharedHistory::new(History::<Counter>::default());

        let handles: Vec<_> = (0..8u64)
            .map(|t| {
                let h = shared.clone();
                thread::spawn(move || {
                    for i in 0..50u64 {
                        h.execute(format!("push {t}-{i}"), |doc| doc.values.push(t * 100 + i))
                            .expect("execute");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("join");
        }

        let guard = shared.lock().expect("lock");
        assert_eq!(guard.document().values.len(), 400);
        assert_eq!(guard.undo_depth(), 400);
    }

    #[test]
    fn test_empty_history_errors_pass_through() {
        let shared = SharedHistory::new(History::<Counter>::default());
        assert!(matches!(shared.undo(), Err(HistoryError::NothingToUndo)));
        assert!(matches!(shared.redo(), Err(HistoryError::NothingToRedo)));
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let shared = SharedHistory::new(History::<Counter>::default());
        let other = shared.clone();
        let _ = thread::spawn(move || {
            let _guard = other.lock().expect("lock");
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(shared.commit("x"), Err(HistoryError::Poisoned)));
    }
}
