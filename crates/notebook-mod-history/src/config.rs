/// Configuration for a `History` engine.
///
/// By default the undo stack grows without limit, matching a session whose
/// memory use is bounded only by document size times history depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max entries kept on the undo stack. `None` (or `Some(0)`) = unbounded.
    /// Oldest entries are evicted when the limit is exceeded.
    pub max_history_depth: Option<usize>,
}

impl HistoryConfig {
    /// A config with no depth limit.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A config that keeps at most `depth` undo entries.
    pub fn with_max_depth(depth: usize) -> Self {
        Self {
            max_history_depth: Some(depth),
        }
    }

    /// Returns the effective depth limit, treating zero as unbounded.
    pub fn depth_limit(&self) -> Option<usize> {
        self.max_history_depth.filter(|&depth| depth > 0)
    }
}
