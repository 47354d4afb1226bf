//! Snapshot history with undo/redo

use chrono::{DateTime, Utc};
use quill_core::HistoryConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One stored copy of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Document content at this point in history
    pub content: String,

    /// When this snapshot was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Snapshot {
    fn new(content: String) -> Self {
        Self {
            content,
            recorded_at: Utc::now(),
        }
    }
}

/// Undo/redo availability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryStatus {
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Linear undo/redo history
///
/// Invariants:
/// - there is always at least one snapshot (the initial text)
/// - `index` always points at a snapshot
/// - the snapshot at `index` is what the host currently displays
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Snapshot>,
    index: usize,
    limit: Option<usize>,
}

impl History {
    /// Create an unbounded history whose only entry is `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_config(initial, &HistoryConfig::default())
    }

    /// Create a history with the given settings
    pub fn with_config(initial: impl Into<String>, config: &HistoryConfig) -> Self {
        Self {
            snapshots: vec![Snapshot::new(initial.into())],
            index: 0,
            limit: config.limit.map(|limit| limit.max(1)),
        }
    }

    /// Record a committed edit as the new current snapshot
    ///
    /// Anything after the current index (the redo branch) is discarded first.
    /// With a limit configured, the oldest snapshots are evicted to make room.
    pub fn record(&mut self, content: impl Into<String>) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(Snapshot::new(content.into()));
        self.index = self.snapshots.len() - 1;

        if let Some(limit) = self.limit {
            if self.snapshots.len() > limit {
                let excess = self.snapshots.len() - limit;
                self.snapshots.drain(..excess);
                self.index -= excess;
                debug!("Evicted {} oldest history snapshots", excess);
            }
        }
    }

    /// Step back one snapshot
    ///
    /// Returns `None` at the oldest snapshot. That is a no-op, not a failure.
    pub fn undo(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Step forward one snapshot
    ///
    /// Returns `None` at the newest snapshot.
    pub fn redo(&mut self) -> Option<&str> {
        if self.index + 1 >= self.snapshots.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    /// Content at the current index
    pub fn current(&self) -> &str {
        &self.snapshots[self.index].content
    }

    pub fn current_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.index]
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    pub fn status(&self) -> HistoryStatus {
        HistoryStatus {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Number of steps `undo` can take
    pub fn undo_depth(&self) -> usize {
        self.index
    }

    /// Number of steps `redo` can take
    pub fn redo_depth(&self) -> usize {
        self.snapshots.len() - self.index - 1
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Drop everything and start over from `content`
    pub fn reset(&mut self, content: impl Into<String>) {
        self.snapshots.clear();
        self.snapshots.push(Snapshot::new(content.into()));
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(history: &History) -> Vec<&str> {
        history.snapshots().iter().map(|s| s.content.as_str()).collect()
    }

    #[test]
    fn test_new_history() {
        let history = History::new("A");
        assert_eq!(history.current(), "A");
        assert_eq!(history.status(), HistoryStatus::default());
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_at_oldest_is_noop() {
        let mut history = History::new("A");
        assert_eq!(history.undo(), None);
        assert_eq!(history.current(), "A");
    }

    #[test]
    fn test_redo_at_newest_is_noop() {
        let mut history = History::new("A");
        history.record("B");
        assert_eq!(history.redo(), None);
        assert_eq!(history.current(), "B");
    }

    #[test]
    fn test_record_after_undo_prunes_redo_branch() {
        let mut history = History::new("A");
        history.record("B");
        history.record("C");
        assert_eq!(history.undo(), Some("B"));
        history.record("D");
        assert_eq!(contents(&history), vec!["A", "B", "D"]);
        assert_eq!(history.current(), "D");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = History::new("");
        for text in ["h", "he", "hel", "hell", "hello"] {
            history.record(text);
        }
        assert_eq!(history.undo(), Some("hell"));
        assert_eq!(history.redo(), Some("hello"));
        assert_eq!(history.current(), "hello");
    }

    #[test]
    fn test_status_transitions() {
        let mut history = History::new("A");
        history.record("B");
        assert_eq!(
            history.status(),
            HistoryStatus {
                can_undo: true,
                can_redo: false
            }
        );

        history.undo();
        assert_eq!(
            history.status(),
            HistoryStatus {
                can_undo: false,
                can_redo: true
            }
        );

        history.record("C");
        assert_eq!(
            history.status(),
            HistoryStatus {
                can_undo: true,
                can_redo: false
            }
        );
    }

    #[test]
    fn test_depths() {
        let mut history = History::new("A");
        history.record("B");
        history.record("C");
        history.undo();
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 1);
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = History::with_config("A", &HistoryConfig { limit: Some(3) });
        history.record("B");
        history.record("C");
        history.record("D");
        assert_eq!(contents(&history), vec!["B", "C", "D"]);
        assert_eq!(history.current(), "D");
        assert_eq!(history.index(), 2);

        assert_eq!(history.undo(), Some("C"));
        assert_eq!(history.undo(), Some("B"));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn test_limit_with_redo_branch() {
        let mut history = History::with_config("A", &HistoryConfig { limit: Some(2) });
        history.record("B");
        history.undo();
        history.record("C");
        assert_eq!(contents(&history), vec!["A", "C"]);
        assert_eq!(history.current(), "C");
    }

    #[test]
    fn test_zero_limit_keeps_current() {
        let mut history = History::with_config("A", &HistoryConfig { limit: Some(0) });
        assert_eq!(history.limit(), Some(1));
        history.record("B");
        assert_eq!(contents(&history), vec!["B"]);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_reset() {
        let mut history = History::new("A");
        history.record("B");
        history.reset("Z");
        assert_eq!(contents(&history), vec!["Z"]);
        assert_eq!(history.status(), HistoryStatus::default());
    }

    #[test]
    fn test_snapshots_are_timestamped_in_order() {
        let mut history = History::new("A");
        history.record("B");
        let snapshots = history.snapshots();
        assert!(snapshots[0].recorded_at <= snapshots[1].recorded_at);
        assert_eq!(history.current_snapshot().content, "B");
    }
}
