use crate::error::HistoryError;
use crate::undo::UndoStack;

use super::snapshot::Snapshot;

/// One selectable row of the history view.
///
/// `expression` is the text the display returns to when the row is
/// selected (the label with a leading `=` stripped and whitespace
/// trimmed), and `undo_states` is the stack restored alongside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    pub label: String,
    pub expression: String,
    pub undo_states: Vec<String>,
}

/// Append-only store of completed calculations for one session.
///
/// Grows monotonically, is never pruned, and lives only in memory.
/// Each snapshot surfaces as two rows: the equation row, which
/// restores the undo stack captured at evaluation time, and the
/// result row (`=` plus the result), which restores an undo stack as
/// if the result had been typed digit by digit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryStore {
    snapshots: Vec<Snapshot>,
}

impl HistoryStore {
    pub fn new() -> Self {
        HistoryStore {
            snapshots: Vec::new(),
        }
    }

    pub fn add(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// All snapshots in insertion order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The derived row view, most recent snapshot first; within a
    /// snapshot the equation row precedes its result row.
    pub fn rows(&self) -> Vec<HistoryRow> {
        let mut rows = Vec::with_capacity(self.snapshots.len() * 2);
        for snapshot in self.snapshots.iter().rev() {
            rows.push(HistoryRow {
                label: snapshot.equation().to_string(),
                expression: restored_expression(snapshot.equation()),
                undo_states: snapshot.undo_states().to_vec(),
            });
            rows.push(HistoryRow {
                label: snapshot.result_label(),
                expression: restored_expression(&snapshot.result_label()),
                undo_states: UndoStack::retyped(snapshot.result()).snapshot(),
            });
        }
        rows
    }

    /// Row labels in view order.
    pub fn labels(&self) -> Vec<String> {
        self.rows().into_iter().map(|row| row.label).collect()
    }

    /// Looks a row up by its exact label. With duplicate labels the
    /// most recent occurrence wins, matching the view order.
    pub fn find_row(&self, label: &str) -> Result<HistoryRow, HistoryError> {
        self.rows()
            .into_iter()
            .find(|row| row.label == label)
            .ok_or_else(|| HistoryError::NotFound {
                label: label.to_string(),
            })
    }
}

fn restored_expression(label: &str) -> String {
    label.strip_prefix('=').unwrap_or(label).trim().to_string()
}
