// Snapshot domain model
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// One row of the source file: the opaque timestamp cell plus one optional
/// numeric cell per column, aligned with `Snapshot::columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRow {
    pub timestamp: String,
    pub cells: Vec<Option<f64>>,
}

impl SnapshotRow {
    pub fn new(timestamp: String, cells: Vec<Option<f64>>) -> Self {
        Self { timestamp, cells }
    }
}

/// Immutable, trimmed view of the tabular source as of one reload. Either
/// fully loaded and validated, or not constructed at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    columns: Vec<String>,
    rows: Vec<SnapshotRow>,
}

impl Snapshot {
    pub fn new(columns: Vec<String>, rows: Vec<SnapshotRow>) -> Self {
        Self { columns, rows }
    }

    /// Column names in file order, timestamp excluded.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[SnapshotRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Value published by the refresh loop after every tick. Replaced wholesale
/// each tick, so consumers never observe data older than the last scheduled
/// reload.
#[derive(Debug, Clone)]
pub struct LatestSnapshot {
    pub snapshot: Option<Arc<Snapshot>>,
    pub reloaded_at: Option<DateTime<Utc>>,
    pub tick: u64,
}

impl LatestSnapshot {
    /// State before the first tick has completed.
    pub fn empty() -> Self {
        Self {
            snapshot: None,
            reloaded_at: None,
            tick: 0,
        }
    }
}
