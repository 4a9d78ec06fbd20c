// CSV tabular source implementation
use crate::application::tabular_source::TabularSource;
use crate::domain::snapshot::{Snapshot, SnapshotRow};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use thiserror::Error;

pub const TIMESTAMP_COLUMN: &str = "timestamp";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source file not found: {0}")]
    Missing(PathBuf),
    #[error("missing mandatory column \"{TIMESTAMP_COLUMN}\"")]
    MissingTimestampColumn,
    #[error("failed to read source: {0}")]
    Read(#[from] csv::Error),
}

/// Reads the configured CSV file and keeps only the most recent `max_rows`
/// rows, where "most recent" means last in file order, not time-sorted.
#[derive(Debug, Clone)]
pub struct CsvTabularSource {
    path: PathBuf,
    max_rows: usize,
}

impl CsvTabularSource {
    pub fn new(path: impl Into<PathBuf>, max_rows: usize) -> Self {
        Self {
            path: path.into(),
            max_rows,
        }
    }

    fn read_snapshot(&self) -> Result<Snapshot, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::Missing(self.path.clone()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        // Header names are trimmed of surrounding whitespace; case and
        // internal spacing are preserved.
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let ts_idx = headers
            .iter()
            .position(|h| h == TIMESTAMP_COLUMN)
            .ok_or(SourceError::MissingTimestampColumn)?;

        let columns: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != ts_idx)
            .map(|(_, h)| h.clone())
            .collect();

        let mut rows: VecDeque<SnapshotRow> = VecDeque::with_capacity(self.max_rows);
        for record in reader.records() {
            let record = record?;
            let timestamp = record.get(ts_idx).unwrap_or_default().to_string();
            let cells = (0..headers.len())
                .filter(|i| *i != ts_idx)
                .map(|i| record.get(i).and_then(|c| c.trim().parse::<f64>().ok()))
                .collect();

            if rows.len() == self.max_rows {
                rows.pop_front();
            }
            rows.push_back(SnapshotRow::new(timestamp, cells));
        }

        Ok(Snapshot::new(columns, rows.into()))
    }
}

#[async_trait]
impl TabularSource for CsvTabularSource {
    async fn reload(&self) -> anyhow::Result<Option<Snapshot>> {
        match self.read_snapshot() {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e @ (SourceError::Missing(_) | SourceError::MissingTimestampColumn)) => {
                tracing::debug!("treating source as absent: {e}");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
