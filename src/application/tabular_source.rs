// Source trait for tabular snapshot access
use crate::domain::snapshot::Snapshot;
use async_trait::async_trait;

#[async_trait]
pub trait TabularSource: Send + Sync {
    /// Attempt a fresh read of the source. `Ok(None)` means the source is
    /// absent or structurally invalid and the caller should degrade to
    /// placeholders rather than fail.
    async fn reload(&self) -> anyhow::Result<Option<Snapshot>>;
}
