// Refresh service - scheduled snapshot reloads
use crate::application::tabular_source::TabularSource;
use crate::domain::snapshot::{LatestSnapshot, Snapshot};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// Drives the fixed-period reload loop and publishes the result on a watch
/// channel shared read-only by every session.
pub struct RefreshService {
    source: Arc<dyn TabularSource>,
    period: Duration,
    tx: watch::Sender<LatestSnapshot>,
}

impl RefreshService {
    pub fn new(source: Arc<dyn TabularSource>, period: Duration) -> Self {
        let (tx, _rx) = watch::channel(LatestSnapshot::empty());
        Self { source, period, tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<LatestSnapshot> {
        self.tx.subscribe()
    }

    /// Runs the refresh loop until the process exits. The reload is awaited
    /// inside the loop, so at most one reload is ever in flight; ticks that
    /// fire while a slow reload is still running are coalesced, not queued.
    pub async fn run(self) {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut tick: u64 = 0;

        loop {
            interval.tick().await;
            tick += 1;

            let snapshot = self.reload_once().await;
            let _ = self.tx.send(LatestSnapshot {
                snapshot: snapshot.map(Arc::new),
                reloaded_at: Some(Utc::now()),
                tick,
            });
        }
    }

    async fn reload_once(&self) -> Option<Snapshot> {
        match self.source.reload().await {
            Ok(Some(snapshot)) => {
                tracing::debug!(rows = snapshot.len(), "reloaded snapshot");
                Some(snapshot)
            }
            Ok(None) => {
                tracing::debug!("source absent, publishing no snapshot");
                None
            }
            Err(e) => {
                tracing::warn!("reload failed: {e:#}");
                None
            }
        }
    }
}
