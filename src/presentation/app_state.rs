// Application state for HTTP handlers
use crate::domain::series::SeriesCatalog;
use crate::domain::snapshot::LatestSnapshot;
use crate::presentation::sessions::SessionStore;
use tokio::sync::watch;

pub struct AppState {
    pub catalog: SeriesCatalog,
    pub latest: watch::Receiver<LatestSnapshot>,
    pub sessions: SessionStore,
}
