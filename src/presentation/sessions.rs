// Session registry - one ViewState per connected client
use crate::domain::series::SeriesCatalog;
use crate::domain::view::ViewState;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Entries are never evicted: each distinct session id holds its view state
/// (selections, sticky zoom) until the process restarts.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, ViewState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` against the session's view state, creating the state on first
    /// touch with every catalog series selected.
    pub async fn with_state<R>(
        &self,
        catalog: &SeriesCatalog,
        session: &str,
        f: impl FnOnce(&mut ViewState) -> R,
    ) -> R {
        let mut sessions = self.sessions.write().await;
        let state = sessions
            .entry(session.to_string())
            .or_insert_with(|| ViewState::for_catalog(catalog));
        f(state)
    }
}
