// HTTP request handlers
use crate::application::projector;
use crate::domain::chart::{ChartSpec, TableView};
use crate::domain::view::ViewEvent;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SessionQuery {
    pub session: Option<String>,
}

impl SessionQuery {
    fn id(&self) -> &str {
        self.session.as_deref().unwrap_or("default")
    }
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub tick: u64,
    pub reloaded_at: Option<DateTime<Utc>>,
    pub charts: Vec<ChartSpec>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Project the latest snapshot through the session's view state.
pub async fn get_dashboard(
    Query(query): Query<SessionQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<DashboardResponse> {
    let latest = state.latest.borrow().clone();
    let charts = state
        .sessions
        .with_state(&state.catalog, query.id(), |view| {
            projector::project(&state.catalog, latest.snapshot.as_deref(), view)
        })
        .await;

    Json(DashboardResponse {
        tick: latest.tick,
        reloaded_at: latest.reloaded_at,
        charts,
    })
}

/// Apply one view event, then return the recomputed projection. Projection
/// runs on both triggers (tick and user event), so the client sees the
/// effect immediately rather than waiting for the next tick.
pub async fn post_event(
    Query(query): Query<SessionQuery>,
    State(state): State<Arc<AppState>>,
    Json(event): Json<ViewEvent>,
) -> Json<DashboardResponse> {
    let latest = state.latest.borrow().clone();
    let charts = state
        .sessions
        .with_state(&state.catalog, query.id(), |view| {
            view.apply(&state.catalog, event);
            projector::project(&state.catalog, latest.snapshot.as_deref(), view)
        })
        .await;

    Json(DashboardResponse {
        tick: latest.tick,
        reloaded_at: latest.reloaded_at,
        charts,
    })
}

/// Raw table view of the latest snapshot.
pub async fn get_table(State(state): State<Arc<AppState>>) -> Json<TableView> {
    let latest = state.latest.borrow().clone();
    Json(projector::project_table(latest.snapshot.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::{Axis, AxisRange, SeriesCatalog};
    use crate::domain::view::ViewState;

    #[test]
    fn test_dashboard_response_json_shape() {
        let catalog = SeriesCatalog::new(vec!["sensor1".to_string()]);
        let mut view = ViewState::for_catalog(&catalog);
        view.apply(
            &catalog,
            ViewEvent::SetAxisOverride {
                series: "sensor1".to_string(),
                axis: Axis::X,
                range: AxisRange::new(10.0, 20.0),
            },
        );
        let response = DashboardResponse {
            tick: 3,
            reloaded_at: None,
            charts: projector::project(&catalog, None, &view),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["tick"], 3);
        assert!(value["reloaded_at"].is_null());

        let chart = &value["charts"][0];
        assert_eq!(chart["series_id"], "sensor1");
        assert_eq!(chart["title"], "(No data)");
        assert!(chart["points"].as_array().unwrap().is_empty());
        assert_eq!(chart["axis_override"]["x"]["min"], 10.0);
        assert_eq!(chart["axis_override"]["x"]["max"], 20.0);
        assert!(chart["axis_override"]["y"].is_null());
    }

    #[test]
    fn test_view_event_wire_format() {
        let event: ViewEvent = serde_json::from_value(serde_json::json!({
            "kind": "set_axis_override",
            "series": "sensor1",
            "axis": "x",
            "range": { "min": 10.0, "max": 20.0 },
        }))
        .unwrap();
        assert!(matches!(event, ViewEvent::SetAxisOverride { .. }));

        let event: ViewEvent = serde_json::from_value(serde_json::json!({
            "kind": "cycle_single",
            "direction": "prev",
        }))
        .unwrap();
        assert!(matches!(event, ViewEvent::CycleSingle { .. }));
    }
}
