// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::refresh_service::RefreshService;
use crate::domain::series::SeriesCatalog;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::csv_source::CsvTabularSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, get_table, health_check, post_event};
use crate::presentation::sessions::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration (once; not hot-reloaded)
    let config = load_dashboard_config()?;
    let catalog = SeriesCatalog::new(config.series.expected.clone());

    // Create the source (infrastructure layer)
    let source = Arc::new(CsvTabularSource::new(
        &config.source.path,
        config.source.max_rows,
    ));

    // Create the refresh service and spawn the tick loop (application layer)
    let refresh = RefreshService::new(source, Duration::from_millis(config.refresh.period_ms));
    let latest = refresh.subscribe();
    tokio::spawn(refresh.run());

    // Create application state
    let state = Arc::new(AppState {
        catalog,
        latest,
        sessions: SessionStore::new(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/table", get(get_table))
        .route("/events", post(post_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8050".parse().unwrap();
    println!("Starting sensor-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
