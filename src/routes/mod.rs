// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{Router, routing::get};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::panel::ChartUpdate;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) charts_tx: broadcast::Sender<ChartUpdate>,
    pub(crate) ws_dashboard_connections: Arc<AtomicUsize>,
    pub(crate) config: AppConfig,
}

pub fn app(
    charts_tx: broadcast::Sender<ChartUpdate>,
    ws_dashboard_connections: Arc<AtomicUsize>,
    config: AppConfig,
) -> Router {
    let state = AppState {
        charts_tx,
        ws_dashboard_connections,
        config,
    };
    Router::new()
        .route("/", get(http::index_handler)) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/dashboard", get(http::dashboard_handler)) // GET /api/dashboard
        .route("/api/charts/{category}", get(http::chart_handler)) // GET /api/charts/{category}
        .route("/ws/charts/{category}", get(ws::ws_charts)) // WS /ws/charts/{category}
        .route("/ws/dashboard", get(ws::ws_dashboard)) // WS /ws/dashboard
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
