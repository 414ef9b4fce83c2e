// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::dataset::Dataset;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) dataset: Arc<Dataset>,
    pub(crate) config: AppConfig,
}

pub fn app(dataset: Arc<Dataset>, config: AppConfig) -> Router {
    let state = AppState { dataset, config };
    Router::new()
        .route("/", get(http::index_handler)) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/view", get(http::view_handler)) // GET /api/view
        .route("/api/records", get(http::records_handler)) // GET /api/records
        .route("/ws/drilldown", get(ws::ws_drilldown)) // WS /ws/drilldown
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
