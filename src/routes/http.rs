// GET handlers: page, version, view, records

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::AppState;
use crate::models::{RatedRecord, ViewModel};
use crate::navigator::{DrilldownState, Level, NavigationError, Selection};
use crate::version::version_info;
use crate::view::compute_view;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Query string for GET /api/view; every parameter is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ViewQuery {
    location: Option<String>,
    server: Option<String>,
    storage_node: Option<String>,
    device: Option<String>,
}

impl ViewQuery {
    /// Applies the present parameters outermost first; a level given without
    /// its parent is rejected rather than skipped.
    fn into_state(self) -> Result<DrilldownState, NavigationError> {
        let selections = [
            (Level::Location, self.location),
            (Level::Server, self.server),
            (Level::StorageNode, self.storage_node),
            (Level::Device, self.device),
        ]
        .into_iter()
        .filter_map(|(level, value)| value.map(|v| Selection::select(level, v)));
        DrilldownState::from_selections(selections)
    }
}

pub(super) struct ApiError(NavigationError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("rejected view request: {}", self.0);
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// GET / — the single-page dashboard; it renders whatever /ws/drilldown pushes.
pub(super) async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(version_info())
}

/// GET /api/view — the view model for the selections in the query string.
pub(super) async fn view_handler(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<ViewModel>, ApiError> {
    let nav = query.into_state().map_err(ApiError)?;
    Ok(Json(compute_view(&nav, &state.dataset)))
}

/// GET /api/records — the loaded rows with their simulated rates.
pub(super) async fn records_handler(State(state): State<AppState>) -> Json<Vec<RatedRecord>> {
    Json(state.dataset.records().to_vec())
}
