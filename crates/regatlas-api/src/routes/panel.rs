//! # Panel & Selection Routes
//!
//! The details-panel surface: stateless rendering of any code, plus the
//! stateful single-selection contract the interactive map drives.
//!
//! Routes:
//! - GET    /v1/panel/{code}?name= — render the panel HTML for a code
//! - GET    /v1/selection — current selection and panel HTML
//! - POST   /v1/selection — select a region (replaces any previous selection)
//! - DELETE /v1/selection — clear the selection, reverting to the prompt

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use regatlas_core::CountryCode;
use regatlas_panel::{render_placeholder, render_record, CLEAR_TRANSITION_MS};

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for the stateless panel render.
#[derive(Debug, Deserialize)]
pub struct PanelParams {
    /// Display name for the heading; defaults to the code itself.
    pub name: Option<String>,
}

/// Selection request body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SelectRequest {
    /// Canonical code of the region being selected.
    pub code: String,
    /// Display name of the region.
    pub name: String,
}

/// Selection state response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SelectionResponse {
    /// Currently selected code, if any.
    pub selected: Option<String>,
    /// Code deselected by this operation, so the UI can restore its
    /// default styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deselected: Option<String>,
    /// The panel's current HTML, replaced wholesale on every transition.
    pub html: String,
    /// Visual delay before the UI applies a clear, in milliseconds.
    pub clear_transition_ms: u64,
}

/// Build the panel router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/panel/:code", get(render_panel))
        .route(
            "/v1/selection",
            get(get_selection).post(select_region).delete(clear_selection),
        )
}

/// GET /v1/panel/{code} — Stateless panel render for one code.
///
/// Codes without a record render the two-line no-data placeholder; this is
/// a 200, not a 404 — absence is a displayable outcome.
#[utoipa::path(
    get,
    path = "/v1/panel/{code}",
    params(
        ("code" = String, Path, description = "Canonical country code"),
        ("name" = Option<String>, Query, description = "Display name for the heading"),
    ),
    responses(
        (status = 200, description = "Panel HTML", content_type = "text/html"),
        (status = 422, description = "Malformed country code"),
    ),
    tag = "panel"
)]
pub(crate) async fn render_panel(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<PanelParams>,
) -> Result<Html<String>, AppError> {
    let code = CountryCode::new(code).map_err(|e| AppError::Validation(e.to_string()))?;
    let name = params.name.unwrap_or_else(|| code.as_str().to_string());

    let html = match state.dataset.get(&code) {
        Some(record) => render_record(&name, record),
        None => render_placeholder(&name),
    };
    Ok(Html(html))
}

/// GET /v1/selection — Current selection state.
#[utoipa::path(
    get,
    path = "/v1/selection",
    responses(
        (status = 200, description = "Current selection", body = SelectionResponse),
    ),
    tag = "panel"
)]
pub(crate) async fn get_selection(State(state): State<AppState>) -> Json<SelectionResponse> {
    let panel = state.panel.read();
    Json(SelectionResponse {
        selected: panel.selected().map(|r| r.code.as_str().to_string()),
        deselected: None,
        html: panel.html().to_string(),
        clear_transition_ms: CLEAR_TRANSITION_MS,
    })
}

/// POST /v1/selection — Select a region.
///
/// Replaces any previous selection; the response names the deselected
/// region so the map can restore its styling. At most one region is
/// selected at a time.
#[utoipa::path(
    post,
    path = "/v1/selection",
    request_body = SelectRequest,
    responses(
        (status = 200, description = "New selection state", body = SelectionResponse),
        (status = 422, description = "Malformed country code"),
    ),
    tag = "panel"
)]
pub(crate) async fn select_region(
    State(state): State<AppState>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let code = CountryCode::new(request.code).map_err(|e| AppError::Validation(e.to_string()))?;

    let mut panel = state.panel.write();
    let deselected = panel.select(code.clone(), request.name, &state.dataset);

    Ok(Json(SelectionResponse {
        selected: Some(code.as_str().to_string()),
        deselected: deselected.map(|c| c.as_str().to_string()),
        html: panel.html().to_string(),
        clear_transition_ms: CLEAR_TRANSITION_MS,
    }))
}

/// DELETE /v1/selection — Clear the selection.
///
/// Reverts the panel to the initial prompt; the UI applies the change after
/// the fixed visual transition delay and restores default styling to all
/// regions.
#[utoipa::path(
    delete,
    path = "/v1/selection",
    responses(
        (status = 200, description = "Cleared selection state", body = SelectionResponse),
    ),
    tag = "panel"
)]
pub(crate) async fn clear_selection(State(state): State<AppState>) -> Json<SelectionResponse> {
    let mut panel = state.panel.write();
    let deselected = panel.clear();

    Json(SelectionResponse {
        selected: None,
        deselected: deselected.map(|c| c.as_str().to_string()),
        html: panel.html().to_string(),
        clear_transition_ms: CLEAR_TRANSITION_MS,
    })
}
