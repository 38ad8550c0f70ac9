//! # regatlas-api — Axum API Service for the Regulation Atlas
//!
//! Serves the atlas over HTTP: country records, code resolution, the
//! details-panel selection surface, the boundary map asset, and dataset
//! metadata.
//!
//! ## API Surface
//!
//! | Prefix            | Module                    | Domain                  |
//! |-------------------|---------------------------|-------------------------|
//! | `/v1/countries/*` | [`routes::countries`]     | Record lookup           |
//! | `/v1/resolve`     | [`routes::resolve`]       | Code resolution         |
//! | `/v1/panel/*`     | [`routes::panel`]         | Panel rendering         |
//! | `/v1/selection`   | [`routes::panel`]         | Single-selection state  |
//! | `/v1/map`         | [`routes::map_asset`]     | Boundary pass-through   |
//! | `/v1/metadata`    | [`routes::metadata`]      | Dataset metadata        |
//! | `/openapi.json`   | [`openapi`]               | OpenAPI spec            |
//! | `/health/*`       | [`app`]                   | Health probes           |
//!
//! ## Startup
//!
//! Three independent async document loads resolve the immutable state:
//! country data (fallback dataset on failure), metadata (current date on
//! failure), and the map asset (no fallback — failure is served visibly).
//! After startup the only mutation anywhere is the panel selection.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppState, MapAsset};

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::countries::router())
        .merge(routes::resolve::router())
        .merge(routes::panel::router())
        .merge(routes::map_asset::router())
        .merge(routes::metadata::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .with_state(state);

    Router::new().merge(health).merge(api)
}

/// GET /health/liveness — process is up.
async fn liveness() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /health/readiness — immutable state has been resolved. The dataset
/// is never empty (the fallback has four entries), so readiness reports
/// which degraded modes are active rather than failing.
async fn readiness(axum::extract::State(state): axum::extract::State<AppState>) -> impl IntoResponse {
    let map_ok = matches!(state.map.as_ref(), MapAsset::Available(_));
    Json(serde_json::json!({
        "status": "ok",
        "countries": state.dataset.len(),
        "map": if map_ok { "available" } else { "unavailable" },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_probes_respond() {
        let app = app(AppState::degraded("test"));
        for uri in ["/health/liveness", "/health/readiness"] {
            let resp = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn readiness_reports_degraded_map() {
        let app = app(AppState::degraded("test"));
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/health/readiness")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["map"], "unavailable");
        assert_eq!(value["countries"], 4);
    }

    #[tokio::test]
    async fn full_app_serves_country_surface() {
        let app = app(AppState::degraded("test"));
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/v1/countries/GB")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
