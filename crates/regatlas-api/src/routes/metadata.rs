//! # Metadata Route
//!
//! Routes:
//! - GET /v1/metadata — dataset-wide "last updated" indicator and statistics

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use regatlas_core::AtlasMetadata;

use crate::state::AppState;

/// Build the metadata router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/metadata", get(get_metadata))
}

/// GET /v1/metadata — Atlas metadata.
///
/// When the metadata document failed to load at startup this serves the
/// current-date fallback, so the indicator is always populated.
#[utoipa::path(
    get,
    path = "/v1/metadata",
    responses(
        (status = 200, description = "Atlas metadata", body = Object),
    ),
    tag = "metadata"
)]
pub(crate) async fn get_metadata(State(state): State<AppState>) -> Json<AtlasMetadata> {
    Json(state.metadata.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn metadata_always_has_a_date() {
        let resp = router()
            .with_state(AppState::degraded("test"))
            .oneshot(
                Request::builder()
                    .uri("/v1/metadata")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let date = value["lastUpdated"].as_str().unwrap();
        assert_eq!(date.len(), 10);
    }
}
