//! # Resolution Route
//!
//! Routes:
//! - POST /v1/resolve — normalize a map feature's raw property bag to the
//!   canonical country code

use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use regatlas_core::{resolve, FeatureProperties};

use crate::state::AppState;

/// Resolution result. `code` is `null` when nothing in the property bag
/// resolved — a valid outcome, not an error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResolveResponse {
    /// Canonical code, or null on resolution miss.
    pub code: Option<String>,
    /// Display name extracted from the property bag, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the atlas has a record for the resolved code.
    pub has_data: bool,
}

/// Build the resolution router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/resolve", post(resolve_feature))
}

/// POST /v1/resolve — Resolve a feature property bag.
///
/// Accepts whatever code fields the map source exposes (`ISO_A3`,
/// `ADM0_A3`, `ISO_A2`, `ADM0_A2`); unrelated properties are ignored.
#[utoipa::path(
    post,
    path = "/v1/resolve",
    request_body = Object,
    responses(
        (status = 200, description = "Resolution result (code null on miss)", body = ResolveResponse),
    ),
    tag = "resolve"
)]
pub(crate) async fn resolve_feature(
    axum::extract::State(state): axum::extract::State<AppState>,
    Json(properties): Json<FeatureProperties>,
) -> Json<ResolveResponse> {
    let code = resolve(&properties);
    let has_data = code
        .as_ref()
        .is_some_and(|code| state.dataset.get(code).is_some());

    Json(ResolveResponse {
        code: code.map(|c| c.as_str().to_string()),
        display_name: properties.display_name().map(str::to_string),
        has_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        router().with_state(AppState::degraded("test"))
    }

    async fn post_resolve(body: &str) -> ResolveResponse {
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/resolve")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn resolves_iso_a3_through_fixed_table() {
        let result = post_resolve(r#"{"ISO_A3": "USA", "ADMIN": "United States of America"}"#).await;
        assert_eq!(result.code.as_deref(), Some("US"));
        assert_eq!(result.display_name.as_deref(), Some("United States of America"));
        assert!(result.has_data);
    }

    #[tokio::test]
    async fn unresolvable_bag_yields_null_code() {
        let result = post_resolve(r#"{"ADMIN": "Atlantis", "POP_EST": 0}"#).await;
        assert!(result.code.is_none());
        assert!(!result.has_data);
    }

    #[tokio::test]
    async fn unmapped_alpha3_passes_through_without_data() {
        let result = post_resolve(r#"{"ISO_A3": "NLD"}"#).await;
        assert_eq!(result.code.as_deref(), Some("NLD"));
        assert!(!result.has_data);
    }
}
