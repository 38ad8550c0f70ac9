//! # Map Asset Route
//!
//! Routes:
//! - GET /v1/map — the boundary FeatureCollection, or a visible 503 when
//!   the asset failed to load (there is no fallback map)

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::state::{AppState, MapAsset};

/// Build the map router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/map", get(get_map))
}

/// GET /v1/map — Boundary document for the tiled map presentation.
#[utoipa::path(
    get,
    path = "/v1/map",
    responses(
        (status = 200, description = "GeoJSON FeatureCollection", body = Object),
        (status = 503, description = "Map asset failed to load; error shown in place of the map"),
    ),
    tag = "map"
)]
pub(crate) async fn get_map(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    match state.map.as_ref() {
        MapAsset::Available(value) => Ok(Json(value.as_ref().clone())),
        MapAsset::Unavailable(message) => Err(AppError::MapUnavailable(message.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use regatlas_core::{AtlasMetadata, CountryDataset};

    #[tokio::test]
    async fn available_map_is_served_through() {
        let geojson = serde_json::json!({"type": "FeatureCollection", "features": []});
        let state = AppState::new(
            CountryDataset::fallback(),
            AtlasMetadata::fallback_today(),
            MapAsset::Available(geojson.into()),
        );
        let resp = router()
            .with_state(state)
            .oneshot(Request::builder().uri("/v1/map").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
    }

    #[tokio::test]
    async fn missing_map_is_visible_503() {
        let resp = router()
            .with_state(AppState::degraded("map data could not be loaded: timeout"))
            .oneshot(Request::builder().uri("/v1/map").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"]["code"], "MAP_UNAVAILABLE");
        assert!(value["error"]["message"]
            .as_str()
            .unwrap()
            .contains("timeout"));
    }
}
