//! # Country Routes
//!
//! Routes:
//! - GET /v1/countries — summary list (code, status, last updated) for map coloring
//! - GET /v1/countries/{code} — full record for one jurisdiction

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use regatlas_core::{CountryCode, CountryRecord};

use crate::error::AppError;
use crate::state::AppState;

/// One row of the country summary list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountrySummary {
    /// Canonical code.
    pub code: String,
    /// Map-coloring status ("clear" | "unclear" | "prohibited"), when curated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Date the record was last curated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Summary list response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountryListResponse {
    pub countries: Vec<CountrySummary>,
    pub total: usize,
}

/// Build the country router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/countries", get(list_countries))
        .route("/v1/countries/:code", get(get_country))
}

/// GET /v1/countries — Summary list for map coloring.
#[utoipa::path(
    get,
    path = "/v1/countries",
    responses(
        (status = 200, description = "Country summary list", body = CountryListResponse),
    ),
    tag = "countries"
)]
pub(crate) async fn list_countries(State(state): State<AppState>) -> Json<CountryListResponse> {
    let countries: Vec<CountrySummary> = state
        .dataset
        .iter()
        .map(|(code, record)| CountrySummary {
            code: code.as_str().to_string(),
            status: record.status.map(|s| s.as_str().to_string()),
            last_updated: record.last_updated.clone(),
        })
        .collect();
    let total = countries.len();
    Json(CountryListResponse { countries, total })
}

/// GET /v1/countries/{code} — Full record for one jurisdiction.
#[utoipa::path(
    get,
    path = "/v1/countries/{code}",
    params(
        ("code" = String, Path, description = "Canonical country code (e.g., SG)"),
    ),
    responses(
        (status = 200, description = "Country record", body = Object),
        (status = 404, description = "No record for this code"),
        (status = 422, description = "Malformed country code"),
    ),
    tag = "countries"
)]
pub(crate) async fn get_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CountryRecord>, AppError> {
    let code = CountryCode::new(code).map_err(|e| AppError::Validation(e.to_string()))?;
    match state.dataset.get(&code) {
        Some(record) => Ok(Json(record.clone())),
        None => Err(AppError::NotFound(format!(
            "no regulatory data for {code}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::state::MapAsset;

    fn test_app() -> Router {
        router().with_state(AppState::degraded("test"))
    }

    async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn list_covers_fallback_jurisdictions() {
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .uri("/v1/countries")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let list: CountryListResponse = body_json(resp).await;
        assert_eq!(list.total, 4);
        let codes: Vec<&str> = list.countries.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["CH", "GB", "SG", "US"]);
    }

    #[tokio::test]
    async fn get_returns_record() {
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .uri("/v1/countries/SG")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let record: CountryRecord = body_json(resp).await;
        assert!(record.overview.unwrap().contains("Monetary Authority"));
    }

    #[tokio::test]
    async fn get_unknown_code_is_404() {
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .uri("/v1/countries/JP")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_malformed_code_is_422() {
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .uri("/v1/countries/s9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn degraded_state_still_serves_map_error_elsewhere() {
        // Sanity: AppState::degraded keeps the dataset usable even though
        // the map asset failed.
        let state = AppState::degraded("boom");
        assert!(matches!(*state.map, MapAsset::Unavailable(_)));
        assert_eq!(state.dataset.len(), 4);
    }
}
