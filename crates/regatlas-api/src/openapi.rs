//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Regulation Atlas API",
        version = "0.3.0",
        description = "Country-level tokenization regulation atlas.\n\nProvides:\n- **Country records** keyed by canonical code, with map-coloring status\n- **Code resolution** from heterogeneous map-source property bags\n- **Details panel** rendering and the single-selection contract\n- **Boundary map** pass-through with a visible degraded mode\n- **Dataset metadata** with a current-date fallback",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::countries::list_countries,
        crate::routes::countries::get_country,
        crate::routes::resolve::resolve_feature,
        crate::routes::panel::render_panel,
        crate::routes::panel::get_selection,
        crate::routes::panel::select_region,
        crate::routes::panel::clear_selection,
        crate::routes::map_asset::get_map,
        crate::routes::metadata::get_metadata,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::countries::CountrySummary,
        crate::routes::countries::CountryListResponse,
        crate::routes::resolve::ResolveResponse,
        crate::routes::panel::SelectRequest,
        crate::routes::panel::SelectionResponse,
    )),
    tags(
        (name = "countries", description = "Country record lookup"),
        (name = "resolve", description = "Country-code resolution"),
        (name = "panel", description = "Details panel and selection"),
        (name = "map", description = "Boundary map asset"),
        (name = "metadata", description = "Dataset metadata"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_includes_all_surfaces() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();
        for expected in [
            "/v1/countries",
            "/v1/countries/{code}",
            "/v1/resolve",
            "/v1/panel/{code}",
            "/v1/selection",
            "/v1/map",
            "/v1/metadata",
        ] {
            assert!(
                paths.iter().any(|p| *p == expected),
                "missing path {expected}"
            );
        }
    }
}
