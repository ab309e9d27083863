pub mod recipes;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde::Serialize;
use sous_core::RecipeError;
use utoipa::{OpenApi, ToSchema};

use crate::AppState;

/// Shared error response used by all endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn router() -> Router<AppState> {
    recipes::router()
}

/// Collapse a pipeline failure to the generic client-facing envelope.
///
/// The failure kind only picks the status code; the detail stays in the logs
/// and never reaches the client.
pub fn pipeline_error_response(error: &RecipeError) -> Response {
    let status = match error {
        RecipeError::Provider(_) => StatusCode::SERVICE_UNAVAILABLE,
        RecipeError::TaintedOutput(_)
        | RecipeError::SchemaViolation(_)
        | RecipeError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: "AI resolution failed".to_string(),
        }),
    )
        .into_response()
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![recipes::ApiDoc::openapi()];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
