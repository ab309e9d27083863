use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use sous_core::llm::create_provider_from_env;
use sous_core::RecipePipeline;
use utoipa::ToSchema;

use crate::api::{pipeline_error_response, ErrorResponse};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailsRequest {
    pub dish_name: String,
    /// Catalog product names the recipe is allowed to use.
    pub available_products: Vec<String>,
}

/// Fetch a structured recipe for a dish name
///
/// Asks the generative provider for a recipe constrained to the given product
/// names, then resolves every returned ingredient against the catalog. Only
/// exact catalog matches come back, each with full pricing; names the model
/// invents are dropped. Malformed provider output fails the whole request.
#[utoipa::path(
    post,
    path = "/api/get-recipe-details",
    tag = "recipes",
    request_body = RecipeDetailsRequest,
    responses(
        (status = 200, description = "Recipe with priced catalog ingredients", body = sous_core::RecipeDetails),
        (status = 400, description = "Missing dish name or product list", body = ErrorResponse),
        (status = 500, description = "AI resolution failed", body = ErrorResponse),
        (status = 503, description = "AI service unavailable", body = ErrorResponse)
    )
)]
pub async fn get_recipe_details(
    State(catalog): State<AppState>,
    Json(request): Json<RecipeDetailsRequest>,
) -> impl IntoResponse {
    if request.dish_name.trim().is_empty() || request.available_products.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "dishName and availableProducts are required".to_string(),
            }),
        )
            .into_response();
    }

    let provider = match create_provider_from_env() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("AI provider unavailable: {}", e);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: "AI service unavailable".to_string(),
                }),
            )
                .into_response();
        }
    };

    let pipeline = RecipePipeline::new(Arc::from(provider), catalog.clone());

    match pipeline
        .lookup(&request.dish_name, request.available_products)
        .await
    {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(e) => {
            tracing::warn!("recipe lookup pipeline failed: {}", e);
            pipeline_error_response(&e)
        }
    }
}
