use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use sous_core::llm::create_provider_from_env;
use sous_core::{ClassifiedLine, RecipePipeline};
use utoipa::ToSchema;

use crate::api::{pipeline_error_response, ErrorResponse};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRecipeRequest {
    pub main_ingredient: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestRecipeResponse {
    /// The provider's free-text suggestion, fences stripped.
    pub suggestion: String,
    /// The same text tagged line by line for presentation.
    pub lines: Vec<ClassifiedLine>,
}

/// Suggest a dish from one main ingredient
///
/// Asks the generative provider for one dish built around the given
/// ingredient, constrained to products currently in the catalog. The reply is
/// conversational text; nothing in it carries a price.
#[utoipa::path(
    post,
    path = "/api/suggest-recipe",
    tag = "recipes",
    request_body = SuggestRecipeRequest,
    responses(
        (status = 200, description = "Dish suggestion", body = SuggestRecipeResponse),
        (status = 400, description = "Missing main ingredient or empty catalog", body = ErrorResponse),
        (status = 500, description = "AI resolution failed", body = ErrorResponse),
        (status = 503, description = "AI service unavailable", body = ErrorResponse)
    )
)]
pub async fn suggest_recipe(
    State(catalog): State<AppState>,
    Json(request): Json<SuggestRecipeRequest>,
) -> impl IntoResponse {
    if request.main_ingredient.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "mainIngredient is required".to_string(),
            }),
        )
            .into_response();
    }

    let snapshot = match catalog.all_items().await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("catalog snapshot failed: {}", e);
            return pipeline_error_response(&e);
        }
    };

    if snapshot.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "catalog is empty".to_string(),
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

    match pipeline.suggest(&request.main_ingredient, snapshot).await {
        Ok(suggestion) => (
            StatusCode::OK,
            Json(SuggestRecipeResponse {
                suggestion: suggestion.text,
                lines: suggestion.lines,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("suggestion pipeline failed: {}", e);
            pipeline_error_response(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_wire_format() {
        let request: SuggestRecipeRequest =
            serde_json::from_str(r#"{"mainIngredient": "cà chua"}"#).unwrap();
        assert_eq!(request.main_ingredient, "cà chua");
    }
}
