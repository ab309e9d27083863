pub mod lookup;
pub mod suggest;

use axum::routing::post;
use axum::Router;
use sous_core::{CatalogItem, ClassifiedLine, LineKind, RecipeDetails, RecipeIngredient};
use utoipa::OpenApi;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/suggest-recipe", post(suggest::suggest_recipe))
        .route("/api/get-recipe-details", post(lookup::get_recipe_details))
}

#[derive(OpenApi)]
#[openapi(
    paths(suggest::suggest_recipe, lookup::get_recipe_details),
    components(schemas(
        CatalogItem,
        ClassifiedLine,
        LineKind,
        RecipeDetails,
        RecipeIngredient,
        suggest::SuggestRecipeRequest,
        suggest::SuggestRecipeResponse,
        lookup::RecipeDetailsRequest,
    ))
)]
pub struct ApiDoc;
