//! Prompt templates for the recipe pipeline.
//!
//! Rendering is pure: the same request always produces byte-identical text.
//! The allowed name set is deduplicated and sorted before rendering, so the
//! enumeration order of the catalog carries no meaning downstream.

mod lookup;
mod suggest;

pub use lookup::render_lookup_prompt;
pub use suggest::render_suggest_prompt;

use crate::types::RecipeRequest;

/// Render the provider prompt for a request.
pub fn build_prompt(request: &RecipeRequest) -> String {
    match request {
        RecipeRequest::ByIngredient {
            ingredient,
            catalog,
        } => {
            let names = sorted_names(catalog.iter().map(|item| item.name.as_str()));
            render_suggest_prompt(ingredient, &names)
        }
        RecipeRequest::ByDishName {
            dish_name,
            allowed_names,
        } => {
            let names = sorted_names(allowed_names.iter().map(String::as_str));
            render_lookup_prompt(dish_name, &names)
        }
    }
}

fn sorted_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut names: Vec<&str> = names.collect();
    names.sort_unstable();
    names.dedup();
    names
}
