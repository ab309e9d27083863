//! The catalog-constrained recipe pipeline.
//!
//! One linear pass per request: build the prompt, call the provider under a
//! timeout, sanitize the output, then (lookup mode) parse, validate, resolve
//! against the catalog and assemble. Every failure is terminal for the
//! request; there is no retry or re-prompt path.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::CatalogStore;
use crate::classify::classify_text;
use crate::error::RecipeError;
use crate::llm::{LlmError, LlmProvider};
use crate::prompts::build_prompt;
use crate::resolve::resolve_ingredients;
use crate::sanitize::{parse_object, strip_code_fences};
use crate::types::{CatalogItem, RecipeDetails, RecipeIngredient, RecipeRequest, Suggestion};
use crate::validate::validate_recipe;

/// Shown instead of a quantity; the provider is not asked to estimate
/// amounts in this version.
pub const QUANTITY_PLACEHOLDER: &str = "...";

/// Default cap on a single provider call.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Stateless per-request pipeline over an injected provider and catalog.
pub struct RecipePipeline {
    provider: Arc<dyn LlmProvider>,
    catalog: Arc<dyn CatalogStore>,
    provider_timeout: Duration,
}

impl RecipePipeline {
    pub fn new(provider: Arc<dyn LlmProvider>, catalog: Arc<dyn CatalogStore>) -> Self {
        Self {
            provider,
            catalog,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    /// Override the provider call timeout.
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Suggestion mode: free-text dish guidance from one main ingredient.
    ///
    /// The catalog snapshot only constrains the prompt; no resolution or
    /// pricing happens here, and the main ingredient itself does not need to
    /// exist in the catalog.
    pub async fn suggest(
        &self,
        ingredient: &str,
        catalog: Vec<CatalogItem>,
    ) -> Result<Suggestion, RecipeError> {
        let request = RecipeRequest::ByIngredient {
            ingredient: ingredient.to_string(),
            catalog,
        };

        let raw = self.complete(&build_prompt(&request)).await?;
        let text = strip_code_fences(&raw).to_string();
        let lines = classify_text(&text);

        Ok(Suggestion { text, lines })
    }

    /// Lookup mode: a structured, priced recipe for a dish name.
    ///
    /// Fail-closed on malformed or misshapen output; ingredient names absent
    /// from the catalog are filtered, not errors.
    pub async fn lookup(
        &self,
        dish_name: &str,
        allowed_names: Vec<String>,
    ) -> Result<RecipeDetails, RecipeError> {
        let request = RecipeRequest::ByDishName {
            dish_name: dish_name.to_string(),
            allowed_names,
        };

        let raw = self.complete(&build_prompt(&request)).await?;
        let value = parse_object(strip_code_fences(&raw))?;
        let recipe = validate_recipe(&value)?;

        let matches = self.catalog.find_by_names(&recipe.ingredients_needed).await?;
        let resolved = resolve_ingredients(&recipe.ingredients_needed, &matches);

        let dropped = resolved.iter().filter(|r| r.item.is_none()).count();
        if dropped > 0 {
            tracing::debug!(
                dish = %recipe.name,
                dropped,
                "filtered ingredient names not present in catalog"
            );
        }

        let ingredients = resolved
            .into_iter()
            .filter_map(|r| r.item)
            .map(|product| RecipeIngredient {
                product,
                quantity_description: QUANTITY_PLACEHOLDER.to_string(),
            })
            .collect();

        Ok(RecipeDetails {
            name: recipe.name,
            instructions: recipe.instructions,
            ingredients,
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String, RecipeError> {
        tracing::debug!(
            provider = self.provider.provider_name(),
            model = self.provider.model_name(),
            "calling generative provider"
        );

        let reply = tokio::time::timeout(self.provider_timeout, self.provider.complete(prompt))
            .await
            .map_err(|_| LlmError::Timeout(self.provider_timeout.as_secs()))??;

        Ok(reply)
    }
}
