//! Catalog-constrained recipe resolution for the Sous grocery storefront.
//!
//! This crate bridges an untrusted generative text provider with the
//! authoritative product catalog: prompts enumerate the allowed catalog names,
//! provider output is sanitized and schema-checked before anything is trusted,
//! and only exact catalog matches ever reach the caller with a price attached.

pub mod catalog;
pub mod classify;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod resolve;
pub mod sanitize;
pub mod types;
pub mod validate;

pub use catalog::{CatalogStore, InMemoryCatalog};
pub use error::RecipeError;
pub use pipeline::{RecipePipeline, DEFAULT_PROVIDER_TIMEOUT, QUANTITY_PLACEHOLDER};
pub use types::{
    CatalogItem, ClassifiedLine, LineKind, ParsedRecipe, RecipeDetails, RecipeIngredient,
    RecipeRequest, ResolvedIngredient, Suggestion,
};
