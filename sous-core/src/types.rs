//! Request and response types for the recipe pipeline.
//!
//! Everything here is request-scoped: built for one call, dropped after the
//! response. Nothing is persisted by this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A purchasable item from the grocery catalog.
///
/// The catalog is owned and mutated elsewhere; the pipeline only reads a
/// point-in-time snapshot. `name` is the unique display string used as the
/// exact-match key during ingredient resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    /// Price in VND.
    pub price: i64,
    /// Selling unit, e.g. "kg" or "chục".
    pub unit: String,
    pub category_id: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub discount_percent: u8,
    #[serde(default)]
    pub discount_end_time: Option<DateTime<Utc>>,
}

/// A single recipe request, one of the two pipeline modes.
#[derive(Debug, Clone)]
pub enum RecipeRequest {
    /// Suggestion mode: free-text dish guidance built around one main
    /// ingredient, constrained to the given catalog snapshot.
    ByIngredient {
        ingredient: String,
        catalog: Vec<CatalogItem>,
    },
    /// Lookup mode: a structured recipe for a dish, constrained to the
    /// allowed ingredient names.
    ByDishName {
        dish_name: String,
        allowed_names: Vec<String>,
    },
}

/// Lookup-mode provider output after schema validation.
///
/// Only the validator constructs this; a value of this type is known to have
/// passed the fail-closed shape check.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecipe {
    pub name: String,
    pub instructions: String,
    pub ingredients_needed: Vec<String>,
}

/// Outcome of matching one model-asserted ingredient name against the catalog.
///
/// Entries with `item: None` are dropped before assembly; the miss is not an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIngredient {
    pub requested_name: String,
    pub item: Option<CatalogItem>,
}

/// One priced ingredient in a lookup-mode response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub product: CatalogItem,
    /// Placeholder for now; the provider is not asked to estimate amounts.
    pub quantity_description: String,
}

/// Lookup-mode response: a recipe whose every ingredient is a real catalog
/// item with full pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDetails {
    pub name: String,
    pub instructions: String,
    pub ingredients: Vec<RecipeIngredient>,
}

/// Presentation tag for one line of suggestion-mode output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Wrapped in a bold marker on both ends.
    Header,
    /// Starts with a bullet marker.
    Bullet,
    /// Starts with a numeral and a dot.
    Numbered,
    /// Any other non-blank line.
    Plain,
}

/// One tagged line of suggestion-mode output. The text is kept verbatim,
/// markers included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub text: String,
}

/// Suggestion-mode response: conversational text, tagged per line. No catalog
/// resolution or pricing is performed in this mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub text: String,
    pub lines: Vec<ClassifiedLine>,
}
