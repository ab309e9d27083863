//! Exact-match resolution of model-asserted ingredient names.
//!
//! The catalog is ground truth; a name coming back from the model is only a
//! candidate key. A name with no catalog match is filtered out downstream
//! rather than failing the request (fail-soft, unlike the schema check).

use std::collections::HashSet;

use crate::types::{CatalogItem, ResolvedIngredient};

/// Match requested names against a catalog snapshot.
///
/// Matching is exact, case-sensitive and whole-string on `CatalogItem::name`.
/// Duplicate requests collapse to at most one entry per unique catalog item.
/// The result is never longer than the input.
pub fn resolve_ingredients(
    names: &[String],
    catalog: &[CatalogItem],
) -> Vec<ResolvedIngredient> {
    let mut matched: HashSet<&str> = HashSet::new();
    let mut resolved = Vec::with_capacity(names.len());

    for requested in names {
        match catalog.iter().find(|item| item.name == *requested) {
            Some(item) => {
                if matched.insert(item.name.as_str()) {
                    resolved.push(ResolvedIngredient {
                        requested_name: requested.clone(),
                        item: Some(item.clone()),
                    });
                }
            }
            None => {
                tracing::debug!(name = %requested, "requested ingredient not in catalog");
                resolved.push(ResolvedIngredient {
                    requested_name: requested.clone(),
                    item: None,
                });
            }
        }
    }

    resolved
}
