//! Read-only access to the product catalog.
//!
//! The catalog is owned and mutated by the storefront; the pipeline only
//! looks items up by their unique display name. Implemented differently by
//! deployments (database) vs tests and the demo server (in-memory).

use async_trait::async_trait;

use crate::error::RecipeError;
use crate::types::CatalogItem;

/// Read-only view of the product catalog.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch the items whose names exactly match entries of `names`.
    /// Names without a match are simply absent from the result.
    async fn find_by_names(&self, names: &[String]) -> Result<Vec<CatalogItem>, RecipeError>;

    /// Fetch a snapshot of the full catalog.
    async fn all_items(&self) -> Result<Vec<CatalogItem>, RecipeError>;
}

/// In-memory catalog backed by a plain item list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<CatalogItem>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn find_by_names(&self, names: &[String]) -> Result<Vec<CatalogItem>, RecipeError> {
        Ok(self
            .items
            .iter()
            .filter(|item| names.iter().any(|name| *name == item.name))
            .cloned()
            .collect())
    }

    async fn all_items(&self) -> Result<Vec<CatalogItem>, RecipeError> {
        Ok(self.items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            price: 10_000,
            unit: "kg".to_string(),
            category_id: "cat-1".to_string(),
            stock: 3,
            discount_percent: 0,
            discount_end_time: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_names_exact_match_only() {
        let store = InMemoryCatalog::new(vec![item("p1", "Cà chua"), item("p2", "Trứng")]);

        let found = store
            .find_by_names(&["Trứng".to_string(), "Bò".to_string()])
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Trứng");
    }

    #[tokio::test]
    async fn test_all_items_returns_snapshot() {
        let store = InMemoryCatalog::new(vec![item("p1", "Cà chua")]);

        let items = store.all_items().await.unwrap();
        assert_eq!(items.len(), 1);
    }
}
