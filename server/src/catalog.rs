//! Catalog loading for the demo server.
//!
//! Real deployments back [`sous_core::CatalogStore`] with the storefront
//! database. Here the catalog comes from a JSON file (`SOUS_CATALOG_PATH`) or
//! falls back to a small built-in seed so the server runs out of the box.

use std::env;
use std::fs;
use std::sync::Arc;

use sous_core::{CatalogItem, InMemoryCatalog};

pub fn load_from_env() -> Arc<InMemoryCatalog> {
    if let Ok(path) = env::var("SOUS_CATALOG_PATH") {
        match load_from_file(&path) {
            Ok(items) => {
                tracing::info!(path = %path, count = items.len(), "loaded catalog from file");
                return Arc::new(InMemoryCatalog::new(items));
            }
            Err(e) => {
                tracing::warn!(path = %path, "failed to load catalog ({}), using seed data", e);
            }
        }
    }

    let items = seed_items();
    tracing::info!(count = items.len(), "using built-in seed catalog");
    Arc::new(InMemoryCatalog::new(items))
}

fn load_from_file(path: &str) -> Result<Vec<CatalogItem>, String> {
    let contents = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

fn seed_items() -> Vec<CatalogItem> {
    let seed: &[(&str, &str, i64, &str, &str)] = &[
        ("p1", "Cà chua", 10_000, "kg", "rau-cu"),
        ("p2", "Trứng", 30_000, "chục", "trung"),
        ("p3", "Gà", 75_000, "kg", "thit"),
        ("p4", "Hành lá", 5_000, "bó", "rau-cu"),
        ("p5", "Nước mắm", 40_000, "chai", "gia-vi"),
        ("p6", "Gạo", 18_000, "kg", "gao"),
        ("p7", "Tỏi", 8_000, "kg", "gia-vi"),
    ];

    seed.iter()
        .map(|(id, name, price, unit, category)| CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            price: *price,
            unit: unit.to_string(),
            category_id: category.to_string(),
            stock: 100,
            discount_percent: 0,
            discount_end_time: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_names_are_unique() {
        let items = seed_items();
        let mut names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), items.len());
    }
}
