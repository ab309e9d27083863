//! End-to-end pipeline tests driven by the fake provider.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sous_core::llm::{FakeProvider, LlmError, LlmProvider};
use sous_core::{CatalogItem, InMemoryCatalog, LineKind, RecipeError, RecipePipeline};

fn catalog_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: "p1".to_string(),
            name: "Cà chua".to_string(),
            price: 10_000,
            unit: "kg".to_string(),
            category_id: "rau-cu".to_string(),
            stock: 20,
            discount_percent: 0,
            discount_end_time: None,
        },
        CatalogItem {
            id: "p2".to_string(),
            name: "Trứng".to_string(),
            price: 30_000,
            unit: "chục".to_string(),
            category_id: "trung".to_string(),
            stock: 50,
            discount_percent: 0,
            discount_end_time: None,
        },
    ]
}

fn pipeline_with(provider: impl LlmProvider + 'static) -> RecipePipeline {
    RecipePipeline::new(
        Arc::new(provider),
        Arc::new(InMemoryCatalog::new(catalog_items())),
    )
}

fn allowed_names() -> Vec<String> {
    vec!["Cà chua".to_string(), "Trứng".to_string()]
}

#[tokio::test]
async fn test_lookup_success_with_fenced_json() {
    let provider = FakeProvider::with_response(
        "Trứng chiên cà chua",
        "```json\n{\"name\":\"Trứng chiên cà chua\",\"instructions\":\"1. Đập trứng...\\n2. Xào cà chua...\",\"ingredients_needed\":[\"Trứng\",\"Cà chua\"]}\n```",
    );

    let details = pipeline_with(provider)
        .lookup("Trứng chiên cà chua", allowed_names())
        .await
        .unwrap();

    assert_eq!(details.name, "Trứng chiên cà chua");
    assert_eq!(details.ingredients.len(), 2);

    let egg = details
        .ingredients
        .iter()
        .find(|i| i.product.name == "Trứng")
        .unwrap();
    assert_eq!(egg.product.price, 30_000);
    assert_eq!(egg.product.unit, "chục");
    assert_eq!(egg.quantity_description, "...");
}

#[tokio::test]
async fn test_lookup_filters_hallucinated_ingredient() {
    // "Nước dừa" is not in the catalog; the request must still succeed with
    // exactly the two real items.
    let provider = FakeProvider::with_response(
        "Trứng chiên cà chua",
        "{\"name\":\"Trứng chiên cà chua\",\"instructions\":\"1. Nấu.\",\"ingredients_needed\":[\"Trứng\",\"Cà chua\",\"Nước dừa\"]}",
    );

    let details = pipeline_with(provider)
        .lookup("Trứng chiên cà chua", allowed_names())
        .await
        .unwrap();

    assert_eq!(details.ingredients.len(), 2);
    assert!(details
        .ingredients
        .iter()
        .all(|i| i.product.name != "Nước dừa"));
}

#[tokio::test]
async fn test_lookup_fails_closed_on_prose() {
    let provider = FakeProvider::new()
        .with_default_response("Xin lỗi, tôi không thể trả lời dưới dạng JSON.");

    let result = pipeline_with(provider)
        .lookup("Trứng chiên cà chua", allowed_names())
        .await;

    assert!(matches!(result, Err(RecipeError::TaintedOutput(_))));
}

#[tokio::test]
async fn test_lookup_fails_closed_on_schema_violation() {
    let provider = FakeProvider::new().with_default_response("{\"name\":\"X\"}");

    let result = pipeline_with(provider)
        .lookup("Trứng chiên cà chua", allowed_names())
        .await;

    assert!(matches!(result, Err(RecipeError::SchemaViolation(_))));
}

#[tokio::test]
async fn test_lookup_propagates_provider_error() {
    // No responses registered and no default: the fake provider fails.
    let provider = FakeProvider::new();

    let result = pipeline_with(provider)
        .lookup("Trứng chiên cà chua", allowed_names())
        .await;

    assert!(matches!(result, Err(RecipeError::Provider(_))));
}

#[tokio::test]
async fn test_suggest_classifies_lines_without_resolution() {
    let provider = FakeProvider::with_response(
        "cà chua",
        "**Trứng chiên cà chua**\n- Trứng\n- Cà chua\n1. Đập trứng\nChúc ngon miệng!",
    );

    let suggestion = pipeline_with(provider)
        .suggest("cà chua", catalog_items())
        .await
        .unwrap();

    assert_eq!(suggestion.lines.len(), 5);
    assert_eq!(suggestion.lines[0].kind, LineKind::Header);
    assert_eq!(suggestion.lines[1].kind, LineKind::Bullet);
    assert_eq!(suggestion.lines[3].kind, LineKind::Numbered);
    assert_eq!(suggestion.lines[4].kind, LineKind::Plain);
    assert!(suggestion.text.contains("Trứng chiên cà chua"));
}

#[derive(Debug)]
struct HangingProvider;

#[async_trait]
impl LlmProvider for HangingProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(String::new())
    }

    fn provider_name(&self) -> &'static str {
        "hanging"
    }

    fn model_name(&self) -> &str {
        "hanging-model"
    }
}

#[tokio::test(start_paused = true)]
async fn test_provider_call_is_bounded_by_timeout() {
    let pipeline =
        pipeline_with(HangingProvider).with_provider_timeout(Duration::from_millis(50));

    let result = pipeline
        .lookup("Trứng chiên cà chua", allowed_names())
        .await;

    assert!(matches!(
        result,
        Err(RecipeError::Provider(LlmError::Timeout(_)))
    ));
}
