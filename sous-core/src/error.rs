use thiserror::Error;

use crate::llm::LlmError;

/// Failure modes of the recipe pipeline.
///
/// Every variant aborts the request; none produces a partial response.
/// Ingredient names the model invents are filtered by the resolver and are
/// deliberately not represented here.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// The generative backend could not be reached or refused the call.
    #[error("provider call failed: {0}")]
    Provider(#[from] LlmError),

    /// Provider output could not be parsed into the expected shape: still
    /// fenced, invalid JSON, or valid JSON that is not an object.
    #[error("unusable provider output: {0}")]
    TaintedOutput(String),

    /// Parsed output was missing a required field or had a mistyped one.
    #[error("provider output failed schema validation: {0}")]
    SchemaViolation(String),

    /// The catalog store could not be read.
    #[error("catalog lookup failed: {0}")]
    Catalog(String),
}
