//! Cleanup and strict parsing of raw provider output.
//!
//! Models habitually wrap JSON replies in Markdown code fences even when told
//! not to. Stripping removes one leading and one trailing fence line plus
//! surrounding whitespace; applying it to already clean text is a no-op.

use serde_json::Value;

use crate::error::RecipeError;

/// Strip a leading and a trailing code-fence line from provider output.
///
/// The leading fence may carry a language label ("```json"). Idempotent:
/// stripping already stripped text returns it unchanged.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // Drop the remainder of the fence line, label included.
        text = match rest.find('\n') {
            Some(idx) => &rest[idx + 1..],
            None => "",
        };
    }

    let trimmed = text.trim_end();
    if let Some(rest) = trimmed.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

/// Strict parse of lookup-mode output.
///
/// Anything that is not a single JSON object taints the whole request; no
/// partial or best-effort structure is ever returned.
pub fn parse_object(text: &str) -> Result<Value, RecipeError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| RecipeError::TaintedOutput(format!("invalid JSON: {e}")))?;

    if !value.is_object() {
        return Err(RecipeError::TaintedOutput(format!(
            "expected a JSON object, got {}",
            json_type_name(&value)
        )));
    }

    Ok(value)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
