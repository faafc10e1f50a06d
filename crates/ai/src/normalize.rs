//! Best-effort extraction of a JSON object from free text.
//!
//! Models wrap the requested object in prose or code fences. The normalizer
//! slices from the first `{` to the last `}` and parses that strictly. It
//! does not repair JSON and does not validate the shape: callers get whatever
//! fields the model produced, or the endpoint's default payload.

use serde_json::{Value, json};

use crate::result::NormalizeError;

/// Parse the span between the first `{` and the last `}`.
pub fn extract_json_object(text: &str) -> Result<Value, NormalizeError> {
    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Err(NormalizeError::NoObject);
    };
    if start >= end {
        return Err(NormalizeError::NoObject);
    }

    serde_json::from_str(&text[start..=end]).map_err(|e| NormalizeError::Malformed(e.to_string()))
}

/// The extracted object, or `default()` when extraction fails.
pub fn normalize_or_else<F>(text: &str, default: F) -> Value
where
    F: FnOnce() -> Value,
{
    match extract_json_object(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "structured completion unusable; serving default payload");
            default()
        }
    }
}

/// Article payload wrapping the raw completion in a paragraph.
pub fn article_default(topic: &str, raw: &str) -> Value {
    json!({
        "title": format!("Article about {topic}"),
        "content": format!("<p>{raw}</p>"),
        "meta_description": "An article generated by artificial intelligence",
        "keywords": ["AI", "Smart Store"],
    })
}

pub fn size_guide_default() -> Value {
    json!({
        "suggested_size": "L",
        "reason": "We suggest the standard size L.",
    })
}
