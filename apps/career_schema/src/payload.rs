//! Turning raw model text into a validated contract.
//!
//! Model responses sometimes arrive wrapped in a markdown code fence, and the
//! function that produced them may hand back an invocation envelope instead of
//! the bare payload: either an error report (`errorType` / `errorMessage`) or a
//! `{ "statusCode": .., "body": "<json string>" }` wrapper.

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::ValidationOptions;
use crate::contract::OutputContract;
use crate::error::PayloadError;

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let stripped = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match stripped {
        Some(inner) => {
            let inner = inner.trim_start();
            inner.strip_suffix("```").map(str::trim).unwrap_or(inner)
        }
        None => text,
    }
}

/// Parses model text into a JSON value, unwrapping an invocation envelope.
pub fn decode_payload(text: &str) -> Result<Value, PayloadError> {
    let value: Value = serde_json::from_str(strip_json_fences(text))?;
    if let Some(map) = value.as_object() {
        if let Some(unwrapped) = unwrap_envelope(map) {
            return unwrapped;
        }
    }
    Ok(value)
}

/// `None` when `map` is not an envelope and should be used as is.
fn unwrap_envelope(map: &Map<String, Value>) -> Option<Result<Value, PayloadError>> {
    if map.contains_key("errorMessage") || map.contains_key("errorType") {
        let text = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string()
        };
        return Some(Err(PayloadError::Upstream {
            error_type: text("errorType"),
            message: text("errorMessage"),
        }));
    }

    let body = map.get("body")?.as_str()?;
    debug!(bytes = body.len(), "unwrapping string body envelope");
    Some(serde_json::from_str(strip_json_fences(body)).map_err(PayloadError::from))
}

/// Decodes `text` and validates it as contract `T`.
pub fn parse_payload<T: OutputContract>(
    text: &str,
    options: &ValidationOptions,
) -> Result<T, PayloadError> {
    let value = decode_payload(text)?;
    Ok(T::validate_with(&value, options)?)
}
