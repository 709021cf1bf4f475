use serde::Deserialize;

use crate::domain::{ApiKey, MessageText, SendText, SendTextResponse, Target};

const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

// Every field is kept as a raw value: only `success` decides the outcome, and
// a side field of an unexpected type must not turn an accepted send into a
// parse failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendTextJsonResponse {
    #[serde(default)]
    success: serde_json::Value,
    #[serde(default)]
    error: serde_json::Value,
    #[serde(default)]
    text_id: serde_json::Value,
    #[serde(default)]
    quota_remaining: serde_json::Value,
}

/// Decoded `text` response: either accepted, or rejected with the API's reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendTextOutcome {
    Accepted(SendTextResponse),
    Rejected { error: String },
}

pub fn encode_send_text_form(request: &SendText) -> Vec<(String, String)> {
    vec![
        (
            Target::FIELD.to_owned(),
            request.target().as_str().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            request.message().as_str().to_owned(),
        ),
        (
            ApiKey::FIELD.to_owned(),
            request.api_key().as_str().to_owned(),
        ),
    ]
}

pub fn decode_send_text_json_response(json: &str) -> Result<SendTextOutcome, TransportError> {
    // A struct also deserializes from a JSON array, so require an object first.
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
    let parsed: SendTextJsonResponse =
        serde_json::from_value(serde_json::Value::Object(object))?;

    if !is_truthy(&parsed.success) {
        return Ok(SendTextOutcome::Rejected {
            error: error_text(parsed.error),
        });
    }

    Ok(SendTextOutcome::Accepted(SendTextResponse {
        text_id: text_id(parsed.text_id),
        quota_remaining: quota_remaining(&parsed.quota_remaining),
    }))
}

fn error_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => UNKNOWN_ERROR.to_owned(),
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}

fn text_id(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn quota_remaining(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|n| n.fract() == 0.0 && n.abs() < i64::MAX as f64)
                .map(|n| n as i64)
        }),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

// Loose truthiness: the API documents a boolean, but a missing field, `0`,
// `""` or an empty container all count as failure.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(text) => !text.is_empty(),
        serde_json::Value::Array(items) => !items.is_empty(),
        serde_json::Value::Object(fields) => !fields.is_empty(),
    }
}
