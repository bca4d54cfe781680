//! Pulls the reply object out of free-form model output.

use crate::error::{RelayError, RelayResult};
use serde_json::Value;
use shared::models::{ChatResponse, Emotion};

pub fn parse_reply(raw: &str) -> RelayResult<ChatResponse> {
    let span = extract_json_span(raw).ok_or_else(|| RelayError::NoJsonObject {
        raw: raw.to_string(),
    })?;
    let value: Value = serde_json::from_str(span).map_err(|source| RelayError::InvalidJson {
        source,
        raw: raw.to_string(),
    })?;
    Ok(reply_from_value(&value))
}

pub fn extract_json_span(text: &str) -> Option<&str> {
    find_balanced_object(text).or_else(|| find_greedy_span(text))
}

/// Earliest-starting `{ ... }` span whose braces balance, in one linear pass.
/// Braces inside JSON strings are ignored.
pub fn find_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut open = Vec::new();
    let mut earliest: Option<(usize, usize)> = None;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        let pos = start + offset;
        if in_string {
            if escaped {
                escaped = false;
            } else if *byte == b'\\' {
                escaped = true;
            } else if *byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => open.push(pos),
            b'}' => {
                if let Some(begin) = open.pop() {
                    // The outermost brace closed: nothing can start earlier.
                    if open.is_empty() {
                        return Some(&text[begin..=pos]);
                    }
                    if earliest.is_none_or(|(b, _)| begin < b) {
                        earliest = Some((begin, pos));
                    }
                }
            }
            _ => {}
        }
    }
    earliest.map(|(begin, end)| &text[begin..=end])
}

pub fn find_greedy_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

pub fn reply_from_value(value: &Value) -> ChatResponse {
    let message = match value.get("message") {
        Some(Value::String(s)) => s.clone(),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    };

    let emotion = match value.get("emotion") {
        Some(e @ Value::Object(_)) => Emotion {
            joy: weight(e, "joy"),
            anger: weight(e, "anger"),
            sadness: weight(e, "sadness"),
            fun: weight(e, "fun"),
        },
        _ => Emotion::default(),
    };

    ChatResponse::new(message, emotion)
}

// Not clamped, but NaN and infinities are dropped: they would serialize as null.
fn weight(emotion: &Value, key: &str) -> f64 {
    let value = match emotion.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}
