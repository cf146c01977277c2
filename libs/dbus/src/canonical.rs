//! Canonical JSON encoding for structured wire slots.
//!
//! Structured fields (the metadata object, the predecessor id list) ride
//! single string slots. Independently built consumers may compare the
//! encoded bytes rather than decoded values, so the encoding is part of
//! the wire contract and is fixed:
//!
//! - object keys sorted lexicographically by Unicode code point
//! - no insignificant whitespace
//! - `"` `\` and control characters escaped, everything else verbatim

use serde_json::{Map, Value};

/// Produces the canonical encoding of a JSON value.
#[must_use]
pub fn to_canonical(value: &Value) -> String {
    match value {
        Value::Object(map) => object_to_canonical(map),
        Value::Array(arr) => {
            let inner: Vec<String> = arr.iter().map(to_canonical).collect();
            format!("[{}]", inner.join(","))
        }
        Value::String(s) => format!("\"{}\"", escape_json_string(s)),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
    }
}

/// Produces the canonical encoding of a JSON object, keys sorted.
#[must_use]
pub fn object_to_canonical(map: &Map<String, Value>) -> String {
    let mut pairs: Vec<_> = map.iter().collect();
    pairs.sort_by_key(|(k, _)| *k);
    let inner: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("\"{}\":{}", escape_json_string(k), to_canonical(v)))
        .collect();
    format!("{{{}}}", inner.join(","))
}

fn escape_json_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keys_sorted() {
        let value = json!({"b": 2, "a": 1, "c": {"z": true, "y": false}});
        assert_eq!(
            to_canonical(&value),
            r#"{"a":1,"b":2,"c":{"y":false,"z":true}}"#
        );
    }

    #[test]
    fn test_no_whitespace() {
        let value = json!({"env": "prod"});
        assert_eq!(to_canonical(&value), r#"{"env":"prod"}"#);
    }

    #[test]
    fn test_array_order_preserved() {
        let value = json!(["evt-2", "evt-0", "evt-1"]);
        assert_eq!(to_canonical(&value), r#"["evt-2","evt-0","evt-1"]"#);
    }

    #[test]
    fn test_string_escaping() {
        let value = json!({"k": "line1\nline2\t\"quoted\"\\"});
        assert_eq!(
            to_canonical(&value),
            r#"{"k":"line1\nline2\t\"quoted\"\\"}"#
        );
    }

    #[test]
    fn test_control_chars_escaped() {
        let value = json!("\u{1}");
        assert_eq!(to_canonical(&value), "\"\\u0001\"");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(to_canonical(&json!(null)), "null");
        assert_eq!(to_canonical(&json!(true)), "true");
        assert_eq!(to_canonical(&json!(42)), "42");
        assert_eq!(to_canonical(&json!([])), "[]");
        assert_eq!(to_canonical(&json!({})), "{}");
    }

    #[test]
    fn test_canonical_is_valid_json() {
        let value = json!({"nested": {"list": [1, "two", null], "flag": true}});
        let encoded = to_canonical(&value);
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, value);
    }
}
