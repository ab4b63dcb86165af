//! Version field access for JSON manifests such as `package.json`.
//!
//! Reading goes through `serde_json`; writing splices the new value into the
//! original text so indentation, key order and the trailing newline survive.

use std::ops::Range;

use serde_json::Value;

use crate::error::{BumpError, Result};

/// Read the string value of a top-level `key`.
pub fn read_field(text: &str, key: &str) -> Result<String> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| BumpError::manifest(format!("Invalid JSON: {}", e)))?;

    let object = document
        .as_object()
        .ok_or_else(|| BumpError::manifest("Top-level JSON value is not an object"))?;

    match object.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(BumpError::manifest(format!(
            "Field '{}' is not a string",
            key
        ))),
        None => Err(BumpError::manifest(format!("Field '{}' not found", key))),
    }
}

/// Replace the string value of a top-level `key`, leaving every other byte.
pub fn replace_field(text: &str, key: &str, new_value: &str) -> Result<String> {
    let current = read_field(text, key)?;
    let span = locate_top_level_string(text, key)
        .filter(|span| text[span.clone()] == current)
        .ok_or_else(|| {
            BumpError::manifest(format!("Cannot locate field '{}' for rewriting", key))
        })?;

    let mut updated = String::with_capacity(text.len() + new_value.len());
    updated.push_str(&text[..span.start]);
    updated.push_str(new_value);
    updated.push_str(&text[span.end..]);
    Ok(updated)
}

/// Byte range of the contents (without quotes) of the string value stored
/// under `key` in the root object.
///
/// Keys inside nested objects or arrays are skipped, so a `"version"` under
/// `dependencies` or `packages` is never matched.
pub fn locate_top_level_string(text: &str, key: &str) -> Option<Range<usize>> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'[' => {
                depth += 1;
                i += 1;
            }
            b'}' | b']' => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            b'"' => {
                let end = string_end(bytes, i)?;
                let is_key_match = depth == 1 && &text[i + 1..end] == key;
                i = end + 1;

                if !is_key_match {
                    continue;
                }

                // A matching string followed by ':' is the key; otherwise it
                // was a value that happens to equal the key name.
                let colon = skip_whitespace(bytes, i);
                if bytes.get(colon) != Some(&b':') {
                    continue;
                }

                let value_start = skip_whitespace(bytes, colon + 1);
                if bytes.get(value_start) != Some(&b'"') {
                    return None;
                }
                let value_end = string_end(bytes, value_start)?;
                return Some(value_start + 1..value_end);
            }
            _ => i += 1,
        }
    }

    None
}

/// Index of the quote closing the string that opens at `start`.
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut j = start + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b'"' => return Some(j),
            _ => j += 1,
        }
    }
    None
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKAGE_JSON: &str = r#"{
  "name": "demo",
  "version": "1.0.0",
  "private": true,
  "dependencies": {
    "left-pad": "^1.3.0"
  }
}
"#;

    #[test]
    fn test_read_field() {
        assert_eq!(read_field(PACKAGE_JSON, "version").unwrap(), "1.0.0");
    }

    #[test]
    fn test_read_field_missing() {
        let err = read_field(r#"{"name": "demo"}"#, "version").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_read_field_not_string() {
        let err = read_field(r#"{"version": 1}"#, "version").unwrap_err();
        assert!(err.to_string().contains("not a string"));
    }

    #[test]
    fn test_read_field_invalid_json() {
        let err = read_field("{ not json", "version").unwrap_err();
        assert!(matches!(err, BumpError::Manifest(_)));
    }

    #[test]
    fn test_read_field_root_not_object() {
        assert!(read_field(r#"["1.0.0"]"#, "version").is_err());
    }

    #[test]
    fn test_replace_field_preserves_formatting() {
        let updated = replace_field(PACKAGE_JSON, "version", "1.1.0").unwrap();
        assert_eq!(updated, PACKAGE_JSON.replace("1.0.0", "1.1.0"));
        assert!(updated.ends_with("}\n"));
    }

    #[test]
    fn test_replace_field_skips_nested_keys() {
        let text = r#"{
    "name": "lock",
    "packages": { "": { "version": "1.0.0" } },
    "version": "1.0.0"
}"#;
        let updated = replace_field(text, "version", "2.0.0").unwrap();
        assert!(updated.contains(r#""": { "version": "1.0.0" }"#));
        assert!(updated.contains(r#""version": "2.0.0"
}"#));
    }

    #[test]
    fn test_replace_field_ignores_values_named_like_key() {
        let text = r#"{"keywords": ["version"], "label": "version", "version": "0.1.0"}"#;
        let updated = replace_field(text, "version", "0.2.0").unwrap();
        assert_eq!(
            updated,
            r#"{"keywords": ["version"], "label": "version", "version": "0.2.0"}"#
        );
    }

    #[test]
    fn test_replace_field_handles_escaped_quotes_before_key() {
        let text = r#"{"description": "say \"hi\" {", "version": "3.0.0"}"#;
        let updated = replace_field(text, "version", "3.0.1").unwrap();
        assert_eq!(
            updated,
            r#"{"description": "say \"hi\" {", "version": "3.0.1"}"#
        );
    }

    #[test]
    fn test_locate_top_level_string_non_string_value() {
        assert_eq!(locate_top_level_string(r#"{"version": 3}"#, "version"), None);
    }
}
