//! Version field access for TOML manifests such as `Cargo.toml` or
//! `pyproject.toml`.
//!
//! The key is a dotted path: `package.version` means the `version` entry of
//! the `[package]` table, a bare `version` means a root-level entry.

use toml_edit::{DocumentMut, Formatted, Item, Value};

use crate::error::{BumpError, Result};

/// Read the string value at a dotted `key` path.
pub fn read_field(text: &str, key: &str) -> Result<String> {
    let document = parse(text)?;

    lookup(&document, key)
        .ok_or_else(|| not_found(key))?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| not_a_string(key))
}

/// Replace the string value at a dotted `key` path, leaving every other byte.
///
/// The surrounding whitespace and trailing comment of the value are kept, and
/// a single-quoted value stays single-quoted.
pub fn replace_field(text: &str, key: &str, new_value: &str) -> Result<String> {
    let mut document = parse(text)?;

    let value = lookup_mut(&mut document, key)
        .ok_or_else(|| not_found(key))?
        .as_value_mut()
        .filter(|value| value.is_str())
        .ok_or_else(|| not_a_string(key))?;

    let decor = value.decor().clone();
    *value = Value::String(quoted_like(value, new_value));
    *value.decor_mut() = decor;

    // toml_edit writes bare `\n` line endings
    let updated = document.to_string();
    if text.contains("\r\n") {
        return Ok(updated.replace("\r\n", "\n").replace('\n', "\r\n"));
    }
    Ok(updated)
}

fn parse(text: &str) -> Result<DocumentMut> {
    text.parse::<DocumentMut>()
        .map_err(|e| BumpError::manifest(format!("Invalid TOML: {}", e)))
}

/// Follow a dotted key through tables and inline tables
fn lookup<'a>(document: &'a DocumentMut, key: &str) -> Option<&'a Item> {
    let mut segments = key.split('.');
    let root = document.get(segments.next()?)?;
    segments.try_fold(root, |item, segment| item.get(segment))
}

fn lookup_mut<'a>(document: &'a mut DocumentMut, key: &str) -> Option<&'a mut Item> {
    let mut segments = key.split('.');
    let root = document.get_mut(segments.next()?)?;
    segments.try_fold(root, |item, segment| item.get_mut(segment))
}

fn quoted_like(old: &Value, new_value: &str) -> Formatted<String> {
    let mut formatted = Formatted::new(new_value.to_string());

    let literal = match old {
        Value::String(s) => s
            .as_repr()
            .and_then(|repr| repr.as_raw().as_str())
            .is_some_and(|raw| raw.starts_with('\'')),
        _ => false,
    };
    if literal && !new_value.contains(['\'', '\n', '\r']) {
        if let Ok(Value::String(literal)) = format!("'{}'", new_value).parse::<Value>() {
            formatted = literal;
        }
    }

    formatted
}

fn not_found(key: &str) -> BumpError {
    BumpError::manifest(format!("Field '{}' not found", key))
}

fn not_a_string(key: &str) -> BumpError {
    BumpError::manifest(format!("Field '{}' is not a string", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARGO_TOML: &str = r#"[package]
name = "demo"
version = "0.3.1"   # keep in sync
edition = "2021"

[dependencies]
serde = { version = "1.0", features = ["derive"] }

[dev-dependencies.tempfile]
version = "3.0"
"#;

    #[test]
    fn test_read_field() {
        assert_eq!(read_field(CARGO_TOML, "package.version").unwrap(), "0.3.1");
    }

    #[test]
    fn test_read_field_missing() {
        let err = read_field(CARGO_TOML, "project.version").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_read_field_not_string() {
        let text = "[package]\nversion.workspace = true\n";
        let err = read_field(text, "package.version").unwrap_err();
        assert!(err.to_string().contains("not a string"));
    }

    #[test]
    fn test_read_field_invalid_toml() {
        assert!(matches!(
            read_field("[package\n", "package.version"),
            Err(BumpError::Manifest(_))
        ));
    }

    #[test]
    fn test_replace_field_in_table() {
        let updated = replace_field(CARGO_TOML, "package.version", "0.4.0").unwrap();
        assert_eq!(
            updated,
            CARGO_TOML.replace(r#"version = "0.3.1""#, r#"version = "0.4.0""#)
        );
        assert!(updated.contains(r#"version = "3.0""#));
        assert!(updated.contains("# keep in sync"));
    }

    #[test]
    fn test_replace_field_at_root() {
        let text = "version = '1.2.3'\n\n[tool]\nversion = \"9.9.9\"\n";
        let updated = replace_field(text, "version", "1.3.0").unwrap();
        assert_eq!(updated, "version = '1.3.0'\n\n[tool]\nversion = \"9.9.9\"\n");
    }

    #[test]
    fn test_replace_field_table_not_first() {
        let text =
            "[build-system]\nrequires = []\n\n[project]\nname = \"x\"\nversion = \"0.1.0\"\n";
        let updated = replace_field(text, "project.version", "0.2.0").unwrap();
        assert!(updated.ends_with("version = \"0.2.0\"\n"));
    }

    #[test]
    fn test_replace_field_after_multiline_string() {
        let text = concat!(
            "[package]\nname = \"demo\"\n",
            "description = \"\"\"\n[beta] tool\n\"\"\"\n",
            "version = \"1.0.0\"\n"
        );
        assert_eq!(read_field(text, "package.version").unwrap(), "1.0.0");

        let updated = replace_field(text, "package.version", "1.1.0").unwrap();
        assert_eq!(updated, text.replace("1.0.0", "1.1.0"));
    }

    #[test]
    fn test_replace_field_quoted_key() {
        let text = "[package]\n\"version\" = \"1.0.0\"\n";
        assert_eq!(read_field(text, "package.version").unwrap(), "1.0.0");

        let updated = replace_field(text, "package.version", "1.1.0").unwrap();
        assert_eq!(updated, "[package]\n\"version\" = \"1.1.0\"\n");
    }

    #[test]
    fn test_replace_field_inline_table() {
        let text = "package = { name = \"demo\", version = \"0.1.0\" }\n";
        let updated = replace_field(text, "package.version", "0.2.0").unwrap();
        assert_eq!(updated, "package = { name = \"demo\", version = \"0.2.0\" }\n");
    }

    #[test]
    fn test_replace_field_not_string() {
        let text = "[package]\nversion.workspace = true\n";
        let err = replace_field(text, "package.version", "1.0.0").unwrap_err();
        assert!(err.to_string().contains("not a string"));
    }

    #[test]
    fn test_replace_field_crlf() {
        let text = "[package]\r\nname = \"demo\"\r\nversion = \"1.0.0\"\r\n";
        let updated = replace_field(text, "package.version", "1.0.1").unwrap();
        assert_eq!(updated, "[package]\r\nname = \"demo\"\r\nversion = \"1.0.1\"\r\n");
    }
}
