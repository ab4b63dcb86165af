//! Manifest access layer
//!
//! The workflow reads the current version from, and writes the new version
//! to, a [`ManifestStore`]. Implementations:
//!
//! - [`file::FileManifest`]: a JSON or TOML manifest on disk
//! - [`memory::MemoryManifest`]: an in-memory store for tests

pub mod file;
pub mod json_doc;
pub mod memory;
pub mod toml_doc;

pub use file::FileManifest;
pub use memory::MemoryManifest;

use std::fmt;
use std::path::Path;

use crate::error::{BumpError, Result};

/// Access to the authoritative version string of a project.
pub trait ManifestStore {
    /// Read the raw version string.
    ///
    /// # Returns
    /// * `Ok(String)` - The value exactly as stored, not yet validated
    /// * `Err` - If the manifest is unreadable or has no version field
    fn read_version(&self) -> Result<String>;

    /// Replace the version string, preserving the rest of the manifest.
    fn write_version(&self, new_version: &str) -> Result<()>;

    /// Human-readable name used in messages (usually the file path)
    fn name(&self) -> String;
}

/// Syntax of a manifest file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl ManifestFormat {
    /// Parse a format name from configuration (`json` or `toml`).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ManifestFormat::Json),
            "toml" => Ok(ManifestFormat::Toml),
            other => Err(BumpError::config(format!(
                "Unknown manifest format '{}' (expected 'json' or 'toml')",
                other
            ))),
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        Self::from_name(extension).map_err(|_| {
            BumpError::config(format!(
                "Cannot infer manifest format from '{}'; set manifest.format",
                path.display()
            ))
        })
    }

    /// Key used when none is configured.
    pub fn default_key(&self) -> &'static str {
        match self {
            ManifestFormat::Json => "version",
            ManifestFormat::Toml => "package.version",
        }
    }

    pub fn read_field(&self, text: &str, key: &str) -> Result<String> {
        match self {
            ManifestFormat::Json => json_doc::read_field(text, key),
            ManifestFormat::Toml => toml_doc::read_field(text, key),
        }
    }

    pub fn replace_field(&self, text: &str, key: &str, new_value: &str) -> Result<String> {
        match self {
            ManifestFormat::Json => json_doc::replace_field(text, key, new_value),
            ManifestFormat::Toml => toml_doc::replace_field(text, key, new_value),
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestFormat::Json => f.write_str("json"),
            ManifestFormat::Toml => f.write_str("toml"),
        }
    }
}
