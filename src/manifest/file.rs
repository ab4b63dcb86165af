use std::fs;
use std::path::{Path, PathBuf};

use super::{ManifestFormat, ManifestStore};
use crate::config::ManifestConfig;
use crate::error::{BumpError, Result};

/// A manifest file on disk
#[derive(Debug, Clone, PartialEq)]
pub struct FileManifest {
    path: PathBuf,
    format: ManifestFormat,
    key: String,
}

impl FileManifest {
    /// Create a manifest handle using the format's default key
    pub fn new(path: impl Into<PathBuf>, format: ManifestFormat) -> Self {
        let key = format.default_key().to_string();
        FileManifest {
            path: path.into(),
            format,
            key,
        }
    }

    /// Use a custom key instead of the format default
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Build from configuration, optionally overriding the configured path.
    ///
    /// The format comes from `manifest.format` when set, otherwise from the
    /// file extension.
    pub fn from_config(config: &ManifestConfig, path_override: Option<&Path>) -> Result<Self> {
        let path = path_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.path.clone());

        let format = match config.format.as_deref() {
            Some(name) => ManifestFormat::from_name(name)?,
            None => ManifestFormat::from_path(&path)?,
        };

        let manifest = FileManifest::new(path, format);
        Ok(match config.key.as_deref() {
            Some(key) => manifest.with_key(key),
            None => manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ManifestFormat {
        self.format
    }

    /// Directory containing the manifest, used to find its git repository
    pub fn directory(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn read_text(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            BumpError::manifest(format!("Cannot read {}: {}", self.path.display(), e))
        })
    }

    fn with_context(&self, err: BumpError) -> BumpError {
        match err {
            BumpError::Manifest(msg) => {
                BumpError::manifest(format!("{}: {}", self.path.display(), msg))
            }
            other => other,
        }
    }
}

impl ManifestStore for FileManifest {
    fn read_version(&self) -> Result<String> {
        let text = self.read_text()?;
        self.format
            .read_field(&text, &self.key)
            .map_err(|e| self.with_context(e))
    }

    fn write_version(&self, new_version: &str) -> Result<()> {
        let text = self.read_text()?;
        let updated = self
            .format
            .replace_field(&text, &self.key, new_version)
            .map_err(|e| self.with_context(e))?;

        fs::write(&self.path, updated).map_err(|e| {
            BumpError::manifest(format!("Cannot write {}: {}", self.path.display(), e))
        })
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_and_write_json_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "{\n  \"name\": \"app\",\n  \"version\": \"1.0.0\"\n}\n").unwrap();

        let manifest = FileManifest::new(&path, ManifestFormat::Json);
        assert_eq!(manifest.read_version().unwrap(), "1.0.0");

        manifest.write_version("1.1.0").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"name\": \"app\",\n  \"version\": \"1.1.0\"\n}\n"
        );
    }

    #[test]
    fn test_missing_file_is_manifest_error() {
        let dir = TempDir::new().unwrap();
        let manifest = FileManifest::new(dir.path().join("package.json"), ManifestFormat::Json);

        let err = manifest.read_version().unwrap_err();
        assert!(matches!(err, BumpError::Manifest(_)));
        assert!(err.to_string().contains("Cannot read"));
    }

    #[test]
    fn test_missing_field_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "[package]\nname = \"x\"\n").unwrap();

        let manifest = FileManifest::new(&path, ManifestFormat::Toml);
        let msg = manifest.read_version().unwrap_err().to_string();
        assert!(msg.contains("Cargo.toml"));
        assert!(msg.contains("package.version"));
    }

    #[test]
    fn test_from_config_infers_format_and_key() {
        let config = ManifestConfig::default();
        let manifest = FileManifest::from_config(&config, Some(Path::new("Cargo.toml"))).unwrap();
        assert_eq!(manifest.format(), ManifestFormat::Toml);
        assert_eq!(manifest.path(), Path::new("Cargo.toml"));

        let manifest = FileManifest::from_config(&config, None).unwrap();
        assert_eq!(manifest.format(), ManifestFormat::Json);
    }

    #[test]
    fn test_from_config_custom_key() {
        let config = ManifestConfig {
            path: PathBuf::from("pyproject.toml"),
            format: None,
            key: Some("project.version".to_string()),
        };
        let manifest = FileManifest::from_config(&config, None).unwrap();
        assert_eq!(
            manifest,
            FileManifest::new("pyproject.toml", ManifestFormat::Toml).with_key("project.version")
        );
    }

    #[test]
    fn test_directory() {
        assert_eq!(
            FileManifest::new("package.json", ManifestFormat::Json).directory(),
            PathBuf::from(".")
        );
        assert_eq!(
            FileManifest::new("web/package.json", ManifestFormat::Json).directory(),
            PathBuf::from("web")
        );
    }
}
