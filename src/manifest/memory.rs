use std::cell::RefCell;

use super::ManifestStore;
use crate::error::{BumpError, Result};

/// In-memory manifest for testing without touching the filesystem
#[derive(Debug, Default)]
pub struct MemoryManifest {
    version: RefCell<Option<String>>,
    writes: RefCell<Vec<String>>,
}

impl MemoryManifest {
    /// Create a manifest holding `version`
    pub fn new(version: impl Into<String>) -> Self {
        MemoryManifest {
            version: RefCell::new(Some(version.into())),
            writes: RefCell::new(Vec::new()),
        }
    }

    /// Create a manifest with no version field
    pub fn empty() -> Self {
        Self::default()
    }

    /// Current stored version
    pub fn version(&self) -> Option<String> {
        self.version.borrow().clone()
    }

    /// Every value passed to `write_version`, in order
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl ManifestStore for MemoryManifest {
    fn read_version(&self) -> Result<String> {
        self.version
            .borrow()
            .clone()
            .ok_or_else(|| BumpError::manifest("Field 'version' not found"))
    }

    fn write_version(&self, new_version: &str) -> Result<()> {
        self.writes.borrow_mut().push(new_version.to_string());
        *self.version.borrow_mut() = Some(new_version.to_string());
        Ok(())
    }

    fn name(&self) -> String {
        "memory manifest".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_manifest_basic() {
        let manifest = MemoryManifest::new("1.0.0");
        assert_eq!(manifest.read_version().unwrap(), "1.0.0");

        manifest.write_version("1.0.1").unwrap();
        assert_eq!(manifest.version(), Some("1.0.1".to_string()));
        assert_eq!(manifest.writes(), vec!["1.0.1".to_string()]);
    }

    #[test]
    fn test_memory_manifest_empty() {
        let manifest = MemoryManifest::empty();
        assert!(manifest.read_version().is_err());
        assert!(manifest.writes().is_empty());
    }
}
