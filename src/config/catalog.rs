//! Role catalog configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where the role catalog comes from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file; the built-in flight crew is used when unset.
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if !path.is_file() => Err(ValidationError::CatalogFileMissing(
                path.display().to_string(),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_path_is_valid() {
        assert!(CatalogConfig::default().validate().is_ok());
    }

    #[test]
    fn missing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig {
            path: Some(dir.path().join("absent.yaml")),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::CatalogFileMissing(_))
        ));
    }

    #[test]
    fn existing_file_is_accepted() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = CatalogConfig {
            path: Some(file.path().to_path_buf()),
        };
        assert!(config.validate().is_ok());
    }
}
