//! Loads config.toml.

use crate::paths::{ServiceType, ShowcasePaths};
use showcase_core::config::AppConfig;
use showcase_core::{Result, ShowcaseError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads the application settings file.
///
/// A missing file yields [`AppConfig::default`]; a present but malformed file
/// is an error.
#[derive(Debug, Clone)]
pub struct ConfigService {
    file_path: PathBuf,
}

impl ConfigService {
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let file_path = ShowcasePaths::new(base_path)
            .get_path(ServiceType::Config)
            .map_err(|e| ShowcaseError::config(format!("Failed to get config path: {}", e)))?;
        Ok(Self { file_path })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub async fn load(&self) -> Result<AppConfig> {
        match tokio::fs::read_to_string(&self.file_path).await {
            Ok(content) => {
                let config: AppConfig = toml::from_str(&content)?;
                tracing::debug!("[ConfigService] Loaded {}", self.file_path.display());
                Ok(config)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(AppConfig::default()),
            Err(err) => Err(err.into()),
        }
    }
}
