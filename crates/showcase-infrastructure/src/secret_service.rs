//! Secret service implementation.
//!
//! This module provides a service for loading the advisor's API credentials
//! stored in secret.json, with an optional override from the environment.

use crate::paths::{ServiceType, ShowcasePaths};
use showcase_core::config::{GeminiConfig, SecretConfig};
use showcase_core::secret::SecretService;
use showcase_core::{Result, ShowcaseError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Service for managing secret configuration.
///
/// Reads secret.json once and caches the result. A missing file is not an
/// error: it yields an empty [`SecretConfig`].
///
/// # Example
///
/// ```ignore
/// use showcase_infrastructure::SecretServiceImpl;
/// use showcase_core::secret::SecretService;
///
/// let service = SecretServiceImpl::new(None)?
///     .with_env_api_key(std::env::var("GEMINI_API_KEY").ok());
/// let secrets = service.load_secrets().await?;
/// ```
#[derive(Clone)]
pub struct SecretServiceImpl {
    file_path: PathBuf,
    /// API key taken from the environment; wins over the file.
    env_api_key: Option<String>,
    secrets: Arc<RwLock<Option<SecretConfig>>>,
}

impl SecretServiceImpl {
    /// Creates a new SecretServiceImpl rooted at `base_path` (or the platform
    /// config directory).
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let file_path = ShowcasePaths::new(base_path)
            .get_path(ServiceType::Secret)
            .map_err(|e| ShowcaseError::config(format!("Failed to get secret path: {}", e)))?;

        Ok(Self {
            file_path,
            env_api_key: None,
            secrets: Arc::new(RwLock::new(None)),
        })
    }

    /// Sets an API key that overrides secret.json. Blank values are ignored.
    pub fn with_env_api_key(mut self, api_key: Option<String>) -> Self {
        self.env_api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    async fn read_file(&self) -> Result<SecretConfig> {
        match tokio::fs::read_to_string(&self.file_path).await {
            Ok(content) => serde_json::from_str(&content).map_err(|e| ShowcaseError::Serialization {
                format: "JSON".to_string(),
                message: format!("{} ({})", e, self.file_path.display()),
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "[SecretService] No secret file at {}, using empty secrets",
                    self.file_path.display()
                );
                Ok(SecretConfig::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn apply_env_override(&self, mut config: SecretConfig) -> SecretConfig {
        if let Some(api_key) = &self.env_api_key {
            let model_name = config.gemini.and_then(|g| g.model_name);
            config.gemini = Some(GeminiConfig {
                api_key: api_key.clone(),
                model_name,
            });
        }
        config
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        {
            let cached = self.secrets.read().await;
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = self.apply_env_override(self.read_file().await?);

        let mut cache = self.secrets.write().await;
        *cache = Some(loaded.clone());
        Ok(loaded)
    }

    async fn secret_file_exists(&self) -> bool {
        tokio::fs::try_exists(&self.file_path).await.unwrap_or(false)
    }
}
