//! Unified path management for showcase configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/showcase/          # Config directory
//! ├── config.toml              # Application configuration
//! └── secret.json              # API keys
//! ```

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "showcase";
const CONFIG_FILE_NAME: &str = "config.toml";
const SECRET_FILE_NAME: &str = "secret.json";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// The files the showcase reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Config,
    Secret,
}

impl ServiceType {
    fn file_name(&self) -> &'static str {
        match self {
            ServiceType::Config => CONFIG_FILE_NAME,
            ServiceType::Secret => SECRET_FILE_NAME,
        }
    }
}

/// Resolves showcase paths, optionally under an explicit base directory.
///
/// With no base, files live in the platform config directory
/// (e.g. `~/.config/showcase/`). Tests pass a temporary directory.
#[derive(Debug, Clone, Default)]
pub struct ShowcasePaths {
    base: Option<PathBuf>,
}

impl ShowcasePaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the showcase configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Returns the file path for a service.
    pub fn get_path(&self, service: ServiceType) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(service.file_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_override() {
        let paths = ShowcasePaths::new(Some(Path::new("/tmp/showcase-test")));
        assert_eq!(
            paths.get_path(ServiceType::Secret).unwrap(),
            PathBuf::from("/tmp/showcase-test/secret.json")
        );
        assert_eq!(
            paths.get_path(ServiceType::Config).unwrap(),
            PathBuf::from("/tmp/showcase-test/config.toml")
        );
    }
}
