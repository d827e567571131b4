//! Secret management service trait.
//!
//! Defines the interface for loading the advisor's API credentials.

use crate::config::SecretConfig;

/// Service for managing secret configuration.
///
/// # Security Note
///
/// Implementations should ensure that secrets are never logged or exposed in
/// error messages.
#[async_trait::async_trait]
pub trait SecretService: Send + Sync {
    /// Loads the secret configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(SecretConfig)`: Successfully loaded secrets
    /// - `Err(_)`: Failed to load (error message should not contain secrets)
    async fn load_secrets(&self) -> crate::error::Result<SecretConfig>;

    /// Checks if the secret file exists.
    async fn secret_file_exists(&self) -> bool;
}
