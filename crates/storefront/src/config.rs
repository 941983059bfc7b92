//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `STOREFRONT_API_BASE` - Base URL of the mock REST backend
//!   (default: `http://localhost:3000`)
//! - `STOREFRONT_STATE_DIR` - Directory holding persisted state files
//!   (default: `.urban-gent`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the mock REST backend.
    pub api_base: Url,
    /// Directory holding the persisted state files.
    pub state_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base = get_env_or_default("STOREFRONT_API_BASE", "http://localhost:3000");
        let state_dir = get_env_or_default("STOREFRONT_STATE_DIR", ".urban-gent");
        Self::build(&api_base, &state_dir)
    }

    /// Build a configuration from raw values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `api_base` is not a valid URL.
    pub fn build(api_base: &str, state_dir: &str) -> Result<Self, ConfigError> {
        let api_base = api_base.parse::<Url>().map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_API_BASE".to_owned(), e.to_string())
        })?;

        Ok(Self {
            api_base,
            state_dir: PathBuf::from(state_dir),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
