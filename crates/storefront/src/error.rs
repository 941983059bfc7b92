//! Unified application errors.
//!
//! Each concern (API, persistence, config) has its own `thiserror` type;
//! `AppError` folds them together for the call sites that span concerns,
//! such as view renders.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::store::PersistError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Mock backend request failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// State persistence failed.
    #[error("storage error: {0}")]
    Persist(#[from] PersistError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_source_message() {
        let err = AppError::Api(ApiError::Status {
            status: 503,
            text: "Service Unavailable".to_owned(),
        });
        assert!(err.to_string().contains("503 Service Unavailable"));
    }
}
