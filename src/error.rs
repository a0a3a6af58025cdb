//! Error types for the ReadMe API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use readme_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid ReadMe API token.")]
    EmptyApiToken,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide an absolute URL with an http or https scheme (e.g., 'https://dash.readme.com/api/v1').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The request timeout is invalid.
    #[error("Invalid request timeout. The timeout must be greater than zero.")]
    InvalidTimeout,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
