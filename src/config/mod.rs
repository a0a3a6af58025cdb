//! Configuration types for the ReadMe API client.
//!
//! This module provides the configuration types used to initialize the
//! client for API communication with ReadMe.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ReadmeConfig`]: The configuration struct holding all client settings
//! - [`ReadmeConfigBuilder`]: A builder for constructing [`ReadmeConfig`] instances
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`ApiUrl`]: A validated base URL
//!
//! # Example
//!
//! ```rust
//! use readme_api::{ApiToken, ApiUrl, ReadmeConfig};
//!
//! let config = ReadmeConfig::builder()
//!     .api_token(ApiToken::new("rdme_xxx").unwrap())
//!     .api_url(ApiUrl::new("http://readme-test.local/api/v1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url().as_ref(), "http://readme-test.local/api/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, ApiUrl};

use std::time::Duration;

use crate::clients::RequestOptions;
use crate::error::ConfigError;

/// Default base URL for the ReadMe API.
pub const README_API_URL: &str = "https://dash.readme.com/api/v1";

/// Default base URL for the ReadMe image upload host.
pub const IMAGE_API_URL: &str = "https://dash.readme.com/api/images";

/// Default timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the ReadMe API client.
///
/// # Thread Safety
///
/// `ReadmeConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use readme_api::{ApiToken, ReadmeConfig, RequestOptions};
///
/// let config = ReadmeConfig::builder()
///     .api_token(ApiToken::new("rdme_xxx").unwrap())
///     .timeout(Duration::from_secs(30))
///     .default_options(RequestOptions::new().version("1.1.0"))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Duration::from_secs(30));
/// assert_eq!(config.default_options().version.as_deref(), Some("1.1.0"));
/// ```
#[derive(Clone, Debug)]
pub struct ReadmeConfig {
    api_token: ApiToken,
    api_url: ApiUrl,
    image_api_url: ApiUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
    default_options: RequestOptions,
}

impl ReadmeConfig {
    /// Creates a new builder for constructing a `ReadmeConfig`.
    #[must_use]
    pub fn builder() -> ReadmeConfigBuilder {
        ReadmeConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the base URL for API requests.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the base URL of the image upload host.
    #[must_use]
    pub const fn image_api_url(&self) -> &ApiUrl {
        &self.image_api_url
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the client-level request options.
    ///
    /// Per-call options are merged on top of these.
    #[must_use]
    pub const fn default_options(&self) -> &RequestOptions {
        &self.default_options
    }
}

// Verify ReadmeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReadmeConfig>();
};

/// Builder for constructing [`ReadmeConfig`] instances.
///
/// The only required field is `api_token`.
///
/// # Defaults
///
/// - `api_url`: [`README_API_URL`]
/// - `image_api_url`: [`IMAGE_API_URL`]
/// - `timeout`: [`DEFAULT_TIMEOUT`] (10 seconds)
/// - `user_agent_prefix`: `None`
/// - `default_options`: empty (no version pin, first page, 100 per page)
#[derive(Debug, Default)]
pub struct ReadmeConfigBuilder {
    api_token: Option<ApiToken>,
    api_url: Option<ApiUrl>,
    image_api_url: Option<ApiUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    default_options: Option<RequestOptions>,
}

impl ReadmeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Overrides the base URL, for testing or alternate deployments.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Overrides the base URL of the image upload host.
    #[must_use]
    pub fn image_api_url(mut self, url: ApiUrl) -> Self {
        self.image_api_url = Some(url);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets client-level request options, such as a default version pin.
    #[must_use]
    pub fn default_options(mut self, options: RequestOptions) -> Self {
        self.default_options = Some(options);
        self
    }

    /// Builds the [`ReadmeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` is not set,
    /// [`ConfigError::InvalidTimeout`] if the timeout is zero, and
    /// [`ConfigError::InvalidApiUrl`] if a default URL fails validation.
    pub fn build(self) -> Result<ReadmeConfig, ConfigError> {
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        let api_url = match self.api_url {
            Some(url) => url,
            None => ApiUrl::new(README_API_URL)?,
        };
        let image_api_url = match self.image_api_url {
            Some(url) => url,
            None => ApiUrl::new(IMAGE_API_URL)?,
        };

        Ok(ReadmeConfig {
            api_token,
            api_url,
            image_api_url,
            timeout,
            user_agent_prefix: self.user_agent_prefix,
            default_options: self.default_options.unwrap_or_default(),
        })
    }
}
