//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated ReadMe API token.
///
/// The token is sent as the username half of an HTTP Basic credential. It is
/// never printed: the `Debug` implementation masks its value.
///
/// # Example
///
/// ```rust
/// use readme_api::ApiToken;
///
/// let token = ApiToken::new("rdme_xxx").unwrap();
/// assert_eq!(token.as_ref(), "rdme_xxx");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated base URL for API requests.
///
/// The URL must be absolute, use the `http` or `https` scheme and name a
/// host. Trailing slashes are trimmed so endpoints (which start with `/`)
/// can be appended directly.
///
/// # Example
///
/// ```rust
/// use readme_api::ApiUrl;
///
/// let url = ApiUrl::new("https://dash.readme.com/api/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://dash.readme.com/api/v1");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "dash.readme.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidApiUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || remainder.contains(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
