//! HTTP response types for the ReadMe API client.
//!
//! This module provides the [`ApiResponse`] envelope returned for every
//! executed call, the [`ApiErrorResponse`] payload the API sends alongside
//! error statuses, and the typed [`ReadmeResponse`] wrapper returned by the
//! resource modules.

use std::borrow::Cow;
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::clients::errors::HttpError;
use crate::clients::http_request::ApiRequest;

/// Response header carrying pagination links.
pub const LINK_HEADER: &str = "link";

/// Response header carrying the total number of results.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Request header pinning a project version.
pub const VERSION_HEADER: &str = "x-readme-version";

/// The error payload the API returns with unsuccessful statuses.
///
/// # Example
///
/// ```rust
/// use readme_api::ApiErrorResponse;
///
/// let body = r#"{"error":"DOC_NOTFOUND","message":"The doc could not be found.","poem":["line one","line two"]}"#;
/// let error: ApiErrorResponse = serde_json::from_str(body).unwrap();
///
/// assert_eq!(error.error, "DOC_NOTFOUND");
/// assert_eq!(error.poem.len(), 2);
/// assert!(error.suggestion.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorResponse {
    /// Link to the support log for this error.
    #[serde(deserialize_with = "null_as_default")]
    pub docs: String,
    /// Short machine-readable error code (e.g. `DOC_NOTFOUND`).
    #[serde(deserialize_with = "null_as_default")]
    pub error: String,
    /// Help text, usually pointing at support.
    #[serde(deserialize_with = "null_as_default")]
    pub help: String,
    /// Human readable message.
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Whimsical message lines.
    #[serde(deserialize_with = "null_as_default")]
    pub poem: Vec<String>,
    /// Suggested remediation.
    #[serde(deserialize_with = "null_as_default")]
    pub suggestion: String,
}

/// Reads a JSON `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The result of one executed call.
///
/// Holds the raw body, status and headers together with the request that
/// produced them. [`api_error`](Self::api_error) is only populated when the
/// status was not acceptable for the call.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercased name.
    pub headers: HashMap<String, Vec<String>>,
    /// Raw response body.
    pub body: Vec<u8>,
    /// The request that produced this response.
    pub request: ApiRequest,
    /// The decoded error payload, for unacceptable statuses.
    pub api_error: Option<ApiErrorResponse>,
}

impl ApiResponse {
    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::EmptyBody`] if the body is empty and
    /// [`HttpError::ParseResponse`] if it does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        if self.body.is_empty() {
            return Err(HttpError::EmptyBody);
        }
        serde_json::from_slice(&self.body).map_err(HttpError::ParseResponse)
    }

    /// Returns the `link` header, if present.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.header(LINK_HEADER)
    }

    /// Returns the raw `x-total-count` header, if present.
    #[must_use]
    pub fn total_count(&self) -> Option<&str> {
        self.header(TOTAL_COUNT_HEADER)
    }
}

/// Collects response headers into a map keyed by lowercased name.
pub(crate) fn parse_response_headers(
    headers: &reqwest::header::HeaderMap,
) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}

/// Typed data returned by a resource operation, with its envelope.
///
/// `ReadmeResponse<T>` implements `Deref<Target = T>`, so it can be used
/// like the inner value:
///
/// ```rust,ignore
/// let categories = client.category().get_all(None).await?;
///
/// for category in categories.iter() {
///     println!("{}", category.title);
/// }
/// println!("status {}", categories.response().code);
/// ```
#[derive(Clone, Debug)]
pub struct ReadmeResponse<T> {
    data: T,
    response: ApiResponse,
}

impl<T> ReadmeResponse<T> {
    /// Creates a new response wrapper.
    #[must_use]
    pub const fn new(data: T, response: ApiResponse) -> Self {
        Self { data, response }
    }

    /// Consumes the wrapper and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Consumes the wrapper and returns the data and envelope.
    #[must_use]
    pub fn into_parts(self) -> (T, ApiResponse) {
        (self.data, self.response)
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the response envelope.
    #[must_use]
    pub const fn response(&self) -> &ApiResponse {
        &self.response
    }

    /// Maps the inner data, keeping the envelope.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ReadmeResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ReadmeResponse {
            data: f(self.data),
            response: self.response,
        }
    }
}

impl<T> Deref for ReadmeResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ReadmeResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
