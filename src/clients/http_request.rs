//! HTTP request types for the ReadMe API client.
//!
//! This module provides the [`ApiRequest`] type and its builder, describing
//! one intended API call, and the caller-supplied [`RequestOptions`].

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the ReadMe API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A single HTTP header name/value pair.
///
/// Headers are kept as an ordered list of pairs, so duplicate names are sent
/// in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestHeader {
    /// The header name.
    pub name: String,
    /// The header value.
    pub value: String,
}

impl RequestHeader {
    /// Creates a new header pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Caller-supplied options for a request.
///
/// Every field is optional; unset fields fall back to the client defaults
/// (see [`RequestOptions::merge`]) and then to the documented defaults:
/// first page, 100 results per page, no version pin.
///
/// # Example
///
/// ```rust
/// use readme_api::RequestOptions;
///
/// let options = RequestOptions::new()
///     .version("1.1.0")
///     .per_page(20)
///     .header("x-custom", "yes");
///
/// assert_eq!(options.version.as_deref(), Some("1.1.0"));
/// assert_eq!(options.per_page, Some(20));
/// assert_eq!(options.page, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Project version to pin the request to, sent as `x-readme-version`.
    pub version: Option<String>,
    /// Page number to start from when walking a paginated list.
    pub page: Option<u32>,
    /// Number of results requested per page.
    pub per_page: Option<u32>,
    /// Selects the published (production) variant of a doc.
    pub production_doc: Option<bool>,
    /// Additional headers sent with the request.
    pub headers: Vec<RequestHeader>,
}

impl RequestOptions {
    /// Creates an empty set of options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the request to a project version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the starting page for paginated requests.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of results per page.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Requests the production variant of a doc.
    #[must_use]
    pub const fn production_doc(mut self, production: bool) -> Self {
        self.production_doc = Some(production);
        self
    }

    /// Adds an extra header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(RequestHeader::new(name, value));
        self
    }

    /// Merges these options over `defaults`.
    ///
    /// Fields set here win over fields set in `defaults`. Headers are
    /// concatenated, defaults first.
    #[must_use]
    pub fn merge(&self, defaults: &Self) -> Self {
        Self {
            version: self.version.clone().or_else(|| defaults.version.clone()),
            page: self.page.or(defaults.page),
            per_page: self.per_page.or(defaults.per_page),
            production_doc: self.production_doc.or(defaults.production_doc),
            headers: defaults
                .headers
                .iter()
                .chain(&self.headers)
                .cloned()
                .collect(),
        }
    }

    /// Returns the version pin, ignoring empty strings.
    #[must_use]
    pub fn version_pin(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }

    /// Returns `true` if the production variant of a doc was requested.
    #[must_use]
    pub fn is_production_doc(&self) -> bool {
        self.production_doc.unwrap_or(false)
    }
}

/// Where an [`ApiRequest`] is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestTarget {
    /// A path appended to the client's base URL (e.g. `/docs/intro`).
    Endpoint(String),
    /// An absolute URL used as-is, such as the image upload host.
    Url(String),
}

/// A request to be sent to the ReadMe API.
///
/// Requests are built once per call with [`ApiRequest::builder`] and never
/// mutated by the client: derived values (the resolved URL, pagination query
/// strings) are produced as new values.
///
/// # Example
///
/// ```rust
/// use readme_api::{ApiRequest, HttpMethod};
///
/// let request = ApiRequest::builder(HttpMethod::Post, "/categories")
///     .header("Content-Type", "application/json")
///     .payload(br#"{"title":"Guides","type":"guide"}"#.to_vec())
///     .ok_status_codes([201])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.resolve_url("https://dash.readme.com/api/v1"), "https://dash.readme.com/api/v1/categories");
/// assert!(request.use_auth);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The endpoint or absolute URL for this request.
    pub target: RequestTarget,
    /// Headers to send in addition to the implicit ones.
    pub headers: Vec<RequestHeader>,
    /// The raw request body, if any.
    pub payload: Option<Vec<u8>>,
    /// Whether to attach the API token.
    pub use_auth: bool,
    /// Status codes considered successful; anything else is an error.
    pub ok_status_codes: Vec<u16>,
    /// Version, pagination and header options.
    pub options: RequestOptions,
}

impl ApiRequest {
    /// Creates a builder for a request to an endpoint relative to the base URL.
    #[must_use]
    pub fn builder(method: HttpMethod, endpoint: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, RequestTarget::Endpoint(endpoint.into()))
    }

    /// Creates a builder for a request to an absolute URL.
    #[must_use]
    pub fn builder_for_url(method: HttpMethod, url: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, RequestTarget::Url(url.into()))
    }

    /// Returns the URL this request is sent to.
    ///
    /// An absolute URL target is used as-is; an endpoint is appended to `base_url`.
    #[must_use]
    pub fn resolve_url(&self, base_url: &str) -> String {
        match &self.target {
            RequestTarget::Url(url) => url.clone(),
            RequestTarget::Endpoint(endpoint) => format!("{base_url}{endpoint}"),
        }
    }

    /// Returns a copy of this request with its endpoint replaced.
    ///
    /// Absolute URL targets are left untouched.
    #[must_use]
    pub fn with_endpoint(&self, endpoint: impl Into<String>) -> Self {
        let target = match &self.target {
            RequestTarget::Endpoint(_) => RequestTarget::Endpoint(endpoint.into()),
            RequestTarget::Url(url) => RequestTarget::Url(url.clone()),
        };
        Self {
            target,
            ..self.clone()
        }
    }

    /// Returns a copy of this request with `options` merged over its own.
    #[must_use]
    pub fn with_default_options(&self, defaults: &RequestOptions) -> Self {
        Self {
            options: self.options.merge(defaults),
            ..self.clone()
        }
    }

    /// Returns every header to send, request headers first, then option headers.
    pub fn all_headers(&self) -> impl Iterator<Item = &RequestHeader> {
        self.headers.iter().chain(&self.options.headers)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingOkStatusCodes`] if no
    /// status code is considered successful and
    /// [`InvalidHttpRequestError::EmptyUrl`] if the target is empty.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.ok_status_codes.is_empty() {
            return Err(InvalidHttpRequestError::MissingOkStatusCodes);
        }

        if let RequestTarget::Url(url) = &self.target {
            if url.trim().is_empty() {
                return Err(InvalidHttpRequestError::EmptyUrl);
            }
        }

        Ok(())
    }
}

/// Builder for constructing [`ApiRequest`] instances.
///
/// Requests default to using authentication and accepting only `200 OK`.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: HttpMethod,
    target: RequestTarget,
    headers: Vec<RequestHeader>,
    payload: Option<Vec<u8>>,
    use_auth: bool,
    ok_status_codes: Vec<u16>,
    options: RequestOptions,
}

impl ApiRequestBuilder {
    fn new(method: HttpMethod, target: RequestTarget) -> Self {
        Self {
            method,
            target,
            headers: Vec::new(),
            payload: None,
            use_auth: true,
            ok_status_codes: vec![200],
            options: RequestOptions::default(),
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(RequestHeader::new(name, value));
        self
    }

    /// Sets the raw request body.
    #[must_use]
    pub fn payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Serializes `value` as the JSON request body and sets the content type.
    ///
    /// # Errors
    ///
    /// Returns the serialization error if `value` cannot be encoded.
    pub fn json<T: serde::Serialize + ?Sized>(
        self,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        let payload = serde_json::to_vec(value)?;
        Ok(self
            .header("Content-Type", "application/json")
            .payload(payload))
    }

    /// Toggles whether the API token is attached.
    #[must_use]
    pub const fn use_auth(mut self, use_auth: bool) -> Self {
        self.use_auth = use_auth;
        self
    }

    /// Sets the status codes considered successful.
    #[must_use]
    pub fn ok_status_codes(mut self, codes: impl IntoIterator<Item = u16>) -> Self {
        self.ok_status_codes = codes.into_iter().collect();
        self
    }

    /// Sets the request options.
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the [`ApiRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<ApiRequest, InvalidHttpRequestError> {
        let request = ApiRequest {
            method: self.method,
            target: self.target,
            headers: self.headers,
            payload: self.payload,
            use_auth: self.use_auth,
            ok_status_codes: self.ok_status_codes,
            options: self.options,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_defaults() {
        let request = ApiRequest::builder(HttpMethod::Get, "/docs/intro")
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.target, RequestTarget::Endpoint("/docs/intro".into()));
        assert!(request.use_auth);
        assert_eq!(request.ok_status_codes, vec![200]);
        assert!(request.payload.is_none());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_verify_requires_ok_status_codes() {
        let result = ApiRequest::builder(HttpMethod::Get, "/docs")
            .ok_status_codes([])
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingOkStatusCodes)
        ));
    }

    #[test]
    fn test_verify_rejects_empty_url() {
        let result = ApiRequest::builder_for_url(HttpMethod::Post, "  ").build();

        assert!(matches!(result, Err(InvalidHttpRequestError::EmptyUrl)));
    }

    #[test]
    fn test_resolve_url_prefers_full_url() {
        let endpoint = ApiRequest::builder(HttpMethod::Get, "/categories")
            .build()
            .unwrap();
        let full = ApiRequest::builder_for_url(HttpMethod::Post, "https://img.local/upload")
            .build()
            .unwrap();

        assert_eq!(
            endpoint.resolve_url("http://api.local/v1"),
            "http://api.local/v1/categories"
        );
        assert_eq!(
            full.resolve_url("http://api.local/v1"),
            "https://img.local/upload"
        );
    }

    #[test]
    fn test_with_endpoint_returns_new_value() {
        let request = ApiRequest::builder(HttpMethod::Get, "/categories")
            .build()
            .unwrap();
        let paged = request.with_endpoint("/categories?perPage=100&page=1");

        assert_eq!(request.target, RequestTarget::Endpoint("/categories".into()));
        assert_eq!(
            paged.target,
            RequestTarget::Endpoint("/categories?perPage=100&page=1".into())
        );
    }

    #[test]
    fn test_headers_preserve_duplicates_in_order() {
        let request = ApiRequest::builder(HttpMethod::Get, "/docs")
            .header("x-tag", "one")
            .header("x-tag", "two")
            .options(RequestOptions::new().header("x-tag", "three"))
            .build()
            .unwrap();

        let values: Vec<&str> = request.all_headers().map(|h| h.value.as_str()).collect();
        assert_eq!(values, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_json_payload_sets_content_type() {
        let request = ApiRequest::builder(HttpMethod::Post, "/changelogs")
            .json(&serde_json::json!({"title": "Release"}))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            request.headers,
            vec![RequestHeader::new("Content-Type", "application/json")]
        );
        assert_eq!(request.payload.unwrap(), br#"{"title":"Release"}"#.to_vec());
    }

    #[test]
    fn test_options_merge_prefers_call_values() {
        let defaults = RequestOptions::new()
            .version("1.0.0")
            .per_page(50)
            .header("x-default", "1");
        let call = RequestOptions::new().version("2.0.0").header("x-call", "2");

        let merged = call.merge(&defaults);

        assert_eq!(merged.version.as_deref(), Some("2.0.0"));
        assert_eq!(merged.per_page, Some(50));
        assert_eq!(merged.page, None);
        assert_eq!(
            merged.headers,
            vec![
                RequestHeader::new("x-default", "1"),
                RequestHeader::new("x-call", "2")
            ]
        );
    }

    #[test]
    fn test_version_pin_ignores_empty_string() {
        assert_eq!(RequestOptions::new().version("").version_pin(), None);
        assert_eq!(
            RequestOptions::new().version("1.1.0").version_pin(),
            Some("1.1.0")
        );
    }
}
