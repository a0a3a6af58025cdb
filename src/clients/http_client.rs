//! HTTP client for ReadMe API communication.
//!
//! This module provides the [`HttpClient`] type that every resource module
//! routes its calls through: it resolves the URL, attaches credentials and
//! version headers, sends the request and classifies the response.

use base64::prelude::*;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::clients::errors::{ApiResponseError, HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{ApiRequest, RequestOptions};
use crate::clients::http_response::{
    parse_response_headers, ApiErrorResponse, ApiResponse, ReadmeResponse, VERSION_HEADER,
};
use crate::config::{ApiToken, ApiUrl, ReadmeConfig};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the ReadMe API.
///
/// The client handles:
/// - URL resolution against the configured base URL
/// - HTTP Basic authentication with the API token
/// - The `x-readme-version` header when a version is pinned
/// - Status classification and error payload decoding
///
/// No retries are performed: every call is exactly one round trip.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use readme_api::{ApiRequest, ApiToken, HttpClient, HttpMethod, ReadmeConfig};
///
/// let config = ReadmeConfig::builder()
///     .api_token(ApiToken::new("rdme_xxx")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = ApiRequest::builder(HttpMethod::Get, "/docs/getting-started").build()?;
/// let response = client.execute(&request).await?;
/// println!("{}", response.text());
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    api_url: ApiUrl,
    image_api_url: ApiUrl,
    api_token: ApiToken,
    user_agent: String,
    default_options: RequestOptions,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the underlying reqwest client
    /// cannot be created (e.g. TLS initialization failure).
    pub fn new(config: &ReadmeConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}readme-api-rust v{SDK_VERSION} | Rust {rust_version}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(HttpError::Transport)?;

        Ok(Self {
            client,
            api_url: config.api_url().clone(),
            image_api_url: config.image_api_url().clone(),
            api_token: config.api_token().clone(),
            user_agent,
            default_options: config.default_options().clone(),
        })
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

    /// Returns the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the client-level request options.
    #[must_use]
    pub const fn default_options(&self) -> &RequestOptions {
        &self.default_options
    }

    /// Returns `options` merged over the client defaults.
    #[must_use]
    pub fn effective_options(&self, options: &RequestOptions) -> RequestOptions {
        options.merge(&self.default_options)
    }

    /// Sends a request and classifies the response.
    ///
    /// The request's options are merged over the client defaults before
    /// sending; the merged request is stored in the returned envelope.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The request fails validation (`InvalidRequest`)
    /// - The transport fails (`Transport`) or the body cannot be read (`ReadBody`)
    /// - The status is not acceptable (`Api`), or its body is not a valid
    ///   error payload (`DecodeApiError`)
    pub async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, HttpError> {
        let request = request.with_default_options(&self.default_options);
        request.verify()?;

        let url = request.resolve_url(self.api_url.as_ref());
        let parsed_url = reqwest::Url::parse(&url)
            .map_err(|_| InvalidHttpRequestError::InvalidUrl { url: url.clone() })?;
        let headers = self.build_headers(&request)?;

        tracing::debug!(method = %request.method, url = %url, "Sending ReadMe API request");

        let mut req_builder = self
            .client
            .request(request.method.into(), parsed_url)
            .headers(headers);
        if let Some(payload) = &request.payload {
            req_builder = req_builder.body(payload.clone());
        }

        let res = req_builder.send().await.map_err(HttpError::Transport)?;

        let code = res.status().as_u16();
        let res_headers = parse_response_headers(res.headers());
        let body = res.bytes().await.map_err(HttpError::ReadBody)?.to_vec();

        let api_error = check_response_status(&body, code, &request.ok_status_codes)
            .map_err(HttpError::DecodeApiError)?;

        let mut response = ApiResponse {
            code,
            headers: res_headers,
            body,
            request,
            api_error: None,
        };

        match api_error {
            None => Ok(response),
            Some(details) => {
                tracing::warn!(
                    status = code,
                    error = %details.error,
                    url = %url,
                    "ReadMe API responded with a non-OK status"
                );
                response.api_error = Some(details.clone());
                Err(HttpError::Api(ApiResponseError {
                    code,
                    details,
                    response: Box::new(response),
                }))
            }
        }
    }

    /// Sends a request and decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`execute`](Self::execute), plus
    /// [`HttpError::EmptyBody`] or [`HttpError::ParseResponse`] if the body
    /// cannot be decoded.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<ReadmeResponse<T>, HttpError> {
        let response = self.execute(request).await?;
        let data = response.json()?;
        Ok(ReadmeResponse::new(data, response))
    }

    fn build_headers(&self, request: &ApiRequest) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut headers = HeaderMap::new();

        for header in request.all_headers() {
            let invalid = || InvalidHttpRequestError::InvalidHeader {
                name: header.name.clone(),
            };
            let name = HeaderName::from_bytes(header.name.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(&header.value).map_err(|_| invalid())?;
            headers.append(name, value);
        }

        if request.use_auth {
            let mut value = HeaderValue::from_str(&self.basic_auth()).map_err(|_| {
                InvalidHttpRequestError::InvalidHeader {
                    name: AUTHORIZATION.to_string(),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        if let Some(version) = request.options.version_pin() {
            let value =
                HeaderValue::from_str(version).map_err(|_| InvalidHttpRequestError::InvalidHeader {
                    name: VERSION_HEADER.to_string(),
                })?;
            headers.insert(HeaderName::from_static(VERSION_HEADER), value);
        }

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let user_agent = HeaderValue::from_str(&self.user_agent).map_err(|_| {
            InvalidHttpRequestError::InvalidHeader {
                name: USER_AGENT.to_string(),
            }
        })?;
        headers.insert(USER_AGENT, user_agent);

        Ok(headers)
    }

    /// The token is the Basic username; the password is empty.
    fn basic_auth(&self) -> String {
        let credential = format!("{}:", self.api_token.as_ref());
        format!("Basic {}", BASE64_STANDARD.encode(credential))
    }
}

/// Classifies a response status against the acceptable codes.
///
/// Returns `Ok(None)` when `code` is acceptable, whatever the body holds.
/// Otherwise the body is decoded as an [`ApiErrorResponse`] and returned as
/// `Ok(Some(_))`. A `null` body or `null` fields decode to empty values.
///
/// # Errors
///
/// Returns the decode error if the status is not acceptable and the body is
/// not a valid error payload.
///
/// # Example
///
/// ```rust
/// use readme_api::check_response_status;
///
/// assert!(check_response_status(b"", 204, &[204]).unwrap().is_none());
///
/// let details = check_response_status(br#"{"error":"NOTFOUND"}"#, 404, &[200])
///     .unwrap()
///     .unwrap();
/// assert_eq!(details.error, "NOTFOUND");
///
/// assert!(check_response_status(b"<html>", 502, &[200]).is_err());
/// ```
pub fn check_response_status(
    body: &[u8],
    code: u16,
    ok_status_codes: &[u16],
) -> Result<Option<ApiErrorResponse>, serde_json::Error> {
    if ok_status_codes.contains(&code) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<ApiErrorResponse>>(body)
        .map(|details| Some(details.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::http_request::HttpMethod;
    use std::time::Duration;

    fn create_test_config() -> ReadmeConfig {
        ReadmeConfig::builder()
            .api_token(ApiToken::new("rdme_test").unwrap())
            .api_url(ApiUrl::new("http://readme-test.local/api/v1").unwrap())
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_from_config() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(client.api_url().as_ref(), "http://readme-test.local/api/v1");
        assert_eq!(
            client.image_api_url().as_ref(),
            "https://dash.readme.com/api/images"
        );
    }

    #[test]
    fn test_user_agent_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert!(client.user_agent().starts_with("readme-api-rust v"));
        assert!(client.user_agent().contains("Rust"));

        let config = ReadmeConfig::builder()
            .api_token(ApiToken::new("rdme_test").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert!(client.user_agent().starts_with("MyApp/1.0 | readme-api-rust v"));
    }

    #[test]
    fn test_basic_auth_encodes_token_with_empty_password() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        // base64("rdme_test:")
        assert_eq!(client.basic_auth(), "Basic cmRtZV90ZXN0Og==");
    }

    #[test]
    fn test_build_headers_with_auth_and_version() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let request = ApiRequest::builder(HttpMethod::Get, "/docs/intro")
            .options(RequestOptions::new().version("1.1.0"))
            .build()
            .unwrap();

        let headers = client.build_headers(&request).unwrap();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Basic cmRtZV90ZXN0Og==");
        assert_eq!(headers.get(VERSION_HEADER).unwrap(), "1.1.0");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert!(headers.get(USER_AGENT).is_some());
    }

    #[test]
    fn test_build_headers_without_auth_or_version() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let request = ApiRequest::builder(HttpMethod::Get, "/outbound-ips")
            .use_auth(false)
            .build()
            .unwrap();

        let headers = client.build_headers(&request).unwrap();

        assert!(headers.get(AUTHORIZATION).is_none());
        assert!(headers.get(VERSION_HEADER).is_none());
    }

    #[test]
    fn test_build_headers_keeps_duplicates() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let request = ApiRequest::builder(HttpMethod::Get, "/docs")
            .header("x-tag", "one")
            .header("x-tag", "two")
            .build()
            .unwrap();

        let headers = client.build_headers(&request).unwrap();
        let values: Vec<_> = headers.get_all("x-tag").iter().collect();
        assert_eq!(values, vec!["one", "two"]);
    }

    #[test]
    fn test_build_headers_rejects_invalid_header_name() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let request = ApiRequest::builder(HttpMethod::Get, "/docs")
            .header("bad header", "x")
            .build()
            .unwrap();

        let result = client.build_headers(&request);
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidHeader { name }) if name == "bad header"
        ));
    }

    #[test]
    fn test_check_response_status_accepts_listed_code_regardless_of_body() {
        assert!(check_response_status(b"not json", 201, &[200, 201])
            .unwrap()
            .is_none());
        assert!(check_response_status(b"", 204, &[204]).unwrap().is_none());
    }

    #[test]
    fn test_check_response_status_decodes_error_payload() {
        let body = br#"{"error":"NOTFOUND","message":"missing","poem":["a"]}"#;
        let details = check_response_status(body, 404, &[200]).unwrap().unwrap();

        assert_eq!(details.error, "NOTFOUND");
        assert_eq!(details.message, "missing");
        assert_eq!(details.poem, vec!["a".to_string()]);
    }

    #[test]
    fn test_check_response_status_accepts_null_in_error_body() {
        let details = check_response_status(br#"{"error":"X","docs":null}"#, 500, &[200])
            .unwrap()
            .unwrap();
        assert_eq!(details.error, "X");
        assert!(details.docs.is_empty());

        let details = check_response_status(b"null", 500, &[200]).unwrap().unwrap();
        assert_eq!(details, ApiErrorResponse::default());
    }

    #[test]
    fn test_check_response_status_fails_on_undecodable_error_body() {
        assert!(check_response_status(b"", 500, &[200]).is_err());
        assert!(check_response_status(b"<html>oops</html>", 502, &[200]).is_err());
    }

    #[test]
    fn test_effective_options_merges_defaults() {
        let config = ReadmeConfig::builder()
            .api_token(ApiToken::new("rdme_test").unwrap())
            .default_options(RequestOptions::new().version("1.0.0").per_page(10))
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let merged = client.effective_options(&RequestOptions::new().per_page(5));
        assert_eq!(merged.version.as_deref(), Some("1.0.0"));
        assert_eq!(merged.per_page, Some(5));
    }
}
