//! HTTP-specific error types for the ReadMe API client.
//!
//! This module contains error types for HTTP operations: request validation
//! failures, transport failures, API-declared errors and malformed responses.
//!
//! # Error Handling
//!
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`ApiResponseError`]: the API answered with a status the call does not accept
//! - [`HttpError`]: unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use readme_api::HttpError;
//!
//! match client.execute(&request).await {
//!     Ok(response) => println!("{} bytes", response.body.len()),
//!     Err(HttpError::Api(e)) => {
//!         println!("API error {}: {}", e.code, e.details.message);
//!     }
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use std::num::ParseIntError;

use thiserror::Error;

use crate::clients::http_response::{ApiErrorResponse, ApiResponse};

/// Error returned when the API responds with a status code that the call
/// does not accept.
///
/// The decoded error payload is available in [`details`](Self::details) and
/// the complete envelope in [`response`](Self::response).
#[derive(Debug, Error)]
#[error("API responded with a non-OK status: {code}")]
pub struct ApiResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The structured error payload decoded from the body.
    pub details: ApiErrorResponse,
    /// The full response envelope, for diagnostics.
    pub response: Box<ApiResponse>,
}

/// Error returned when a request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use readme_api::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingOkStatusCodes;
/// assert_eq!(error.to_string(), "at least one acceptable status code is required");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// No status code was declared acceptable.
    #[error("at least one acceptable status code is required")]
    MissingOkStatusCodes,

    /// An absolute URL target was empty.
    #[error("request URL cannot be empty")]
    EmptyUrl,

    /// The resolved URL could not be parsed.
    #[error("invalid request URL '{url}'")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
    },

    /// A header name or value is not valid HTTP.
    #[error("invalid header '{name}'")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error("unable to prepare request: {0}")]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Connection, DNS or timeout failure.
    #[error("unable to make request: {0}")]
    Transport(#[source] reqwest::Error),

    /// A structured response was expected but the body was empty.
    #[error("unable to parse API response: response body is empty")]
    EmptyBody,

    /// The response body could not be read.
    #[error("unable to read response: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// The status was not acceptable and the body was not a valid error payload.
    #[error("unable to decode API error response: {0}")]
    DecodeApiError(#[source] serde_json::Error),

    /// The API reported an error.
    #[error(transparent)]
    Api(#[from] ApiResponseError),

    /// The status was acceptable but the body did not match the expected shape.
    #[error("unable to parse API response: {0}")]
    ParseResponse(#[source] serde_json::Error),

    /// The `link` header does not have the expected shape.
    #[error(
        "unable to parse link header - invalid format: '{header}'; expected '<>; rel=\"next\", <>; rel=\"prev\", <>; rel=\"last\"'"
    )]
    InvalidLinkHeader {
        /// The raw header value.
        header: String,
    },

    /// The `x-total-count` header is not an integer.
    #[error("unable to parse 'x-total-count' header: {source}")]
    InvalidTotalCount {
        /// The raw header value.
        value: String,
        /// The integer parse failure.
        source: ParseIntError,
    },
}

impl HttpError {
    /// Returns the API error payload, if this is an API-declared error.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiErrorResponse> {
        match self {
            Self::Api(e) => Some(&e.details),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if this is an API-declared error.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_link_header_message_includes_header() {
        let error = HttpError::InvalidLinkHeader {
            header: "garbage".to_string(),
        };
        let message = error.to_string();
        assert!(message.starts_with("unable to parse link header - invalid format: 'garbage'"));
        assert!(message.contains(r#"<>; rel="next""#));
    }

    #[test]
    fn test_invalid_total_count_message() {
        let source = "x".parse::<u32>().unwrap_err();
        let error = HttpError::InvalidTotalCount {
            value: "x".to_string(),
            source,
        };
        assert!(error
            .to_string()
            .starts_with("unable to parse 'x-total-count' header"));
    }

    #[test]
    fn test_invalid_request_error_is_wrapped() {
        let error: HttpError = InvalidHttpRequestError::EmptyUrl.into();
        assert_eq!(
            error.to_string(),
            "unable to prepare request: request URL cannot be empty"
        );
        assert!(error.api_error().is_none());
        assert!(error.status_code().is_none());
    }

    #[test]
    fn test_decode_api_error_message() {
        let source = serde_json::from_slice::<ApiErrorResponse>(b"<html>").unwrap_err();
        let error = HttpError::DecodeApiError(source);
        assert!(error
            .to_string()
            .starts_with("unable to decode API error response: "));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::MissingOkStatusCodes;
        let _ = invalid;

        let http: &dyn std::error::Error = &HttpError::EmptyBody;
        let _ = http;
    }
}
