//! HTTP client types for ReadMe API communication.
//!
//! This module provides the request/response engine every resource module
//! is built on. It handles request construction, authentication, response
//! classification and pagination.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`ApiRequest`]: A request to be sent to the API
//! - [`RequestOptions`]: Version, pagination and header options for a call
//! - [`ApiResponse`]: The envelope of an executed call
//! - [`ApiErrorResponse`]: The error payload sent with unsuccessful statuses
//! - [`ReadmeResponse`]: Typed data plus its envelope
//! - [`PaginationError`]: A pagination abort carrying partial results
//!
//! # Example
//!
//! ```rust,ignore
//! use readme_api::{ApiRequest, ApiToken, HttpClient, HttpMethod, ReadmeConfig, RequestOptions};
//!
//! let config = ReadmeConfig::builder()
//!     .api_token(ApiToken::new("rdme_xxx")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = ApiRequest::builder(HttpMethod::Get, "/categories")
//!     .options(RequestOptions::new().version("1.1.0"))
//!     .build()?;
//!
//! let categories = client.paginate::<serde_json::Value>(&request, "categories").await?;
//! println!("{} categories", categories.len());
//! ```
//!
//! # Status Handling
//!
//! Each request declares the status codes it accepts (`200` by default).
//! Any other status is decoded as an [`ApiErrorResponse`] and returned as
//! [`HttpError::Api`]. No request is ever retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod pagination;

pub use errors::{ApiResponseError, HttpError, InvalidHttpRequestError};
pub use http_client::{check_response_status, HttpClient, SDK_VERSION};
pub use http_request::{
    ApiRequest, ApiRequestBuilder, HttpMethod, RequestHeader, RequestOptions, RequestTarget,
};
pub use http_response::{
    ApiErrorResponse, ApiResponse, ReadmeResponse, LINK_HEADER, TOTAL_COUNT_HEADER,
    VERSION_HEADER,
};
pub use pagination::{has_next_page, Page, PaginationError, DEFAULT_PER_PAGE};
