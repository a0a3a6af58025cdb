//! # ReadMe API Rust Client
//!
//! A Rust client for the [ReadMe](https://readme.com) documentation platform
//! API, providing validated configuration, a uniform request engine, and
//! typed resource operations for docs, categories, versions, changelogs and
//! more.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ReadmeConfig`] and [`ReadmeConfigBuilder`]
//! - Identifier parsing for `id:` and `uuid:` references via [`identifiers`]
//! - An async HTTP client that attaches credentials, version pins and a
//!   user agent to every request, and classifies responses by status
//! - Transparent pagination that follows `link` headers until the last page
//! - Resource clients for every API area via [`ReadmeClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use readme_api::{ApiToken, ReadmeClient, ReadmeConfig, RequestOptions};
//!
//! let config = ReadmeConfig::builder()
//!     .api_token(ApiToken::new("rdme_xxx").unwrap())
//!     .default_options(RequestOptions::new().version("1.1.0"))
//!     .build()
//!     .unwrap();
//!
//! let client = ReadmeClient::new(&config).unwrap();
//! assert_eq!(client.http().api_url().as_ref(), "https://dash.readme.com/api/v1");
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use readme_api::resources::{CategoryService, DocService};
//! use readme_api::resources::doc::DocParams;
//! use readme_api::RequestOptions;
//!
//! // Walks every page of categories
//! let categories = client.category().get_all(None).await?;
//!
//! // Docs can be looked up by slug or by ID
//! let doc = client.doc().get("id:63a77777f52b9f006b6bf212", None).await?;
//!
//! // Published variant of a doc, pinned to a version
//! let options = RequestOptions::new().version("1.0.0").production_doc(true);
//! let published = client.doc().get("getting-started", Some(options)).await?;
//!
//! let created = client
//!     .doc()
//!     .create(&DocParams::new("Quick Start").category_slug("guides"), None)
//!     .await?;
//! ```
//!
//! ## Raw Requests
//!
//! Endpoints without a dedicated resource client can be called through the
//! request engine directly:
//!
//! ```rust,ignore
//! use readme_api::{ApiRequest, HttpMethod};
//!
//! let request = ApiRequest::builder(HttpMethod::Get, "/outbound-ips")
//!     .use_auth(false)
//!     .build()?;
//! let response = client.http().execute(&request).await?;
//! println!("{}", response.text());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and resource parameters validate
//!   before any request is sent
//! - **Thread-safe**: Clients are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Envelopes everywhere**: Every operation returns the raw response
//!   alongside its typed data, including on API errors

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::ReadmeClient;
pub use config::{ApiToken, ApiUrl, ReadmeConfig, ReadmeConfigBuilder};
pub use error::ConfigError;
pub use identifiers::Identifier;
pub use resources::ResourceError;

// Re-export HTTP client types
pub use clients::{
    check_response_status, has_next_page, ApiErrorResponse, ApiRequest, ApiRequestBuilder,
    ApiResponse, ApiResponseError, HttpClient, HttpError, HttpMethod, InvalidHttpRequestError,
    Page, PaginationError, ReadmeResponse, RequestHeader, RequestOptions,
};
