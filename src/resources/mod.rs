//! Resource modules for the ReadMe API.
//!
//! Each module is a thin adapter over [`HttpClient`](crate::HttpClient): it knows its endpoint
//! and JSON shapes, runs local validation before any request is built, and
//! unwraps the response envelope into typed data.
//!
//! # Overview
//!
//! Every resource follows the same layout:
//!
//! - an endpoint constant (e.g. [`doc::DOC_ENDPOINT`])
//! - serde models for responses and request parameters
//! - a `*Service` trait declaring the operations
//! - a `*Client<'a>` borrowing the [`HttpClient`](crate::HttpClient) and implementing the trait
//!
//! The clients are usually obtained from [`ReadmeClient`](crate::ReadmeClient):
//!
//! ```rust,ignore
//! use readme_api::resources::{CategoryService, DocService};
//!
//! let categories = client.category().get_all(None).await?;
//! let doc = client.doc().get("getting-started", None).await?;
//! ```
//!
//! # Identifiers
//!
//! `get` operations on docs, categories and versions accept either a slug
//! (or semantic version) or an object ID written as `id:<token>`. ID lookups
//! cost an extra round trip to find the matching slug.

use serde::Serialize;

use crate::clients::{ApiRequest, HttpMethod, InvalidHttpRequestError, RequestOptions};

pub mod api_registry;
pub mod api_specification;
pub mod apply;
pub mod category;
pub mod changelog;
pub mod custom_page;
pub mod doc;
mod errors;
pub mod image;
mod multipart;
pub mod outbound_ip;
pub mod project;
pub mod version;

pub use api_registry::{ApiRegistryClient, ApiRegistryService};
pub use api_specification::{ApiSpecificationClient, ApiSpecificationService};
pub use apply::{ApplyClient, ApplyService};
pub use category::{CategoryClient, CategoryService};
pub use changelog::{ChangelogClient, ChangelogService};
pub use custom_page::{CustomPageClient, CustomPageService};
pub use doc::{DocClient, DocService};
pub use errors::ResourceError;
pub use image::{ImageClient, ImageService};
pub use multipart::MultipartForm;
pub use outbound_ip::{OutboundIpClient, OutboundIpService};
pub use project::{ProjectClient, ProjectService};
pub use version::{VersionClient, VersionService};

/// Joins an endpoint and a path segment, percent-encoding the segment.
pub(crate) fn resource_path(endpoint: &str, segment: &str) -> String {
    format!("{endpoint}/{}", urlencoding::encode(segment))
}

/// Builds a request without a body.
pub(crate) fn build_request(
    method: HttpMethod,
    endpoint: impl Into<String>,
    ok_status_codes: &[u16],
    options: Option<RequestOptions>,
) -> Result<ApiRequest, ResourceError> {
    Ok(ApiRequest::builder(method, endpoint)
        .ok_status_codes(ok_status_codes.iter().copied())
        .options(options.unwrap_or_default())
        .build()?)
}

/// Builds the first-page request of a list endpoint.
pub(crate) fn list_request(
    endpoint: &str,
    options: Option<RequestOptions>,
) -> Result<ApiRequest, InvalidHttpRequestError> {
    ApiRequest::builder(HttpMethod::Get, endpoint)
        .options(options.unwrap_or_default())
        .build()
}

/// Builds a request with a JSON body.
pub(crate) fn build_json_request<T: Serialize + ?Sized>(
    method: HttpMethod,
    endpoint: impl Into<String>,
    payload: &T,
    ok_status_codes: &[u16],
    options: Option<RequestOptions>,
) -> Result<ApiRequest, ResourceError> {
    Ok(ApiRequest::builder(method, endpoint)
        .json(payload)?
        .ok_status_codes(ok_status_codes.iter().copied())
        .options(options.unwrap_or_default())
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::RequestTarget;

    #[test]
    fn test_resource_path_encodes_segment() {
        assert_eq!(resource_path("/docs", "intro"), "/docs/intro");
        assert_eq!(resource_path("/version", "v1.0"), "/version/v1.0");
        assert_eq!(resource_path("/docs", "a b/c"), "/docs/a%20b%2Fc");
    }

    #[test]
    fn test_build_json_request_sets_payload_and_codes() {
        let request = build_json_request(
            HttpMethod::Post,
            "/categories",
            &serde_json::json!({"title": "Guides"}),
            &[201],
            Some(RequestOptions::new().version("1.0.0")),
        )
        .unwrap();

        assert_eq!(request.target, RequestTarget::Endpoint("/categories".into()));
        assert_eq!(request.ok_status_codes, vec![201]);
        assert_eq!(request.options.version.as_deref(), Some("1.0.0"));
        assert_eq!(request.payload.unwrap(), br#"{"title":"Guides"}"#.to_vec());
    }

    #[test]
    fn test_build_request_defaults_options() {
        let request = build_request(HttpMethod::Delete, "/docs/intro", &[204], None).unwrap();

        assert_eq!(request.options, RequestOptions::default());
        assert!(request.payload.is_none());
    }
}
