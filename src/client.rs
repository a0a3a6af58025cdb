//! The top-level ReadMe API client.

use crate::clients::{HttpClient, HttpError};
use crate::config::ReadmeConfig;
use crate::resources::{
    ApiRegistryClient, ApiSpecificationClient, ApplyClient, CategoryClient, ChangelogClient,
    CustomPageClient, DocClient, ImageClient, OutboundIpClient, ProjectClient, VersionClient,
};

/// Client for the ReadMe API.
///
/// Owns a single [`HttpClient`] and hands out borrowing per-resource
/// clients. Resource clients are `Copy` and cost nothing to create, so
/// calling `client.doc()` for every operation is fine.
///
/// # Thread Safety
///
/// `ReadmeClient` is `Send + Sync` and can be shared across tasks behind an
/// `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use readme_api::{ApiToken, ReadmeClient, ReadmeConfig};
/// use readme_api::resources::CategoryService;
///
/// let config = ReadmeConfig::builder()
///     .api_token(ApiToken::new("rdme_xxx")?)
///     .build()?;
/// let client = ReadmeClient::new(&config)?;
///
/// let categories = client.category().get_all(None).await?;
/// for category in categories.iter() {
///     println!("{}", category.title);
/// }
/// ```
#[derive(Debug)]
pub struct ReadmeClient {
    http_client: HttpClient,
}

impl ReadmeClient {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the underlying HTTP client cannot
    /// be built.
    pub fn new(config: &ReadmeConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client for raw requests.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http_client
    }

    #[must_use]
    pub const fn api_registry(&self) -> ApiRegistryClient<'_> {
        ApiRegistryClient::new(&self.http_client)
    }

    #[must_use]
    pub const fn api_specification(&self) -> ApiSpecificationClient<'_> {
        ApiSpecificationClient::new(&self.http_client)
    }

    #[must_use]
    pub const fn apply(&self) -> ApplyClient<'_> {
        ApplyClient::new(&self.http_client)
    }

    #[must_use]
    pub const fn category(&self) -> CategoryClient<'_> {
        CategoryClient::new(&self.http_client)
    }

    #[must_use]
    pub const fn changelog(&self) -> ChangelogClient<'_> {
        ChangelogClient::new(&self.http_client)
    }

    #[must_use]
    pub const fn custom_page(&self) -> CustomPageClient<'_> {
        CustomPageClient::new(&self.http_client)
    }

    #[must_use]
    pub const fn doc(&self) -> DocClient<'_> {
        DocClient::new(&self.http_client)
    }

    /// Image uploads go to the image host, not the API base URL.
    #[must_use]
    pub const fn image(&self) -> ImageClient<'_> {
        ImageClient::new(&self.http_client)
    }

    /// The outbound IPs endpoint is called without the API token.
    #[must_use]
    pub const fn outbound_ip(&self) -> OutboundIpClient<'_> {
        OutboundIpClient::new(&self.http_client)
    }

    #[must_use]
    pub const fn project(&self) -> ProjectClient<'_> {
        ProjectClient::new(&self.http_client)
    }

    #[must_use]
    pub const fn version(&self) -> VersionClient<'_> {
        VersionClient::new(&self.http_client)
    }
}

// Verify ReadmeClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReadmeClient>();
};
