//! Custom pages: free-form Markdown or HTML pages outside the doc tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{
    ApiResponse, HttpClient, HttpMethod, PaginationError, ReadmeResponse, RequestOptions,
};
use crate::resources::doc::DocMetadata;
use crate::resources::{
    build_json_request, build_request, list_request, resource_path, ResourceError,
};

/// Endpoint for custom pages.
pub const CUSTOM_PAGE_ENDPOINT: &str = "/custompages";

/// A custom page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomPage {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Markdown body.
    pub body: String,
    /// Rendered HTML.
    pub html: String,
    /// Whether `html` is rendered instead of `body`.
    #[serde(rename = "htmlmode")]
    pub html_mode: bool,
    /// Whether the page renders without the sidebar.
    pub fullscreen: bool,
    /// Whether it is hidden from readers.
    pub hidden: bool,
    /// Revision counter.
    pub revision: i64,
    /// SEO metadata.
    pub metadata: DocMetadata,
    /// When it was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When it was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Parameters for creating or updating a custom page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CustomPageParams {
    /// Page title.
    pub title: String,
    /// Markdown body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Rendered HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Render `html` instead of the Markdown body.
    #[serde(rename = "htmlmode", skip_serializing_if = "Option::is_none")]
    pub html_mode: Option<bool>,
    /// Whether it is hidden from readers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

/// Operations on custom pages.
#[allow(async_fn_in_trait)]
pub trait CustomPageService {
    /// Lists every custom page, walking all pages.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] with the pages gathered before the
    /// failing page.
    async fn get_all(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Vec<CustomPage>>, PaginationError<CustomPage>>;

    /// Retrieves a custom page by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn get(&self, slug: &str) -> Result<ReadmeResponse<CustomPage>, ResourceError>;

    /// Creates a custom page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn create(
        &self,
        params: &CustomPageParams,
    ) -> Result<ReadmeResponse<CustomPage>, ResourceError>;

    /// Updates a custom page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn update(
        &self,
        slug: &str,
        params: &CustomPageParams,
    ) -> Result<ReadmeResponse<CustomPage>, ResourceError>;

    /// Deletes a custom page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn delete(&self, slug: &str) -> Result<ApiResponse, ResourceError>;
}

/// Client for the custom page endpoints.
#[derive(Clone, Copy, Debug)]
pub struct CustomPageClient<'a> {
    client: &'a HttpClient,
}

impl<'a> CustomPageClient<'a> {
    /// Creates a custom page client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

// Verify CustomPageClient implements CustomPageService at compile time
const _: fn() = || {
    fn assert_service<T: CustomPageService>() {}
    assert_service::<CustomPageClient<'static>>();
};

impl CustomPageService for CustomPageClient<'_> {
    async fn get_all(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Vec<CustomPage>>, PaginationError<CustomPage>> {
        let request = list_request(CUSTOM_PAGE_ENDPOINT, options)
            .map_err(|e| PaginationError::aborted("custom pages", e.into()))?;
        self.client.paginate(&request, "custom pages").await
    }

    async fn get(&self, slug: &str) -> Result<ReadmeResponse<CustomPage>, ResourceError> {
        let request = build_request(
            HttpMethod::Get,
            resource_path(CUSTOM_PAGE_ENDPOINT, slug),
            &[200],
            None,
        )?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn create(
        &self,
        params: &CustomPageParams,
    ) -> Result<ReadmeResponse<CustomPage>, ResourceError> {
        let request =
            build_json_request(HttpMethod::Post, CUSTOM_PAGE_ENDPOINT, params, &[201], None)?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn update(
        &self,
        slug: &str,
        params: &CustomPageParams,
    ) -> Result<ReadmeResponse<CustomPage>, ResourceError> {
        let request = build_json_request(
            HttpMethod::Put,
            resource_path(CUSTOM_PAGE_ENDPOINT, slug),
            params,
            &[200],
            None,
        )?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn delete(&self, slug: &str) -> Result<ApiResponse, ResourceError> {
        let request = build_request(
            HttpMethod::Delete,
            resource_path(CUSTOM_PAGE_ENDPOINT, slug),
            &[204],
            None,
        )?;
        Ok(self.client.execute(&request).await?)
    }
}
