//! Changelog posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{
    ApiResponse, HttpClient, HttpMethod, PaginationError, ReadmeResponse, RequestOptions,
};
use crate::resources::doc::DocMetadata;
use crate::resources::{
    build_json_request, build_request, list_request, resource_path, ResourceError,
};

/// Endpoint for changelogs.
pub const CHANGELOG_ENDPOINT: &str = "/changelogs";

/// Accepted values for a changelog's `type`.
pub const CHANGELOG_TYPES: [&str; 5] = ["added", "fixed", "improved", "deprecated", "removed"];

/// A changelog post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Changelog {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Post title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Markdown body of the post.
    pub body: String,
    /// Rendered HTML.
    pub html: String,
    /// Whether it is hidden from readers.
    pub hidden: bool,
    /// One of `added`, `fixed`, `improved`, `deprecated` or `removed`.
    #[serde(rename = "type")]
    pub changelog_type: String,
    /// Revision counter.
    pub revision: i64,
    /// ID of the owning project, when returned.
    pub project: Option<String>,
    /// SEO metadata.
    pub metadata: DocMetadata,
    /// When it was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When it was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Parameters for creating or updating a changelog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChangelogParams {
    /// Post title.
    pub title: String,
    /// One of [`CHANGELOG_TYPES`].
    #[serde(rename = "type")]
    pub changelog_type: String,
    /// Markdown body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Whether it is hidden from readers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl ChangelogParams {
    /// Creates parameters from a title and type.
    #[must_use]
    pub fn new(title: impl Into<String>, changelog_type: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            changelog_type: changelog_type.into(),
            ..Self::default()
        }
    }

    /// Sets the Markdown body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    fn validate(&self) -> Result<(), ResourceError> {
        if self.title.is_empty() {
            return Err(ResourceError::validation("changelog", "title must be provided"));
        }
        if !CHANGELOG_TYPES.contains(&self.changelog_type.as_str()) {
            return Err(ResourceError::validation(
                "changelog",
                "type must be added, fixed, improved, deprecated, or removed",
            ));
        }
        Ok(())
    }
}

/// Operations on changelogs.
#[allow(async_fn_in_trait)]
pub trait ChangelogService {
    /// Lists every changelog, walking all pages.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] with the changelogs gathered before the
    /// failing page.
    async fn get_all(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Vec<Changelog>>, PaginationError<Changelog>>;

    /// Retrieves a changelog by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn get(&self, slug: &str) -> Result<ReadmeResponse<Changelog>, ResourceError>;

    /// Creates a changelog.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] for a missing title or an
    /// unknown type.
    async fn create(
        &self,
        params: &ChangelogParams,
    ) -> Result<ReadmeResponse<Changelog>, ResourceError>;

    /// Updates a changelog.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] for a missing title or an
    /// unknown type.
    async fn update(
        &self,
        slug: &str,
        params: &ChangelogParams,
    ) -> Result<ReadmeResponse<Changelog>, ResourceError>;

    /// Deletes a changelog.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn delete(&self, slug: &str) -> Result<ApiResponse, ResourceError>;
}

/// Client for the changelog endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ChangelogClient<'a> {
    client: &'a HttpClient,
}

impl<'a> ChangelogClient<'a> {
    /// Creates a changelog client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

// Verify ChangelogClient implements ChangelogService at compile time
const _: fn() = || {
    fn assert_service<T: ChangelogService>() {}
    assert_service::<ChangelogClient<'static>>();
};

impl ChangelogService for ChangelogClient<'_> {
    async fn get_all(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Vec<Changelog>>, PaginationError<Changelog>> {
        let request = list_request(CHANGELOG_ENDPOINT, options)
            .map_err(|e| PaginationError::aborted("changelogs", e.into()))?;
        self.client.paginate(&request, "changelogs").await
    }

    async fn get(&self, slug: &str) -> Result<ReadmeResponse<Changelog>, ResourceError> {
        let request = build_request(
            HttpMethod::Get,
            resource_path(CHANGELOG_ENDPOINT, slug),
            &[200],
            None,
        )?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn create(
        &self,
        params: &ChangelogParams,
    ) -> Result<ReadmeResponse<Changelog>, ResourceError> {
        params.validate()?;

        let request =
            build_json_request(HttpMethod::Post, CHANGELOG_ENDPOINT, params, &[201], None)?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn update(
        &self,
        slug: &str,
        params: &ChangelogParams,
    ) -> Result<ReadmeResponse<Changelog>, ResourceError> {
        params.validate()?;

        let request = build_json_request(
            HttpMethod::Put,
            resource_path(CHANGELOG_ENDPOINT, slug),
            params,
            &[200],
            None,
        )?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn delete(&self, slug: &str) -> Result<ApiResponse, ResourceError> {
        let request = build_request(
            HttpMethod::Delete,
            resource_path(CHANGELOG_ENDPOINT, slug),
            &[204],
            None,
        )?;
        Ok(self.client.execute(&request).await?)
    }
}
