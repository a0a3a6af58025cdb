//! Docs: the guide and reference pages of a project.
//!
//! # Example
//!
//! ```rust,ignore
//! use readme_api::resources::doc::{DocParams, DocService};
//! use readme_api::RequestOptions;
//!
//! let docs = client.doc();
//!
//! // By slug, or by ID (resolved through a search)
//! let doc = docs.get("getting-started", None).await?;
//! let same = docs.get("id:63a77777f52b9f006b6bf212", None).await?;
//!
//! // The published variant
//! let published = docs
//!     .get("getting-started", Some(RequestOptions::new().production_doc(true)))
//!     .await?;
//!
//! let params = DocParams::new("Release notes").category_slug("guides");
//! let created = docs.create(&params, None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiResponse, HttpClient, HttpMethod, ReadmeResponse, RequestOptions};
use crate::identifiers::parse_id;
use crate::resources::{build_json_request, build_request, resource_path, ResourceError};

/// Endpoint for docs.
pub const DOC_ENDPOINT: &str = "/docs";

/// A doc page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Doc {
    /// Object ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Markdown body.
    pub body: String,
    /// Short summary shown under the title.
    pub excerpt: String,
    /// ID of the category the doc belongs to.
    pub category: String,
    /// ID of the parent doc, for nested pages.
    pub parent_doc: Option<String>,
    /// Whether it is hidden from readers.
    pub hidden: bool,
    /// Whether the doc is deprecated.
    pub deprecated: bool,
    /// Position among siblings.
    pub order: i64,
    /// Page type: `basic`, `error`, `link` or an HTTP method for API pages.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// ID of the owning project.
    pub project: String,
    /// ID of the version the doc belongs to.
    pub version: String,
    /// Revision counter.
    pub revision: i64,
    /// Whether the doc documents an API endpoint.
    pub is_api: bool,
    /// Whether the doc lives in the API reference.
    pub is_reference: bool,
    /// Target URL, for link docs.
    #[serde(rename = "link_url")]
    pub link_url: Option<String>,
    /// Whether the link opens in a new tab.
    #[serde(rename = "link_external")]
    pub link_external: bool,
    /// SEO metadata.
    pub metadata: DocMetadata,
    /// When it was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When it was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// SEO metadata of a doc, changelog or custom page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocMetadata {
    /// Title used in search results.
    pub title: String,
    /// Description used in search results.
    pub description: String,
}

/// Parameters for creating or updating a doc.
///
/// A title and either a category ID or a category slug are required.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocParams {
    /// Doc title.
    pub title: String,
    /// `basic`, `error` or `link`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    /// Markdown body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// ID of the parent category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Slug of the parent category, used when no ID is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
    /// ID of the parent doc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_doc: Option<String>,
    /// Slug of the parent doc, used when no ID is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_doc_slug: Option<String>,
    /// Whether it is hidden from readers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Position among siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl DocParams {
    /// Creates parameters with a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the category by ID.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the category by slug.
    #[must_use]
    pub fn category_slug(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    /// Sets the Markdown body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets visibility.
    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    fn validate(&self) -> Result<(), ResourceError> {
        if self.title.is_empty() {
            return Err(ResourceError::validation("doc", "doc title is required"));
        }

        let blank = |value: &Option<String>| value.as_deref().map_or(true, str::is_empty);
        if blank(&self.category) && blank(&self.category_slug) {
            return Err(ResourceError::validation(
                "doc",
                "doc category or category slug is required",
            ));
        }

        Ok(())
    }
}

/// Search results wrapper returned by `/docs/search`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct DocSearchResults {
    results: Vec<DocSearchResult>,
}

/// A single doc search hit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocSearchResult {
    /// Search index object ID.
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// Object ID of the matched doc.
    pub reference_id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Search index the hit came from.
    pub index_name: String,
    /// Link within the hub.
    pub internal_link: String,
    /// Whether the doc lives in the API reference.
    pub is_reference: bool,
    /// Target URL, for link docs.
    #[serde(rename = "link_url")]
    pub link_url: Option<String>,
    /// HTTP method, for endpoint docs.
    pub method: String,
    /// ID of the owning project.
    pub project: String,
    /// Project subdomain.
    pub subdomain: String,
    /// Kind of hit.
    #[serde(rename = "type")]
    pub result_type: String,
    /// Path of the hit.
    pub url: String,
    /// ID of the version this belongs to.
    pub version: String,
}

/// Operations on docs.
#[allow(async_fn_in_trait)]
pub trait DocService {
    /// Retrieves a doc by slug or by `id:<token>`.
    ///
    /// ID references are resolved by searching for the ID and matching the
    /// hit's reference ID. Set `production_doc` in the options to fetch the
    /// published variant.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] for an empty identifier,
    /// [`ResourceError::NotFound`] if no search hit matches the ID, and
    /// [`ResourceError::Http`] for request failures.
    async fn get(
        &self,
        doc: &str,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Doc>, ResourceError>;

    /// Creates a doc.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the title or category is
    /// missing, otherwise [`ResourceError::Http`] for request failures.
    async fn create(
        &self,
        params: &DocParams,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Doc>, ResourceError>;

    /// Updates a doc.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    async fn update(
        &self,
        slug: &str,
        params: &DocParams,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Doc>, ResourceError>;

    /// Deletes a doc.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn delete(
        &self,
        slug: &str,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, ResourceError>;

    /// Searches docs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn search(
        &self,
        query: &str,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Vec<DocSearchResult>>, ResourceError>;
}

/// Client for the docs endpoints.
#[derive(Clone, Copy, Debug)]
pub struct DocClient<'a> {
    client: &'a HttpClient,
}

impl<'a> DocClient<'a> {
    /// Creates a docs client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

// Verify DocClient implements DocService at compile time
const _: fn() = || {
    fn assert_service<T: DocService>() {}
    assert_service::<DocClient<'static>>();
};

impl DocService for DocClient<'_> {
    async fn get(
        &self,
        doc: &str,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Doc>, ResourceError> {
        let options = options.unwrap_or_default();

        let slug = match parse_id(doc) {
            Some(id) => {
                let hits = self.search(id, Some(options.clone())).await?;
                hits.iter()
                    .find(|hit| hit.reference_id == id)
                    .map(|hit| hit.slug.clone())
                    .ok_or_else(|| ResourceError::NotFound {
                        resource: "doc",
                        id: id.to_string(),
                    })?
            }
            None => doc.to_string(),
        };

        if slug.is_empty() {
            return Err(ResourceError::validation(
                "doc",
                "a doc slug or id must be provided",
            ));
        }

        let mut endpoint = resource_path(DOC_ENDPOINT, &slug);
        if self.client.effective_options(&options).is_production_doc() {
            endpoint.push_str("/production");
        }

        let request = build_request(HttpMethod::Get, endpoint, &[200], Some(options))?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn create(
        &self,
        params: &DocParams,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Doc>, ResourceError> {
        params.validate()?;

        let request = build_json_request(HttpMethod::Post, DOC_ENDPOINT, params, &[201], options)?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn update(
        &self,
        slug: &str,
        params: &DocParams,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Doc>, ResourceError> {
        params.validate()?;

        let request = build_json_request(
            HttpMethod::Put,
            resource_path(DOC_ENDPOINT, slug),
            params,
            &[200],
            options,
        )?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn delete(
        &self,
        slug: &str,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, ResourceError> {
        let request = build_request(
            HttpMethod::Delete,
            resource_path(DOC_ENDPOINT, slug),
            &[204],
            options,
        )?;
        Ok(self.client.execute(&request).await?)
    }

    async fn search(
        &self,
        query: &str,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Vec<DocSearchResult>>, ResourceError> {
        let endpoint = format!(
            "{DOC_ENDPOINT}/search?search={}",
            urlencoding::encode(query)
        );
        let request = build_request(HttpMethod::Post, endpoint, &[200], options)?;
        let response = self.client.request_json::<DocSearchResults>(&request).await?;
        Ok(response.map(|results| results.results))
    }
}
