//! Categories: the sidebar groups docs are filed under.
//!
//! # Example
//!
//! ```rust,ignore
//! use readme_api::resources::category::{CategoryParams, CategoryService, CategorySaved};
//!
//! let categories = client.category();
//!
//! let all = categories.get_all(None).await?;
//! let guides = categories.get("guides", None).await?;
//! let docs = categories.get_docs("guides", None).await?;
//!
//! let created = categories
//!     .create::<CategorySaved>(&CategoryParams::new("Tutorials", "guide"), None)
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::{
    ApiResponse, HttpClient, HttpMethod, PaginationError, ReadmeResponse, RequestOptions,
};
use crate::identifiers::parse_id;
use crate::resources::version::Version;
use crate::resources::{
    build_json_request, build_request, list_request, resource_path, ResourceError,
};

/// Endpoint for categories.
pub const CATEGORY_ENDPOINT: &str = "/categories";

/// Accepted values for a category's `type`.
pub const CATEGORY_TYPES: [&str; 2] = ["guide", "reference"];

/// A category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Position among siblings.
    pub order: i64,
    /// Whether this belongs to the API reference section.
    pub reference: bool,
    /// `guide` or `reference`.
    #[serde(rename = "type")]
    pub category_type: String,
    /// Human readable name of the type.
    pub category_type_name: Option<String>,
    /// ID of the owning project.
    pub project: String,
    /// ID of the version the category belongs to.
    pub version: String,
    /// When it was created.
    pub created_at: Option<DateTime<Utc>>,
}

/// Minimal category reference embedded in other resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySummary {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Position among siblings.
    pub order: i64,
    /// `guide` or `reference`.
    #[serde(rename = "type")]
    pub category_type: String,
}

/// A created category, as returned without a version pin.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategorySaved {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Position among siblings.
    pub order: i64,
    /// Whether this belongs to the API reference section.
    pub reference: bool,
    /// `guide` or `reference`.
    #[serde(rename = "type")]
    pub category_type: String,
    /// ID of the owning project.
    pub project: String,
    /// The version the category was created in.
    pub version: Version,
    /// When it was created.
    pub created_at: Option<DateTime<Utc>>,
}

/// A created category, as returned with a version pin.
///
/// The embedded version lists its categories in full.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryVersionSaved {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Position among siblings.
    pub order: i64,
    /// Whether this belongs to the API reference section.
    pub reference: bool,
    /// `guide` or `reference`.
    #[serde(rename = "type")]
    pub category_type: String,
    /// ID of the owning project.
    pub project: String,
    /// The version the category was created in, with its categories.
    pub version: CategoryVersion,
    /// When it was created.
    pub created_at: Option<DateTime<Utc>>,
}

/// A version with its categories expanded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryVersion {
    /// Unique identifier.
    pub id: String,
    /// Version string.
    pub version: String,
    /// Semver-cleaned version string.
    pub version_clean: String,
    /// Optional codename for the version.
    pub codename: String,
    /// Categories in this version.
    pub categories: Vec<Category>,
    /// Whether the version is marked beta.
    pub is_beta: bool,
    /// Whether the version is deprecated.
    pub is_deprecated: bool,
    /// Whether the version is hidden from readers.
    pub is_hidden: bool,
    /// Whether this is the main version.
    pub is_stable: bool,
    /// ID of the owning project.
    pub project: String,
    /// When it was created.
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A doc listed under a category, with its children.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDoc {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Position among siblings.
    pub order: i64,
    /// Whether it is hidden from readers.
    pub hidden: bool,
    /// Docs nested under this one.
    pub children: Vec<CategoryDoc>,
}

/// Parameters for creating or updating a category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CategoryParams {
    /// Display title.
    pub title: String,
    /// `guide` or `reference`.
    #[serde(rename = "type")]
    pub category_type: String,
}

impl CategoryParams {
    /// Creates parameters from a title and type.
    #[must_use]
    pub fn new(title: impl Into<String>, category_type: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category_type: category_type.into(),
        }
    }

    fn validate(&self) -> Result<(), ResourceError> {
        if CATEGORY_TYPES.contains(&self.category_type.as_str()) {
            Ok(())
        } else {
            Err(ResourceError::validation(
                "category",
                "type must be 'guide' or 'reference'",
            ))
        }
    }
}

/// Operations on categories.
#[allow(async_fn_in_trait)]
pub trait CategoryService {
    /// Lists every category, walking all pages.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] with the categories gathered before the
    /// failing page.
    async fn get_all(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Vec<Category>>, PaginationError<Category>>;

    /// Retrieves a category by slug or by `id:<token>`.
    ///
    /// ID references are resolved by listing every category.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no category has the ID,
    /// [`ResourceError::Validation`] for an empty slug, and HTTP errors.
    async fn get(
        &self,
        category: &str,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Category>, ResourceError>;

    /// Lists the docs filed under a category.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn get_docs(
        &self,
        slug: &str,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Vec<CategoryDoc>>, ResourceError>;

    /// Creates a category.
    ///
    /// The response shape depends on whether a version is pinned; pick
    /// [`CategorySaved`] or [`CategoryVersionSaved`] accordingly.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] for an invalid type.
    async fn create<T: DeserializeOwned>(
        &self,
        params: &CategoryParams,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<T>, ResourceError>;

    /// Updates a category.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] for an invalid type.
    async fn update(
        &self,
        slug: &str,
        params: &CategoryParams,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Category>, ResourceError>;

    /// Deletes a category.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn delete(
        &self,
        slug: &str,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, ResourceError>;
}

/// Client for the categories endpoints.
#[derive(Clone, Copy, Debug)]
pub struct CategoryClient<'a> {
    client: &'a HttpClient,
}

impl<'a> CategoryClient<'a> {
    /// Creates a categories client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

// Verify CategoryClient implements CategoryService at compile time
const _: fn() = || {
    fn assert_service<T: CategoryService>() {}
    assert_service::<CategoryClient<'static>>();
};

impl CategoryService for CategoryClient<'_> {
    async fn get_all(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Vec<Category>>, PaginationError<Category>> {
        let request = list_request(CATEGORY_ENDPOINT, options)
            .map_err(|e| PaginationError::aborted("categories", e.into()))?;
        self.client.paginate(&request, "categories").await
    }

    async fn get(
        &self,
        category: &str,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Category>, ResourceError> {
        let options = options.unwrap_or_default();

        let slug = match parse_id(category) {
            Some(id) => {
                let categories = self.get_all(Some(options.clone())).await?;
                categories
                    .iter()
                    .find(|c| c.id == id)
                    .map(|c| c.slug.clone())
                    .ok_or_else(|| ResourceError::NotFound {
                        resource: "category",
                        id: id.to_string(),
                    })?
            }
            None => category.to_string(),
        };

        if slug.is_empty() {
            return Err(ResourceError::validation(
                "category",
                "a category slug or id must be provided",
            ));
        }

        let request = build_request(
            HttpMethod::Get,
            resource_path(CATEGORY_ENDPOINT, &slug),
            &[200],
            Some(options),
        )?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn get_docs(
        &self,
        slug: &str,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Vec<CategoryDoc>>, ResourceError> {
        let endpoint = format!("{}/docs", resource_path(CATEGORY_ENDPOINT, slug));
        let request = build_request(HttpMethod::Get, endpoint, &[200], options)?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn create<T: DeserializeOwned>(
        &self,
        params: &CategoryParams,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<T>, ResourceError> {
        params.validate()?;

        let request =
            build_json_request(HttpMethod::Post, CATEGORY_ENDPOINT, params, &[201], options)?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn update(
        &self,
        slug: &str,
        params: &CategoryParams,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Category>, ResourceError> {
        params.validate()?;

        let request = build_json_request(
            HttpMethod::Put,
            resource_path(CATEGORY_ENDPOINT, slug),
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
            resource_path(CATEGORY_ENDPOINT, slug),
            &[204],
            options,
        )?;
        Ok(self.client.execute(&request).await?)
    }
}
