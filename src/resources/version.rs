//! Project versions.
//!
//! Versions are addressed by their semantic version string (e.g. `1.1.0`)
//! or by `id:<token>`, which is resolved to the version string by listing
//! all versions first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiResponse, HttpClient, HttpMethod, ReadmeResponse};
use crate::identifiers::parse_id;
use crate::resources::{build_json_request, build_request, resource_path, ResourceError};

/// Endpoint for versions.
pub const VERSION_ENDPOINT: &str = "/version";

/// A project version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Version string.
    pub version: String,
    /// Semver-cleaned version string.
    pub version_clean: String,
    /// Optional codename for the version.
    pub codename: String,
    /// IDs of the version's categories.
    pub categories: Vec<String>,
    /// ID of the version this one was forked from.
    pub forked_from: Option<String>,
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
    /// Release date of the version.
    #[serde(rename = "releaseDate")]
    pub release_date: Option<DateTime<Utc>>,
    /// When it was created.
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A version as listed by [`VersionService::get_all`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionSummary {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Version string.
    pub version: String,
    /// Semver-cleaned version string.
    pub version_clean: String,
    /// Optional codename for the version.
    pub codename: String,
    /// ID of the version this one was forked from.
    pub forked_from: Option<String>,
    /// Whether the version is marked beta.
    pub is_beta: bool,
    /// Whether the version is deprecated.
    pub is_deprecated: bool,
    /// Whether the version is hidden from readers.
    pub is_hidden: bool,
    /// Whether this is the main version.
    pub is_stable: bool,
    /// When it was created.
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Parameters for creating or updating a version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VersionParams {
    /// The semantic version.
    pub version: String,
    /// The version to fork from.
    pub from: String,
    /// Optional codename for the version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
    /// Whether the version is marked beta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_beta: Option<bool>,
    /// Whether the version is deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deprecated: Option<bool>,
    /// Whether the version is hidden from readers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    /// Whether this is the main version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_stable: Option<bool>,
}

/// Operations on versions.
#[allow(async_fn_in_trait)]
pub trait VersionService {
    /// Lists every version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn get_all(&self) -> Result<ReadmeResponse<Vec<VersionSummary>>, ResourceError>;

    /// Retrieves a version by version string or `id:<token>`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for an unknown ID.
    async fn get(&self, version: &str) -> Result<ReadmeResponse<Version>, ResourceError>;

    /// Creates a version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn create(&self, params: &VersionParams)
        -> Result<ReadmeResponse<Version>, ResourceError>;

    /// Updates a version addressed by version string or `id:<token>`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for an unknown ID.
    async fn update(
        &self,
        version: &str,
        params: &VersionParams,
    ) -> Result<ReadmeResponse<Version>, ResourceError>;

    /// Deletes a version addressed by version string or `id:<token>`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for an unknown ID.
    async fn delete(&self, version: &str) -> Result<ApiResponse, ResourceError>;

    /// Resolves `id:<token>` to its version string. Other values are
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no version has the ID.
    async fn resolve_version(&self, version: &str) -> Result<String, ResourceError>;
}

/// Client for the versions endpoints.
#[derive(Clone, Copy, Debug)]
pub struct VersionClient<'a> {
    client: &'a HttpClient,
}

impl<'a> VersionClient<'a> {
    /// Creates a versions client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

// Verify VersionClient implements VersionService at compile time
const _: fn() = || {
    fn assert_service<T: VersionService>() {}
    assert_service::<VersionClient<'static>>();
};

impl VersionService for VersionClient<'_> {
    async fn get_all(&self) -> Result<ReadmeResponse<Vec<VersionSummary>>, ResourceError> {
        let request = build_request(HttpMethod::Get, VERSION_ENDPOINT, &[200], None)?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn get(&self, version: &str) -> Result<ReadmeResponse<Version>, ResourceError> {
        let version = self.resolve_version(version).await?;

        let request = build_request(
            HttpMethod::Get,
            resource_path(VERSION_ENDPOINT, &version),
            &[200],
            None,
        )?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn create(
        &self,
        params: &VersionParams,
    ) -> Result<ReadmeResponse<Version>, ResourceError> {
        let request =
            build_json_request(HttpMethod::Post, VERSION_ENDPOINT, params, &[200], None)?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn update(
        &self,
        version: &str,
        params: &VersionParams,
    ) -> Result<ReadmeResponse<Version>, ResourceError> {
        let version = self.resolve_version(version).await?;

        let request = build_json_request(
            HttpMethod::Put,
            resource_path(VERSION_ENDPOINT, &version),
            params,
            &[200],
            None,
        )?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn delete(&self, version: &str) -> Result<ApiResponse, ResourceError> {
        let version = self.resolve_version(version).await?;

        let request = build_request(
            HttpMethod::Delete,
            resource_path(VERSION_ENDPOINT, &version),
            &[200],
            None,
        )?;
        Ok(self.client.execute(&request).await?)
    }

    async fn resolve_version(&self, version: &str) -> Result<String, ResourceError> {
        let Some(id) = parse_id(version) else {
            return Ok(version.to_string());
        };

        let versions = self.get_all().await?;
        versions
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.version.clone())
            .ok_or_else(|| ResourceError::NotFound {
                resource: "version",
                id: id.to_string(),
            })
    }
}
