//! Project metadata.

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod, ReadmeResponse};
use crate::resources::{build_request, ResourceError};

/// Endpoint for project metadata.
pub const PROJECT_ENDPOINT: &str = "/";

/// Metadata of the project the API token belongs to.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Project subdomain.
    pub subdomain: String,
    /// Public URL of the documentation hub.
    pub base_url: String,
    /// Billing plan.
    pub plan: String,
    /// Secret for signing personalized-docs JWTs.
    pub jwt_secret: String,
}

impl std::fmt::Debug for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Project")
            .field("name", &self.name)
            .field("subdomain", &self.subdomain)
            .field("base_url", &self.base_url)
            .field("plan", &self.plan)
            .field("jwt_secret", &"*****")
            .finish()
    }
}

/// Operations on the project.
#[allow(async_fn_in_trait)]
pub trait ProjectService {
    /// Retrieves project metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn get(&self) -> Result<ReadmeResponse<Project>, ResourceError>;
}

/// Client for the project endpoint.
#[derive(Clone, Copy, Debug)]
pub struct ProjectClient<'a> {
    client: &'a HttpClient,
}

impl<'a> ProjectClient<'a> {
    /// Creates a project client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

// Verify ProjectClient implements ProjectService at compile time
const _: fn() = || {
    fn assert_service<T: ProjectService>() {}
    assert_service::<ProjectClient<'static>>();
};

impl ProjectService for ProjectClient<'_> {
    async fn get(&self) -> Result<ReadmeResponse<Project>, ResourceError> {
        let request = build_request(HttpMethod::Get, PROJECT_ENDPOINT, &[200], None)?;
        Ok(self.client.request_json(&request).await?)
    }
}
