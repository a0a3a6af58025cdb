//! The API registry, a store of uploaded definitions addressed by UUID.

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod, ReadmeResponse};
use crate::resources::api_specification::{ApiSpecificationClient, ApiSpecificationService};
use crate::resources::{build_request, resource_path, ResourceError};

/// Endpoint for the API registry.
pub const API_REGISTRY_ENDPOINT: &str = "/api-registry";

/// A definition stored in the registry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiRegistrySaved {
    /// The parsed definition.
    pub definition: serde_json::Map<String, serde_json::Value>,
    /// UUID to pass when creating an API specification from the registry.
    #[serde(rename = "registryUUID")]
    pub registry_uuid: String,
}

/// Operations on the API registry.
#[allow(async_fn_in_trait)]
pub trait ApiRegistryService {
    /// Uploads a definition, optionally pinned to a project version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn create(
        &self,
        definition: &str,
        version: Option<&str>,
    ) -> Result<ReadmeResponse<ApiRegistrySaved>, ResourceError>;

    /// Retrieves a stored definition as raw text.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn get(&self, uuid: &str) -> Result<ReadmeResponse<String>, ResourceError>;
}

/// Client for the API registry endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ApiRegistryClient<'a> {
    client: &'a HttpClient,
}

impl<'a> ApiRegistryClient<'a> {
    /// Creates an API registry client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

// Verify ApiRegistryClient implements ApiRegistryService at compile time
const _: fn() = || {
    fn assert_service<T: ApiRegistryService>() {}
    assert_service::<ApiRegistryClient<'static>>();
};

impl ApiRegistryService for ApiRegistryClient<'_> {
    async fn create(
        &self,
        definition: &str,
        version: Option<&str>,
    ) -> Result<ReadmeResponse<ApiRegistrySaved>, ResourceError> {
        ApiSpecificationClient::new(self.client)
            .upload_definition(HttpMethod::Post, definition, API_REGISTRY_ENDPOINT, version)
            .await
    }

    async fn get(&self, uuid: &str) -> Result<ReadmeResponse<String>, ResourceError> {
        let request = build_request(
            HttpMethod::Get,
            resource_path(API_REGISTRY_ENDPOINT, uuid),
            &[200],
            None,
        )?;
        let response = self.client.execute(&request).await?;
        let definition = response.text().into_owned();
        Ok(ReadmeResponse::new(definition, response))
    }
}
