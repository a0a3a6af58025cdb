//! API specifications (OpenAPI/Swagger definitions) attached to a project.
//!
//! A definition is either uploaded as a `multipart/form-data` file or, when
//! it was already stored in the API registry, referenced by its registry
//! UUID written as `uuid:<token>`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::{
    ApiRequest, ApiResponse, HttpClient, HttpMethod, PaginationError, ReadmeResponse,
    RequestOptions,
};
use crate::identifiers::parse_uuid;
use crate::resources::category::CategorySummary;
use crate::resources::{
    build_json_request, build_request, list_request, resource_path, MultipartForm, ResourceError,
};

/// Endpoint for API specifications.
pub const API_SPECIFICATION_ENDPOINT: &str = "/api-specification";

/// Form field carrying an uploaded definition.
pub const API_SPECIFICATION_FORM_FIELD: &str = "spec";

const UPLOAD_FILENAME: &str = "spec.json";
const UPLOAD_OK_STATUS_CODES: [u16; 2] = [200, 201];

/// An API specification as listed by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiSpecification {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Category the reference pages are filed under.
    pub category: CategorySummary,
    /// When the definition was last synced.
    pub last_synced: String,
    /// How the definition was uploaded.
    pub source: String,
    /// Definition format, such as `oas`.
    #[serde(rename = "type")]
    pub spec_type: String,
    /// ID of the version the definition belongs to.
    pub version: String,
}

/// The result of creating or updating a specification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSpecificationSaved {
    /// ID of the stored definition.
    #[serde(rename = "_id")]
    pub id: String,
    /// Title taken from the definition.
    pub title: String,
}

#[derive(Serialize)]
struct RegistryReference<'a> {
    #[serde(rename = "registryUUID")]
    registry_uuid: &'a str,
}

/// Operations on API specifications.
#[allow(async_fn_in_trait)]
pub trait ApiSpecificationService {
    /// Lists every specification, walking all pages.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] with the specifications gathered before
    /// the failing page.
    async fn get_all(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Vec<ApiSpecification>>, PaginationError<ApiSpecification>>;

    /// Retrieves a specification by ID.
    ///
    /// The API has no single-item endpoint, so this lists every
    /// specification and picks the match.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no specification has the ID.
    async fn get(
        &self,
        spec_id: &str,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<ApiSpecification>, ResourceError>;

    /// Creates a specification from a definition or a `uuid:<token>`
    /// registry reference. Only the version of `options` is used.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn create(
        &self,
        definition: &str,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<ApiSpecificationSaved>, ResourceError>;

    /// Replaces the definition of an existing specification.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn update(
        &self,
        spec_id: &str,
        definition: &str,
    ) -> Result<ReadmeResponse<ApiSpecificationSaved>, ResourceError>;

    /// Deletes a specification.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn delete(&self, spec_id: &str) -> Result<ApiResponse, ResourceError>;

    /// Uploads a raw definition as a multipart file to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn upload_definition<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        definition: &str,
        endpoint: &str,
        version: Option<&str>,
    ) -> Result<ReadmeResponse<T>, ResourceError>;
}

/// Client for the API specification endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ApiSpecificationClient<'a> {
    client: &'a HttpClient,
}

impl<'a> ApiSpecificationClient<'a> {
    /// Creates an API specification client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    async fn save(
        &self,
        method: HttpMethod,
        endpoint: &str,
        definition: &str,
        version: Option<&str>,
    ) -> Result<ReadmeResponse<ApiSpecificationSaved>, ResourceError> {
        let Some(registry_uuid) = parse_uuid(definition) else {
            return self
                .upload_definition(method, definition, endpoint, version)
                .await;
        };

        let request = build_json_request(
            method,
            endpoint,
            &RegistryReference { registry_uuid },
            &UPLOAD_OK_STATUS_CODES,
            Some(version_options(version)),
        )?;
        Ok(self.client.request_json(&request).await?)
    }
}

fn version_options(version: Option<&str>) -> RequestOptions {
    RequestOptions {
        version: version.map(str::to_string),
        ..RequestOptions::default()
    }
}

// Verify ApiSpecificationClient implements ApiSpecificationService at compile time
const _: fn() = || {
    fn assert_service<T: ApiSpecificationService>() {}
    assert_service::<ApiSpecificationClient<'static>>();
};

impl ApiSpecificationService for ApiSpecificationClient<'_> {
    async fn get_all(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<Vec<ApiSpecification>>, PaginationError<ApiSpecification>> {
        let request = list_request(API_SPECIFICATION_ENDPOINT, options)
            .map_err(|e| PaginationError::aborted("API specifications", e.into()))?;
        self.client.paginate(&request, "API specifications").await
    }

    async fn get(
        &self,
        spec_id: &str,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<ApiSpecification>, ResourceError> {
        let (specifications, response) = self.get_all(options).await?.into_parts();

        let specification = specifications
            .into_iter()
            .find(|s| s.id == spec_id)
            .ok_or_else(|| ResourceError::NotFound {
                resource: "API specification",
                id: spec_id.to_string(),
            })?;
        Ok(ReadmeResponse::new(specification, response))
    }

    async fn create(
        &self,
        definition: &str,
        options: Option<RequestOptions>,
    ) -> Result<ReadmeResponse<ApiSpecificationSaved>, ResourceError> {
        let version = options.and_then(|o| o.version);
        self.save(
            HttpMethod::Post,
            API_SPECIFICATION_ENDPOINT,
            definition,
            version.as_deref(),
        )
        .await
    }

    async fn update(
        &self,
        spec_id: &str,
        definition: &str,
    ) -> Result<ReadmeResponse<ApiSpecificationSaved>, ResourceError> {
        let endpoint = resource_path(API_SPECIFICATION_ENDPOINT, spec_id);
        self.save(HttpMethod::Put, &endpoint, definition, None)
            .await
    }

    async fn delete(&self, spec_id: &str) -> Result<ApiResponse, ResourceError> {
        let request = build_request(
            HttpMethod::Delete,
            resource_path(API_SPECIFICATION_ENDPOINT, spec_id),
            &[204],
            None,
        )?;
        Ok(self.client.execute(&request).await?)
    }

    async fn upload_definition<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        definition: &str,
        endpoint: &str,
        version: Option<&str>,
    ) -> Result<ReadmeResponse<T>, ResourceError> {
        let (payload, content_type) = MultipartForm::new()
            .file(
                API_SPECIFICATION_FORM_FIELD,
                UPLOAD_FILENAME,
                "application/octet-stream",
                definition.as_bytes(),
            )
            .finish();

        let request = ApiRequest::builder(method, endpoint)
            .header("Content-Type", content_type)
            .payload(payload)
            .ok_status_codes(UPLOAD_OK_STATUS_CODES)
            .options(version_options(version))
            .build()?;
        Ok(self.client.request_json(&request).await?)
    }
}
