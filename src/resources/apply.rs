//! Job openings at ReadMe, and applying to them.

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod, ReadmeResponse};
use crate::resources::{build_json_request, build_request, ResourceError};

/// Endpoint for open roles and applications.
pub const APPLY_ENDPOINT: &str = "/apply";

/// An open role.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenRole {
    /// URL slug of the role.
    pub slug: String,
    /// Role title.
    pub title: String,
    /// Team the role belongs to.
    pub department: String,
    /// Role description, as HTML.
    pub description: String,
    /// Where the role is based.
    pub location: String,
    /// Short pitch for the role.
    pub pullquote: String,
    /// Link to the posting.
    pub url: String,
}

/// A job application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Applicant name.
    pub name: String,
    /// Applicant email address.
    pub email: String,
    /// Slug of the role being applied to.
    pub job: String,
    /// Applicant pronouns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    /// LinkedIn profile URL.
    #[serde(rename = "linkedin", skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    /// GitHub profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Cover letter text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    /// Submit without actually applying. Useful for testing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dont_really_apply: Option<bool>,
}

/// The API's answer to an application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplyResponse {
    /// Confirmation message.
    pub message: String,
    /// Link to the company values.
    pub keyvalues: String,
    /// Link to the careers page.
    pub careers: String,
    /// Whimsical message lines.
    pub poem: Vec<String>,
    /// Where to send questions.
    #[serde(rename = "questions?")]
    pub questions: String,
}

/// Operations on open roles.
#[allow(async_fn_in_trait)]
pub trait ApplyService {
    /// Lists open roles.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn get(&self) -> Result<ReadmeResponse<Vec<OpenRole>>, ResourceError>;

    /// Submits an application.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn apply(
        &self,
        application: &Application,
    ) -> Result<ReadmeResponse<ApplyResponse>, ResourceError>;
}

/// Client for the apply endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ApplyClient<'a> {
    client: &'a HttpClient,
}

impl<'a> ApplyClient<'a> {
    /// Creates an apply client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

// Verify ApplyClient implements ApplyService at compile time
const _: fn() = || {
    fn assert_service<T: ApplyService>() {}
    assert_service::<ApplyClient<'static>>();
};

impl ApplyService for ApplyClient<'_> {
    async fn get(&self) -> Result<ReadmeResponse<Vec<OpenRole>>, ResourceError> {
        let request = build_request(HttpMethod::Get, APPLY_ENDPOINT, &[200], None)?;
        Ok(self.client.request_json(&request).await?)
    }

    async fn apply(
        &self,
        application: &Application,
    ) -> Result<ReadmeResponse<ApplyResponse>, ResourceError> {
        let request =
            build_json_request(HttpMethod::Post, APPLY_ENDPOINT, application, &[200], None)?;
        Ok(self.client.request_json(&request).await?)
    }
}
