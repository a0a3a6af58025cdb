//! Shared helpers for integration tests.

#![allow(dead_code)]

use readme_api::{ApiToken, ApiUrl, ReadmeClient, ReadmeConfig, RequestOptions};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "rdme_test";

/// `Basic base64("rdme_test:")`
pub const TEST_AUTHORIZATION: &str = "Basic cmRtZV90ZXN0Og==";

/// Creates a client whose API and image hosts both point at `server`.
pub fn create_client(server: &MockServer) -> ReadmeClient {
    create_client_with_defaults(server, RequestOptions::default())
}

/// Creates a client with client-level default options.
pub fn create_client_with_defaults(server: &MockServer, defaults: RequestOptions) -> ReadmeClient {
    let config = ReadmeConfig::builder()
        .api_token(ApiToken::new(TEST_TOKEN).unwrap())
        .api_url(ApiUrl::new(server.uri()).unwrap())
        .image_api_url(ApiUrl::new(format!("{}/images", server.uri())).unwrap())
        .default_options(defaults)
        .build()
        .unwrap();
    ReadmeClient::new(&config).unwrap()
}
