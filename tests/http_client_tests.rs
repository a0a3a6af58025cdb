//! Integration tests for the request engine.
//!
//! These tests run the HTTP client against a mock server and verify the
//! implicit headers, option merging, and status classification.

mod common;

use common::{create_client, create_client_with_defaults, TEST_AUTHORIZATION, TEST_TOKEN};
use readme_api::{
    ApiRequest, ApiToken, ApiUrl, HttpError, HttpMethod, ReadmeClient, ReadmeConfig,
    RequestOptions,
};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_request_sends_auth_accept_and_version_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories/guides"))
        .and(header("authorization", TEST_AUTHORIZATION))
        .and(header("accept", "application/json"))
        .and(header("x-readme-version", "1.1.0"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"slug": "guides"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ApiRequest::builder(HttpMethod::Get, "/categories/guides")
        .options(RequestOptions::new().version("1.1.0"))
        .build()
        .unwrap();

    let response = client.http().execute(&request).await.unwrap();

    assert_eq!(response.code, 200);
    assert!(response.api_error.is_none());
    assert_eq!(response.request.options.version.as_deref(), Some("1.1.0"));
}

#[tokio::test]
async fn test_client_default_version_applies_when_call_sets_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/version/2.0.0"))
        .and(header("x-readme-version", "2.0.0"))
        .and(header("x-extra", "default"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let defaults = RequestOptions::new().version("2.0.0").header("x-extra", "default");
    let client = create_client_with_defaults(&server, defaults);
    let request = ApiRequest::builder(HttpMethod::Get, "/version/2.0.0")
        .build()
        .unwrap();

    client.http().execute(&request).await.unwrap();
}

#[tokio::test]
async fn test_call_version_overrides_client_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/docs/intro"))
        .and(header("x-readme-version", "3.0.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client_with_defaults(&server, RequestOptions::new().version("2.0.0"));
    let request = ApiRequest::builder(HttpMethod::Get, "/docs/intro")
        .options(RequestOptions::new().version("3.0.0"))
        .build()
        .unwrap();

    client.http().execute(&request).await.unwrap();
}

#[tokio::test]
async fn test_request_without_auth_omits_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/outbound-ips"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ApiRequest::builder(HttpMethod::Get, "/outbound-ips")
        .use_auth(false)
        .build()
        .unwrap();

    let response = client.http().execute(&request).await.unwrap();
    assert_eq!(response.text(), "[]");
}

#[tokio::test]
async fn test_json_payload_is_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/categories"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"title": "Guides", "type": "guide"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "63a7"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ApiRequest::builder(HttpMethod::Post, "/categories")
        .json(&serde_json::json!({"title": "Guides", "type": "guide"}))
        .unwrap()
        .ok_status_codes([201])
        .build()
        .unwrap();

    let response = client
        .http()
        .request_json::<serde_json::Value>(&request)
        .await
        .unwrap();

    assert_eq!(response.response().code, 201);
    assert_eq!(response.data()["id"], "63a7");
}

#[tokio::test]
async fn test_non_ok_status_yields_structured_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/docs/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "DOC_NOTFOUND",
            "message": "The doc with the slug 'missing' couldn't be found",
            "suggestion": "Make sure the slug is correct",
            "docs": "https://docs.readme.com/logs/abc",
            "help": "If you need help, email support@readme.io",
            "poem": ["If you're seeing this error,", "Things didn't quite go the way we hoped."]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ApiRequest::builder(HttpMethod::Get, "/docs/missing")
        .build()
        .unwrap();

    let err = client.http().execute(&request).await.unwrap_err();

    assert!(err.to_string().contains("non-OK status: 404"));
    assert_eq!(err.status_code(), Some(404));
    let details = err.api_error().unwrap();
    assert_eq!(details.error, "DOC_NOTFOUND");
    assert_eq!(details.poem.len(), 2);

    let HttpError::Api(api_error) = err else {
        panic!("expected an API error");
    };
    assert_eq!(api_error.response.code, 404);
    assert_eq!(
        api_error.response.api_error.as_ref().map(|e| e.error.as_str()),
        Some("DOC_NOTFOUND")
    );
}

#[tokio::test]
async fn test_not_found_scenario_minimal_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"NOTFOUND"}"#))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ApiRequest::builder(HttpMethod::Get, "/anything")
        .build()
        .unwrap();

    let err = client.http().execute(&request).await.unwrap_err();
    assert!(err.to_string().contains("non-OK status: 404"));
    assert_eq!(err.api_error().unwrap().error, "NOTFOUND");
}

#[tokio::test]
async fn test_null_fields_in_error_body_still_yield_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"error":"X","docs":null}"#))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ApiRequest::builder(HttpMethod::Get, "/docs/intro")
        .build()
        .unwrap();

    let err = client.http().execute(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "API responded with a non-OK status: 500");
    let details = err.api_error().unwrap();
    assert_eq!(details.error, "X");
    assert!(details.docs.is_empty());
}

#[tokio::test]
async fn test_non_json_error_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ApiRequest::builder(HttpMethod::Get, "/docs/intro")
        .build()
        .unwrap();

    let err = client.http().execute(&request).await.unwrap_err();
    assert!(matches!(err, HttpError::DecodeApiError(_)));
    assert!(err
        .to_string()
        .starts_with("unable to decode API error response"));
}

#[tokio::test]
async fn test_accepted_status_with_empty_body_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/docs/intro"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ApiRequest::builder(HttpMethod::Delete, "/docs/intro")
        .ok_status_codes([204])
        .build()
        .unwrap();

    let response = client.http().execute(&request).await.unwrap();
    assert_eq!(response.code, 204);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_typed_decode_of_empty_body_is_empty_body_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ApiRequest::builder(HttpMethod::Get, "/")
        .build()
        .unwrap();

    let err = client
        .http()
        .request_json::<serde_json::Value>(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::EmptyBody));
}

#[tokio::test]
async fn test_shape_mismatch_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"not":"a list"}"#))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ApiRequest::builder(HttpMethod::Get, "/outbound-ips")
        .build()
        .unwrap();

    let err = client
        .http()
        .request_json::<Vec<String>>(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::ParseResponse(_)));
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    // Nothing listens on port 1.
    let config = ReadmeConfig::builder()
        .api_token(ApiToken::new(TEST_TOKEN).unwrap())
        .api_url(ApiUrl::new("http://127.0.0.1:1/api/v1").unwrap())
        .build()
        .unwrap();
    let client = ReadmeClient::new(&config).unwrap();

    let request = ApiRequest::builder(HttpMethod::Get, "/")
        .build()
        .unwrap();

    let err = client.http().execute(&request).await.unwrap_err();
    assert!(matches!(err, HttpError::Transport(_)));
    assert!(err.to_string().starts_with("unable to make request"));
}
