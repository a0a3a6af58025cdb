//! Integration tests for the pagination walker.
//!
//! Each test serves pages from a mock server and checks how the walker
//! combines the `link` and `x-total-count` headers to decide when to stop.

mod common;

use common::create_client;
use readme_api::resources::CategoryService;
use readme_api::{ApiRequest, HttpError, HttpMethod, RequestOptions};
use serde::Deserialize;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NEXT_LINK: &str = r#"</x?page=2>; rel="next", <>; rel="prev", <>; rel="last""#;
const LAST_LINK: &str = r#"<>; rel="next", </x?page=1>; rel="prev", </x?page=2>; rel="last""#;

#[derive(Debug, Deserialize, PartialEq)]
struct Item {
    n: u32,
}

fn items(range: std::ops::RangeInclusive<u32>) -> serde_json::Value {
    serde_json::Value::Array(range.map(|n| serde_json::json!({ "n": n })).collect())
}

fn page(body: serde_json::Value, link: &str, total: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("link", link)
        .insert_header("x-total-count", total)
        .set_body_json(body)
}

fn list_request(per_page: u32) -> ApiRequest {
    ApiRequest::builder(HttpMethod::Get, "/items")
        .options(RequestOptions::new().per_page(per_page))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_walk_stops_when_total_count_is_reached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("perPage", "3"))
        .and(query_param("page", "1"))
        .respond_with(page(items(1..=3), NEXT_LINK, "6"))
        .expect(1)
        .mount(&server)
        .await;
    // Still advertises a next page; the total count stops the walk.
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("page", "2"))
        .respond_with(page(items(4..=6), NEXT_LINK, "6"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .http()
        .paginate::<Item>(&list_request(3), "items")
        .await
        .unwrap();

    let numbers: Vec<u32> = result.iter().map(|i| i.n).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(result.response().code, 200);
}

#[tokio::test]
async fn test_empty_next_link_stops_after_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(page(items(1..=2), LAST_LINK, "2"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .http()
        .paginate::<Item>(&list_request(100), "items")
        .await
        .unwrap();

    assert_eq!(result.len(), 2);
}

#[tokio::test]
async fn test_empty_first_page_with_zero_total_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(page(serde_json::json!([]), LAST_LINK, "0"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .http()
        .paginate::<Item>(&list_request(100), "items")
        .await
        .unwrap();

    assert_eq!(result.len(), 0);
    assert_eq!(result.response().code, 200);
}

#[tokio::test]
async fn test_default_per_page_and_starting_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("perPage", "100"))
        .and(query_param("page", "3"))
        .respond_with(page(items(1..=1), LAST_LINK, "201"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ApiRequest::builder(HttpMethod::Get, "/items")
        .options(RequestOptions::new().page(3))
        .build()
        .unwrap();

    let result = client.http().paginate::<Item>(&request, "items").await.unwrap();
    assert_eq!(result.len(), 1);
}

#[tokio::test]
async fn test_malformed_link_header_aborts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(page(items(1..=3), r#"</x?page=2>; rel="next""#, "6"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .http()
        .paginate::<Item>(&list_request(3), "items")
        .await
        .unwrap_err();

    assert!(matches!(err.source, HttpError::InvalidLinkHeader { .. }));
    assert!(err
        .to_string()
        .contains("unable to parse link header - invalid format"));
    assert!(err.items.is_empty());
}

#[tokio::test]
async fn test_missing_link_header_aborts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items(1..=3)))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .http()
        .paginate::<Item>(&list_request(3), "items")
        .await
        .unwrap_err();

    assert!(matches!(err.source, HttpError::InvalidLinkHeader { .. }));
}

#[tokio::test]
async fn test_non_numeric_total_count_aborts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(page(items(1..=3), NEXT_LINK, "x"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .http()
        .paginate::<Item>(&list_request(3), "items")
        .await
        .unwrap_err();

    assert!(matches!(err.source, HttpError::InvalidTotalCount { .. }));
    assert!(err
        .to_string()
        .contains("unable to parse 'x-total-count' header"));
}

#[tokio::test]
async fn test_failed_page_keeps_partial_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("page", "1"))
        .respond_with(page(items(1..=3), NEXT_LINK, "9"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"error": "INTERNAL_ERROR"})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .http()
        .paginate::<Item>(&list_request(3), "items")
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "unable to retrieve items: API responded with a non-OK status: 500"
    );
    assert_eq!(err.source.api_error().unwrap().error, "INTERNAL_ERROR");
    assert_eq!(err.response.as_ref().map(|r| r.code), Some(200));
    let partial: Vec<u32> = err.into_partial().iter().map(|i| i.n).collect();
    assert_eq!(partial, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_paginated_request_leaves_request_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("page", "1"))
        .respond_with(page(items(1..=3), NEXT_LINK, "6"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = list_request(3);
    let first = client
        .http()
        .paginated_request::<Item>(&request, 1)
        .await
        .unwrap();

    assert!(first.has_next_page);
    assert_eq!(first.items.len(), 3);
    assert_eq!(request, list_request(3));
}

#[tokio::test]
async fn test_category_listing_walks_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(query_param("page", "1"))
        .respond_with(page(
            serde_json::json!([{"id": "1", "slug": "guides", "type": "guide"}]),
            NEXT_LINK,
            "2",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(query_param("page", "2"))
        .respond_with(page(
            serde_json::json!([{"id": "2", "slug": "api", "type": "reference"}]),
            LAST_LINK,
            "2",
        ))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let categories = client
        .category()
        .get_all(Some(RequestOptions::new().per_page(1)))
        .await
        .unwrap();

    let slugs: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["guides", "api"]);
}
