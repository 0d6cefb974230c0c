//! Integration tests for `CoffeeStoreFetcher::fetch` using wiremock HTTP mocks.
//!
//! Every failure scenario must come back as an empty list, never an error.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use brewfind_core::{ShopRecord, FALLBACK_IMG_URL};
use brewfind_places::{CoffeeStoreFetcher, FetchError, FetcherConfig, PhotoLookup};

fn test_config(base_url: &str) -> FetcherConfig {
    let mut config = FetcherConfig::new("test-key");
    config.photos_api_key = Some("photo-key".to_owned());
    config.places_base_url = base_url.to_owned();
    config.user_agent = "brewfind-test/0.1".to_owned();
    config
}

fn test_fetcher(base_url: &str) -> CoffeeStoreFetcher {
    CoffeeStoreFetcher::new(&test_config(base_url)).expect("fetcher construction should not fail")
}

async fn mount_results(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/places/nearby"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

#[derive(Debug)]
struct FixedPhotos(Vec<&'static str>);

#[async_trait]
impl PhotoLookup for FixedPhotos {
    async fn lookup_photos(&self, _count: usize) -> Result<Vec<String>, FetchError> {
        Ok(self.0.iter().map(|s| (*s).to_owned()).collect())
    }
}

#[derive(Debug)]
struct FailingPhotos;

#[async_trait]
impl PhotoLookup for FailingPhotos {
    async fn lookup_photos(&self, _count: usize) -> Result<Vec<String>, FetchError> {
        Err(FetchError::UnexpectedStatus {
            status: 401,
            url: "https://api.unsplash.com/search/photos".to_owned(),
        })
    }
}

// ---------------------------------------------------------------------------
// Happy paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_normalizes_sample_response() {
    let server = MockServer::start().await;
    mount_results(
        &server,
        json!({
            "results": [{
                "fsq_id": "abc",
                "name": "Cafe X",
                "location": { "address": "1 Main St", "neighborhood": ["Downtown"] }
            }]
        }),
    )
    .await;

    let records = test_fetcher(&server.uri()).fetch(None, None).await;

    assert_eq!(
        records,
        vec![ShopRecord {
            id: "abc".to_owned(),
            address: "1 Main St".to_owned(),
            name: "Cafe X".to_owned(),
            neighbourhood: "Downtown".to_owned(),
            img_url: FALLBACK_IMG_URL.to_owned(),
        }]
    );
}

#[tokio::test]
async fn fetch_with_defaults_sends_default_location_limit_and_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/nearby"))
        .and(query_param("ll", "12.972442,77.580643"))
        .and(query_param("query", "coffee stores"))
        .and(query_param("limit", "8"))
        .and(header("authorization", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [{ "fsq_id": "1", "name": "Matched", "location": {} }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = test_fetcher(&server.uri()).fetch(None, None).await;

    assert_eq!(records.len(), 1, "default query params should match the mock");
    assert_eq!(records[0].name, "Matched");
}

#[tokio::test]
async fn fetch_passes_explicit_location_and_limit_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/nearby"))
        .and(query_param("ll", "40.7,-74.0"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [{ "fsq_id": "ny1", "name": "Joe Coffee", "location": {} }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = test_fetcher(&server.uri())
        .fetch(Some("40.7,-74.0"), Some(3))
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "ny1");
}

#[tokio::test]
async fn fetch_uses_cross_street_when_neighbourhood_missing() {
    let server = MockServer::start().await;
    mount_results(
        &server,
        json!({
            "results": [
                { "fsq_id": "a", "name": "A", "location": { "cross_street": "5th Ave" } },
                { "fsq_id": "b", "name": "B", "location": {} }
            ]
        }),
    )
    .await;

    let records = test_fetcher(&server.uri()).fetch(None, None).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].neighbourhood, "5th Ave");
    assert_eq!(records[1].neighbourhood, "");
    assert_eq!(records[1].address, "");
}

#[tokio::test]
async fn fetch_keeps_venue_without_location_object() {
    let server = MockServer::start().await;
    mount_results(
        &server,
        json!({
            "results": [
                { "fsq_id": "bare", "name": "Bare Cafe" },
                { "fsq_id": "full", "name": "Full Cafe", "location": { "address": "2 Side St" } }
            ]
        }),
    )
    .await;

    let records = test_fetcher(&server.uri()).fetch(None, None).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "bare");
    assert_eq!(records[0].address, "");
    assert_eq!(records[0].neighbourhood, "");
    assert_eq!(records[0].img_url, FALLBACK_IMG_URL);
    assert_eq!(records[1].address, "2 Side St");
}

#[tokio::test]
async fn fetch_without_photos_always_uses_fallback_image() {
    let server = MockServer::start().await;
    mount_results(
        &server,
        json!({
            "results": [
                { "fsq_id": "a", "name": "A", "location": {} },
                { "fsq_id": "b", "name": "B", "location": {} },
                { "fsq_id": "c", "name": "C", "location": {} }
            ]
        }),
    )
    .await;

    let records = test_fetcher(&server.uri()).fetch(None, None).await;

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.img_url == FALLBACK_IMG_URL));
}

#[tokio::test]
async fn fetch_assigns_injected_photos_by_index() {
    let server = MockServer::start().await;
    mount_results(
        &server,
        json!({
            "results": [
                { "fsq_id": "a", "name": "A", "location": {} },
                { "fsq_id": "b", "name": "B", "location": {} }
            ]
        }),
    )
    .await;

    let fetcher = test_fetcher(&server.uri())
        .with_photos(Arc::new(FixedPhotos(vec!["https://img.example.com/a.jpg"])));
    let records = fetcher.fetch(None, None).await;

    assert_eq!(records[0].img_url, "https://img.example.com/a.jpg");
    assert_eq!(records[1].img_url, FALLBACK_IMG_URL);
}

#[tokio::test]
async fn fetch_skips_malformed_venue_and_keeps_the_rest() {
    let server = MockServer::start().await;
    mount_results(
        &server,
        json!({
            "results": [
                { "name": "No Id", "location": {} },
                { "fsq_id": "ok", "name": "Fine", "location": {} }
            ]
        }),
    )
    .await;

    let records = test_fetcher(&server.uri()).fetch(None, None).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "ok");
}

// ---------------------------------------------------------------------------
// Failure paths: always an empty list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_returns_empty_when_results_field_absent() {
    let server = MockServer::start().await;
    mount_results(&server, json!({ "message": "Invalid request token." })).await;

    let records = test_fetcher(&server.uri()).fetch(None, None).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_returns_empty_when_results_null() {
    let server = MockServer::start().await;
    mount_results(&server, json!({ "results": null })).await;

    let records = test_fetcher(&server.uri()).fetch(None, None).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_returns_empty_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/places/nearby"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let records = test_fetcher(&server.uri()).fetch(None, None).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_returns_empty_on_invalid_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/places/nearby"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let records = test_fetcher(&server.uri()).fetch(None, None).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_returns_empty_when_network_call_fails() {
    // Start and drop a server so its port is known to be closed.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let records = test_fetcher(&uri).fetch(None, None).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_returns_empty_when_photo_lookup_fails() {
    let server = MockServer::start().await;
    mount_results(
        &server,
        json!({ "results": [{ "fsq_id": "a", "name": "A", "location": {} }] }),
    )
    .await;

    let fetcher = test_fetcher(&server.uri()).with_photos(Arc::new(FailingPhotos));
    let records = fetcher.fetch(None, None).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_without_api_key_sends_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/places/nearby"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&json!({
            "message": "Invalid request token."
        })))
        .mount(&server)
        .await;

    let mut config = test_config(&server.uri());
    config.places_api_key = None;
    let fetcher = CoffeeStoreFetcher::new(&config).unwrap();

    let records = fetcher.fetch(None, None).await;
    assert!(records.is_empty());

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}
