//! Tests for the HTTP transport module

use super::*;
use crate::error::Error;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn url(server: &MockServer, rest: &str) -> Url {
    Url::parse(&format!("{}{rest}", server.uri())).unwrap()
}

#[test]
fn test_transport_config_default() {
    let config = HttpTransportConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.rate_limit.is_none());
    assert!(config.default_headers.is_empty());
}

#[test]
fn test_transport_rate_limiter_enabled() {
    let transport = HttpTransport::with_config(HttpTransportConfig {
        rate_limit: Some(RateLimiterConfig::new(10, 10)),
        ..Default::default()
    })
    .unwrap();
    assert!(transport.has_rate_limiter());
    assert!(!HttpTransport::new().unwrap().has_rate_limiter());
}

#[tokio::test]
async fn test_fetch_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "category": {"list_endpoint": "/v1/category/"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let body = transport
        .fetch(&url(&mock_server, "/v1/?format=json"))
        .await
        .unwrap();

    assert_eq!(body["category"]["list_endpoint"], "/v1/category/");
}

#[tokio::test]
async fn test_fetch_sends_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/"))
        .and(header("Accept-Language", "sv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = HttpTransportConfig::default();
    config
        .default_headers
        .insert("Accept-Language".to_string(), "sv".to_string());
    let transport = HttpTransport::with_config(config).unwrap();

    transport.fetch(&url(&mock_server, "/v1/")).await.unwrap();
}

#[tokio::test]
async fn test_fetch_status_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/episode/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let err = transport
        .fetch(&url(&mock_server, "/v1/episode/"))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "down");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_invalid_json_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let err = transport.fetch(&url(&mock_server, "/v1/")).await.unwrap_err();

    assert!(matches!(err, Error::MalformedResponse { .. }));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_fetch_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::with_config(HttpTransportConfig {
        timeout: Duration::from_millis(50),
        ..Default::default()
    })
    .unwrap();
    let err = transport.fetch(&url(&mock_server, "/v1/")).await.unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let transport = HttpTransport::new().unwrap();
    let err = transport
        .fetch(&Url::parse("http://127.0.0.1:1/v1/").unwrap())
        .await
        .unwrap_err();

    assert!(err.is_transport());
}
