//! Track API tests against a mock server.

use super::common::{basic_auth, track_client, API_KEY, SITE_ID};
use customerio_api::track::{BaseClient, IdentifierType};
use customerio_api::{ClientConfig, Credentials, DeliveryMetric, ErrorKind, TrackClient};
use mockito::Matcher;
use serde_json::json;
use std::net::TcpListener;
use std::time::Duration;

// ============================================================================
// Customer lifecycle
// ============================================================================

#[test]
fn test_customer_lifecycle() {
    let mut server = mockito::Server::new();
    let auth = basic_auth();

    let identify = server
        .mock("PUT", "/api/v1/customers/jane%20doe")
        .match_header("authorization", auth.as_str())
        .match_body(Matcher::Json(json!({
            "id": "jane doe",
            "email": "jane@example.com",
            "plan": "pro"
        })))
        .with_status(200)
        .create();
    let event = server
        .mock("POST", "/api/v1/customers/jane%20doe/events")
        .match_header("authorization", auth.as_str())
        .match_body(Matcher::Json(json!({
            "name": "purchase",
            "timestamp": 1561231234,
            "data": {"price": 23.45, "timestamp": 1561231234}
        })))
        .with_status(200)
        .create();
    let device = server
        .mock("PUT", "/api/v1/customers/jane%20doe/devices")
        .match_body(Matcher::Json(json!({
            "device": {"id": "token-1", "platform": "ios", "last_used": 1561235678}
        })))
        .with_status(200)
        .create();
    let delete_device = server
        .mock("DELETE", "/api/v1/customers/jane%20doe/devices/token-1")
        .with_status(200)
        .create();
    let delete = server
        .mock("DELETE", "/api/v1/customers/jane%20doe")
        .with_status(200)
        .create();

    let client = track_client(&server);
    client
        .identify(json!({"id": "jane doe", "email": "jane@example.com", "plan": "pro"}))
        .expect("identify should succeed");
    client
        .track("jane doe", "purchase", json!({"price": 23.45, "timestamp": 1561231234}))
        .expect("track should succeed");
    client
        .add_device("jane doe", "token-1", "ios", Some(json!({"last_used": 1561235678})))
        .expect("add_device should succeed");
    client
        .delete_device("jane doe", "token-1")
        .expect("delete_device should succeed");
    client.delete("jane doe").expect("delete should succeed");

    identify.assert();
    event.assert();
    device.assert();
    delete_device.assert();
    delete.assert();
}

#[test]
fn test_identify_precedence_through_facade() {
    let mut server = mockito::Server::new();
    let by_customer_id = server
        .mock("PUT", "/api/v1/customers/1234")
        .with_status(200)
        .create();
    let by_cio_id = server
        .mock("PUT", "/api/v1/customers/cio_347f00d")
        .match_body(Matcher::PartialJson(json!({"cio_id": "347f00d"})))
        .with_status(200)
        .create();

    let client = track_client(&server);
    client
        .identify(json!({"customer_id": "1234", "id": "5"}))
        .unwrap();
    client
        .identify(json!({"cio_id": "347f00d", "email": "new@example.com"}))
        .unwrap();

    by_customer_id.assert();
    by_cio_id.assert();
}

#[test]
fn test_segments_metrics_and_merge() {
    let mut server = mockito::Server::new();
    let segment = server
        .mock("POST", "/api/v1/segments/3/add_customers")
        .match_body(Matcher::Json(json!({"ids": ["1", "2"]})))
        .with_status(200)
        .create();
    let metric = server
        .mock("POST", "/api/v1/metrics")
        .match_body(Matcher::Json(json!({
            "metric": "delivered",
            "delivery_id": "d-1",
            "recipient": "jane@example.com"
        })))
        .with_status(200)
        .create();
    let merge = server
        .mock("POST", "/api/v1/merge_customers")
        .match_body(Matcher::Json(json!({
            "primary": {"id": "1"},
            "secondary": {"email": "dup@example.com"}
        })))
        .with_status(200)
        .create();

    let client = track_client(&server);
    client.add_to_segment(3, [1, 2]).unwrap();
    client
        .track_delivery_metric(
            "delivered".parse::<DeliveryMetric>().unwrap(),
            json!({"delivery_id": "d-1", "recipient": "jane@example.com", "extra": 1}),
        )
        .unwrap();
    client
        .merge_customers(IdentifierType::Id, "1", IdentifierType::Email, "dup@example.com")
        .unwrap();

    segment.assert();
    metric.assert();
    merge.assert();
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_identifier_never_reaches_server() {
    let mut server = mockito::Server::new();
    let mock = server.mock("PUT", Matcher::Any).expect(0).create();

    let err = track_client(&server)
        .identify(json!({"email": "customer@example.com"}))
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::MissingIdAttribute(_)));
    mock.assert();
}

#[test]
fn test_api_error_codes() {
    let mut server = mockito::Server::new();
    server
        .mock("PUT", "/api/v1/customers/5")
        .with_status(400)
        .with_body(r#"{"meta":{"error":"example error"}}"#)
        .create();
    server
        .mock("DELETE", "/api/v1/customers/5")
        .with_status(500)
        .with_body("Server unavailable")
        .create();

    let client = track_client(&server);

    let err = client.identify(json!({"id": 5})).unwrap_err();
    assert_eq!(err.status_code(), Some("400"));
    assert_eq!(err.message(), Some("example error"));

    let err = client.delete("5").unwrap_err();
    assert_eq!(err.status_code(), Some("500"));
    assert_eq!(err.message(), Some("Server unavailable"));
}

#[test]
fn test_timeout_is_distinct_from_api_errors() {
    // Accepts connections but never answers.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let config = ClientConfig::builder()
        .with_timeout(Duration::from_millis(200))
        .build();
    let base = BaseClient::with_config(Credentials::basic(SITE_ID, API_KEY), url, config).unwrap();
    let client = TrackClient::from_client(base);

    let err = client.delete("5").unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(!err.is_api_error());
    drop(listener);
}
