//! Transactional API tests against a mock server.

use super::common::{api_client, APP_KEY};
use customerio_api::transactional::TransactionalRequest;
use customerio_api::{
    ErrorKind, SendEmailRequest, SendInboxMessageRequest, SendPushRequest, SendSMSRequest,
    TriggerBroadcastRequest,
};
use mockito::Matcher;
use serde_json::{json, Map, Value};

fn bearer() -> String {
    format!("Bearer {APP_KEY}")
}

#[test]
fn test_every_message_kind_hits_its_endpoint() {
    let mut server = mockito::Server::new();
    let auth = bearer();
    let mocks: Vec<_> = [
        "/v1/send/email",
        "/v1/send/push",
        "/v1/send/sms",
        "/v1/send/inbox_message",
        "/v1/campaigns/8/triggers",
    ]
    .into_iter()
    .map(|path| {
        server
            .mock("POST", path)
            .match_header("authorization", auth.as_str())
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(r#"{"delivery_id":"x"}"#)
            .create()
    })
    .collect();

    let client = api_client(&server);
    let options = json!({"transactional_message_id": 1, "identifiers": {"id": "5"}});

    client
        .send_email(&SendEmailRequest::from_value(options.clone()).unwrap())
        .unwrap();
    client
        .send_push(&SendPushRequest::from_value(options.clone()).unwrap())
        .unwrap();
    client
        .send_sms(&SendSMSRequest::from_value(options.clone()).unwrap())
        .unwrap();
    client
        .send_inbox_message(&SendInboxMessageRequest::from_value(options).unwrap())
        .unwrap();
    client
        .trigger_broadcast(&TriggerBroadcastRequest::new(8, Map::new()).unwrap())
        .unwrap();

    for mock in mocks {
        mock.assert();
    }
}

#[test]
fn test_generic_send_uses_request_path() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/send/sms")
        .with_status(200)
        .with_body(r#"{"delivery_id":"sms-1","queued_at":1500111111}"#)
        .create();

    let request = SendSMSRequest::from_value(json!({
        "transactional_message_id": 4,
        "identifiers": {"id": "5"}
    }))
    .unwrap();
    assert_eq!(request.path(), "/v1/send/sms");

    let reply = api_client(&server).send(&request).unwrap();
    assert_eq!(reply["queued_at"], 1500111111);
    mock.assert();
}

#[test]
fn test_email_payload_round_trip() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/send/email")
        .match_body(Matcher::Json(json!({
            "to": "customer@example.com",
            "identifiers": {"email": "customer@example.com"},
            "transactional_message_id": 6,
            "message_data": {"name": "Jane"},
            "send_at": 1700000000,
            "headers": {"X-Mailgun-Tag": "welcome"},
            "attachments": {"hello.txt": "aGVsbG8="}
        })))
        .with_status(200)
        .with_body(r#"{"delivery_id":"e-1"}"#)
        .create();

    let mut request = SendEmailRequest::from_value(json!({
        "to": "customer@example.com",
        "identifiers": {"email": "customer@example.com"},
        "transactional_message_id": 6,
        "message_data": {"name": "Jane"},
        "send_at": 1700000000,
        "headers": {"X-Mailgun-Tag": "welcome"},
        "customer_id": "not an email field",
        "attachments": {"ignored.txt": "eA=="}
    }))
    .unwrap();
    request.attach("hello.txt", "hello").unwrap();

    let reply = api_client(&server).send_email(&request).unwrap();
    assert_eq!(reply, json!({"delivery_id": "e-1"}));
    mock.assert();
}

#[test]
fn test_broadcast_selector_conflict_is_local() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    let mut payload = Map::new();
    payload.insert("emails".into(), json!(["a@example.com"]));
    payload.insert("ids".into(), json!(["1"]));

    let err = TriggerBroadcastRequest::new(1, payload).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Param(_)));

    let err = TriggerBroadcastRequest::from_value(Value::Null, Map::new()).unwrap_err();
    assert!(err.is_validation());
    mock.assert();
}

#[test]
fn test_bad_request_message() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/v1/send/push")
        .with_status(400)
        .with_body(r#"{"meta":{"error":"transactional_message_id is required"}}"#)
        .create();

    let err = api_client(&server)
        .send_push(&SendPushRequest::from_value(json!({})).unwrap())
        .unwrap_err();

    assert!(err.is_api_error());
    assert_eq!(err.status_code(), Some("400"));
    assert_eq!(err.message(), Some("transactional_message_id is required"));
}

#[test]
fn test_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = customerio_api::ApiClient::with_url(APP_KEY, url).unwrap();
    let err = client
        .send_sms(&SendSMSRequest::from_value(json!({})).unwrap())
        .unwrap_err();

    assert!(err.is_transport());
    assert!(!err.is_api_error());
}
