//! Live Track API checks (require a real workspace).

use super::common::live_track_client;
use serde_json::json;

#[test]
#[ignore = "requires CUSTOMERIO_SITE_ID and CUSTOMERIO_API_KEY"]
fn test_live_region_lookup() {
    let client = live_track_client();
    let info = client.region().expect("region lookup should succeed");

    assert!(info.region().is_some(), "unexpected region info: {info:?}");
}

#[test]
#[ignore = "requires CUSTOMERIO_SITE_ID and CUSTOMERIO_API_KEY"]
fn test_live_identify_track_delete() {
    let client = live_track_client();
    let id = format!("customerio-api-test {}", std::process::id());

    client
        .identify(json!({"id": id, "email": "integration@example.com"}))
        .expect("identify should succeed");
    client
        .track(&id, "integration_test", json!({"source": "customerio-api"}))
        .expect("track should succeed");
    client.delete(&id).expect("delete should succeed");
}
