use base64::Engine;
use customerio_api::{ApiClient, TrackClient};

pub const SITE_ID: &str = "SITE_ID";
pub const API_KEY: &str = "API_KEY";
pub const APP_KEY: &str = "APP_KEY";

/// Expected `Authorization` header for the Track test credentials.
pub fn basic_auth() -> String {
    let token = base64::engine::general_purpose::STANDARD.encode(format!("{SITE_ID}:{API_KEY}"));
    format!("Basic {token}")
}

pub fn track_client(server: &mockito::Server) -> TrackClient {
    TrackClient::with_url(SITE_ID, API_KEY, server.url()).expect("Failed to create Track client")
}

pub fn api_client(server: &mockito::Server) -> ApiClient {
    ApiClient::with_url(APP_KEY, server.url()).expect("Failed to create API client")
}

/// Track client for a real workspace.
///
/// Panics with setup instructions if the credentials are not exported.
pub fn live_track_client() -> TrackClient {
    match TrackClient::from_env() {
        Ok(client) => client,
        Err(e) => panic!(
            "\n\nLive tests need a Customer.io workspace ({e}).\n\
             Export CUSTOMERIO_SITE_ID and CUSTOMERIO_API_KEY, and optionally\n\
             CUSTOMERIO_REGION=eu for EU workspaces.\n\n"
        ),
    }
}
