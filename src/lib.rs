//! # customerio-api
//!
//! A Customer.io API client library for Rust.
//!
//! This library provides typed access to the Customer.io Track and
//! Transactional APIs with region selection, credential handling, and
//! structured errors.
//!
//! ## Security
//!
//! - API keys and app keys are redacted in Debug output
//! - Tracing spans skip credentials and request payloads
//!
//! ## Crates
//!
//! - **customerio-client** - Core HTTP transport: regions, credentials, escaping, error mapping
//! - **customerio-track** - Track API: customers, events, devices, segments, delivery metrics
//! - **customerio-transactional** - Transactional API: email, push, SMS, inbox, broadcasts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use customerio_api::{ApiClient, Region, SendEmailRequest, TrackClient};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let track = TrackClient::new("site-id", "api-key", Region::Us)?;
//!     track.identify(json!({"id": "5", "email": "jane@example.com"}))?;
//!     track.track("5", "purchase", json!({"price": 23.45}))?;
//!
//!     let api = ApiClient::new("app-key", Region::Us)?;
//!     let request = SendEmailRequest::from_value(json!({
//!         "transactional_message_id": 3,
//!         "to": "jane@example.com",
//!         "identifiers": {"id": "5"}
//!     }))?;
//!     api.send_email(&request)?;
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use customerio_client as client;
#[cfg(feature = "track")]
pub use customerio_track as track;
#[cfg(feature = "transactional")]
pub use customerio_transactional as transactional;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use customerio_client::{ClientConfig, Credentials, Error, ErrorKind, Region, Result};
#[cfg(feature = "track")]
pub use customerio_track::{DeliveryMetric, TrackClient};
#[cfg(feature = "transactional")]
pub use customerio_transactional::{
    ApiClient, SendEmailRequest, SendInboxMessageRequest, SendPushRequest, SendSMSRequest,
    TriggerBroadcastRequest,
};
