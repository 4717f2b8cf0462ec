//! # customerio-transactional
//!
//! Customer.io Transactional API client.
//!
//! ## Features
//!
//! - **Email** - Send transactional emails, with attachments
//! - **Push** - Send transactional push notifications
//! - **SMS** - Send transactional SMS messages
//! - **Inbox** - Deliver in-app inbox messages
//! - **Broadcasts** - Trigger API-triggered broadcasts
//!
//! Each message type has its own request builder. The builders accept a
//! free-form options object and keep only the fields the endpoint accepts.
//!
//! ## Example
//!
//! ```rust,no_run
//! use customerio_transactional::{ApiClient, Region, SendEmailRequest};
//! use serde_json::json;
//!
//! fn main() -> Result<(), customerio_transactional::Error> {
//!     let client = ApiClient::new("app-key", Region::Us)?;
//!
//!     let mut request = SendEmailRequest::from_value(json!({
//!         "transactional_message_id": 3,
//!         "to": "jane@example.com",
//!         "identifiers": {"id": "5"},
//!         "message_data": {"first_name": "Jane"}
//!     }))?;
//!     request.attach("receipt.txt", b"Thanks for your order")?;
//!
//!     let delivery = client.send_email(&request)?;
//!     println!("queued: {}", delivery["delivery_id"]);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod requests;

pub use client::ApiClient;

// Request builders
pub use requests::{
    MessageKind, SendEmailRequest, SendInboxMessageRequest, SendPushRequest, SendSMSRequest,
    TransactionalRequest, TriggerBroadcastRequest,
};

// Re-export transport types that users might need
pub use customerio_client::{
    BaseClient, ClientConfig, ClientConfigBuilder, Credentials, Error, ErrorKind, Region, Result,
};
