//! # customerio-client
//!
//! Core HTTP transport shared by the Customer.io API crates.
//!
//! This crate provides:
//! - The region table (US / EU base URLs for both API families)
//! - Credentials for HTTP Basic (Track) and Bearer (Transactional) auth
//! - Path segment escaping for user-supplied identifiers
//! - A blocking HTTP client with timeouts and request tracing
//! - Status-code to error mapping
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (customerio-track, customerio-transactional)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      BaseClient                             │
//! │  - Holds credentials + base URL + HTTP client               │
//! │  - execute / execute_and_verify                             │
//! │  - Picks Basic or Bearer auth from the credentials          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HttpClient                             │
//! │  - Raw blocking HTTP with timeouts and compression          │
//! │  - Request building, eager response reading                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use customerio_client::{BaseClient, Credentials, Region, RequestMethod};
//!
//! # fn main() -> customerio_client::Result<()> {
//! let client = BaseClient::new(
//!     Credentials::basic("site-id", "api-key"),
//!     Region::Us.track_url(),
//! )?;
//!
//! let body = serde_json::json!({"email": "jane@example.com"});
//! let response = client.execute_and_verify(
//!     RequestMethod::Put,
//!     "/api/v1/customers/5",
//!     Some(&body),
//! )?;
//! assert!(response.is_success());
//! # Ok(())
//! # }
//! ```

mod base_client;
mod client;
mod config;
mod credentials;
mod error;
mod region;
mod request;
mod response;
pub mod security;

pub use base_client::BaseClient;
pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use credentials::Credentials;
pub use error::{Error, ErrorKind, Result};
pub use region::Region;
pub use request::{RequestBuilder, RequestMethod};
pub use response::Response;

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("customerio-api/", env!("CARGO_PKG_VERSION"));
