//! # customerio-track
//!
//! Customer.io Track API client.
//!
//! ## Features
//!
//! - **Customers** - Identify (create/update), delete, suppress, unsuppress, merge
//! - **Events** - Customer events, anonymous events, page views
//! - **Devices** - Register and remove push devices
//! - **Segments** - Add/remove customers to manual segments
//! - **Metrics** - Report delivery metrics and (legacy) push events
//! - **Region** - Look up the account's data-center region
//!
//! ## Example
//!
//! ```rust,no_run
//! use customerio_track::{Region, TrackClient};
//! use serde_json::json;
//!
//! fn main() -> Result<(), customerio_track::Error> {
//!     let client = TrackClient::new("site-id", "api-key", Region::Us)?;
//!
//!     // Create or update a customer
//!     client.identify(json!({"id": "5", "email": "jane@example.com"}))?;
//!
//!     // Record an event
//!     client.track("5", "purchase", json!({"price": 23.45}))?;
//!
//!     // Register a device
//!     client.add_device("5", "device-token", "ios", None)?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod identity;
mod types;
mod validation;

// Main client
pub use client::TrackClient;

// Identifier resolution strategy
pub use identity::{CustomerIdResolver, DefaultIdResolver};

// Value types
pub use types::{Attributes, DeliveryMetric, IdentifierType, PushEvent, RegionInfo};

// Re-export transport types that users might need
pub use customerio_client::{
    BaseClient, ClientConfig, ClientConfigBuilder, Credentials, Error, ErrorKind, Region,
    Response, Result,
};
