//! Customer.io Track API client.
//!
//! This client wraps `BaseClient` from `customerio-client` and provides
//! typed methods for Track API operations.

use std::sync::Arc;

use customerio_client::security::path;
use customerio_client::{
    BaseClient, ClientConfig, Credentials, Error, ErrorKind, Region, Result,
};
use tracing::warn;

use crate::identity::{CustomerIdResolver, DefaultIdResolver};

mod customers;
mod devices;
mod events;
mod metrics;
mod region;
mod segments;

/// Customer.io Track API client.
///
/// Provides typed methods for Track API operations:
/// - Identify, delete, suppress and merge customers
/// - Customer, anonymous and page-view events
/// - Device registration
/// - Manual segment membership
/// - Delivery metrics
///
/// Every mutating operation performs exactly one request and fails with
/// [`ErrorKind::InvalidResponse`] on a non-2xx status.
///
/// # Example
///
/// ```rust,no_run
/// use customerio_track::{Region, TrackClient};
/// use serde_json::json;
///
/// # fn main() -> customerio_track::Result<()> {
/// let client = TrackClient::new("site-id", "api-key", Region::Eu)?;
/// client.identify(json!({"cio_id": "347f00d", "email": "new@example.com"}))?;
/// client.track_anonymous("anon-42", "signup_started", json!({}))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TrackClient {
    client: BaseClient,
    id_resolver: Arc<dyn CustomerIdResolver>,
}

impl TrackClient {
    /// Create a client for the given region.
    pub fn new(
        site_id: impl Into<String>,
        api_key: impl Into<String>,
        region: Region,
    ) -> Result<Self> {
        Self::with_url(site_id, api_key, region.track_url())
    }

    /// Create a client against an explicit base URL.
    pub fn with_url(
        site_id: impl Into<String>,
        api_key: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(
            Credentials::basic(site_id, api_key),
            url,
            ClientConfig::default(),
        )
    }

    /// Create a client with custom HTTP configuration.
    ///
    /// The Track API only accepts site ID / API key credentials.
    pub fn with_config(
        credentials: Credentials,
        url: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        if !matches!(credentials, Credentials::Basic { .. }) {
            return Err(Error::new(ErrorKind::Config(
                "the Track API requires site_id and api_key credentials".to_string(),
            )));
        }
        if !credentials.is_valid() {
            warn!("Track client created with blank credentials");
        }
        let client = BaseClient::with_config(credentials, url, config)?;
        Ok(Self::from_client(client))
    }

    /// Create a client from environment variables.
    ///
    /// Reads `CUSTOMERIO_SITE_ID` and `CUSTOMERIO_API_KEY`. The base URL comes
    /// from `CUSTOMERIO_TRACK_URL` when set, else from `CUSTOMERIO_REGION`.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::track_from_env()?;
        let url = match std::env::var("CUSTOMERIO_TRACK_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => Region::from_env()?.track_url().to_string(),
        };
        Self::with_config(credentials, url, ClientConfig::default())
    }

    /// Create a Track client from an existing BaseClient.
    pub fn from_client(client: BaseClient) -> Self {
        Self {
            client,
            id_resolver: Arc::new(DefaultIdResolver),
        }
    }

    /// Replace the identifier resolution strategy used by `identify`.
    pub fn with_id_resolver(mut self, resolver: impl CustomerIdResolver + 'static) -> Self {
        self.id_resolver = Arc::new(resolver);
        self
    }

    /// Get the underlying BaseClient.
    pub fn inner(&self) -> &BaseClient {
        &self.client
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// `/api/v1/customers/{id}` with the id escaped.
pub(crate) fn customer_path(customer_id: &str) -> String {
    format!("/api/v1/customers/{}", path::escape(customer_id))
}
