//! Customer.io Transactional API client.

use serde_json::Value;
use tracing::{debug, instrument};

use customerio_client::{BaseClient, ClientConfig, Credentials, Region, Result};

use crate::requests::{
    SendEmailRequest, SendInboxMessageRequest, SendPushRequest, SendSMSRequest,
    TransactionalRequest, TriggerBroadcastRequest,
};

/// Customer.io Transactional API client.
///
/// Authenticates with an App API key as a bearer token. Each send method
/// accepts only its own request builder, so a push payload can never reach
/// the email endpoint.
///
/// On a 2xx reply the parsed JSON body is returned (`Value::Null` when the
/// body is empty). Any other status fails with
/// [`ErrorKind::InvalidResponse`](customerio_client::ErrorKind::InvalidResponse).
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: BaseClient,
}

impl ApiClient {
    /// Create a client for the given region.
    pub fn new(app_key: impl Into<String>, region: Region) -> Result<Self> {
        Self::with_url(app_key, region.api_url())
    }

    /// Create a client against an explicit base URL.
    pub fn with_url(app_key: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        Self::with_config(app_key, url, ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(
        app_key: impl Into<String>,
        url: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = BaseClient::with_config(Credentials::bearer(app_key), url, config)?;
        Ok(Self::from_client(client))
    }

    /// Create a client from environment variables.
    ///
    /// Reads `CUSTOMERIO_APP_KEY`. The base URL comes from
    /// `CUSTOMERIO_API_URL` when set, else from `CUSTOMERIO_REGION`.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::app_from_env()?;
        let url = match std::env::var("CUSTOMERIO_API_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => Region::from_env()?.api_url().to_string(),
        };
        let client = BaseClient::with_config(credentials, url, ClientConfig::default())?;
        Ok(Self::from_client(client))
    }

    /// Create a Transactional client from an existing BaseClient.
    pub fn from_client(client: BaseClient) -> Self {
        Self { client }
    }

    /// Get the underlying BaseClient.
    pub fn inner(&self) -> &BaseClient {
        &self.client
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Post any transactional request to its endpoint.
    #[instrument(skip(self, request), fields(kind = %R::KIND))]
    pub fn send<R: TransactionalRequest>(&self, request: &R) -> Result<Value> {
        let path = request.path();
        let body = serde_json::to_value(request)?;

        let delivery = self.client.post_json(&path, &body)?;
        debug!(path = %path, "Transactional request accepted");
        Ok(delivery)
    }

    /// Send a transactional email.
    pub fn send_email(&self, request: &SendEmailRequest) -> Result<Value> {
        self.send(request)
    }

    /// Send a transactional push notification.
    pub fn send_push(&self, request: &SendPushRequest) -> Result<Value> {
        self.send(request)
    }

    /// Send a transactional SMS.
    pub fn send_sms(&self, request: &SendSMSRequest) -> Result<Value> {
        self.send(request)
    }

    /// Send an inbox message.
    pub fn send_inbox_message(&self, request: &SendInboxMessageRequest) -> Result<Value> {
        self.send(request)
    }

    /// Trigger an API-triggered broadcast.
    pub fn trigger_broadcast(&self, request: &TriggerBroadcastRequest) -> Result<Value> {
        self.send(request)
    }
}
