//! Authenticated client bound to one base URL.
//!
//! `BaseClient` combines credentials, a base URL and an [`HttpClient`]. The
//! domain clients (track, transactional) translate their operations into
//! `execute` / `execute_and_verify` calls on it.
//!
//! ## Security
//!
//! - Secrets are redacted in Debug output
//! - Request bodies are skipped in tracing spans

use serde_json::Value;
use tracing::instrument;

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::Response;

/// Authenticated client for one Customer.io API family.
///
/// # Example
///
/// ```rust,no_run
/// use customerio_client::{BaseClient, Credentials, Region, RequestMethod};
///
/// # fn main() -> customerio_client::Result<()> {
/// let client = BaseClient::new(Credentials::bearer("app-key"), Region::Eu.api_url())?;
/// let body = serde_json::json!({"transactional_message_id": 3, "to": "jane@example.com"});
/// let response = client.execute(RequestMethod::Post, "/v1/send/email", Some(&body))?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BaseClient {
    http: HttpClient,
    base_url: String,
    credentials: Credentials,
}

impl BaseClient {
    /// Create a client with default HTTP configuration.
    pub fn new(credentials: Credentials, base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(credentials, base_url, ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(
        credentials: Credentials,
        base_url: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::Config(format!(
                "base URL must use http or https, got {:?}",
                parsed.scheme()
            ))));
        }

        let http = HttpClient::new(config)?;
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Get the HTTP configuration.
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Build the full URL for a path.
    ///
    /// If the path starts with `/`, it's appended to the base URL.
    /// Full `http(s)://` URLs are used as-is.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Create an authenticated request builder.
    pub fn request(&self, method: RequestMethod, path: &str) -> RequestBuilder {
        RequestBuilder::new(method, self.url(path)).credentials(self.credentials.clone())
    }

    /// Execute a request and return the raw response, whatever its status.
    pub fn execute(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Response> {
        self.execute_with_headers(method, path, body, &[])
    }

    /// Execute a request with extra headers and return the raw response.
    #[instrument(skip(self, body, headers), fields(base_url = %self.base_url))]
    pub fn execute_with_headers(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<&Value>,
        headers: &[(&str, &str)],
    ) -> Result<Response> {
        let mut request = self.request(method, path);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if let Some(body) = body.filter(|b| !b.is_null()) {
            request = request.json_value(body.clone());
        }
        self.http.execute(request)
    }

    /// Execute a request and fail with [`ErrorKind::InvalidResponse`] unless
    /// the status is 2xx.
    pub fn execute_and_verify(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Response> {
        self.execute(method, path, body)?.error_for_status()
    }

    /// POST a JSON body and parse the JSON response of a 2xx reply.
    pub fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        self.execute_and_verify(RequestMethod::Post, path, Some(body))?
            .json_value()
    }
}
