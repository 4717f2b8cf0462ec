//! Blocking HTTP client with timeouts, compression and request tracing.

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::Response;

/// HTTP client for the Customer.io APIs.
///
/// One call performs exactly one round trip: there is no retry, and the
/// response body is read before `execute` returns.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::blocking::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, url)
    }

    /// Create a PUT request builder.
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Put, url)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Delete, url)
    }

    /// Execute a request and read the full response.
    ///
    /// Non-2xx statuses are returned as ordinary responses; use
    /// [`Response::error_for_status`] to turn them into errors.
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let method = request.method.to_reqwest()?;
        let mut req = self.inner.request(method, request.url.as_str());

        match &request.credentials {
            Some(Credentials::Basic { site_id, api_key }) => {
                req = req.basic_auth(site_id, Some(api_key));
            }
            Some(Credentials::Bearer { app_key }) => {
                req = req.bearer_auth(app_key);
            }
            None => {}
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(ref body) = request.body {
            req = req.body(serde_json::to_string(body)?);
        }

        if self.config.enable_tracing {
            debug!(
                method = %request.method,
                url = %request.url,
                auth = request.credentials.as_ref().map(Credentials::scheme),
                "Sending request"
            );
        }

        let response = req.send()?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text()?;

        if self.config.enable_tracing {
            if (200..300).contains(&status) {
                debug!(status, content_length = body.len(), "Response received");
            } else {
                info!(status, content_length = body.len(), "Non-success response");
            }
        }

        Ok(Response::new(status, body).with_content_type(content_type))
    }
}
