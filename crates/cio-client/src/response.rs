//! HTTP response handling and API error extraction.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result};

/// A fully-read HTTP response.
///
/// The body is read eagerly by the transport, so a `Response` is plain data:
/// it can be inspected, cloned, and dropped without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    content_type: Option<String>,
    body: String,
}

impl Response {
    /// Create a response from a status code and body text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    pub(crate) fn with_content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Get the response body as text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Take the response body.
    pub fn into_body(self) -> String {
        self.body
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }

    /// Parse the body as a JSON value; an empty body yields `Value::Null`.
    pub fn json_value(&self) -> Result<serde_json::Value> {
        if self.body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        self.json()
    }

    /// Return the response unchanged if it is 2xx, otherwise an
    /// [`ErrorKind::InvalidResponse`] built from the status and body.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(self.to_error())
        }
    }

    /// Build the API error for this response.
    pub fn to_error(&self) -> Error {
        Error::new(ErrorKind::InvalidResponse {
            code: self.status.to_string(),
            message: error_message(self.status, &self.body),
        })
    }
}

/// Error envelope returned by the API on 400 responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    meta: ErrorMeta,
}

#[derive(Debug, Deserialize)]
struct ErrorMeta {
    error: String,
}

/// Extract the message for an API error.
///
/// A 400 whose body is JSON with a `meta.error` string uses that string.
/// Everything else (including 5xx and unparseable 400 bodies) uses the raw
/// body text.
fn error_message(status: u16, body: &str) -> String {
    if status == 400 {
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            return envelope.meta.error;
        }
    }
    body.to_string()
}
