//! HTTP request building.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};

/// HTTP request method.
///
/// Only GET, POST, PUT and DELETE are sent by the transport; the remaining
/// verbs are rejected with [`ErrorKind::InvalidRequest`] before any I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl RequestMethod {
    /// Returns true if the Customer.io APIs accept this method.
    pub fn is_supported(&self) -> bool {
        matches!(
            self,
            RequestMethod::Get | RequestMethod::Post | RequestMethod::Put | RequestMethod::Delete
        )
    }

    /// Upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Head => "HEAD",
        }
    }

    /// Convert to reqwest::Method, rejecting unsupported verbs.
    pub fn to_reqwest(&self) -> Result<reqwest::Method> {
        match self {
            RequestMethod::Get => Ok(reqwest::Method::GET),
            RequestMethod::Post => Ok(reqwest::Method::POST),
            RequestMethod::Put => Ok(reqwest::Method::PUT),
            RequestMethod::Delete => Ok(reqwest::Method::DELETE),
            other => Err(invalid_method(other.as_str())),
        }
    }
}

impl FromStr for RequestMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(RequestMethod::Get),
            "POST" => Ok(RequestMethod::Post),
            "PUT" => Ok(RequestMethod::Put),
            "PATCH" => Ok(RequestMethod::Patch),
            "DELETE" => Ok(RequestMethod::Delete),
            "HEAD" => Ok(RequestMethod::Head),
            _ => Err(invalid_method(s)),
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn invalid_method(method: &str) -> Error {
    Error::new(ErrorKind::InvalidRequest(format!(
        "Invalid request method {:?}",
        method
    )))
}

/// Builder for a single HTTP request.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) credentials: Option<Credentials>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            credentials: None,
        }
    }

    /// Authenticate with the given credentials (Basic or Bearer).
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set JSON body.
    pub fn json<T: Serialize>(self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)?;
        Ok(self.json_value(value))
    }

    /// Set raw JSON body.
    pub fn json_value(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The target URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}
