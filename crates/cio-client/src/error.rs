//! Error types for the Customer.io clients.
//!
//! Validation errors are raised before any I/O. API errors carry the HTTP
//! status code as a string plus a best-effort message from the response body.

/// Result type alias for Customer.io operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Customer.io operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for a parameter validation error.
    pub fn param(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Param(message.into()))
    }

    /// Returns true if the error was raised locally, before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Param(_)
                | ErrorKind::MissingIdAttribute(_)
                | ErrorKind::InvalidRequest(_)
                | ErrorKind::Config(_)
                | ErrorKind::EnvVar(_)
        )
    }

    /// Returns true if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Returns true for network-level failures (timeouts included).
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Timeout | ErrorKind::Connection(_) | ErrorKind::Transport(_)
        )
    }

    /// Returns true if the API answered with a non-2xx status.
    pub fn is_api_error(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidResponse { .. })
    }

    /// The HTTP status code of an API error, as returned by the server.
    pub fn status_code(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::InvalidResponse { code, .. } => Some(code),
            _ => None,
        }
    }

    /// The message extracted from an API error response.
    pub fn message(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::InvalidResponse { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// A parameter failed client-side validation.
    #[error("Invalid parameter: {0}")]
    Param(String),

    /// `identify` was called without any usable customer identifier.
    #[error("Missing id attribute: {0}")]
    MissingIdAttribute(String),

    /// Unsupported HTTP method.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The API returned a non-2xx response.
    #[error("Customer.io API returned an invalid response ({code}): {message}")]
    InvalidResponse { code: String, message: String },

    /// Invalid configuration (region, base URL, HTTP client setup).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other failure reported by the HTTP stack.
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_builder() {
            ErrorKind::Config(err.to_string())
        } else {
            ErrorKind::Transport(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
