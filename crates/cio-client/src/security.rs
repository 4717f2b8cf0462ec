//! Escaping utilities for user-supplied values.
//!
//! ## Path Segment Encoding
//!
//! Customer IDs, device IDs and segment IDs are interpolated into URL paths.
//! User-provided values MUST be escaped first so they cannot break out of the
//! path or change its meaning:
//!
//! ```rust
//! use customerio_client::security::path;
//!
//! // CORRECT
//! let url = format!("/api/v1/customers/{}", path::escape("jane doe"));
//! assert_eq!(url, "/api/v1/customers/jane%20doe");
//!
//! // WRONG - NEVER do this with user input
//! // let url = format!("/api/v1/customers/{}", customer_id);
//! ```

/// Percent-encoding for URL path segments.
pub mod path {
    use serde_json::Value;
    use std::fmt::Display;

    /// Percent-encode a value for use as a single path segment.
    ///
    /// Every character outside the unreserved set `[A-Za-z0-9-._~]` is
    /// encoded. Unlike form encoding, a space becomes `%20` rather than `+`,
    /// and `/` is encoded so the value stays within one segment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use customerio_client::security::path;
    ///
    /// assert_eq!(path::escape("a b/c"), "a%20b%2Fc");
    /// assert_eq!(path::escape(42), "42");
    /// ```
    #[must_use]
    pub fn escape(value: impl Display) -> String {
        urlencoding::encode(&value.to_string()).into_owned()
    }

    /// Escape a JSON value as a path segment.
    ///
    /// Strings are used verbatim (without JSON quotes); every other value uses
    /// its JSON text, so `5` becomes `"5"` and `true` becomes `"true"`.
    #[must_use]
    pub fn escape_value(value: &Value) -> String {
        escape(value_to_string(value))
    }

    /// String form of a JSON value as used in paths and id lists.
    #[must_use]
    pub fn value_to_string(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
