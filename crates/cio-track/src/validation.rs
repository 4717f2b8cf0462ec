//! Parameter checks shared by the Track operations.

use customerio_client::{Error, Result};
use serde_json::Value;

use crate::types::Attributes;

/// Lower bound (exclusive) of a plausible Unix timestamp in seconds.
const MIN_TIMESTAMP: i64 = 999_999_999;
/// Upper bound (exclusive); millisecond-scale values are above it.
const MAX_TIMESTAMP: i64 = 100_000_000_000;

/// Missing, null, or a string that is empty after trimming.
pub(crate) fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Fail with a `Param` error if `value` is blank.
pub(crate) fn require_non_blank(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::param(format!("{} must be a non-empty string", name)));
    }
    Ok(())
}

/// Accept an object as attributes; `null` means no attributes.
pub(crate) fn into_attributes(value: Value, name: &str) -> Result<Attributes> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Attributes::new()),
        _ => Err(Error::param(format!("{} must be an object", name))),
    }
}

/// Keep only the listed keys.
pub(crate) fn retain_keys(mut attributes: Attributes, keys: &[&str]) -> Attributes {
    attributes.retain(|key, _| keys.contains(&key.as_str()));
    attributes
}

/// An integer Unix timestamp in seconds, excluding millisecond-scale values.
pub(crate) fn is_valid_timestamp(value: &Value) -> bool {
    value
        .as_i64()
        .is_some_and(|ts| ts > MIN_TIMESTAMP && ts < MAX_TIMESTAMP)
}

/// An absolute `http` or `https` URL with a host.
pub(crate) fn is_valid_url(value: &Value) -> bool {
    value
        .as_str()
        .and_then(|s| url::Url::parse(s).ok())
        .is_some_and(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
}
