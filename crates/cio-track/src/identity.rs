//! Customer identifier resolution for `identify`.

use customerio_client::security::path::value_to_string;
use customerio_client::{Error, ErrorKind, Result};

use crate::types::Attributes;
use crate::validation::is_blank;

/// Picks the path identifier for an `identify` call.
///
/// Implementations may remove routing-only keys from `attributes`; whatever
/// remains is sent as the request body. Install a custom resolver with
/// [`TrackClient::with_id_resolver`](crate::TrackClient::with_id_resolver).
pub trait CustomerIdResolver: Send + Sync + std::fmt::Debug {
    /// Return the unescaped customer identifier to use in the path.
    fn resolve(&self, attributes: &mut Attributes) -> Result<String>;
}

/// Default precedence: `customer_id` > `cio_id` > `id`.
///
/// - `customer_id` is used verbatim and removed from the body.
/// - `cio_id` is addressed as `cio_<value>` and stays in the body, so `id`
///   and `email` can be changed without losing the record.
/// - `id` is used as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIdResolver;

impl CustomerIdResolver for DefaultIdResolver {
    fn resolve(&self, attributes: &mut Attributes) -> Result<String> {
        let customer_id = attributes.remove("customer_id");
        if let Some(id) = customer_id.as_ref().filter(|v| !is_blank(Some(*v))) {
            return Ok(value_to_string(id));
        }

        if let Some(cio_id) = attributes.get("cio_id").filter(|v| !is_blank(Some(*v))) {
            return Ok(format!("cio_{}", value_to_string(cio_id)));
        }

        if let Some(id) = attributes.get("id").filter(|v| !is_blank(Some(*v))) {
            return Ok(value_to_string(id));
        }

        Err(Error::new(ErrorKind::MissingIdAttribute(
            "Must provide a customer id".to_string(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn attrs(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_customer_id_wins_and_is_removed() {
        let mut attributes = attrs(json!({"customer_id": "1234", "id": "5"}));
        let id = DefaultIdResolver.resolve(&mut attributes).unwrap();

        assert_eq!(id, "1234");
        assert_eq!(Value::Object(attributes), json!({"id": "5"}));
    }

    #[test]
    fn test_cio_id_is_prefixed_and_kept() {
        let mut attributes = attrs(json!({"cio_id": "347f00d", "id": 5}));
        let id = DefaultIdResolver.resolve(&mut attributes).unwrap();

        assert_eq!(id, "cio_347f00d");
        assert_eq!(Value::Object(attributes), json!({"cio_id": "347f00d", "id": 5}));
    }

    #[test]
    fn test_customer_id_beats_cio_id() {
        let mut attributes = attrs(json!({"customer_id": "abc", "cio_id": "f00"}));
        assert_eq!(DefaultIdResolver.resolve(&mut attributes).unwrap(), "abc");
    }

    #[test]
    fn test_numeric_id() {
        let mut attributes = attrs(json!({"id": 5, "email": "jane@example.com"}));
        assert_eq!(DefaultIdResolver.resolve(&mut attributes).unwrap(), "5");
    }

    #[test]
    fn test_blank_identifiers_fall_through() {
        let mut attributes = attrs(json!({"customer_id": " ", "cio_id": "", "id": "7"}));
        assert_eq!(DefaultIdResolver.resolve(&mut attributes).unwrap(), "7");
        assert!(!attributes.contains_key("customer_id"));
    }

    #[test]
    fn test_missing_identifier() {
        for value in [
            json!({}),
            json!({"email": "jane@example.com"}),
            json!({"id": "", "cio_id": null, "customer_id": "  "}),
        ] {
            let mut attributes = attrs(value);
            let err = DefaultIdResolver.resolve(&mut attributes).unwrap_err();
            assert!(matches!(err.kind, ErrorKind::MissingIdAttribute(_)));
        }
    }
}
