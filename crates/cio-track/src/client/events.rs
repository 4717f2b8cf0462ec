use serde_json::{Map, Value};
use tracing::instrument;

use customerio_client::{Error, RequestMethod, Response, Result};

use super::customer_path;
use crate::types::{Attributes, PushEvent};
use crate::validation::{
    into_attributes, is_blank, is_valid_timestamp, require_non_blank, retain_keys,
};

const PUSH_EVENT_KEYS: &[&str] = &["delivery_id", "device_id", "timestamp"];

/// Build an event body: `{name, data}` plus optional routing fields.
///
/// A plausible `data.timestamp` is also copied to the top level.
pub(crate) fn event_body(
    event_name: &str,
    anonymous_id: Option<&str>,
    event_type: Option<&str>,
    data: Attributes,
) -> Value {
    let mut body = Map::new();
    body.insert("name".to_string(), Value::from(event_name));

    if let Some(timestamp) = data.get("timestamp").filter(|ts| is_valid_timestamp(ts)) {
        body.insert("timestamp".to_string(), timestamp.clone());
    }
    if let Some(anonymous_id) = anonymous_id.filter(|id| !id.trim().is_empty()) {
        body.insert("anonymous_id".to_string(), Value::from(anonymous_id));
    }
    if let Some(event_type) = event_type {
        body.insert("type".to_string(), Value::from(event_type));
    }

    body.insert("data".to_string(), Value::Object(data));
    Value::Object(body)
}

impl super::TrackClient {
    /// Track an event for a known customer.
    #[instrument(skip(self, attributes))]
    pub fn track(&self, customer_id: &str, event_name: &str, attributes: Value) -> Result<Response> {
        require_non_blank(customer_id, "customer_id")?;
        require_non_blank(event_name, "event_name")?;
        let data = into_attributes(attributes, "attributes")?;

        let path = format!("{}/events", customer_path(customer_id));
        let body = event_body(event_name, None, None, data);
        self.client
            .execute_and_verify(RequestMethod::Post, &path, Some(&body))
    }

    /// Track an event with no known customer.
    ///
    /// A blank `anonymous_id` is omitted from the body.
    #[instrument(skip(self, attributes))]
    pub fn track_anonymous(
        &self,
        anonymous_id: &str,
        event_name: &str,
        attributes: Value,
    ) -> Result<Response> {
        require_non_blank(event_name, "event_name")?;
        let data = into_attributes(attributes, "attributes")?;

        let body = event_body(event_name, Some(anonymous_id), None, data);
        self.client
            .execute_and_verify(RequestMethod::Post, "/api/v1/events", Some(&body))
    }

    /// Track a page view; `page` is the event name.
    #[instrument(skip(self, attributes))]
    pub fn pageview(&self, customer_id: &str, page: &str, attributes: Value) -> Result<Response> {
        require_non_blank(customer_id, "customer_id")?;
        require_non_blank(page, "page")?;
        let data = into_attributes(attributes, "attributes")?;

        let path = format!("{}/events", customer_path(customer_id));
        let body = event_body(page, None, Some("page"), data);
        self.client
            .execute_and_verify(RequestMethod::Post, &path, Some(&body))
    }

    /// Report a push notification event through the legacy endpoint.
    ///
    /// Prefer [`track_delivery_metric`](Self::track_delivery_metric) for new
    /// integrations.
    #[instrument(skip(self, attributes))]
    pub fn track_push_notification_event(
        &self,
        event: PushEvent,
        attributes: Value,
    ) -> Result<Response> {
        let attributes = retain_keys(into_attributes(attributes, "attributes")?, PUSH_EVENT_KEYS);

        for key in ["delivery_id", "device_id"] {
            if is_blank(attributes.get(key)) {
                return Err(Error::param(format!(
                    "{} must be a non-empty string",
                    key
                )));
            }
        }
        if !attributes.get("timestamp").is_some_and(is_valid_timestamp) {
            return Err(Error::param(
                "timestamp must be a valid timestamp",
            ));
        }

        let mut body = attributes;
        body.insert("event".to_string(), Value::from(event.as_str()));
        self.client
            .execute_and_verify(RequestMethod::Post, "/push/events", Some(&Value::Object(body)))
    }
}
