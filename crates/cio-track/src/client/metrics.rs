use serde_json::Value;
use tracing::instrument;

use customerio_client::{Error, RequestMethod, Response, Result};

use crate::types::DeliveryMetric;
use crate::validation::{
    into_attributes, is_blank, is_valid_timestamp, is_valid_url, retain_keys,
};

const METRIC_KEYS: &[&str] = &["delivery_id", "timestamp", "recipient", "reason", "href"];

impl super::TrackClient {
    /// Report a delivery metric for a message.
    ///
    /// Only `delivery_id`, `timestamp`, `recipient`, `reason` and `href` are
    /// sent; anything else in `attributes` is dropped.
    #[instrument(skip(self, attributes))]
    pub fn track_delivery_metric(
        &self,
        metric: DeliveryMetric,
        attributes: Value,
    ) -> Result<Response> {
        let mut body = retain_keys(into_attributes(attributes, "attributes")?, METRIC_KEYS);

        if is_blank(body.get("delivery_id")) {
            return Err(Error::param("delivery_id must be a non-empty string"));
        }
        if let Some(timestamp) = body.get("timestamp").filter(|v| !v.is_null()) {
            if !is_valid_timestamp(timestamp) {
                return Err(Error::param("timestamp must be a valid timestamp"));
            }
        }
        if let Some(href) = body.get("href").filter(|v| !v.is_null()) {
            if !is_valid_url(href) {
                return Err(Error::param("href must be a valid url"));
            }
        }

        body.insert("metric".to_string(), Value::from(metric.as_str()));
        self.client.execute_and_verify(
            RequestMethod::Post,
            "/api/v1/metrics",
            Some(&Value::Object(body)),
        )
    }
}
