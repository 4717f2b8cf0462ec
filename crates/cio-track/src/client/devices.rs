use serde_json::{json, Value};
use tracing::instrument;

use customerio_client::security::path;
use customerio_client::{Error, RequestMethod, Response, Result};

use super::customer_path;
use crate::validation::require_non_blank;

impl super::TrackClient {
    /// Register a device for push notifications.
    ///
    /// `data` carries extra device attributes such as `last_used`; the `id`
    /// and `platform` arguments always win over keys of the same name.
    #[instrument(skip(self, data))]
    pub fn add_device(
        &self,
        customer_id: &str,
        device_id: &str,
        platform: &str,
        data: Option<Value>,
    ) -> Result<Response> {
        require_non_blank(customer_id, "customer_id")?;
        require_non_blank(device_id, "device_id")?;
        require_non_blank(platform, "platform")?;

        let mut device = match data {
            None | Some(Value::Null) => serde_json::Map::new(),
            Some(Value::Object(map)) => map,
            Some(_) => return Err(Error::param("data parameter must be a hash")),
        };
        device.insert("id".to_string(), Value::from(device_id));
        device.insert("platform".to_string(), Value::from(platform));

        let path = format!("{}/devices", customer_path(customer_id));
        let body = json!({ "device": device });
        self.client
            .execute_and_verify(RequestMethod::Put, &path, Some(&body))
    }

    /// Remove a device from a customer.
    #[instrument(skip(self))]
    pub fn delete_device(&self, customer_id: &str, device_id: &str) -> Result<Response> {
        require_non_blank(customer_id, "customer_id")?;
        require_non_blank(device_id, "device_id")?;

        let path = format!(
            "{}/devices/{}",
            customer_path(customer_id),
            path::escape(device_id)
        );
        self.client
            .execute_and_verify(RequestMethod::Delete, &path, None)
    }
}
