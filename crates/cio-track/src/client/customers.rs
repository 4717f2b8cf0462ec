use serde_json::{json, Value};
use tracing::instrument;

use customerio_client::{RequestMethod, Response, Result};

use super::customer_path;
use crate::types::IdentifierType;
use crate::validation::{into_attributes, require_non_blank};

impl super::TrackClient {
    /// Create or update a customer.
    ///
    /// The path identifier comes from the installed
    /// [`CustomerIdResolver`](crate::CustomerIdResolver); with the default one
    /// the precedence is `customer_id` > `cio_id` > `id`. Fails with
    /// `MissingIdAttribute` before any request if none is usable.
    #[instrument(skip(self, attributes))]
    pub fn identify(&self, attributes: Value) -> Result<Response> {
        let mut attributes = into_attributes(attributes, "attributes")?;
        let customer_id = self.id_resolver.resolve(&mut attributes)?;

        self.client.execute_and_verify(
            RequestMethod::Put,
            &customer_path(&customer_id),
            Some(&Value::Object(attributes)),
        )
    }

    /// Delete a customer.
    #[instrument(skip(self))]
    pub fn delete(&self, customer_id: &str) -> Result<Response> {
        require_non_blank(customer_id, "customer_id")?;
        self.client
            .execute_and_verify(RequestMethod::Delete, &customer_path(customer_id), None)
    }

    /// Suppress a customer: delete it and ignore future data for the id.
    #[instrument(skip(self))]
    pub fn suppress(&self, customer_id: &str) -> Result<Response> {
        require_non_blank(customer_id, "customer_id")?;
        let path = format!("{}/suppress", customer_path(customer_id));
        self.client.execute_and_verify(RequestMethod::Post, &path, None)
    }

    /// Lift a suppression.
    #[instrument(skip(self))]
    pub fn unsuppress(&self, customer_id: &str) -> Result<Response> {
        require_non_blank(customer_id, "customer_id")?;
        let path = format!("{}/unsuppress", customer_path(customer_id));
        self.client.execute_and_verify(RequestMethod::Post, &path, None)
    }

    /// Merge the secondary customer into the primary one.
    #[instrument(skip(self))]
    pub fn merge_customers(
        &self,
        primary_type: IdentifierType,
        primary_id: &str,
        secondary_type: IdentifierType,
        secondary_id: &str,
    ) -> Result<Response> {
        require_non_blank(primary_id, "primary_id")?;
        require_non_blank(secondary_id, "secondary_id")?;

        let body = json!({
            "primary": { primary_type.as_str(): primary_id },
            "secondary": { secondary_type.as_str(): secondary_id },
        });
        self.client
            .execute_and_verify(RequestMethod::Post, "/api/v1/merge_customers", Some(&body))
    }
}
