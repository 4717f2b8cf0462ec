use serde_json::{json, Value};
use tracing::instrument;

use customerio_client::{RequestMethod, Response, Result};

fn ids_body<I>(customer_ids: I) -> Value
where
    I: IntoIterator,
    I::Item: ToString,
{
    let ids: Vec<String> = customer_ids.into_iter().map(|id| id.to_string()).collect();
    json!({ "ids": ids })
}

impl super::TrackClient {
    /// Add customers to a manual segment.
    #[instrument(skip(self, customer_ids))]
    pub fn add_to_segment<I>(&self, segment_id: u64, customer_ids: I) -> Result<Response>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let path = format!("/api/v1/segments/{}/add_customers", segment_id);
        self.client
            .execute_and_verify(RequestMethod::Post, &path, Some(&ids_body(customer_ids)))
    }

    /// Remove customers from a manual segment.
    #[instrument(skip(self, customer_ids))]
    pub fn remove_from_segment<I>(&self, segment_id: u64, customer_ids: I) -> Result<Response>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let path = format!("/api/v1/segments/{}/remove_customers", segment_id);
        self.client
            .execute_and_verify(RequestMethod::Post, &path, Some(&ids_body(customer_ids)))
    }
}
