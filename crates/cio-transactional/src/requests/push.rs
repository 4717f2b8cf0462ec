use serde::Serialize;
use serde_json::{Map, Value};

use customerio_client::Result;

use super::{into_options, retain_allowed, MessageKind, TransactionalRequest};

const FIELDS: &[&str] = &[
    "transactional_message_id",
    "identifiers",
    "to",
    "title",
    "message",
    "disable_message_retention",
    "send_to_unsubscribed",
    "queue_draft",
    "message_data",
    "send_at",
    "language",
    "image_url",
    "link",
    "sound",
    "custom_data",
    "device",
    "custom_device",
];

/// Payload for `POST /v1/send/push`.
///
/// A `device` option is also sent as `custom_device`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SendPushRequest {
    message: Map<String, Value>,
}

impl SendPushRequest {
    pub fn new(options: Map<String, Value>) -> Self {
        let mut message = retain_allowed(MessageKind::Push, options, FIELDS);
        if let Some(device) = message
            .get("device")
            .filter(|d| !matches!(d, Value::Null | Value::Bool(false)))
            .cloned()
        {
            message.insert("custom_device".to_string(), device);
        }
        Self { message }
    }

    /// Build from a JSON object.
    pub fn from_value(options: Value) -> Result<Self> {
        Ok(Self::new(into_options(options)?))
    }

    pub fn message(&self) -> &Map<String, Value> {
        &self.message
    }
}

impl TransactionalRequest for SendPushRequest {
    const KIND: MessageKind = MessageKind::Push;
}
