use serde::Serialize;
use serde_json::{Map, Value};

use customerio_client::Result;

use super::{attachments, into_options, retain_allowed, MessageKind, TransactionalRequest};

const FIELDS: &[&str] = &[
    "identifiers",
    "transactional_message_id",
    "message_data",
    "from",
    "to",
    "disable_message_retention",
    "send_to_unsubscribed",
    "tracked",
    "queue_draft",
    "send_at",
    "language",
];

/// Payload for `POST /v1/send/sms`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SendSMSRequest {
    message: Map<String, Value>,
}

impl SendSMSRequest {
    pub fn new(options: Map<String, Value>) -> Self {
        let mut message = retain_allowed(MessageKind::Sms, options, FIELDS);
        attachments::reset(&mut message);
        Self { message }
    }

    /// Build from a JSON object.
    pub fn from_value(options: Value) -> Result<Self> {
        Ok(Self::new(into_options(options)?))
    }

    /// Attach a file; `data` is base64-encoded.
    pub fn attach(&mut self, name: &str, data: impl AsRef<[u8]>) -> Result<&mut Self> {
        attachments::attach(&mut self.message, name, data.as_ref())?;
        Ok(self)
    }

    /// Attach content that is already base64-encoded.
    pub fn attach_encoded(&mut self, name: &str, content: impl Into<String>) -> Result<&mut Self> {
        attachments::attach_encoded(&mut self.message, name, content.into())?;
        Ok(self)
    }

    pub fn message(&self) -> &Map<String, Value> {
        &self.message
    }
}

impl TransactionalRequest for SendSMSRequest {
    const KIND: MessageKind = MessageKind::Sms;
}
