use serde::Serialize;
use serde_json::{Map, Value};

use customerio_client::Result;

use super::{attachments, into_options, retain_allowed, MessageKind, TransactionalRequest};

const FIELDS: &[&str] = &[
    // required by the API
    "to",
    "identifiers",
    // optional
    "transactional_message_id",
    "message_data",
    "headers",
    "preheader",
    "from",
    "reply_to",
    "bcc",
    "subject",
    "body",
    "body_plain",
    "body_amp",
    "fake_bcc",
    "disable_message_retention",
    "send_to_unsubscribed",
    "tracked",
    "queue_draft",
    "disable_css_preprocessing",
    "send_at",
    "language",
];

/// Payload for `POST /v1/send/email`.
///
/// The message always carries an `attachments` object (reset on
/// construction) and a `headers` object (kept if supplied).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SendEmailRequest {
    message: Map<String, Value>,
}

impl SendEmailRequest {
    pub fn new(options: Map<String, Value>) -> Self {
        let mut message = retain_allowed(MessageKind::Email, options, FIELDS);
        attachments::reset(&mut message);
        if !message.get("headers").is_some_and(Value::is_object) {
            message.insert("headers".to_string(), Value::Object(Map::new()));
        }
        Self { message }
    }

    /// Build from a JSON object.
    pub fn from_value(options: Value) -> Result<Self> {
        Ok(Self::new(into_options(options)?))
    }

    /// Attach a file; `data` is base64-encoded.
    ///
    /// Fails if an attachment with the same name exists.
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

impl TransactionalRequest for SendEmailRequest {
    const KIND: MessageKind = MessageKind::Email;
}
