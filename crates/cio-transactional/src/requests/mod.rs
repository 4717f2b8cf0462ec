//! Request payload builders for the Transactional API.

use std::fmt;

use base64::Engine;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use customerio_client::{Error, Result};

mod broadcast;
mod email;
mod inbox;
mod push;
mod sms;

pub use broadcast::TriggerBroadcastRequest;
pub use email::SendEmailRequest;
pub use inbox::SendInboxMessageRequest;
pub use push::SendPushRequest;
pub use sms::SendSMSRequest;

/// The kinds of message the Transactional API can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Email,
    Push,
    Sms,
    InboxMessage,
    Broadcast,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Email => "email",
            MessageKind::Push => "push",
            MessageKind::Sms => "sms",
            MessageKind::InboxMessage => "inbox_message",
            MessageKind::Broadcast => "broadcast",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payload that can be posted to a Transactional API endpoint.
///
/// The serialized form of the request is the JSON body.
pub trait TransactionalRequest: Serialize {
    /// Which endpoint family this request belongs to.
    const KIND: MessageKind;

    /// Path of the endpoint, relative to the API base URL.
    fn path(&self) -> String {
        format!("/v1/send/{}", Self::KIND.as_str())
    }
}

/// Require an options object; `null` means no options.
pub(crate) fn into_options(options: Value) -> Result<Map<String, Value>> {
    match options {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(Error::param("request options must be an object")),
    }
}

/// Keep only allow-listed keys. Dropped keys are logged, not rejected.
pub(crate) fn retain_allowed(
    kind: MessageKind,
    mut options: Map<String, Value>,
    allowed: &[&str],
) -> Map<String, Value> {
    let dropped: Vec<String> = options
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect();

    if !dropped.is_empty() {
        debug!(kind = %kind, dropped = ?dropped, "Dropping unsupported request fields");
        options.retain(|key, _| allowed.contains(&key.as_str()));
    }
    options
}

/// Named, base64-encoded attachments for message builders that support them.
pub(crate) mod attachments {
    use super::*;

    const KEY: &str = "attachments";

    /// Replace any caller-supplied `attachments` with an empty object.
    pub(crate) fn reset(message: &mut Map<String, Value>) {
        message.insert(KEY.to_string(), Value::Object(Map::new()));
    }

    /// Base64-encode `data` and store it under `name`.
    pub(crate) fn attach(
        message: &mut Map<String, Value>,
        name: &str,
        data: &[u8],
    ) -> Result<()> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        attach_encoded(message, name, encoded)
    }

    /// Store already-encoded content under `name`.
    pub(crate) fn attach_encoded(
        message: &mut Map<String, Value>,
        name: &str,
        content: String,
    ) -> Result<()> {
        let entry = message
            .entry(KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(attachments) = entry else {
            return Err(Error::param("attachments must be an object"));
        };

        if attachments.contains_key(name) {
            return Err(Error::param(format!("attachment {} already exists", name)));
        }
        attachments.insert(name.to_string(), Value::String(content));
        Ok(())
    }
}
