use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use customerio_client::{Error, Result};

use super::{retain_allowed, MessageKind, TransactionalRequest};

const OPTIONAL_FIELDS: &[&str] = &[
    "data",
    "email_add_duplicates",
    "email_ignore_missing",
    "id_ignore_missing",
];

/// Recipient selectors; at most one may be present.
const RECIPIENT_SELECTORS: &[&str] = &["recipients", "emails", "ids", "per_user_data", "data_file_url"];

/// Payload for `POST /v1/campaigns/{broadcast_id}/triggers`.
///
/// Only the structure of the recipient selector is left to the API; having
/// more than one selector fails construction. Having none is allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerBroadcastRequest {
    broadcast_id: u64,
    payload: Map<String, Value>,
}

impl TriggerBroadcastRequest {
    pub fn new(broadcast_id: u64, payload: Map<String, Value>) -> Result<Self> {
        let allowed: Vec<&str> = OPTIONAL_FIELDS
            .iter()
            .chain(RECIPIENT_SELECTORS)
            .copied()
            .collect();
        let payload = retain_allowed(MessageKind::Broadcast, payload, &allowed);

        let selectors = RECIPIENT_SELECTORS
            .iter()
            .filter(|field| payload.contains_key(**field))
            .count();
        if selectors > 1 {
            return Err(Error::param(format!(
                "Only one of {} can be present",
                RECIPIENT_SELECTORS.join(", ")
            )));
        }

        Ok(Self {
            broadcast_id,
            payload,
        })
    }

    /// Build from an untyped broadcast id, as read from JSON or config.
    pub fn from_value(broadcast_id: Value, payload: Map<String, Value>) -> Result<Self> {
        match broadcast_id {
            Value::Null => Err(Error::param("broadcast id is required")),
            id => match id.as_u64() {
                Some(id) => Self::new(id, payload),
                None => Err(Error::param("broadcast id must be an integer")),
            },
        }
    }

    pub fn broadcast_id(&self) -> u64 {
        self.broadcast_id
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }
}

impl Serialize for TriggerBroadcastRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.payload.serialize(serializer)
    }
}

impl TransactionalRequest for TriggerBroadcastRequest {
    const KIND: MessageKind = MessageKind::Broadcast;

    fn path(&self) -> String {
        format!("/v1/campaigns/{}/triggers", self.broadcast_id)
    }
}
