//! Value types for the Track API.

use std::fmt;
use std::str::FromStr;

use customerio_client::{Error, Region, Result};
use serde::{Deserialize, Serialize};

/// Free-form customer or event attributes.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Delivery metrics accepted by `POST /api/v1/metrics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMetric {
    Opened,
    Converted,
    Delivered,
    Bounced,
    Clicked,
    Deferred,
    Dropped,
    Spammed,
}

impl DeliveryMetric {
    /// All metrics, in API order.
    pub const ALL: [DeliveryMetric; 8] = [
        DeliveryMetric::Opened,
        DeliveryMetric::Converted,
        DeliveryMetric::Delivered,
        DeliveryMetric::Bounced,
        DeliveryMetric::Clicked,
        DeliveryMetric::Deferred,
        DeliveryMetric::Dropped,
        DeliveryMetric::Spammed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMetric::Opened => "opened",
            DeliveryMetric::Converted => "converted",
            DeliveryMetric::Delivered => "delivered",
            DeliveryMetric::Bounced => "bounced",
            DeliveryMetric::Clicked => "clicked",
            DeliveryMetric::Deferred => "deferred",
            DeliveryMetric::Dropped => "dropped",
            DeliveryMetric::Spammed => "spammed",
        }
    }
}

impl FromStr for DeliveryMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                Error::param(
                    "metric_name must be one of opened, converted, delivered, bounced, \
                     clicked, deferred, dropped, spammed",
                )
            })
    }
}

impl fmt::Display for DeliveryMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events accepted by the legacy `POST /push/events` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushEvent {
    Opened,
    Converted,
    Delivered,
}

impl PushEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            PushEvent::Opened => "opened",
            PushEvent::Converted => "converted",
            PushEvent::Delivered => "delivered",
        }
    }
}

impl FromStr for PushEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "opened" => Ok(PushEvent::Opened),
            "converted" => Ok(PushEvent::Converted),
            "delivered" => Ok(PushEvent::Delivered),
            _ => Err(Error::param(
                "event_name must be one of opened, converted, or delivered",
            )),
        }
    }
}

impl fmt::Display for PushEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier kinds that can address a customer in a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierType {
    Id,
    Email,
    CioId,
}

impl IdentifierType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierType::Id => "id",
            IdentifierType::Email => "email",
            IdentifierType::CioId => "cio_id",
        }
    }
}

impl FromStr for IdentifierType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "id" => Ok(IdentifierType::Id),
            "email" => Ok(IdentifierType::Email),
            "cio_id" => Ok(IdentifierType::CioId),
            _ => Err(Error::param(format!(
                "invalid id type {:?}, must be one of id, email, cio_id",
                s
            ))),
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the account region lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegionInfo {
    /// Track API base URL for the account.
    #[serde(default)]
    pub url: Option<String>,
    /// Data-center identifier (`"us"` or `"eu"`).
    #[serde(default)]
    pub data_center: Option<String>,
    #[serde(default)]
    pub environment_id: Option<u64>,
}

impl RegionInfo {
    /// The region matching `data_center`, when it is a known one.
    pub fn region(&self) -> Option<Region> {
        self.data_center
            .as_deref()
            .and_then(|dc| Region::resolve(dc).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delivery_metric_parse() {
        for metric in DeliveryMetric::ALL {
            assert_eq!(metric.as_str().parse::<DeliveryMetric>().unwrap(), metric);
        }

        let err = "read".parse::<DeliveryMetric>().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("metric_name must be one of"));
    }

    #[test]
    fn test_delivery_metric_serialize() {
        assert_eq!(serde_json::to_value(DeliveryMetric::Spammed).unwrap(), json!("spammed"));
    }

    #[test]
    fn test_push_event_parse() {
        assert_eq!("opened".parse::<PushEvent>().unwrap(), PushEvent::Opened);
        assert!("bounced".parse::<PushEvent>().is_err());
    }

    #[test]
    fn test_identifier_type() {
        assert_eq!("cio_id".parse::<IdentifierType>().unwrap(), IdentifierType::CioId);
        assert_eq!(IdentifierType::Email.to_string(), "email");
        assert_eq!(serde_json::to_value(IdentifierType::CioId).unwrap(), json!("cio_id"));

        let err = "phone".parse::<IdentifierType>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_region_info_deserialize() {
        let info: RegionInfo = serde_json::from_value(json!({
            "url": "https://track-eu.customer.io",
            "data_center": "eu",
            "environment_id": 12345
        }))
        .unwrap();

        assert_eq!(info.region(), Some(Region::Eu));
        assert_eq!(info.environment_id, Some(12345));

        let info: RegionInfo = serde_json::from_value(json!({})).unwrap();
        assert_eq!(info.region(), None);
    }
}
