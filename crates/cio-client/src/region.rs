//! Region table: base URLs for the Track and Transactional API families.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};

/// A Customer.io data-center region.
///
/// The two API families live on different sub-domains, so each region
/// exposes both base URLs independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Us,
    Eu,
}

impl Region {
    /// Resolve a region identifier (`"us"` or `"eu"`, case-insensitive).
    pub fn resolve(region_id: &str) -> Result<Self> {
        match region_id.trim().to_ascii_lowercase().as_str() {
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            _ => Err(Error::new(ErrorKind::Config(format!(
                "region must be one of us or eu, got {:?}",
                region_id
            )))),
        }
    }

    /// Load the region from `CUSTOMERIO_REGION`, defaulting to US when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var("CUSTOMERIO_REGION") {
            Ok(value) if !value.trim().is_empty() => Self::resolve(&value),
            _ => Ok(Region::Us),
        }
    }

    /// Base URL of the Track API.
    pub fn track_url(&self) -> &'static str {
        match self {
            Region::Us => "https://track.customer.io",
            Region::Eu => "https://track-eu.customer.io",
        }
    }

    /// Base URL of the Transactional (App) API.
    pub fn api_url(&self) -> &'static str {
        match self {
            Region::Us => "https://api.customer.io",
            Region::Eu => "https://api-eu.customer.io",
        }
    }

    /// Short identifier, as accepted by [`Region::resolve`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
        }
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_urls() {
        assert_eq!(Region::Us.track_url(), "https://track.customer.io");
        assert_eq!(Region::Us.api_url(), "https://api.customer.io");
        assert_eq!(Region::Eu.track_url(), "https://track-eu.customer.io");
        assert_eq!(Region::Eu.api_url(), "https://api-eu.customer.io");
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Region::resolve("us").unwrap(), Region::Us);
        assert_eq!(Region::resolve("EU").unwrap(), Region::Eu);
        assert_eq!(" eu ".parse::<Region>().unwrap(), Region::Eu);
    }

    #[test]
    fn test_resolve_unknown_region() {
        let err = Region::resolve("ap").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
        assert!(err.is_validation());
        assert!(err.to_string().contains("region must be one of us or eu"));
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(Region::default(), Region::Us);
        assert_eq!(Region::Eu.to_string(), "eu");
    }
}
