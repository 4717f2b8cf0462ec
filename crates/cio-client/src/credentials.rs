//! Credentials for the two API families.
//!
//! Secret values are redacted in Debug output.

use crate::error::{Error, ErrorKind, Result};

/// Authentication for a single client instance.
///
/// The Track API uses HTTP Basic auth with a site ID and API key. The
/// Transactional API uses a Bearer token (the App API key). Exactly one
/// variant is active per client.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// `Authorization: Basic base64(site_id:api_key)`
    Basic { site_id: String, api_key: String },
    /// `Authorization: Bearer <app_key>`
    Bearer { app_key: String },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { site_id, .. } => f
                .debug_struct("Basic")
                .field("site_id", site_id)
                .field("api_key", &"[REDACTED]")
                .finish(),
            Credentials::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("app_key", &"[REDACTED]")
                .finish(),
        }
    }
}

impl Credentials {
    /// Track API credentials.
    pub fn basic(site_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Credentials::Basic {
            site_id: site_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Track API credentials using the older "secret key" naming.
    pub fn from_secret_key(site_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::basic(site_id, secret_key)
    }

    /// Transactional API credentials.
    pub fn bearer(app_key: impl Into<String>) -> Self {
        Credentials::Bearer {
            app_key: app_key.into(),
        }
    }

    /// Load Track credentials from environment variables.
    ///
    /// Required environment variables:
    /// - `CUSTOMERIO_SITE_ID`
    /// - `CUSTOMERIO_API_KEY` (or the older `CUSTOMERIO_SECRET_KEY`)
    pub fn track_from_env() -> Result<Self> {
        let site_id = require_env(&["CUSTOMERIO_SITE_ID"])?;
        let api_key = require_env(&["CUSTOMERIO_API_KEY", "CUSTOMERIO_SECRET_KEY"])?;
        Ok(Self::basic(site_id, api_key))
    }

    /// Load Transactional credentials from `CUSTOMERIO_APP_KEY`.
    pub fn app_from_env() -> Result<Self> {
        require_env(&["CUSTOMERIO_APP_KEY"]).map(Self::bearer)
    }

    /// Returns true if no credential field is blank.
    pub fn is_valid(&self) -> bool {
        match self {
            Credentials::Basic { site_id, api_key } => {
                !site_id.trim().is_empty() && !api_key.trim().is_empty()
            }
            Credentials::Bearer { app_key } => !app_key.trim().is_empty(),
        }
    }

    /// Short scheme name, for logging.
    pub fn scheme(&self) -> &'static str {
        match self {
            Credentials::Basic { .. } => "basic",
            Credentials::Bearer { .. } => "bearer",
        }
    }
}

fn require_env(names: &[&str]) -> Result<String> {
    names
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
        .ok_or_else(|| Error::new(ErrorKind::EnvVar(names[0].to_string())))
}
