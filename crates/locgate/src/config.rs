//! Binder configuration.
//!
//! Only the tier-A property name and the fallback tiers are configurable.
//! The filter prefix, parameter key and privilege prefix are fixed contracts
//! with hosts and privilege catalogs, so they are constants in `locgate-core`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use locgate_access::ResolverConfig;
use locgate_core::LOCATION_USER_PROPERTY_NAME;

use crate::error::{LocgateError, Result};

/// Configuration for a [`FilterBinder`](crate::FilterBinder).
///
/// Missing fields take their defaults, which reproduce the standard
/// configured → session → privileges resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// User property holding the configured location list.
    pub location_property: String,
    /// Fall back to the session location when no list is configured.
    pub session_fallback: bool,
    /// Fall back to per-location privileges when nothing else yields.
    pub privilege_fallback: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            location_property: LOCATION_USER_PROPERTY_NAME.to_string(),
            session_fallback: true,
            privilege_fallback: true,
        }
    }
}

impl FilterConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.location_property.trim().is_empty() {
            return Err(LocgateError::InvalidConfig(
                "location_property must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// The resolver settings this configuration implies.
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            location_property: self.location_property.clone(),
            session_fallback: self.session_fallback,
            privilege_fallback: self.privilege_fallback,
        }
    }
}
