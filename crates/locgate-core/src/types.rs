//! Strong identifier types.
//!
//! Location identifiers are newtypes so a UUID string is never confused with
//! a display name or a privilege string.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A location's stable, globally unique identifier.
///
/// Usually UUID-shaped, but not validated: identifiers parsed from user
/// configuration are carried verbatim (including empty strings) and simply
/// fail to resolve if malformed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationUuid(String);

impl LocationUuid {
    /// Wrap a raw identifier.
    pub fn new(uuid: impl Into<String>) -> Self {
        Self(uuid.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the raw identifier.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for LocationUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationUuid({:?})", self.0)
    }
}

impl fmt::Display for LocationUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocationUuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocationUuid {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocationUuid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LocationUuid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Integer location key.
///
/// Sessions carry the integer key of their location rather than its UUID.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub i64);

impl fmt::Debug for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationId({})", self.0)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for LocationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
