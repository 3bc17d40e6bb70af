//! The authenticated principal.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::LocationId;

/// An authenticated user as seen by the location filter.
///
/// Carries only what the filter reads: the username (for diagnostics), the
/// super-user flag, named configuration entries, privilege names and the
/// active session location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: String,
    super_user: bool,
    properties: HashMap<String, String>,
    privileges: HashSet<String>,
    session_location: Option<LocationId>,
}

impl User {
    /// Create an ordinary user with no configuration.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    /// Mark the user as a super-user.
    pub fn super_user(mut self) -> Self {
        self.super_user = true;
        self
    }

    /// Set a configuration entry.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Grant a privilege.
    pub fn with_privilege(mut self, privilege: impl Into<String>) -> Self {
        self.privileges.insert(privilege.into());
        self
    }

    /// Set the active session location.
    pub fn with_session_location(mut self, id: LocationId) -> Self {
        self.session_location = Some(id);
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_super_user(&self) -> bool {
        self.super_user
    }

    /// Look up a configuration entry.
    pub fn user_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Literal, case-sensitive privilege check.
    pub fn has_privilege(&self, privilege: &str) -> bool {
        self.privileges.contains(privilege)
    }

    pub fn session_location(&self) -> Option<LocationId> {
        self.session_location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let user = User::new("alice")
            .with_property("locationUuid", "a,b")
            .with_privilege("LocationAccess A")
            .with_session_location(LocationId(1));

        assert_eq!(user.username(), "alice");
        assert!(!user.is_super_user());
        assert_eq!(user.user_property("locationUuid"), Some("a,b"));
        assert_eq!(user.user_property("missing"), None);
        assert_eq!(user.session_location(), Some(LocationId(1)));
    }

    #[test]
    fn test_privilege_match_is_exact() {
        let user = User::new("dave").with_privilege("LocationAccess C");
        assert!(user.has_privilege("LocationAccess C"));
        assert!(!user.has_privilege("LocationAccess c"));
        assert!(!user.has_privilege("LocationAccess  C"));
        assert!(!user.has_privilege("LocationAccessC"));
    }

    #[test]
    fn test_super_user() {
        assert!(User::new("root").super_user().is_super_user());
    }
}
