//! Access-set resolution.
//!
//! Seeds come from three tiers with strict precedence:
//!
//! | Tier | Source | Used when |
//! |------|--------|-----------|
//! | A | configured location list (user property) | property present and non-blank |
//! | B | active session location | tier A absent or blank |
//! | C | `LocationAccess <name>` privileges | tiers A and B yield nothing |
//!
//! Tiers A and B feed the same downstream path. A tier-B entry whose location
//! cannot be resolved is carried as an absent identifier; an absent first
//! identifier sends resolution on to tier C.

use locgate_core::{
    is_blank, parse_location_list, privilege_for, LocationUuid, User, LOCATION_USER_PROPERTY_NAME,
};
use locgate_store::{LocationRegistry, UserDirectory};

/// Which tiers the resolver consults, and where tier A reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// User property holding the configured location list.
    pub location_property: String,
    /// Consult the session location when no list is configured.
    pub session_fallback: bool,
    /// Consult per-location privileges when nothing else yields.
    pub privilege_fallback: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            location_property: LOCATION_USER_PROPERTY_NAME.to_string(),
            session_fallback: true,
            privilege_fallback: true,
        }
    }
}

/// The tier that produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessSource {
    /// The user's configured location list.
    Configured,
    /// The active session location.
    Session,
    /// Per-location privileges.
    Privileges,
    /// No tier yielded anything.
    None,
}

impl AccessSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessSource::Configured => "configured",
            AccessSource::Session => "session",
            AccessSource::Privileges => "privileges",
            AccessSource::None => "none",
        }
    }
}

impl std::fmt::Display for AccessSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seed identifiers for a user, before hierarchy expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Where the identifiers came from.
    pub source: AccessSource,
    /// Identifiers in tier order. May contain duplicates and identifiers that
    /// do not resolve; expansion removes both.
    pub uuids: Vec<LocationUuid>,
}

impl Resolution {
    fn empty() -> Self {
        Self {
            source: AccessSource::None,
            uuids: Vec::new(),
        }
    }
}

/// Resolves a user to seed location identifiers.
///
/// Stateless apart from the borrowed collaborators; resolving the same user
/// twice against unchanged collaborators yields the same result.
pub struct AccessSetResolver<'a, R: ?Sized, D: ?Sized> {
    registry: &'a R,
    directory: &'a D,
    config: &'a ResolverConfig,
}

impl<'a, R, D> AccessSetResolver<'a, R, D>
where
    R: LocationRegistry + ?Sized,
    D: UserDirectory + ?Sized,
{
    pub fn new(registry: &'a R, directory: &'a D, config: &'a ResolverConfig) -> Self {
        Self {
            registry,
            directory,
            config,
        }
    }

    /// Run tiers A, B and C in order.
    ///
    /// Returns `None` when there is no user. That is distinct from an empty
    /// resolution, though callers binding a filter treat both as "nothing
    /// visible".
    pub fn resolve(&self, user: Option<&User>) -> Option<Resolution> {
        let user = user?;

        let (source, seeds): (AccessSource, Vec<Option<LocationUuid>>) =
            match self.configured(user) {
                Some(list) => (AccessSource::Configured, list.into_iter().map(Some).collect()),
                None => match self.session() {
                    Some(seeds) => (AccessSource::Session, seeds),
                    None => (AccessSource::None, Vec::new()),
                },
            };

        match seeds.first().map(Option::is_some) {
            Some(true) => {
                tracing::debug!(
                    username = %user.username(),
                    source = %source,
                    "resolved location seeds"
                );
                Some(Resolution {
                    source,
                    uuids: seeds.into_iter().flatten().collect(),
                })
            }
            Some(false) => {
                tracing::debug!(
                    username = %user.username(),
                    "first {} location is absent, falling back to privileges",
                    source
                );
                Some(self.privileged(user))
            }
            None => Some(self.privileged(user)),
        }
    }

    /// Tier A, then tier B.
    ///
    /// Returns `None` without a user and an empty list when neither tier
    /// yields. A session location that cannot be resolved appears as a single
    /// absent entry.
    pub fn configured_or_session(&self, user: Option<&User>) -> Option<Vec<Option<LocationUuid>>> {
        let user = user?;
        if let Some(list) = self.configured(user) {
            return Some(list.into_iter().map(Some).collect());
        }
        Some(self.session().unwrap_or_default())
    }

    /// Tier A, else tier C. A configured list with no identifiers counts as
    /// unset.
    pub fn configured_or_privileges(&self, user: Option<&User>) -> Option<Vec<LocationUuid>> {
        let user = user?;
        match self.configured(user) {
            Some(list) if !list.is_empty() => Some(list),
            _ => Some(self.privileged(user).uuids),
        }
    }

    /// Tier A: the configured list, if the property is present and non-blank.
    fn configured(&self, user: &User) -> Option<Vec<LocationUuid>> {
        user.user_property(&self.config.location_property)
            .filter(|raw| !is_blank(raw))
            .map(parse_location_list)
    }

    /// Tier B: the session location, if one is set.
    fn session(&self) -> Option<Vec<Option<LocationUuid>>> {
        if !self.config.session_fallback {
            return None;
        }
        let id = self.directory.active_session_location_id()?;

        let uuid = match self.registry.get_by_id(id) {
            Ok(Some(location)) => Some(location.uuid),
            Ok(None) => {
                tracing::warn!("session location {} not found in registry", id);
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to resolve session location {}", id);
                None
            }
        };
        Some(vec![uuid])
    }

    /// Tier C: every location whose access privilege the user holds, in
    /// registry order.
    fn privileged(&self, user: &User) -> Resolution {
        if !self.config.privilege_fallback {
            return Resolution::empty();
        }

        let locations = match self.registry.get_all() {
            Ok(locations) => locations,
            Err(e) => {
                tracing::warn!(error = %e, "failed to enumerate locations for privilege check");
                return Resolution::empty();
            }
        };

        let uuids: Vec<LocationUuid> = locations
            .into_iter()
            .filter(|location| user.has_privilege(&privilege_for(location)))
            .map(|location| location.uuid)
            .collect();

        if uuids.is_empty() {
            return Resolution::empty();
        }

        tracing::debug!(
            username = %user.username(),
            source = "privileges",
            "resolved location seeds"
        );
        Resolution {
            source: AccessSource::Privileges,
            uuids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locgate_core::{Location, LocationId};
    use locgate_store::{MemoryDirectory, MemoryRegistry, RegistryError};

    fn registry() -> MemoryRegistry {
        MemoryRegistry::with_locations([
            Location::new(LocationId(1), "a", "A").with_child("b"),
            Location::new(LocationId(2), "b", "B"),
            Location::new(LocationId(3), "c", "C").with_child("d"),
            Location::new(LocationId(4), "d", "D"),
        ])
        .unwrap()
    }

    fn strings(uuids: &[LocationUuid]) -> Vec<&str> {
        uuids.iter().map(LocationUuid::as_str).collect()
    }

    struct FailingRegistry;

    impl LocationRegistry for FailingRegistry {
        fn get_by_uuid(&self, _: &LocationUuid) -> locgate_store::Result<Option<Location>> {
            Err(RegistryError::Unavailable("down".into()))
        }

        fn get_by_id(&self, _: LocationId) -> locgate_store::Result<Option<Location>> {
            Err(RegistryError::Unavailable("down".into()))
        }

        fn get_all(&self) -> locgate_store::Result<Vec<Location>> {
            Err(RegistryError::Unavailable("down".into()))
        }
    }

    #[test]
    fn test_no_user_is_null_result() {
        let registry = registry();
        let directory = MemoryDirectory::new();
        let config = ResolverConfig::default();
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        assert!(resolver.resolve(None).is_none());
        assert!(resolver.configured_or_session(None).is_none());
        assert!(resolver.configured_or_privileges(None).is_none());
    }

    #[test]
    fn test_configured_list_is_split_verbatim() {
        let registry = registry();
        let directory = MemoryDirectory::new();
        let config = ResolverConfig::default();
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        let user = User::new("bob").with_property(LOCATION_USER_PROPERTY_NAME, "c,,zzz, a,");
        let resolution = resolver.resolve(Some(&user)).unwrap();

        assert_eq!(resolution.source, AccessSource::Configured);
        assert_eq!(strings(&resolution.uuids), vec!["c", "", "zzz", " a"]);
    }

    #[test]
    fn test_delimiter_only_property_uses_privileges() {
        let registry = registry();
        let directory =
            MemoryDirectory::with_user(User::new("jo").with_session_location(LocationId(1)));
        let config = ResolverConfig::default();
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        for raw in [",", ",,,"] {
            let jo = User::new("jo")
                .with_property(LOCATION_USER_PROPERTY_NAME, raw)
                .with_privilege("LocationAccess C");

            // Not blank, so the session tier is never consulted.
            assert_eq!(resolver.configured_or_session(Some(&jo)), Some(vec![]));

            let resolution = resolver.resolve(Some(&jo)).unwrap();
            assert_eq!(resolution.source, AccessSource::Privileges);
            assert_eq!(strings(&resolution.uuids), vec!["c"]);
            assert_eq!(
                resolver.configured_or_privileges(Some(&jo)).unwrap(),
                resolution.uuids
            );
        }
    }

    #[test]
    fn test_non_breaking_space_property_is_configured() {
        let registry = registry();
        let directory =
            MemoryDirectory::with_user(User::new("kim").with_session_location(LocationId(1)));
        let config = ResolverConfig::default();
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        for raw in ["\u{a0}", "\u{2007}", "\u{202f}"] {
            let kim = User::new("kim")
                .with_property(LOCATION_USER_PROPERTY_NAME, raw)
                .with_privilege("LocationAccess C");

            let resolution = resolver.resolve(Some(&kim)).unwrap();
            assert_eq!(resolution.source, AccessSource::Configured);
            assert_eq!(strings(&resolution.uuids), vec![raw]);
        }
    }

    #[test]
    fn test_separator_control_property_is_blank() {
        let registry = registry();
        let kim = User::new("kim")
            .with_property(LOCATION_USER_PROPERTY_NAME, "\u{1c}\u{1f} \u{3000}")
            .with_session_location(LocationId(3));
        let directory = MemoryDirectory::with_user(kim.clone());
        let config = ResolverConfig::default();
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        let resolution = resolver.resolve(Some(&kim)).unwrap();
        assert_eq!(resolution.source, AccessSource::Session);
        assert_eq!(strings(&resolution.uuids), vec!["c"]);
    }

    #[test]
    fn test_configured_wins_over_session_and_privileges() {
        let registry = registry();
        let directory = MemoryDirectory::new();
        directory.sign_in(User::new("x").with_session_location(LocationId(3)));
        let config = ResolverConfig::default();
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        let user = User::new("x")
            .with_property(LOCATION_USER_PROPERTY_NAME, "a")
            .with_privilege("LocationAccess C")
            .with_session_location(LocationId(3));

        let resolution = resolver.resolve(Some(&user)).unwrap();
        assert_eq!(resolution.source, AccessSource::Configured);
        assert_eq!(strings(&resolution.uuids), vec!["a"]);
    }

    #[test]
    fn test_invalid_configuration_does_not_fall_back() {
        let registry = registry();
        let directory = MemoryDirectory::new();
        let config = ResolverConfig::default();
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        let user = User::new("x")
            .with_property(LOCATION_USER_PROPERTY_NAME, "nope")
            .with_privilege("LocationAccess C");

        let resolution = resolver.resolve(Some(&user)).unwrap();
        assert_eq!(resolution.source, AccessSource::Configured);
        assert_eq!(strings(&resolution.uuids), vec!["nope"]);
    }

    #[test]
    fn test_blank_property_uses_session() {
        let registry = registry();
        let carol = User::new("carol")
            .with_property(LOCATION_USER_PROPERTY_NAME, "  ")
            .with_session_location(LocationId(1));
        let directory = MemoryDirectory::with_user(carol.clone());
        let config = ResolverConfig::default();
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        let resolution = resolver.resolve(Some(&carol)).unwrap();
        assert_eq!(resolution.source, AccessSource::Session);
        assert_eq!(strings(&resolution.uuids), vec!["a"]);

        assert_eq!(
            resolver.configured_or_session(Some(&carol)),
            Some(vec![Some(LocationUuid::from("a"))])
        );
    }

    #[test]
    fn test_privileges_in_registry_order() {
        let registry = registry();
        let directory = MemoryDirectory::new();
        let config = ResolverConfig::default();
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        let dave = User::new("dave")
            .with_privilege("LocationAccess D")
            .with_privilege("LocationAccess A")
            .with_privilege("LocationAccess b");

        let resolution = resolver.resolve(Some(&dave)).unwrap();
        assert_eq!(resolution.source, AccessSource::Privileges);
        assert_eq!(strings(&resolution.uuids), vec!["a", "d"]);
        assert_eq!(
            resolver.configured_or_privileges(Some(&dave)).unwrap(),
            resolution.uuids
        );
    }

    #[test]
    fn test_nothing_configured_is_empty() {
        let registry = registry();
        let directory = MemoryDirectory::new();
        let config = ResolverConfig::default();
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        let eve = User::new("eve");
        let resolution = resolver.resolve(Some(&eve)).unwrap();
        assert_eq!(resolution.source, AccessSource::None);
        assert!(resolution.uuids.is_empty());
        assert_eq!(resolver.configured_or_session(Some(&eve)), Some(vec![]));
    }

    #[test]
    fn test_missing_session_location_falls_back_to_privileges() {
        let registry = registry();
        let directory =
            MemoryDirectory::with_user(User::new("frank").with_session_location(LocationId(99)));
        let config = ResolverConfig::default();
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        let frank = User::new("frank").with_privilege("LocationAccess C");
        assert_eq!(resolver.configured_or_session(Some(&frank)), Some(vec![None]));

        let resolution = resolver.resolve(Some(&frank)).unwrap();
        assert_eq!(resolution.source, AccessSource::Privileges);
        assert_eq!(strings(&resolution.uuids), vec!["c"]);
    }

    #[test]
    fn test_disabled_tiers_are_skipped() {
        let registry = registry();
        let directory =
            MemoryDirectory::with_user(User::new("gina").with_session_location(LocationId(1)));
        let config = ResolverConfig {
            session_fallback: false,
            privilege_fallback: false,
            ..ResolverConfig::default()
        };
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        let gina = User::new("gina").with_privilege("LocationAccess C");
        let resolution = resolver.resolve(Some(&gina)).unwrap();
        assert_eq!(resolution, Resolution::empty());
    }

    #[test]
    fn test_custom_property_name() {
        let registry = registry();
        let directory = MemoryDirectory::new();
        let config = ResolverConfig {
            location_property: "defaultLocations".to_string(),
            ..ResolverConfig::default()
        };
        let resolver = AccessSetResolver::new(&registry, &directory, &config);

        let user = User::new("hal")
            .with_property(LOCATION_USER_PROPERTY_NAME, "a")
            .with_property("defaultLocations", "c");
        let resolution = resolver.resolve(Some(&user)).unwrap();
        assert_eq!(strings(&resolution.uuids), vec!["c"]);
    }

    #[test]
    fn test_registry_failure_yields_empty() {
        let directory =
            MemoryDirectory::with_user(User::new("ivy").with_session_location(LocationId(1)));
        let config = ResolverConfig::default();
        let resolver = AccessSetResolver::new(&FailingRegistry, &directory, &config);

        let ivy = User::new("ivy").with_privilege("LocationAccess A");
        let resolution = resolver.resolve(Some(&ivy)).unwrap();
        assert_eq!(resolution.source, AccessSource::None);
        assert!(resolution.uuids.is_empty());
    }
}
