//! Proptest generators for property-based testing.

use proptest::prelude::*;
use proptest::sample::Index;

use locgate::{FilterBinder, FilterConfig};
use locgate_core::{Location, LocationId, User, LOCATION_USER_PROPERTY_NAME, PATIENT_FILTER_PREFIX};
use locgate_store::{MemoryDirectory, MemoryRegistry};

/// Generate an acyclic location forest of 1..=`max_nodes` locations.
///
/// Location `i` has id `i`, uuid `uuid-i` and name `Location i`. Every
/// non-root location hangs under a location with a smaller index.
pub fn location_forest(max_nodes: usize) -> impl Strategy<Value = Vec<Location>> {
    prop::collection::vec(prop::option::of(any::<Index>()), 1..=max_nodes).prop_map(|parents| {
        let mut locations: Vec<Location> = (0..parents.len())
            .map(|i| {
                Location::new(LocationId(i as i64), format!("uuid-{i}"), format!("Location {i}"))
            })
            .collect();

        for (i, parent) in parents.iter().enumerate().skip(1) {
            if let Some(parent) = parent {
                let p = parent.index(i);
                let child = locations[i].uuid.clone();
                locations[p].children.get_or_insert_with(Vec::new).push(child);
            }
        }
        locations
    })
}

/// Generate a user configured against `locations`.
///
/// The configured list mixes real UUIDs with junk. Junk includes empty
/// entries, so joined lists can end in or consist only of delimiters, and
/// runs of layout characters on both sides of the blank boundary
/// (non-breaking spaces are not blank, information separators are).
/// Privileges name real locations; the session location may point past the
/// end of the registry. One user in ten is a super-user.
pub fn user_for(locations: &[Location]) -> BoxedStrategy<User> {
    let uuids: Vec<String> = locations.iter().map(|l| l.uuid.to_string()).collect();
    let names: Vec<String> = locations.iter().map(|l| l.name.clone()).collect();
    let n = locations.len();

    let entry = prop_oneof![
        6 => prop::sample::select(uuids),
        2 => "[a-z ]{0,3}",
        1 => Just(String::new()),
        1 => "[ \t\u{a0}\u{1c}\u{1f}\u{2007}\u{202f}\u{3000}]{1,3}",
    ];

    (
        "[a-z]{3,8}",
        prop::bool::weighted(0.1),
        prop::option::of(prop::collection::vec(entry, 1..4)),
        prop::sample::subsequence(names, 0..=n.min(3)),
        prop::option::of(0..(n as i64 + 2)),
    )
        .prop_map(|(username, super_user, configured, privileged, session)| {
            let mut user = User::new(username);
            if super_user {
                user = user.super_user();
            }
            if let Some(entries) = configured {
                user = user.with_property(LOCATION_USER_PROPERTY_NAME, entries.join(","));
            }
            for name in privileged {
                user = user.with_privilege(format!("LocationAccess {name}"));
            }
            if let Some(id) = session {
                user = user.with_session_location(LocationId(id));
            }
            user
        })
        .boxed()
}

/// Generate a filter name, owned by the binder about half the time.
pub fn filter_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_]{0,12}".prop_map(|suffix| format!("{PATIENT_FILTER_PREFIX}{suffix}")),
        "[a-z_]{0,30}",
    ]
}

/// A location forest and a user configured against it.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub locations: Vec<Location>,
    pub user: User,
}

impl Scenario {
    pub fn registry(&self) -> MemoryRegistry {
        MemoryRegistry::with_locations(self.locations.clone())
            .expect("generated locations are unique")
    }

    /// A binder with this scenario's user signed in.
    pub fn binder(&self) -> FilterBinder<MemoryRegistry, MemoryDirectory> {
        FilterBinder::with_config(
            self.registry(),
            MemoryDirectory::with_user(self.user.clone()),
            &FilterConfig::default(),
        )
    }
}

/// Generate a [`Scenario`] with up to `max_nodes` locations.
pub fn scenario(max_nodes: usize) -> impl Strategy<Value = Scenario> {
    location_forest(max_nodes).prop_flat_map(|locations| {
        let user = user_for(&locations);
        (Just(locations), user).prop_map(|(locations, user)| Scenario { locations, user })
    })
}
