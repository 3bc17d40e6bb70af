//! Test fixtures and helpers.
//!
//! The clinic registry used throughout the tests:
//!
//! ```text
//! A (id 1, uuid "a")        C (id 3, uuid "c")
//! └── B (id 2, uuid "b")    └── D (id 4, uuid "d")
//! ```

use std::collections::BTreeSet;

use locgate::{FilterBinder, FilterConfig, FilterVerdict, ParameterBag};
use locgate_core::{
    AccessSet, Location, LocationId, User, LOCATION_UUIDS_PARAMETER, PATIENT_FILTER_PREFIX,
};
use locgate_store::{MemoryDirectory, MemoryRegistry};

/// The four clinic locations.
pub fn clinic_locations() -> Vec<Location> {
    vec![
        Location::new(LocationId(1), "a", "A").with_child("b"),
        Location::new(LocationId(2), "b", "B"),
        Location::new(LocationId(3), "c", "C").with_child("d"),
        Location::new(LocationId(4), "d", "D"),
    ]
}

/// A registry holding the clinic locations.
pub fn clinic_registry() -> MemoryRegistry {
    MemoryRegistry::with_locations(clinic_locations()).expect("clinic locations are unique")
}

/// Reference closure: `root` and everything below it, by plain recursion.
///
/// Only valid for acyclic hierarchies. Children missing from `locations`
/// are skipped.
pub fn descendants(locations: &[Location], root: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    if let Some(location) = locations.iter().find(|l| l.uuid.as_str() == root) {
        out.insert(root.to_string());
        for child in location.children() {
            out.extend(descendants(locations, child.as_str()));
        }
    }
    out
}

/// A binder over in-memory collaborators.
pub struct TestFixture {
    pub binder: FilterBinder<MemoryRegistry, MemoryDirectory>,
}

impl TestFixture {
    /// Clinic registry, default configuration, nobody signed in.
    pub fn new() -> Self {
        Self::with_registry(clinic_registry())
    }

    pub fn with_registry(registry: MemoryRegistry) -> Self {
        Self::with_config(registry, &FilterConfig::default())
    }

    pub fn with_config(registry: MemoryRegistry, config: &FilterConfig) -> Self {
        Self {
            binder: FilterBinder::with_config(registry, MemoryDirectory::new(), config),
        }
    }

    pub fn registry(&self) -> &MemoryRegistry {
        self.binder.registry()
    }

    pub fn sign_in(&self, user: User) -> &Self {
        self.binder.directory().sign_in(user);
        self
    }

    pub fn sign_out(&self) -> &Self {
        self.binder.directory().sign_out();
        self
    }

    /// Raise an activation for `filter_name`.
    pub fn activate(&self, filter_name: &str) -> (FilterVerdict, ParameterBag) {
        let mut bag = ParameterBag::new(filter_name);
        let verdict = self.binder.on_filter_activation(&mut bag);
        (verdict, bag)
    }

    /// The set bound for the patient filter, or `None` if nothing was bound.
    pub fn bound_set(&self) -> Option<AccessSet> {
        let (_, bag) = self.activate(PATIENT_FILTER_PREFIX);
        bag.parameter(LOCATION_UUIDS_PARAMETER).cloned()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
