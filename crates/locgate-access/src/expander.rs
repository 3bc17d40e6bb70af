//! Hierarchy expansion.
//!
//! Closes a set of seed identifiers under descendancy. Traversal is an
//! explicit depth-first worklist with a visited set, so deep or cyclic
//! registries cannot grow the stack or loop forever.

use std::collections::HashSet;

use locgate_core::{AccessSet, Location, LocationUuid};
use locgate_store::LocationRegistry;

/// Expands seed locations to include every descendant.
pub struct ChildExpander<'a, R: ?Sized> {
    registry: &'a R,
}

impl<'a, R: LocationRegistry + ?Sized> ChildExpander<'a, R> {
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Resolve each seed and add it with all of its descendants.
    ///
    /// Seeds and children that do not resolve are dropped, so every emitted
    /// identifier existed in the registry when it was read.
    pub fn expand<I>(&self, seeds: I) -> AccessSet
    where
        I: IntoIterator<Item = LocationUuid>,
    {
        let mut set = AccessSet::new();
        let mut visited: HashSet<LocationUuid> = HashSet::new();

        for seed in seeds {
            if visited.contains(&seed) {
                continue;
            }
            match self.lookup(&seed) {
                Some(location) => {
                    visited.insert(location.uuid.clone());
                    set.insert(location.uuid.clone());
                    self.descend(&location, &mut set, &mut visited);
                }
                None => {
                    tracing::debug!(uuid = %seed, "dropping unresolvable location");
                }
            }
        }

        set
    }

    fn descend(&self, root: &Location, set: &mut AccessSet, visited: &mut HashSet<LocationUuid>) {
        let mut stack: Vec<LocationUuid> = root.children().iter().rev().cloned().collect();

        while let Some(uuid) = stack.pop() {
            if !visited.insert(uuid.clone()) {
                continue;
            }
            let Some(child) = self.lookup(&uuid) else {
                tracing::debug!(
                    uuid = %uuid,
                    parent = %root.uuid,
                    "dropping unresolvable child location"
                );
                continue;
            };

            set.insert(child.uuid.clone());
            stack.extend(child.children().iter().rev().cloned());
        }
    }

    fn lookup(&self, uuid: &LocationUuid) -> Option<Location> {
        match self.registry.get_by_uuid(uuid) {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!(error = %e, uuid = %uuid, "failed to look up location");
                None
            }
        }
    }
}
