//! In-memory implementations of the collaborator traits.
//!
//! Primarily for testing. The registry keeps insertion order so that
//! enumeration is deterministic, matching what a database-backed registry
//! ordered by primary key would return.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use locgate_core::{Location, LocationId, LocationUuid, User};

use crate::error::{RegistryError, Result};
use crate::traits::{LocationRegistry, UserDirectory};

/// In-memory location registry.
///
/// Thread-safe via RwLock. Hierarchy edges are not validated, so tests can
/// build cyclic or dangling hierarchies on purpose.
pub struct MemoryRegistry {
    inner: RwLock<MemoryRegistryInner>,
}

#[derive(Default)]
struct MemoryRegistryInner {
    /// Locations indexed by UUID.
    locations: HashMap<LocationUuid, Location>,

    /// Integer key -> UUID.
    by_id: HashMap<LocationId, LocationUuid>,

    /// Insertion order, for `get_all`.
    order: Vec<LocationUuid>,
}

impl MemoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryRegistryInner::default()),
        }
    }

    /// Build a registry from a list of locations.
    pub fn with_locations(locations: impl IntoIterator<Item = Location>) -> Result<Self> {
        let registry = Self::new();
        for location in locations {
            registry.insert(location)?;
        }
        Ok(registry)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryRegistryInner>> {
        self.inner.read().map_err(|_| RegistryError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryRegistryInner>> {
        self.inner.write().map_err(|_| RegistryError::Poisoned)
    }

    /// Add a location. UUIDs and integer keys must be unique.
    pub fn insert(&self, location: Location) -> Result<()> {
        let mut inner = self.write()?;

        if inner.locations.contains_key(&location.uuid) {
            return Err(RegistryError::DuplicateUuid(location.uuid.into_string()));
        }
        if inner.by_id.contains_key(&location.id) {
            return Err(RegistryError::DuplicateId(location.id.0));
        }

        inner.by_id.insert(location.id, location.uuid.clone());
        inner.order.push(location.uuid.clone());
        inner.locations.insert(location.uuid.clone(), location);

        Ok(())
    }

    /// Append `child` to the children of `parent`.
    ///
    /// The child does not need to exist yet.
    pub fn add_child(&self, parent: &LocationUuid, child: impl Into<LocationUuid>) -> Result<()> {
        let mut inner = self.write()?;
        let location = inner
            .locations
            .get_mut(parent)
            .ok_or_else(|| RegistryError::NotFound(parent.to_string()))?;

        location.children.get_or_insert_with(Vec::new).push(child.into());
        Ok(())
    }

    /// Change a location's display name.
    pub fn rename(&self, uuid: &LocationUuid, name: impl Into<String>) -> Result<()> {
        let mut inner = self.write()?;
        let location = inner
            .locations
            .get_mut(uuid)
            .ok_or_else(|| RegistryError::NotFound(uuid.to_string()))?;

        let name = name.into();
        tracing::debug!(uuid = %uuid, from = %location.name, to = %name, "renaming location");
        location.name = name;
        Ok(())
    }

    /// Remove a location. References to it from other locations are kept and
    /// will fail to resolve.
    pub fn remove(&self, uuid: &LocationUuid) -> Result<Location> {
        let mut inner = self.write()?;
        let location = inner
            .locations
            .remove(uuid)
            .ok_or_else(|| RegistryError::NotFound(uuid.to_string()))?;

        inner.by_id.remove(&location.id);
        inner.order.retain(|u| u != uuid);
        Ok(location)
    }

    /// Number of locations.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.locations.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationRegistry for MemoryRegistry {
    fn get_by_uuid(&self, uuid: &LocationUuid) -> Result<Option<Location>> {
        let inner = self.read()?;
        Ok(inner.locations.get(uuid).cloned())
    }

    fn get_by_id(&self, id: LocationId) -> Result<Option<Location>> {
        let inner = self.read()?;
        Ok(inner
            .by_id
            .get(&id)
            .and_then(|uuid| inner.locations.get(uuid))
            .cloned())
    }

    fn get_all(&self) -> Result<Vec<Location>> {
        let inner = self.read()?;
        Ok(inner
            .order
            .iter()
            .filter_map(|uuid| inner.locations.get(uuid))
            .cloned()
            .collect())
    }
}

/// In-memory user directory holding a single request's principal.
pub struct MemoryDirectory {
    user: RwLock<Option<User>>,
}

impl MemoryDirectory {
    /// Create a directory with nobody signed in.
    pub fn new() -> Self {
        Self {
            user: RwLock::new(None),
        }
    }

    /// Create a directory with `user` signed in.
    pub fn with_user(user: User) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    /// Authenticate `user`, replacing any previous principal.
    pub fn sign_in(&self, user: User) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    pub fn sign_out(&self) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory for MemoryDirectory {
    fn is_authenticated(&self) -> bool {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn current_authenticated_user(&self) -> Option<User> {
        self.user.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn active_session_location_id(&self) -> Option<LocationId> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(User::session_location)
    }
}
