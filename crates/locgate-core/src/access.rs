//! The bound access set.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::LocationUuid;

/// The set of location identifiers a query may see.
///
/// Unordered in meaning; backed by a `BTreeSet` so diagnostics print in a
/// stable order. The empty set is valid and means "no patients visible".
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessSet(BTreeSet<LocationUuid>);

impl AccessSet {
    /// Create an empty access set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an identifier. Returns `false` if it was already present.
    pub fn insert(&mut self, uuid: LocationUuid) -> bool {
        self.0.insert(uuid)
    }

    pub fn contains(&self, uuid: &str) -> bool {
        self.0.contains(uuid)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationUuid> {
        self.0.iter()
    }

    /// Raw identifiers, in stable order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|u| u.as_str().to_string()).collect()
    }

    pub fn into_inner(self) -> BTreeSet<LocationUuid> {
        self.0
    }
}

impl fmt::Debug for AccessSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter().map(LocationUuid::as_str)).finish()
    }
}

impl FromIterator<LocationUuid> for AccessSet {
    fn from_iter<I: IntoIterator<Item = LocationUuid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<LocationUuid> for AccessSet {
    fn extend<I: IntoIterator<Item = LocationUuid>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for AccessSet {
    type Item = LocationUuid;
    type IntoIter = std::collections::btree_set::IntoIter<LocationUuid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AccessSet {
    type Item = &'a LocationUuid;
    type IntoIter = std::collections::btree_set::Iter<'a, LocationUuid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
