//! Collaborator traits: where locations and users come from.
//!
//! Both traits are synchronous. The filter runs inside the host's query
//! preparation and must not suspend, so implementations answer from data the
//! host already holds or from blocking calls the host is prepared to make.

use locgate_core::{Location, LocationId, LocationUuid, User};

use crate::error::Result;

/// Resolves locations and their hierarchy.
///
/// # Design Notes
///
/// - **Absent is not an error**: an unknown UUID returns `Ok(None)`.
/// - **Children by reference**: [`Location::children`] holds UUIDs, which the
///   caller resolves through [`get_by_uuid`](LocationRegistry::get_by_uuid).
/// - **Stable enumeration**: [`get_all`](LocationRegistry::get_all) returns
///   locations in an order that is unspecified but deterministic.
pub trait LocationRegistry: Send + Sync {
    /// Look up a location by its UUID.
    fn get_by_uuid(&self, uuid: &LocationUuid) -> Result<Option<Location>>;

    /// Look up a location by its integer key.
    fn get_by_id(&self, id: LocationId) -> Result<Option<Location>>;

    /// Every known location.
    fn get_all(&self) -> Result<Vec<Location>>;
}

/// Supplies the principal behind the current request.
pub trait UserDirectory: Send + Sync {
    /// Whether a user is authenticated for the current request.
    fn is_authenticated(&self) -> bool;

    /// The authenticated user, if any.
    fn current_authenticated_user(&self) -> Option<User>;

    /// Integer key of the session's location, if one is set.
    fn active_session_location_id(&self) -> Option<LocationId>;
}
