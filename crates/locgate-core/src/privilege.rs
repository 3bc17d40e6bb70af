//! Privilege names for per-location access.

use crate::constants::LOCATION_PRIVILEGE_PREFIX;
use crate::location::Location;

/// Name of the privilege granting access to `location`.
///
/// This is `"LocationAccess "` followed by the display name, unnormalized and
/// case-sensitive. Privilege catalogs are keyed on this exact string, so
/// renaming a location silently changes which privilege grants it.
pub fn privilege_for(location: &Location) -> String {
    format!("{}{}", LOCATION_PRIVILEGE_PREFIX, location.name)
}
