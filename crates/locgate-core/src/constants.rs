//! Externally visible names.
//!
//! These strings are matched by hosts, privilege catalogs and existing user
//! configuration. Changing any of them is a breaking change.

/// Prefix of every filter name owned by the location binder.
pub const PATIENT_FILTER_PREFIX: &str = "patient_location_based_filter";

/// Filter parameter that receives the bound [`AccessSet`](crate::AccessSet).
pub const LOCATION_UUIDS_PARAMETER: &str = "locationUuids";

/// User property holding the configured location list.
pub const LOCATION_USER_PROPERTY_NAME: &str = "locationUuid";

/// Prefix of per-location access privileges. The trailing space is significant.
pub const LOCATION_PRIVILEGE_PREFIX: &str = "LocationAccess ";

/// Separator of the configured location list. No whitespace is trimmed.
pub const LOCATION_LIST_DELIMITER: char = ',';
