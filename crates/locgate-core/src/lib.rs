//! # Locgate Core
//!
//! Pure types for location-based patient filtering: locations, users,
//! access sets and the privilege names that grant location access.
//!
//! This crate contains no I/O and no logging. Collaborator interfaces live
//! in `locgate-store`; resolution logic lives in `locgate-access`.
//!
//! ## Key Types
//!
//! - [`LocationUuid`] - Stable, globally unique location identifier
//! - [`LocationId`] - Integer location key, used by session locations
//! - [`Location`] - A node in the location forest
//! - [`User`] - The authenticated principal and its configuration
//! - [`AccessSet`] - The set of location identifiers bound into a filter

pub mod access;
pub mod constants;
pub mod location;
pub mod privilege;
pub mod types;
pub mod user;

pub use access::AccessSet;
pub use constants::{
    LOCATION_LIST_DELIMITER, LOCATION_PRIVILEGE_PREFIX, LOCATION_USER_PROPERTY_NAME,
    LOCATION_UUIDS_PARAMETER, PATIENT_FILTER_PREFIX,
};
pub use location::{is_blank, parse_location_list, Location};
pub use privilege::privilege_for;
pub use types::{LocationId, LocationUuid};
pub use user::User;
