//! # Locgate
//!
//! Location-based row filtering for patient queries.
//!
//! ## Overview
//!
//! When a host prepares a patient query it raises a filter activation. The
//! [`FilterBinder`] answers it:
//!
//! 1. Super-users are exempt: the binder returns [`FilterVerdict::Skip`] and
//!    binds nothing.
//! 2. Filters not named `patient_location_based_filter*` pass through with
//!    [`FilterVerdict::Engage`] and nothing bound.
//! 3. Otherwise the user's accessible locations are resolved, closed under
//!    the location hierarchy and bound as `locationUuids`.
//!
//! An empty binding is valid and means the user sees no patients.
//!
//! ## Usage
//!
//! ```rust
//! use locgate::{FilterBinder, FilterVerdict, ParameterBag};
//! use locgate::core::{Location, LocationId, User};
//! use locgate::store::{MemoryDirectory, MemoryRegistry};
//!
//! let registry = MemoryRegistry::with_locations([
//!     Location::new(LocationId(1), "a", "A").with_child("b"),
//!     Location::new(LocationId(2), "b", "B"),
//! ])
//! .unwrap();
//! let directory =
//!     MemoryDirectory::with_user(User::new("alice").with_property("locationUuid", "a"));
//!
//! let binder = FilterBinder::new(registry, directory);
//! let mut context = ParameterBag::new("patient_location_based_filter");
//!
//! assert_eq!(binder.on_filter_activation(&mut context), FilterVerdict::Engage);
//! assert_eq!(context.parameter("locationUuids").unwrap().len(), 2);
//! ```
//!
//! ## Re-exports
//!
//! - `locgate::core` - Locations, users, access sets, constants
//! - `locgate::store` - Collaborator traits and in-memory implementations
//! - `locgate::access` - Resolver and hierarchy expander

pub mod binder;
pub mod config;
pub mod context;
pub mod error;

// Re-export component crates
pub use locgate_access as access;
pub use locgate_core as core;
pub use locgate_store as store;

pub use binder::FilterBinder;
pub use config::FilterConfig;
pub use context::{DataFilterListener, FilterContext, FilterVerdict, ParameterBag};
pub use error::{LocgateError, Result};

pub use locgate_core::{
    AccessSet, Location, LocationId, LocationUuid, User, LOCATION_UUIDS_PARAMETER,
    PATIENT_FILTER_PREFIX,
};
