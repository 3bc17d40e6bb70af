//! # Locgate Access
//!
//! Computes which locations a user may see.
//!
//! ## Overview
//!
//! Resolution happens in two steps:
//!
//! 1. [`AccessSetResolver`] picks seed locations from the first tier that
//!    yields any: the user's configured location list, then the session
//!    location, then per-location privileges.
//! 2. [`ChildExpander`] closes the seeds under the location hierarchy,
//!    dropping anything the registry cannot resolve.
//!
//! Neither step fails. Collaborator errors are logged and contribute nothing,
//! so a misconfigured user sees fewer patients rather than breaking the query.
//!
//! ## Usage
//!
//! ```rust
//! use locgate_access::{AccessSetResolver, ChildExpander, ResolverConfig};
//! use locgate_core::{Location, LocationId, User};
//! use locgate_store::{MemoryDirectory, MemoryRegistry};
//!
//! let registry = MemoryRegistry::with_locations([
//!     Location::new(LocationId(1), "a", "A").with_child("b"),
//!     Location::new(LocationId(2), "b", "B"),
//! ])
//! .unwrap();
//! let directory = MemoryDirectory::new();
//! let config = ResolverConfig::default();
//!
//! let user = User::new("alice").with_property("locationUuid", "a");
//! let resolution = AccessSetResolver::new(&registry, &directory, &config)
//!     .resolve(Some(&user))
//!     .unwrap();
//!
//! let set = ChildExpander::new(&registry).expand(resolution.uuids);
//! assert!(set.contains("a") && set.contains("b"));
//! ```

pub mod expander;
pub mod resolver;

pub use expander::ChildExpander;
pub use resolver::{AccessSetResolver, AccessSource, Resolution, ResolverConfig};
