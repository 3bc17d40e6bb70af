//! # Locgate Store
//!
//! Collaborator interfaces for the location filter, with in-memory
//! implementations for tests and embedded hosts.
//!
//! ## Overview
//!
//! The filter never reaches for process-wide state. Everything it reads
//! arrives through two traits:
//!
//! - [`LocationRegistry`] - resolves locations by UUID or integer key and
//!   enumerates all locations
//! - [`UserDirectory`] - supplies the authenticated user and the active
//!   session location
//!
//! Hosts implement these over their own storage. [`MemoryRegistry`] and
//! [`MemoryDirectory`] are provided for tests.
//!
//! ## Usage
//!
//! ```rust
//! use locgate_core::{Location, LocationId, User};
//! use locgate_store::{LocationRegistry, MemoryDirectory, MemoryRegistry, UserDirectory};
//!
//! let registry = MemoryRegistry::new();
//! registry.insert(Location::new(LocationId(1), "a", "A")).unwrap();
//!
//! let directory = MemoryDirectory::new();
//! directory.sign_in(User::new("alice"));
//!
//! assert!(registry.get_by_uuid(&"a".into()).unwrap().is_some());
//! assert!(directory.is_authenticated());
//! ```

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{RegistryError, Result};
pub use memory::{MemoryDirectory, MemoryRegistry};
pub use traits::{LocationRegistry, UserDirectory};
