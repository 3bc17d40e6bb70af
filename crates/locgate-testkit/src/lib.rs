//! # Locgate Testkit
//!
//! Testing utilities for locgate.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: the four-location clinic registry and a [`TestFixture`]
//!   that signs users in and runs filter activations
//! - **Scenario vectors**: end-to-end cases with expected verdicts, bindings
//!   and warnings
//! - **Generators**: proptest strategies for acyclic location forests and
//!   users configured against them
//! - **Log capture**: a [`LogCapture`] that records `tracing` output
//!
//! ## Scenario Vectors
//!
//! ```rust
//! use locgate_testkit::vectors::verify_all_vectors;
//!
//! for (name, passed, detail) in verify_all_vectors() {
//!     assert!(passed, "{}: {}", name, detail);
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use locgate::core::User;
//! use locgate_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! fixture.sign_in(User::new("alice").with_property("locationUuid", "a"));
//! let set = fixture.bound_set().unwrap();
//! assert_eq!(set.to_strings(), vec!["a", "b"]);
//! ```

pub mod capture;
pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use capture::LogCapture;
pub use fixtures::{clinic_locations, clinic_registry, descendants, TestFixture};
pub use generators::{location_forest, scenario, Scenario};
pub use vectors::{all_vectors, run_vector, verify_all_vectors, ScenarioVector, VectorOutcome};
