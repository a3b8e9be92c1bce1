//! Lifecycle registry for mason
//!
//! This crate composes built-in and externally contributed lifecycle
//! definitions into one immutable registry, validates them once at
//! construction, and answers ordering queries via
//! [`LifecycleRegistry::compute_phases`].
//!
//! # Lifetime
//!
//! The registry has exactly two states: unconstructed, and
//! constructed-and-validated. Construction is single-threaded and
//! fatal on any structural error (no partially valid registry). After
//! construction the registry is never mutated; any number of build
//! threads may query it concurrently without synchronization. Each
//! `compute_phases` call builds a fresh, call-local graph, so
//! concurrent invocations produce no interference.

pub mod builtin;
pub mod error;
pub mod mapping;
pub mod provider;
pub mod registry;
pub mod validate;

// Re-exports for convenience
pub use builtin::{CLEAN, DEFAULT, SITE, STANDARD_PHASES, WRAPPER};
pub use error::RegistryError;
pub use mapping::PackagingMapping;
pub use provider::{LegacyLifecycleProvider, LifecycleProvider};
pub use registry::LifecycleRegistry;
