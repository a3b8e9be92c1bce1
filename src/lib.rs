//! mason - Build lifecycle registry and phase-order compiler
//!
//! mason turns declarative lifecycle definitions — phase trees with
//! ordering links and legacy aliases — into canonical, deterministic
//! phase sequences. It ships the four standard build lifecycles
//! (`clean`, `default`, `site`, `wrapper`) and accepts externally
//! contributed ones.
//!
//! mason can be used in two ways:
//! - **CLI**: `mason lifecycles` and `mason phases <lifecycle>` inspect
//!   the registry from the command line
//! - **Library**: depend on the crate and query a
//!   [`LifecycleRegistry`] directly
//!
//! # Quick Start (Library)
//!
//! ```rust
//! use mason::{LifecycleRegistry, DEFAULT};
//!
//! let registry = LifecycleRegistry::standard().expect("built-ins are valid");
//! let default_lifecycle = registry.get(DEFAULT).expect("default is built in");
//! let phases = registry.compute_phases(default_lifecycle).expect("computable");
//! assert_eq!(phases.first().map(String::as_str), Some("validate"));
//! assert_eq!(phases.last().map(String::as_str), Some("deploy"));
//! ```
//!
//! # Stable Public API
//!
//! - [`LifecycleRegistry`] - the validated registry and its ordering queries
//! - [`Lifecycle`], [`TreeLifecycle`], [`Phase`], [`Alias`] - lifecycle definitions
//! - [`LifecycleProvider`] - contribution point for external lifecycles
//! - [`RegistryError`] / [`GraphError`] - error taxonomy
//! - [`ExitCode`] - CLI exit codes

// ============================================================================
// Stable Public API
// ============================================================================

pub use mason_lifecycle::{
    Alias, AliasTarget, GoalBinding, LegacyPhase, Lifecycle, Link, LinkKind, MapLifecycle, Phase,
    Placement, Pointer, TreeLifecycle,
};

pub use mason_graph::{BoundaryKind, GraphError, PhaseGraph, VertexId, build_graph};

pub use mason_registry::{
    CLEAN, DEFAULT, LegacyLifecycleProvider, LifecycleProvider, LifecycleRegistry,
    PackagingMapping, RegistryError, SITE, STANDARD_PHASES, WRAPPER, mapping,
};

/// Exit codes matching the documented exit code table.
pub use exit_codes::ExitCode;

pub mod cli;
pub mod exit_codes;
pub mod logging;
