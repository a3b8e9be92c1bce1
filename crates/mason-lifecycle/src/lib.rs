//! Immutable lifecycle data model for mason
//!
//! This crate defines the value objects that describe one build
//! lifecycle: a tree of [`Phase`]s, cross-phase ordering [`Link`]s,
//! backward-compatible [`Alias`]es, and pinned [`GoalBinding`]s.
//!
//! # Purpose
//!
//! This is the shared contract between lifecycle definitions (built-in
//! or provider-contributed) and the graph compiler. It contains only
//! data; translating a [`Lifecycle`] into an ordered phase sequence is
//! the job of `mason-graph` and `mason-registry`.
//!
//! Everything here is immutable after construction. A registry built
//! from these values is safe for unsynchronized concurrent reads.

pub mod alias;
pub mod lifecycle;
pub mod phase;

// Re-exports for convenience
pub use alias::{Alias, AliasTarget, Placement};
pub use lifecycle::{LegacyPhase, Lifecycle, MapLifecycle, TreeLifecycle};
pub use phase::{GoalBinding, Link, LinkKind, Phase, Pointer};
