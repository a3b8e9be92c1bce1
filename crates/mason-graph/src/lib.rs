//! Ordering graph compiler for mason lifecycles
//!
//! This crate translates one tree lifecycle into a directed acyclic
//! graph of ordering constraints and linearizes it into a single
//! deterministic phase sequence.
//!
//! # How ordering is expressed
//!
//! Every phase contributes four vertices wired in a chain:
//!
//! ```text
//! entry-pre → entry-post → body → exit-post
//! ```
//!
//! Anything attached at `entry-pre` happens before anything at
//! `entry-post`, before the phase's own work (`body`), before anything
//! at `exit-post`. Nested children sit strictly between the parent's
//! `entry-post` and `body`; links and aliases attach to these boundary
//! points. Boundary vertices are synthetic and filtered from the final
//! order; they are tagged by type ([`VertexId::Boundary`]) rather than
//! by a reserved name prefix, so they can never collide with a
//! user-visible phase name.
//!
//! Graphs are built fresh per computation and discarded; no state
//! survives across calls.

pub mod builder;
pub mod error;
pub mod graph;
pub mod vertex;

// Re-exports for convenience
pub use builder::build_graph;
pub use error::GraphError;
pub use graph::PhaseGraph;
pub use vertex::{BoundaryKind, VertexId};
