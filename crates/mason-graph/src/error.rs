//! Graph construction and ordering errors

use thiserror::Error;

/// Errors raised while compiling or linearizing an ordering graph.
///
/// All variants are fatal: phase ordering is a correctness
/// precondition for the entire build, so these propagate to the caller
/// and are never downgraded or retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A link on `phase` names a target absent from the lifecycle's
    /// phase tree. Rejected loudly instead of leaving an isolated,
    /// unreachable vertex behind.
    #[error("link on phase '{phase}' references unknown phase '{target}'")]
    UnknownLinkTarget {
        /// Phase declaring the link.
        phase: String,
        /// The missing target phase name.
        target: String,
    },

    /// An alias names a target absent from the lifecycle's phase tree.
    #[error("alias '{alias}' references unknown phase '{target}'")]
    UnknownAliasTarget {
        /// The legacy alias name.
        alias: String,
        /// The missing target phase name.
        target: String,
    },

    /// Conflicting links or aliases trapped these phases in an
    /// ordering cycle; no valid linearization exists.
    #[error("ordering cycle involving phases [{}]", phases.join(", "))]
    Cycle {
        /// Distinct phase names still unorderable, sorted.
        phases: Vec<String>,
    },
}
