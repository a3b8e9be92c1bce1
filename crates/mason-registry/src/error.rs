//! Registry construction and phase-computation errors

use thiserror::Error;

use mason_graph::GraphError;

/// Errors raised by registry construction and `compute_phases`.
///
/// Every variant is non-recoverable at its point of origin: a
/// construction failure aborts startup, a computation failure aborts
/// the phase-order request. Phase ordering is a correctness
/// precondition for the entire build, so nothing here is retried or
/// silently downgraded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The same phase name appears twice in one lifecycle's flattened
    /// tree. Fatal at registry construction.
    #[error("found duplicated phase '{phase}' in '{lifecycle}' lifecycle")]
    DuplicatePhase {
        /// Offending lifecycle id.
        lifecycle: String,
        /// The phase name seen twice.
        phase: String,
    },

    /// Two providers contributed a lifecycle with the same id. A
    /// silent last-wins would hide misconfiguration; abort instead.
    #[error("lifecycle '{id}' contributed more than once")]
    DuplicateLifecycle {
        /// The contested lifecycle id.
        id: String,
    },

    /// A lifecycle's declared explicit ordering disagrees in size with
    /// the computed order.
    #[error(
        "phase order mismatch in '{lifecycle}' lifecycle: computed {computed} phases but {declared} declared, missing [{}], unexpected [{}]",
        missing.join(", "),
        unexpected.join(", ")
    )]
    OrderMismatch {
        /// Offending lifecycle id.
        lifecycle: String,
        /// Size of the computed order.
        computed: usize,
        /// Size of the declared ordering.
        declared: usize,
        /// Declared names absent from the computed order.
        missing: Vec<String>,
        /// Computed names absent from the declared ordering.
        unexpected: Vec<String>,
    },

    /// The lifecycle is a legacy flat definition; the nested phase
    /// model cannot be computed for it.
    #[error("lifecycle '{id}' is a legacy flat definition; phase computation is unsupported")]
    LegacyLifecycle {
        /// The legacy lifecycle id.
        id: String,
    },

    /// Graph construction or linearization failed.
    #[error("failed to compute phases for '{lifecycle}' lifecycle: {source}")]
    Graph {
        /// Offending lifecycle id.
        lifecycle: String,
        /// The underlying graph error.
        #[source]
        source: GraphError,
    },
}
