//! The composed, validated lifecycle registry

use tracing::{debug, info};

use mason_graph::build_graph;
use mason_lifecycle::Lifecycle;

use crate::builtin;
use crate::error::RegistryError;
use crate::provider::LifecycleProvider;
use crate::validate;

/// Owns the full set of lifecycle definitions and is the sole entry
/// point for ordering queries.
///
/// Built once from the built-in lifecycles plus any contributed
/// providers, validated immediately, and read-only thereafter.
/// Concurrent `compute_phases` calls share no mutable state.
#[derive(Debug)]
pub struct LifecycleRegistry {
    lifecycles: Vec<Lifecycle>,
}

impl LifecycleRegistry {
    /// The registry of built-in lifecycles only.
    ///
    /// # Errors
    ///
    /// Propagates validation failures; built-ins are expected to pass.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::with_providers(&[])
    }

    /// Compose contributed and built-in lifecycles into a validated
    /// registry.
    ///
    /// Contributed lifecycles register first and shadow a built-in of
    /// the same id; two contributions of the same id are rejected. The
    /// duplicate-phase check then runs over every registered
    /// lifecycle.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateLifecycle`] for contested ids,
    /// [`RegistryError::DuplicatePhase`] when any lifecycle declares a
    /// phase name twice. Either aborts construction entirely.
    pub fn with_providers(providers: &[&dyn LifecycleProvider]) -> Result<Self, RegistryError> {
        let mut lifecycles: Vec<Lifecycle> = Vec::new();
        for provider in providers {
            for lifecycle in provider.provides() {
                if lifecycles.iter().any(|known| known.id() == lifecycle.id()) {
                    return Err(RegistryError::DuplicateLifecycle {
                        id: lifecycle.id().to_string(),
                    });
                }
                lifecycles.push(lifecycle);
            }
        }
        for lifecycle in builtin::all() {
            if !lifecycles.iter().any(|known| known.id() == lifecycle.id()) {
                lifecycles.push(lifecycle);
            }
        }

        for lifecycle in &lifecycles {
            validate::check_unique_phase_names(lifecycle)?;
        }

        info!(lifecycles = lifecycles.len(), "lifecycle registry ready");
        Ok(Self { lifecycles })
    }

    /// Look up a lifecycle by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Lifecycle> {
        self.lifecycles.iter().find(|lifecycle| lifecycle.id() == id)
    }

    /// All registered lifecycles, contributed ones first, then the
    /// remaining built-ins in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Lifecycle> {
        self.lifecycles.iter()
    }

    /// Registered lifecycle ids, in iteration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.lifecycles.iter().map(Lifecycle::id)
    }

    /// Compute the canonical ordered phase-name sequence for one
    /// lifecycle.
    ///
    /// Builds a fresh graph, linearizes it, and applies the
    /// explicit-ordering cross-check. Two calls on the same lifecycle
    /// return identical sequences.
    ///
    /// # Errors
    ///
    /// [`RegistryError::LegacyLifecycle`] for flat legacy definitions,
    /// [`RegistryError::Graph`] for unknown link/alias targets or
    /// ordering cycles, [`RegistryError::OrderMismatch`] when the
    /// declared explicit ordering disagrees in size with the computed
    /// one.
    pub fn compute_phases(&self, lifecycle: &Lifecycle) -> Result<Vec<String>, RegistryError> {
        let tree = match lifecycle {
            Lifecycle::Map(map) => {
                return Err(RegistryError::LegacyLifecycle {
                    id: map.id().to_string(),
                });
            }
            Lifecycle::Tree(tree) => tree,
        };

        let wrap = |source| RegistryError::Graph {
            lifecycle: tree.id().to_string(),
            source,
        };
        let computed = build_graph(tree)
            .map_err(wrap)?
            .phase_order()
            .map_err(wrap)?;
        debug!(
            lifecycle = tree.id(),
            phases = computed.len(),
            "computed phase order"
        );
        validate::cross_check(tree, computed)
    }
}
