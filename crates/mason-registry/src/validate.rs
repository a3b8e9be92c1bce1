//! Structural validation of lifecycle definitions

use std::collections::HashSet;

use mason_lifecycle::{Lifecycle, TreeLifecycle};

use crate::error::RegistryError;

/// Reject a lifecycle whose flattened phase tree declares the same
/// name twice. Run once per lifecycle at registry construction; a
/// failure aborts construction entirely.
pub fn check_unique_phase_names(lifecycle: &Lifecycle) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for name in lifecycle.phase_names() {
        if !seen.insert(name) {
            return Err(RegistryError::DuplicatePhase {
                lifecycle: lifecycle.id().to_string(),
                phase: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Cross-check a computed order against the lifecycle's declared
/// explicit ordering, if any.
///
/// With no declared ordering the computed order stands. With one of
/// equal size, the declared ordering is authoritative and returned
/// verbatim (the computed order served as a consistency probe). A size
/// difference is fatal and enumerates both symmetric-difference sets.
pub fn cross_check(
    lifecycle: &TreeLifecycle,
    computed: Vec<String>,
) -> Result<Vec<String>, RegistryError> {
    let Some(declared) = lifecycle.ordered_phases() else {
        return Ok(computed);
    };
    if declared.len() == computed.len() {
        return Ok(declared.to_vec());
    }

    let missing: Vec<String> = declared
        .iter()
        .filter(|name| !computed.contains(*name))
        .cloned()
        .collect();
    let unexpected: Vec<String> = computed
        .iter()
        .filter(|name| !declared.contains(*name))
        .cloned()
        .collect();
    Err(RegistryError::OrderMismatch {
        lifecycle: lifecycle.id().to_string(),
        computed: computed.len(),
        declared: declared.len(),
        missing,
        unexpected,
    })
}
