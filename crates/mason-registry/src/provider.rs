//! Lifecycle contribution seams
//!
//! Providers are resolved once, at startup, into an immutable
//! registry value. How provider implementations are discovered is the
//! caller's concern; the registry only consumes the resulting
//! collection of lifecycles.

use mason_lifecycle::{Lifecycle, MapLifecycle};

/// A source of additional lifecycle definitions.
pub trait LifecycleProvider {
    /// The lifecycles this provider contributes.
    fn provides(&self) -> Vec<Lifecycle>;
}

/// Compatibility adapter lifting legacy flat lifecycle definitions
/// into the registry on a best-effort basis.
///
/// The lifted lifecycles register, validate and iterate like any
/// other, but the nested phase model cannot be computed for them;
/// `compute_phases` reports
/// [`RegistryError::LegacyLifecycle`](crate::RegistryError::LegacyLifecycle)
/// instead.
#[derive(Debug, Default)]
pub struct LegacyLifecycleProvider {
    lifecycles: Vec<MapLifecycle>,
}

impl LegacyLifecycleProvider {
    /// Wrap the given legacy definitions.
    #[must_use]
    pub fn new(lifecycles: Vec<MapLifecycle>) -> Self {
        Self { lifecycles }
    }
}

impl LifecycleProvider for LegacyLifecycleProvider {
    fn provides(&self) -> Vec<Lifecycle> {
        self.lifecycles.iter().cloned().map(Lifecycle::Map).collect()
    }
}
