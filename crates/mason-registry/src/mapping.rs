//! Packaging-type default goal bindings
//!
//! Independent of the phase graph: a mapping says which goals run at a
//! given phase for a given packaging type, not when the phase runs.

use serde::{Deserialize, Serialize};

use mason_lifecycle::GoalBinding;

/// Default goal bindings for one packaging type.
///
/// Phases absent from the mapping run with no goals; an explicit empty
/// binding means the same thing and both are valid no-op phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingMapping {
    packaging: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    bindings: Vec<PhaseBinding>,
}

impl PackagingMapping {
    /// Create an empty mapping for a packaging type.
    #[must_use]
    pub fn new(packaging: impl Into<String>) -> Self {
        Self {
            packaging: packaging.into(),
            bindings: Vec::new(),
        }
    }

    /// Bind a goal to a phase. Repeated calls for the same phase
    /// accumulate goals in call order.
    #[must_use]
    pub fn bind(mut self, phase: impl Into<String>, goal: GoalBinding) -> Self {
        let phase = phase.into();
        if let Some(binding) = self.bindings.iter_mut().find(|b| b.phase == phase) {
            binding.goals.push(goal);
        } else {
            self.bindings.push(PhaseBinding {
                phase,
                goals: vec![goal],
            });
        }
        self
    }

    /// The packaging type this mapping serves.
    #[must_use]
    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    /// Goals bound to a phase, in binding order. Empty for phases the
    /// mapping does not mention.
    #[must_use]
    pub fn goals_for(&self, phase: &str) -> &[GoalBinding] {
        self.bindings
            .iter()
            .find(|b| b.phase == phase)
            .map_or(&[], |b| b.goals.as_slice())
    }
}

/// Goals bound to one phase of a packaging mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseBinding {
    phase: String,
    goals: Vec<GoalBinding>,
}

impl PhaseBinding {
    /// The phase name.
    #[must_use]
    pub fn phase(&self) -> &str {
        &self.phase
    }

    /// Goals bound to the phase.
    #[must_use]
    pub fn goals(&self) -> &[GoalBinding] {
        &self.goals
    }
}

/// The built-in mapping for `pom` packaging: no build work, only the
/// install and deploy goals.
#[must_use]
pub fn pom() -> PackagingMapping {
    PackagingMapping::new("pom")
        .bind(
            "install",
            GoalBinding::new("org.apache.maven.plugins:maven-install-plugin:3.0.0-M1:install"),
        )
        .bind(
            "deploy",
            GoalBinding::new("org.apache.maven.plugins:maven-deploy-plugin:3.0.0-M1:deploy"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pom_mapping_binds_only_install_and_deploy() {
        let mapping = pom();
        assert_eq!(mapping.packaging(), "pom");
        assert_eq!(
            mapping.goals_for("install")[0].coordinates(),
            "org.apache.maven.plugins:maven-install-plugin:3.0.0-M1:install"
        );
        assert_eq!(
            mapping.goals_for("deploy")[0].coordinates(),
            "org.apache.maven.plugins:maven-deploy-plugin:3.0.0-M1:deploy"
        );
    }

    #[test]
    fn unmapped_phases_are_no_ops() {
        let mapping = pom();
        assert!(mapping.goals_for("compile").is_empty());
        assert!(mapping.goals_for("test").is_empty());
    }

    #[test]
    fn repeated_bindings_accumulate_in_order() {
        let mapping = PackagingMapping::new("jar")
            .bind("package", GoalBinding::new("demo:jar"))
            .bind("package", GoalBinding::new("demo:shade"));
        let goals: Vec<&str> = mapping
            .goals_for("package")
            .iter()
            .map(GoalBinding::coordinates)
            .collect();
        assert_eq!(goals, ["demo:jar", "demo:shade"]);
    }
}
