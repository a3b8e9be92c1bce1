//! Lifecycle definitions: the nested model and the legacy flat bridge

use serde::{Deserialize, Serialize};

use crate::alias::Alias;
use crate::phase::Phase;

/// One named lifecycle definition.
///
/// Lifecycles come in two shapes:
///
/// - [`Tree`](Lifecycle::Tree): the full nested model — phase trees,
///   links and aliases — for which a canonical phase order can be
///   computed.
/// - [`Map`](Lifecycle::Map): a legacy flat `phase → goals` map lifted
///   into the registry on a best-effort basis. Phase-graph
///   computation is unsupported for these and reported as a distinct
///   error rather than pretending the shapes are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Full nested model; phases computable.
    Tree(TreeLifecycle),
    /// Legacy flat phase→goal map; phase-tree computation unsupported.
    Map(MapLifecycle),
}

impl Lifecycle {
    /// The lifecycle id (e.g. `"default"`, `"clean"`).
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Tree(tree) => &tree.id,
            Self::Map(map) => &map.id,
        }
    }

    /// Every phase name this lifecycle declares, in declaration order.
    ///
    /// For tree lifecycles this flattens the entire phase tree; for
    /// legacy map lifecycles it is the flat key sequence. Used by the
    /// registry's duplicate-name validation.
    #[must_use]
    pub fn phase_names(&self) -> Vec<&str> {
        match self {
            Self::Tree(tree) => tree
                .phases
                .iter()
                .flat_map(Phase::all_phases)
                .map(Phase::name)
                .collect(),
            Self::Map(map) => map.phases.iter().map(|p| p.name.as_str()).collect(),
        }
    }
}

/// A lifecycle in the full nested model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLifecycle {
    id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phases: Vec<Phase>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<Alias>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ordered_phases: Option<Vec<String>>,
}

impl TreeLifecycle {
    /// Create an empty lifecycle with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            phases: Vec::new(),
            aliases: Vec::new(),
            ordered_phases: None,
        }
    }

    /// Append a top-level phase. Top-level phases execute in declared
    /// order.
    #[must_use]
    pub fn phase(mut self, phase: Phase) -> Self {
        self.phases.push(phase);
        self
    }

    /// Append a legacy alias.
    #[must_use]
    pub fn alias(mut self, alias: Alias) -> Self {
        self.aliases.push(alias);
        self
    }

    /// Declare the authoritative full ordering. When present, it is
    /// cross-checked against the computed order (same size required)
    /// and then returned verbatim.
    #[must_use]
    pub fn ordered(mut self, phases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ordered_phases = Some(phases.into_iter().map(Into::into).collect());
        self
    }

    /// The lifecycle id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Top-level phases in declared order.
    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Legacy aliases in declared order.
    #[must_use]
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// The declared authoritative ordering, if any.
    #[must_use]
    pub fn ordered_phases(&self) -> Option<&[String]> {
        self.ordered_phases.as_deref()
    }
}

/// A legacy flat lifecycle: ordered phase names, each with zero or
/// more default goals. These definitions predate the nested model and
/// cannot express spans, links or aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLifecycle {
    id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phases: Vec<LegacyPhase>,
}

impl MapLifecycle {
    /// Create a legacy lifecycle from its flat phase sequence.
    #[must_use]
    pub fn new(id: impl Into<String>, phases: Vec<LegacyPhase>) -> Self {
        Self {
            id: id.into(),
            phases,
        }
    }

    /// The lifecycle id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Flat phases in declared order.
    #[must_use]
    pub fn phases(&self) -> &[LegacyPhase] {
        &self.phases
    }
}

/// A single entry of a legacy flat lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPhase {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    goals: Vec<String>,
}

impl LegacyPhase {
    /// Create a legacy phase with its bound goal coordinates.
    #[must_use]
    pub fn new(name: impl Into<String>, goals: Vec<String>) -> Self {
        Self {
            name: name.into(),
            goals,
        }
    }

    /// The flat phase name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default goal coordinates bound to this phase.
    #[must_use]
    pub fn goals(&self) -> &[String] {
        &self.goals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_names_flattens_the_tree() {
        let lifecycle = Lifecycle::Tree(
            TreeLifecycle::new("build")
                .phase(Phase::new("compile").child(Phase::new("generate")))
                .phase(Phase::new("test")),
        );

        assert_eq!(lifecycle.id(), "build");
        assert_eq!(lifecycle.phase_names(), ["compile", "generate", "test"]);
    }

    #[test]
    fn phase_names_of_a_legacy_lifecycle_are_the_flat_keys() {
        let lifecycle = Lifecycle::Map(MapLifecycle::new(
            "legacy",
            vec![
                LegacyPhase::new("clean", vec!["demo:clean".to_string()]),
                LegacyPhase::new("build", Vec::new()),
            ],
        ));

        assert_eq!(lifecycle.phase_names(), ["clean", "build"]);
    }

    #[test]
    fn ordered_phases_defaults_to_none() {
        let lifecycle = TreeLifecycle::new("minimal").phase(Phase::new("only"));
        assert!(lifecycle.ordered_phases().is_none());

        let ordered = lifecycle.ordered(["only"]);
        assert_eq!(ordered.ordered_phases(), Some(&["only".to_string()][..]));
    }
}
