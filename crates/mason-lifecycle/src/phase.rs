//! Phase tree, ordering links and default goal bindings

use serde::{Deserialize, Serialize};

/// A named, orderable unit of build work, possibly containing nested
/// sub-phases.
///
/// Phases form a tree. Nesting expresses "runs strictly within the
/// parent's span": every child is pre-work for the parent's own body,
/// executed in declared child order.
///
/// # Example
///
/// ```rust
/// use mason_lifecycle::Phase;
///
/// let compile = Phase::new("compile")
///     .after("resources")
///     .child(Phase::new("generate-stubs"));
///
/// assert_eq!(compile.name(), "compile");
/// assert_eq!(compile.children().len(), 1);
/// assert_eq!(compile.links().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phases: Vec<Phase>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    binding: Option<GoalBinding>,
}

impl Phase {
    /// Create a leaf phase with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phases: Vec::new(),
            links: Vec::new(),
            binding: None,
        }
    }

    /// Append a nested child phase. Children execute, in declared
    /// order, before this phase's own work.
    #[must_use]
    pub fn child(mut self, child: Phase) -> Self {
        self.phases.push(child);
        self
    }

    /// Add a project-scoped link requiring `target` to fully finish
    /// before this phase starts.
    #[must_use]
    pub fn after(mut self, target: impl Into<String>) -> Self {
        self.links.push(Link::new(
            LinkKind::After,
            Pointer::Project {
                phase: target.into(),
            },
        ));
        self
    }

    /// Add a project-scoped link requiring this phase to fully finish
    /// before `target` starts.
    #[must_use]
    pub fn before(mut self, target: impl Into<String>) -> Self {
        self.links.push(Link::new(
            LinkKind::Before,
            Pointer::Project {
                phase: target.into(),
            },
        ));
        self
    }

    /// Add an arbitrary link. Prefer [`after`](Self::after) /
    /// [`before`](Self::before) for project-scoped constraints.
    #[must_use]
    pub fn link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Bind this phase to a default plugin goal. Used by simple
    /// lifecycles with no internal structure (e.g. `clean`).
    #[must_use]
    pub fn bind(mut self, binding: GoalBinding) -> Self {
        self.binding = Some(binding);
        self
    }

    /// The phase name, unique across its lifecycle's entire tree.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nested child phases in declared order.
    #[must_use]
    pub fn children(&self) -> &[Phase] {
        &self.phases
    }

    /// Ordering links declared on this phase.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The default goal binding, if any.
    #[must_use]
    pub fn binding(&self) -> Option<&GoalBinding> {
        self.binding.as_ref()
    }

    /// This phase and every descendant, in declaration (pre-)order.
    #[must_use]
    pub fn all_phases(&self) -> Vec<&Phase> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Phase>) {
        out.push(self);
        for child in &self.phases {
            child.collect(out);
        }
    }
}

/// An explicit before/after ordering constraint between two phases
/// that are not related by nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    kind: LinkKind,
    pointer: Pointer,
}

impl Link {
    /// Create a link of the given kind towards `pointer`.
    #[must_use]
    pub fn new(kind: LinkKind, pointer: Pointer) -> Self {
        Self { kind, pointer }
    }

    /// Whether the linked phase runs before or after this one.
    #[must_use]
    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    /// The scoped reference to the linked phase.
    #[must_use]
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }
}

/// Direction of a [`Link`] constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// The owning phase must fully finish before the target starts.
    Before,
    /// The target must fully finish before the owning phase starts.
    After,
}

/// Scoped reference to a phase elsewhere in the build.
///
/// Only [`Project`](Pointer::Project) pointers are honored by the
/// graph compiler. The other scopes are reserved for reactor-level
/// ordering between projects and are ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pointer {
    /// A phase within the same project.
    Project {
        /// Target phase name.
        phase: String,
    },
    /// A phase of the project's dependencies (reserved).
    Dependencies {
        /// Target phase name.
        phase: String,
    },
    /// A phase of the project's children in the reactor (reserved).
    Children {
        /// Target phase name.
        phase: String,
    },
}

impl Pointer {
    /// The referenced phase name, regardless of scope.
    #[must_use]
    pub fn phase(&self) -> &str {
        match self {
            Self::Project { phase } | Self::Dependencies { phase } | Self::Children { phase } => {
                phase
            }
        }
    }
}

/// A pinned `groupId:artifactId:version:goal` plugin coordinate.
///
/// The literal coordinate strings of the built-in lifecycles are part
/// of the persisted behavioral contract and are preserved bit-for-bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalBinding {
    coordinates: String,
}

impl GoalBinding {
    /// Wrap a full plugin goal coordinate string.
    #[must_use]
    pub fn new(coordinates: impl Into<String>) -> Self {
        Self {
            coordinates: coordinates.into(),
        }
    }

    /// The full coordinate string, exactly as declared.
    #[must_use]
    pub fn coordinates(&self) -> &str {
        &self.coordinates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluent_construction_preserves_declaration_order() {
        let phase = Phase::new("package")
            .child(Phase::new("prepare"))
            .child(Phase::new("assemble"))
            .after("test");

        assert_eq!(phase.name(), "package");
        assert_eq!(phase.children()[0].name(), "prepare");
        assert_eq!(phase.children()[1].name(), "assemble");
        assert_eq!(phase.links()[0].kind(), LinkKind::After);
        assert_eq!(phase.links()[0].pointer().phase(), "test");
    }

    #[test]
    fn all_phases_is_declaration_order() {
        let root = Phase::new("a")
            .child(Phase::new("b").child(Phase::new("c")))
            .child(Phase::new("d"));

        let names: Vec<&str> = root.all_phases().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[test]
    fn pointer_phase_covers_all_scopes() {
        let project = Pointer::Project {
            phase: "compile".to_string(),
        };
        let deps = Pointer::Dependencies {
            phase: "package".to_string(),
        };
        assert_eq!(project.phase(), "compile");
        assert_eq!(deps.phase(), "package");
    }

    #[test]
    fn goal_binding_round_trips_coordinates() {
        let binding = GoalBinding::new("org.apache.maven.plugins:maven-clean-plugin:3.2.0:clean");
        assert_eq!(
            binding.coordinates(),
            "org.apache.maven.plugins:maven-clean-plugin:3.2.0:clean"
        );

        let json = serde_json::to_string(&binding).unwrap();
        assert_eq!(
            json,
            "\"org.apache.maven.plugins:maven-clean-plugin:3.2.0:clean\""
        );
    }
}
