//! Legacy flat phase names mapped onto the nested phase model

use serde::{Deserialize, Serialize};

/// Maps an old flat phase name onto a specific point inside the new
/// nested structure.
///
/// The target reference is a phase name with an optional `pre:` or
/// `post:` qualifier:
///
/// | Reference      | Placement inside the target's span                |
/// |----------------|---------------------------------------------------|
/// | `compile`      | immediately before the target's own work, after   |
/// |                | the target's nested pre-work                      |
/// | `pre:compile`  | at the very start of the span                     |
/// | `post:compile` | at the very end of the span                       |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    legacy_name: String,
    target: AliasTarget,
}

impl Alias {
    /// Create an alias from a legacy name and a target reference
    /// (e.g. `"pre-clean"` → `"pre:clean"`).
    #[must_use]
    pub fn new(legacy_name: impl Into<String>, reference: &str) -> Self {
        Self {
            legacy_name: legacy_name.into(),
            target: AliasTarget::parse(reference),
        }
    }

    /// The legacy flat phase name contributed to the computed order.
    #[must_use]
    pub fn legacy_name(&self) -> &str {
        &self.legacy_name
    }

    /// Where the legacy name lands inside the target phase's span.
    #[must_use]
    pub fn target(&self) -> &AliasTarget {
        &self.target
    }
}

/// Parsed alias target: placement qualifier plus target phase name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTarget {
    placement: Placement,
    phase: String,
}

impl AliasTarget {
    /// Parse a target reference, stripping an optional `pre:` /
    /// `post:` qualifier. Anything else is taken verbatim as a phase
    /// name; an unknown name is rejected later by the graph builder.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        if let Some(phase) = reference.strip_prefix("pre:") {
            Self {
                placement: Placement::Pre,
                phase: phase.to_string(),
            }
        } else if let Some(phase) = reference.strip_prefix("post:") {
            Self {
                placement: Placement::Post,
                phase: phase.to_string(),
            }
        } else {
            Self {
                placement: Placement::Default,
                phase: reference.to_string(),
            }
        }
    }

    /// The placement qualifier.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The target phase name, qualifier stripped.
    #[must_use]
    pub fn phase(&self) -> &str {
        &self.phase
    }
}

/// Placement of an alias inside its target phase's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Unqualified: after nested pre-work, before the target's body.
    Default,
    /// `pre:` — at the very start of the span.
    Pre,
    /// `post:` — at the very end of the span.
    Post,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_unqualified() {
        let target = AliasTarget::parse("compile");
        assert_eq!(target.placement(), Placement::Default);
        assert_eq!(target.phase(), "compile");
    }

    #[test]
    fn parse_pre_and_post_qualifiers() {
        let pre = AliasTarget::parse("pre:clean");
        assert_eq!(pre.placement(), Placement::Pre);
        assert_eq!(pre.phase(), "clean");

        let post = AliasTarget::parse("post:integration-test");
        assert_eq!(post.placement(), Placement::Post);
        assert_eq!(post.phase(), "integration-test");
    }

    #[test]
    fn unknown_qualifier_is_part_of_the_phase_name() {
        // Not silently remapped; the graph builder rejects the unknown
        // name loudly instead.
        let target = AliasTarget::parse("run:sources");
        assert_eq!(target.placement(), Placement::Default);
        assert_eq!(target.phase(), "run:sources");
    }

    #[test]
    fn alias_carries_legacy_name() {
        let alias = Alias::new("pre-clean", "pre:clean");
        assert_eq!(alias.legacy_name(), "pre-clean");
        assert_eq!(alias.target().phase(), "clean");
    }
}
