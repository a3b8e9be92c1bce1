//! Tagged vertex identifiers for the ordering graph

use std::fmt;

/// Identifier of one vertex in the ordering graph.
///
/// Real phase and alias names and synthetic boundary markers are
/// discriminated by variant, not by a string-prefix convention, so a
/// user-visible phase name can never collide with a boundary token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VertexId {
    /// A genuine phase or alias name; the phase's body vertex.
    Real(String),
    /// A synthetic boundary point of a phase's span.
    Boundary(BoundaryKind, String),
}

impl VertexId {
    /// The phase (or alias) name this vertex belongs to.
    #[must_use]
    pub fn phase(&self) -> &str {
        match self {
            Self::Real(name) | Self::Boundary(_, name) => name,
        }
    }

    /// The name if this is a real phase/alias vertex, `None` for
    /// boundary markers.
    #[must_use]
    pub fn real_name(&self) -> Option<&str> {
        match self {
            Self::Real(name) => Some(name),
            Self::Boundary(..) => None,
        }
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(name) => write!(f, "{name}"),
            Self::Boundary(kind, name) => write!(f, "{}({name})", kind.as_str()),
        }
    }
}

/// The three synthetic boundary points of a phase's span. The fourth
/// point, the body, is the phase's [`VertexId::Real`] vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Start of the span, before any pre-work.
    EntryPre,
    /// After `pre:`-placed work, before nested children.
    EntryPost,
    /// End of the span, after `post:`-placed work.
    ExitPost,
}

impl BoundaryKind {
    /// Stable lowercase token used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EntryPre => "entry-pre",
            Self::EntryPost => "entry-post",
            Self::ExitPost => "exit-post",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_and_boundary_never_compare_equal() {
        let real = VertexId::Real("entry-pre(compile)".to_string());
        let boundary = VertexId::Boundary(BoundaryKind::EntryPre, "compile".to_string());
        assert_ne!(real, boundary);
    }

    #[test]
    fn display_names_boundaries() {
        let body = VertexId::Real("compile".to_string());
        let exit = VertexId::Boundary(BoundaryKind::ExitPost, "compile".to_string());
        assert_eq!(body.to_string(), "compile");
        assert_eq!(exit.to_string(), "exit-post(compile)");
    }

    #[test]
    fn real_name_filters_boundaries() {
        let body = VertexId::Real("test".to_string());
        let entry = VertexId::Boundary(BoundaryKind::EntryPost, "test".to_string());
        assert_eq!(body.real_name(), Some("test"));
        assert_eq!(entry.real_name(), None);
        assert_eq!(entry.phase(), "test");
    }
}
