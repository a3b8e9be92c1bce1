//! Translates one tree lifecycle into an ordering graph

use std::collections::HashSet;

use tracing::debug;

use mason_lifecycle::{Alias, LinkKind, Phase, Placement, Pointer, TreeLifecycle};

use crate::error::GraphError;
use crate::graph::PhaseGraph;
use crate::vertex::{BoundaryKind, VertexId};

/// Vertex indices of one phase's span, in chain order.
struct Span {
    entry_pre: usize,
    entry_post: usize,
    body: usize,
    exit_post: usize,
}

/// Compile `lifecycle` into its ordering graph.
///
/// Top-level phases are chained in declared order; children sit
/// strictly inside the parent's span, also chained in declared order;
/// project-scoped links and aliases add their cross-cutting edges.
///
/// # Errors
///
/// [`GraphError::UnknownLinkTarget`] / [`GraphError::UnknownAliasTarget`]
/// when a link or alias names a phase absent from the tree.
pub fn build_graph(lifecycle: &TreeLifecycle) -> Result<PhaseGraph, GraphError> {
    let known: HashSet<&str> = lifecycle
        .phases()
        .iter()
        .flat_map(Phase::all_phases)
        .map(Phase::name)
        .collect();

    let mut graph = PhaseGraph::default();
    let mut previous: Option<usize> = None;
    for phase in lifecycle.phases() {
        let span = add_phase(&mut graph, previous, None, phase, &known)?;
        previous = Some(span.exit_post);
    }
    for alias in lifecycle.aliases() {
        wire_alias(&mut graph, alias, &known)?;
    }

    debug!(
        lifecycle = lifecycle.id(),
        vertices = graph.len(),
        "compiled ordering graph"
    );
    Ok(graph)
}

/// Recursively wire one phase's boundary chain, its links, and its
/// children. `before`/`after` are the anchors supplied by the
/// enclosing call: the previous sibling's exit point and the parent's
/// body.
fn add_phase(
    graph: &mut PhaseGraph,
    before: Option<usize>,
    after: Option<usize>,
    phase: &Phase,
    known: &HashSet<&str>,
) -> Result<Span, GraphError> {
    let name = phase.name();
    let span = Span {
        entry_pre: graph.add_vertex(VertexId::Boundary(BoundaryKind::EntryPre, name.to_string())),
        entry_post: graph.add_vertex(VertexId::Boundary(
            BoundaryKind::EntryPost,
            name.to_string(),
        )),
        body: graph.add_vertex(VertexId::Real(name.to_string())),
        exit_post: graph.add_vertex(VertexId::Boundary(BoundaryKind::ExitPost, name.to_string())),
    };
    graph.add_edge(span.entry_pre, span.entry_post);
    graph.add_edge(span.entry_post, span.body);
    graph.add_edge(span.body, span.exit_post);
    if let Some(before) = before {
        graph.add_edge(before, span.entry_pre);
    }
    if let Some(after) = after {
        graph.add_edge(span.exit_post, after);
    }

    for link in phase.links() {
        // Only links scoped to this project order phases here; the
        // other scopes are reserved for reactor-level ordering.
        let Pointer::Project { phase: target } = link.pointer() else {
            continue;
        };
        if !known.contains(target.as_str()) {
            return Err(GraphError::UnknownLinkTarget {
                phase: name.to_string(),
                target: target.clone(),
            });
        }
        match link.kind() {
            LinkKind::After => {
                let target_body = graph.add_vertex(VertexId::Real(target.clone()));
                graph.add_edge(target_body, span.entry_pre);
            }
            LinkKind::Before => {
                let target_entry =
                    graph.add_vertex(VertexId::Boundary(BoundaryKind::EntryPre, target.clone()));
                graph.add_edge(span.exit_post, target_entry);
            }
        }
    }

    let mut previous_child: Option<usize> = None;
    for child in phase.children() {
        let child_before = previous_child.unwrap_or(span.entry_post);
        let child_span = add_phase(graph, Some(child_before), Some(span.body), child, known)?;
        previous_child = Some(child_span.exit_post);
    }
    Ok(span)
}

/// Wire one alias vertex into its target's span.
fn wire_alias(
    graph: &mut PhaseGraph,
    alias: &Alias,
    known: &HashSet<&str>,
) -> Result<(), GraphError> {
    let target = alias.target();
    if !known.contains(target.phase()) {
        return Err(GraphError::UnknownAliasTarget {
            alias: alias.legacy_name().to_string(),
            target: target.phase().to_string(),
        });
    }

    let vertex = graph.add_vertex(VertexId::Real(alias.legacy_name().to_string()));
    let phase = target.phase().to_string();
    let (lower, upper) = match target.placement() {
        Placement::Pre => (
            VertexId::Boundary(BoundaryKind::EntryPre, phase.clone()),
            VertexId::Boundary(BoundaryKind::EntryPost, phase),
        ),
        Placement::Post => (
            VertexId::Real(phase.clone()),
            VertexId::Boundary(BoundaryKind::ExitPost, phase),
        ),
        Placement::Default => (
            VertexId::Boundary(BoundaryKind::EntryPost, phase.clone()),
            VertexId::Real(phase),
        ),
    };
    let lower = graph.add_vertex(lower);
    let upper = graph.add_vertex(upper);
    graph.add_edge(lower, vertex);
    graph.add_edge(vertex, upper);
    Ok(())
}
