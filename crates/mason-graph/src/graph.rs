//! Insertion-ordered directed graph with a deterministic topological
//! orderer

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashMap};

use crate::error::GraphError;
use crate::vertex::VertexId;

/// A transient, per-computation ordering graph.
///
/// Vertices keep their insertion index; a directed edge means "source
/// must be emitted before target". The graph is built by
/// [`build_graph`](crate::builder::build_graph), linearized once, and
/// discarded.
#[derive(Debug, Default)]
pub struct PhaseGraph {
    vertices: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    successors: Vec<Vec<usize>>,
}

impl PhaseGraph {
    /// Intern a vertex, returning its index. Re-adding an existing
    /// vertex returns the original index.
    pub(crate) fn add_vertex(&mut self, id: VertexId) -> usize {
        if let Some(&existing) = self.index.get(&id) {
            return existing;
        }
        let idx = self.vertices.len();
        self.index.insert(id.clone(), idx);
        self.vertices.push(id);
        self.successors.push(Vec::new());
        idx
    }

    /// Add the constraint "`from` is emitted before `to`".
    pub(crate) fn add_edge(&mut self, from: usize, to: usize) {
        self.successors[from].push(to);
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Linearize every vertex into an order consistent with all edges.
    ///
    /// Deterministic: among vertices whose constraints are satisfied,
    /// the earliest-created one is emitted first. The builder creates
    /// vertices in declaration order, so anything unrelated by edges
    /// surfaces in declaration order.
    ///
    /// # Errors
    ///
    /// [`GraphError::Cycle`] if ready vertices run out before all are
    /// emitted; the error names the phases still trapped in the cycle.
    pub fn topological_order(&self) -> Result<Vec<&VertexId>, GraphError> {
        let mut indegree = vec![0usize; self.vertices.len()];
        for targets in &self.successors {
            for &to in targets {
                indegree[to] += 1;
            }
        }

        let mut ready: BinaryHeap<Reverse<usize>> = indegree
            .iter()
            .enumerate()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(idx, _)| Reverse(idx))
            .collect();

        let mut order = Vec::with_capacity(self.vertices.len());
        let mut emitted = vec![false; self.vertices.len()];
        while let Some(Reverse(idx)) = ready.pop() {
            emitted[idx] = true;
            order.push(&self.vertices[idx]);
            for &to in &self.successors[idx] {
                indegree[to] -= 1;
                if indegree[to] == 0 {
                    ready.push(Reverse(to));
                }
            }
        }

        if order.len() < self.vertices.len() {
            let phases: BTreeSet<String> = self
                .vertices
                .iter()
                .zip(&emitted)
                .filter(|&(_, &done)| !done)
                .map(|(vertex, _)| vertex.phase().to_string())
                .collect();
            return Err(GraphError::Cycle {
                phases: phases.into_iter().collect(),
            });
        }
        Ok(order)
    }

    /// The final phase-name sequence: the topological order with every
    /// synthetic boundary vertex filtered out, leaving genuine phase
    /// and alias names, each exactly once.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError::Cycle`] from the linearization.
    pub fn phase_order(&self) -> Result<Vec<String>, GraphError> {
        Ok(self
            .topological_order()?
            .into_iter()
            .filter_map(VertexId::real_name)
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::BoundaryKind;

    fn real(name: &str) -> VertexId {
        VertexId::Real(name.to_string())
    }

    #[test]
    fn unrelated_vertices_keep_insertion_order() {
        let mut graph = PhaseGraph::default();
        graph.add_vertex(real("a"));
        graph.add_vertex(real("b"));
        graph.add_vertex(real("c"));

        assert_eq!(graph.phase_order().unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn edges_override_insertion_order() {
        let mut graph = PhaseGraph::default();
        let a = graph.add_vertex(real("a"));
        let b = graph.add_vertex(real("b"));
        graph.add_edge(b, a);

        assert_eq!(graph.phase_order().unwrap(), ["b", "a"]);
    }

    #[test]
    fn boundary_vertices_are_filtered() {
        let mut graph = PhaseGraph::default();
        let pre = graph.add_vertex(VertexId::Boundary(BoundaryKind::EntryPre, "x".to_string()));
        let body = graph.add_vertex(real("x"));
        graph.add_edge(pre, body);

        assert_eq!(graph.phase_order().unwrap(), ["x"]);
    }

    #[test]
    fn re_adding_a_vertex_is_idempotent() {
        let mut graph = PhaseGraph::default();
        let first = graph.add_vertex(real("a"));
        let second = graph.add_vertex(real("a"));
        assert_eq!(first, second);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn cycle_is_reported_with_its_members() {
        let mut graph = PhaseGraph::default();
        let a = graph.add_vertex(real("a"));
        let b = graph.add_vertex(real("b"));
        let c = graph.add_vertex(real("c"));
        graph.add_edge(a, b);
        graph.add_edge(b, c);
        graph.add_edge(c, b);

        let err = graph.phase_order().unwrap_err();
        assert_eq!(
            err,
            GraphError::Cycle {
                phases: vec!["b".to_string(), "c".to_string()],
            }
        );
    }
}
