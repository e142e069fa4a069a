//! Incremental graph builder.

use std::collections::HashSet;

use mg_core::{Label, MgResult};

use crate::endpoints::Endpoints;
use crate::graph::Graph;

/// Builder for constructing a graph incrementally.
///
/// Use `add_vertex` and `add_edge` to build up the graph,
/// then call `build()` to validate and freeze it into an immutable `Graph`.
#[derive(Debug, Clone)]
pub struct GraphBuilder<L> {
    vertices: HashSet<L>,
    edges: Vec<(L, Endpoints<L>)>,
}

impl<L> Default for GraphBuilder<L> {
    fn default() -> Self {
        Self {
            vertices: HashSet::new(),
            edges: Vec::new(),
        }
    }
}

impl<L: Label> GraphBuilder<L> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex. Adding the same label again has no effect.
    pub fn add_vertex(&mut self, vertex: L) -> &mut Self {
        self.vertices.insert(vertex);
        self
    }

    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = L>) -> &mut Self {
        self.vertices.extend(vertices);
        self
    }

    /// Add an edge between `a` and `b`.
    ///
    /// Nothing is checked until `build()`: endpoints may be added later, and a
    /// repeated edge label is reported there.
    pub fn add_edge(&mut self, edge: L, a: L, b: L) -> &mut Self {
        self.edges.push((edge, Endpoints::new(a, b)));
        self
    }

    /// Add a loop at `vertex`.
    pub fn add_loop(&mut self, edge: L, vertex: L) -> &mut Self {
        self.add_edge(edge, vertex.clone(), vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges added so far, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    pub fn build(self) -> MgResult<Graph<L>> {
        Graph::from_incidence_lists(
            self.vertices,
            self.edges
                .into_iter()
                .map(|(edge, ends)| (edge, ends.into_array())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_core::{MgError, ValidationError};

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        builder
            .add_vertices(["n1", "n2"])
            .add_vertex("n1")
            .add_edge("c1", "n1", "n2");

        assert_eq!(builder.vertex_count(), 2);
        assert_eq!(builder.edge_count(), 1);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = GraphBuilder::new();
        builder
            .add_vertices(["n1", "n2"])
            .add_edge("c1", "n1", "n2")
            .add_loop("c2", "n2");

        let graph = builder.build().unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_loop(&"c2").unwrap());
        assert_eq!(graph.endpoints(&"c1"), Some(&Endpoints::new("n2", "n1")));
    }

    #[test]
    fn builder_reports_duplicate_edge() {
        let mut builder = GraphBuilder::new();
        builder
            .add_vertices(["n1", "n2"])
            .add_edge("c1", "n1", "n2")
            .add_edge("c1", "n2", "n2");

        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            MgError::Validation(ValidationError::DuplicateEdge {
                edge: "\"c1\"".into()
            })
        );
    }

    #[test]
    fn builder_reports_missing_vertex() {
        let mut builder = GraphBuilder::new();
        builder.add_vertex("n1").add_edge("c1", "n1", "n9");

        assert!(matches!(
            builder.build(),
            Err(MgError::Validation(ValidationError::DanglingEndpoint { .. }))
        ));
    }
}
