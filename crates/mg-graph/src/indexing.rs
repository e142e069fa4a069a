//! Dense indexing for algorithms run on top of a graph.
//!
//! Provides bidirectional mappings between labels and contiguous
//! indices (0..N), separately for vertices and edges.

use std::collections::HashMap;

use mg_core::{EdgeIdx, Id, Label, MgError, MgResult, VertexIdx};

use crate::graph::Graph;

/// Index map providing stable, contiguous indices for graph elements.
///
/// Labels are numbered in ascending order, so the same graph always
/// yields the same indices. Lookups are O(1) in both directions.
#[derive(Debug, Clone)]
pub struct IndexMap<L> {
    /// Contiguous list of vertex labels (index -> label).
    vertex_labels: Vec<L>,

    /// Contiguous list of edge labels (index -> label).
    edge_labels: Vec<L>,

    /// Endpoints of each edge as vertex indices, parallel to `edge_labels`.
    edge_endpoints: Vec<(VertexIdx, VertexIdx)>,

    vertex_to_idx: HashMap<L, VertexIdx>,
    edge_to_idx: HashMap<L, EdgeIdx>,
}

/// Number `labels` in order, failing if they exceed the id space.
fn number<L: Label>(labels: &[L], what: &'static str) -> MgResult<HashMap<L, Id>> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            Id::from_usize(i)
                .map(|id| (label.clone(), id))
                .ok_or(MgError::IndexOob {
                    what,
                    len: labels.len(),
                })
        })
        .collect()
}

impl<L: Label + Ord> IndexMap<L> {
    /// Build an index map from a graph.
    pub fn from_graph(graph: &Graph<L>) -> MgResult<Self> {
        let mut vertex_labels: Vec<L> = graph.vertices().iter().cloned().collect();
        vertex_labels.sort();
        let mut edge_labels: Vec<L> = graph.edge_labels().cloned().collect();
        edge_labels.sort();

        let vertex_to_idx = number(&vertex_labels, "vertices")?;
        let edge_to_idx = number(&edge_labels, "edges")?;

        let mut map = Self {
            vertex_labels,
            edge_labels,
            edge_endpoints: Vec::new(),
            vertex_to_idx,
            edge_to_idx,
        };

        let mut edge_endpoints = Vec::with_capacity(map.edge_labels.len());
        for edge in &map.edge_labels {
            let ends = graph.endpoints(edge).ok_or_else(|| MgError::NotFound {
                label: edge.describe(),
            })?;
            edge_endpoints.push((map.vertex_idx(ends.first())?, map.vertex_idx(ends.second())?));
        }
        map.edge_endpoints = edge_endpoints;

        Ok(map)
    }
}

impl<L: Label> IndexMap<L> {
    /// Number of vertices in the index.
    pub fn vertex_count(&self) -> usize {
        self.vertex_labels.len()
    }

    /// Number of edges in the index.
    pub fn edge_count(&self) -> usize {
        self.edge_labels.len()
    }

    /// Get the contiguous index for a vertex label.
    pub fn vertex_idx(&self, vertex: &L) -> MgResult<VertexIdx> {
        self.vertex_to_idx
            .get(vertex)
            .copied()
            .ok_or_else(|| MgError::NotFound {
                label: vertex.describe(),
            })
    }

    /// Get the contiguous index for an edge label.
    pub fn edge_idx(&self, edge: &L) -> MgResult<EdgeIdx> {
        self.edge_to_idx
            .get(edge)
            .copied()
            .ok_or_else(|| MgError::NotFound {
                label: edge.describe(),
            })
    }

    /// Get the vertex label for an index (None if out of bounds).
    pub fn vertex(&self, idx: VertexIdx) -> Option<&L> {
        self.vertex_labels.get(idx.as_usize())
    }

    /// Get the edge label for an index (None if out of bounds).
    pub fn edge(&self, idx: EdgeIdx) -> Option<&L> {
        self.edge_labels.get(idx.as_usize())
    }

    /// Endpoints of an edge as vertex indices.
    pub fn edge_endpoints(&self, idx: EdgeIdx) -> Option<(VertexIdx, VertexIdx)> {
        self.edge_endpoints.get(idx.as_usize()).copied()
    }

    /// All vertex labels in index order.
    pub fn vertex_labels(&self) -> &[L] {
        &self.vertex_labels
    }

    /// All edge labels in index order.
    pub fn edge_labels(&self) -> &[L] {
        &self.edge_labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;

    fn path_graph() -> Graph<&'static str> {
        let mut builder = GraphBuilder::new();
        builder
            .add_vertices(["n3", "n1", "n2"])
            .add_edge("c2", "n2", "n3")
            .add_edge("c1", "n1", "n2")
            .add_loop("c3", "n3");
        builder.build().unwrap()
    }

    #[test]
    fn index_map_basic() {
        let idx_map = IndexMap::from_graph(&path_graph()).unwrap();

        assert_eq!(idx_map.vertex_count(), 3);
        assert_eq!(idx_map.edge_count(), 3);

        let i1 = idx_map.vertex_idx(&"n1").unwrap();
        assert_eq!(idx_map.vertex(i1), Some(&"n1"));

        let ic = idx_map.edge_idx(&"c2").unwrap();
        assert_eq!(idx_map.edge(ic), Some(&"c2"));
    }

    #[test]
    fn index_map_invalid_label() {
        let idx_map = IndexMap::from_graph(&path_graph()).unwrap();

        assert!(idx_map.vertex_idx(&"n999").is_err());
        // Edge labels are not vertices
        assert!(idx_map.vertex_idx(&"c1").is_err());
        assert!(idx_map.edge(Id::from_index(99).unwrap()).is_none());
    }

    #[test]
    fn index_map_sorted_and_contiguous() {
        let idx_map = IndexMap::from_graph(&path_graph()).unwrap();

        assert_eq!(idx_map.vertex_labels(), &["n1", "n2", "n3"]);
        assert_eq!(idx_map.edge_labels(), &["c1", "c2", "c3"]);
        assert_eq!(idx_map.vertex_idx(&"n1").unwrap().index(), 0);
        assert_eq!(idx_map.vertex_idx(&"n3").unwrap().index(), 2);
    }

    #[test]
    fn index_map_endpoints() {
        let idx_map = IndexMap::from_graph(&path_graph()).unwrap();

        let c1 = idx_map.edge_idx(&"c1").unwrap();
        let (a, b) = idx_map.edge_endpoints(c1).unwrap();
        assert_eq!(idx_map.vertex(a), Some(&"n1"));
        assert_eq!(idx_map.vertex(b), Some(&"n2"));

        let c3 = idx_map.edge_idx(&"c3").unwrap();
        let (a, b) = idx_map.edge_endpoints(c3).unwrap();
        assert_eq!(a, b);
    }
}
