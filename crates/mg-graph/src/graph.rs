//! Core graph data structure and incidence queries.

use std::collections::{HashMap, HashSet};

use mg_core::{ElementKind, Label, MgError, MgResult};
use tracing::debug;

use crate::endpoints::Endpoints;
use crate::validate;

/// An undirected multigraph described by its incidence map.
///
/// The graph stores:
/// - The vertex label set.
/// - The incidence map: each edge label to its two endpoints.
/// - A vertex -> incident edges index, derived once at construction.
///
/// Vertex and edge labels are disjoint, loops and parallel edges are allowed.
/// The graph is validated when built and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Graph<L> {
    pub(crate) vertices: HashSet<L>,
    pub(crate) incidence: HashMap<L, Endpoints<L>>,

    /// Edges touching each vertex, a loop listed once. Isolated vertices have no entry.
    pub(crate) vertex_edges: HashMap<L, Vec<L>>,
}

impl<L> Default for Graph<L> {
    fn default() -> Self {
        Self {
            vertices: HashSet::new(),
            incidence: HashMap::new(),
            vertex_edges: HashMap::new(),
        }
    }
}

impl<L: Label> Graph<L> {
    /// Validate and freeze a vertex set and incidence map into a graph.
    ///
    /// Fails if a label is both a vertex and an edge, or if an edge names an
    /// endpoint that is not in `vertices`.
    pub fn new(vertices: HashSet<L>, incidence: HashMap<L, Endpoints<L>>) -> MgResult<Self> {
        validate::validate_structure(&vertices, &incidence)
            .inspect_err(|err| debug!(%err, "rejected graph"))?;

        let vertex_edges = Self::build_adjacency(&incidence);
        debug!(
            vertices = vertices.len(),
            edges = incidence.len(),
            "built graph"
        );

        Ok(Self {
            vertices,
            incidence,
            vertex_edges,
        })
    }

    /// Build a graph from raw endpoint lists.
    ///
    /// Unlike [`Graph::new`], the endpoint count of each edge is checked at
    /// runtime, and a repeated edge label is rejected.
    pub fn from_incidence_lists<V, I, P>(vertices: V, edges: I) -> MgResult<Self>
    where
        V: IntoIterator<Item = L>,
        I: IntoIterator<Item = (L, P)>,
        P: IntoIterator<Item = L>,
    {
        let incidence = validate::collect_incidence(edges)
            .inspect_err(|err| debug!(%err, "rejected graph"))?;
        Self::new(vertices.into_iter().collect(), incidence)
    }

    /// For each vertex, collect its incident edges.
    fn build_adjacency(incidence: &HashMap<L, Endpoints<L>>) -> HashMap<L, Vec<L>> {
        let mut vertex_edges: HashMap<L, Vec<L>> = HashMap::new();
        for (edge, ends) in incidence {
            vertex_edges
                .entry(ends.first().clone())
                .or_default()
                .push(edge.clone());
            if !ends.is_loop() {
                vertex_edges
                    .entry(ends.second().clone())
                    .or_default()
                    .push(edge.clone());
            }
        }
        vertex_edges
    }

    /// Return the vertex set.
    pub fn vertices(&self) -> &HashSet<L> {
        &self.vertices
    }

    /// Return the edge set (the keys of the incidence map).
    pub fn edges(&self) -> HashSet<L> {
        self.incidence.keys().cloned().collect()
    }

    /// Iterate over edge labels without collecting them.
    pub fn edge_labels(&self) -> impl Iterator<Item = &L> {
        self.incidence.keys()
    }

    /// Return the incidence map.
    pub fn incidence(&self) -> &HashMap<L, Endpoints<L>> {
        &self.incidence
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.incidence.len()
    }

    /// True for the graph with no vertices (and so no edges).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, label: &L) -> bool {
        self.vertices.contains(label)
    }

    pub fn contains_edge(&self, label: &L) -> bool {
        self.incidence.contains_key(label)
    }

    /// Whether `label` names a vertex, an edge, or nothing in this graph.
    pub fn kind_of(&self, label: &L) -> Option<ElementKind> {
        if self.vertices.contains(label) {
            Some(ElementKind::Vertex)
        } else if self.incidence.contains_key(label) {
            Some(ElementKind::Edge)
        } else {
            None
        }
    }

    /// Get the endpoints of an edge (returns None for anything but an edge).
    pub fn endpoints(&self, edge: &L) -> Option<&Endpoints<L>> {
        self.incidence.get(edge)
    }

    /// Check that `label` exists and is of the `expected` kind.
    pub(crate) fn expect_kind(&self, label: &L, expected: ElementKind) -> MgResult<()> {
        match self.kind_of(label) {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(MgError::WrongKind {
                label: label.describe(),
                expected,
                actual,
            }),
            None => Err(MgError::NotFound {
                label: label.describe(),
            }),
        }
    }

    /// Elements incident to `element`.
    ///
    /// For a vertex, the edges that have it as an endpoint. For an edge, its
    /// distinct endpoints, so a loop yields a single vertex.
    pub fn incident(&self, element: &L) -> MgResult<HashSet<L>> {
        if let Some(ends) = self.incidence.get(element) {
            return Ok(ends.to_set());
        }
        if self.vertices.contains(element) {
            return Ok(self
                .vertex_edges
                .get(element)
                .map(|edges| edges.iter().cloned().collect())
                .unwrap_or_default());
        }
        Err(MgError::NotFound {
            label: element.describe(),
        })
    }

    /// Edges other than `edge` that join the same endpoints.
    ///
    /// Two loops on one vertex are parallel; a loop is never parallel to an
    /// edge with two distinct endpoints.
    pub fn parallel(&self, edge: &L) -> MgResult<HashSet<L>> {
        self.expect_kind(edge, ElementKind::Edge)?;
        let Some(ends) = self.incidence.get(edge) else {
            return Err(MgError::NotFound {
                label: edge.describe(),
            });
        };

        // Unordered pair equality matches equality of the endpoint sets.
        Ok(self
            .incidence
            .iter()
            .filter(|(other, other_ends)| *other != edge && *other_ends == ends)
            .map(|(other, _)| other.clone())
            .collect())
    }

    /// True if both endpoints of `edge` are the same vertex.
    pub fn is_loop(&self, edge: &L) -> MgResult<bool> {
        self.expect_kind(edge, ElementKind::Edge)?;
        Ok(self.incident(edge)?.len() == 1)
    }

    /// Number of edge endpoints at `vertex`; a loop counts twice.
    pub fn degree(&self, vertex: &L) -> MgResult<usize> {
        self.expect_kind(vertex, ElementKind::Vertex)?;
        let Some(edges) = self.vertex_edges.get(vertex) else {
            return Ok(0);
        };
        Ok(edges
            .iter()
            .filter_map(|edge| self.incidence.get(edge))
            .map(|ends| ends.multiplicity(vertex))
            .sum())
    }
}

impl<L: Label> PartialEq for Graph<L> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.incidence == other.incidence
    }
}

impl<L: Label> Eq for Graph<L> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> Graph<&'static str> {
        Graph::new(
            HashSet::from(["v1", "v2", "v3"]),
            HashMap::from([
                ("e1", Endpoints::new("v1", "v2")),
                ("e2", Endpoints::new("v1", "v1")),
            ]),
        )
        .unwrap()
    }

    #[test]
    fn default_is_empty() {
        let graph: Graph<&str> = Graph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.incidence().is_empty());
    }

    #[test]
    fn kind_of_labels() {
        let graph = scenario_a();
        assert_eq!(graph.kind_of(&"v1"), Some(ElementKind::Vertex));
        assert_eq!(graph.kind_of(&"e1"), Some(ElementKind::Edge));
        assert_eq!(graph.kind_of(&"x"), None);
    }

    #[test]
    fn adjacency_lists_loops_once() {
        let graph = scenario_a();
        let mut v1_edges = graph.vertex_edges[&"v1"].clone();
        v1_edges.sort();
        assert_eq!(v1_edges, vec!["e1", "e2"]);
        assert_eq!(graph.vertex_edges[&"v2"], vec!["e1"]);
        assert!(!graph.vertex_edges.contains_key(&"v3"));
    }

    #[test]
    fn expect_kind_errors() {
        let graph = scenario_a();
        assert!(graph.expect_kind(&"v1", ElementKind::Vertex).is_ok());
        assert_eq!(
            graph.expect_kind(&"v1", ElementKind::Edge),
            Err(MgError::WrongKind {
                label: "\"v1\"".into(),
                expected: ElementKind::Edge,
                actual: ElementKind::Vertex,
            })
        );
        assert_eq!(
            graph.expect_kind(&"zz", ElementKind::Edge),
            Err(MgError::NotFound {
                label: "\"zz\"".into()
            })
        );
    }

    #[test]
    fn degree_counts_loops_twice() {
        let graph = scenario_a();
        assert_eq!(graph.degree(&"v1").unwrap(), 3);
        assert_eq!(graph.degree(&"v2").unwrap(), 1);
        assert_eq!(graph.degree(&"v3").unwrap(), 0);
        assert!(graph.degree(&"e1").is_err());
    }

    #[test]
    fn equality_ignores_endpoint_order() {
        let flipped = Graph::new(
            HashSet::from(["v1", "v2", "v3"]),
            HashMap::from([
                ("e1", Endpoints::new("v2", "v1")),
                ("e2", Endpoints::new("v1", "v1")),
            ]),
        )
        .unwrap();
        assert_eq!(scenario_a(), flipped);
    }
}
