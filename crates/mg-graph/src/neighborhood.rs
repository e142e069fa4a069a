//! Vertex neighborhoods.

use std::collections::HashSet;

use mg_core::{ElementKind, Label, MgResult};

use crate::graph::Graph;

impl<L: Label> Graph<L> {
    /// `vertex` together with every vertex sharing an edge with it.
    ///
    /// An isolated vertex yields just itself.
    pub fn closed_neighborhood(&self, vertex: &L) -> MgResult<HashSet<L>> {
        self.expect_kind(vertex, ElementKind::Vertex)?;

        let mut hood = HashSet::new();
        for edge in self.incident(vertex)? {
            hood.extend(self.incident(&edge)?);
        }
        hood.insert(vertex.clone());
        Ok(hood)
    }

    /// The closed neighborhood without `vertex` itself.
    ///
    /// A loop contributes nothing here: its only endpoint is `vertex`.
    pub fn open_neighborhood(&self, vertex: &L) -> MgResult<HashSet<L>> {
        let mut hood = self.closed_neighborhood(vertex)?;
        hood.remove(vertex);
        Ok(hood)
    }
}
