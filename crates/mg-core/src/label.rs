use core::fmt;
use core::hash::Hash;

/// Identifier for a vertex or an edge.
///
/// Vertices and edges share one label type so that a single query can accept
/// either kind. Only equality, hashing and cloning are needed to build and
/// query a graph; `Debug` is used to name labels in error messages.
pub trait Label: Clone + Eq + Hash + fmt::Debug {
    /// Render the label for error reporting.
    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> Label for T {}

/// Which of the two disjoint label sets an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElementKind {
    Vertex,
    Edge,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Vertex => f.write_str("vertex"),
            ElementKind::Edge => f.write_str("edge"),
        }
    }
}
