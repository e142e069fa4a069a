//! mg-graph: undirected multigraphs described by an incidence map.
//!
//! Provides:
//! - Core graph data structures (Endpoints, Graph)
//! - Incidence, parallel-edge, loop and neighborhood queries
//! - Incremental graph builder with validation
//! - Stable dense indexing for algorithms built on top
//!
//! Vertices and edges are disjoint label sets. Each edge maps to an unordered
//! pair of vertices; loops and parallel edges are allowed. A graph is
//! validated once when built and is immutable afterwards.
//!
//! # Example
//!
//! ```
//! use std::collections::{HashMap, HashSet};
//! use mg_graph::{Endpoints, Graph};
//!
//! let vertices = HashSet::from(["v1", "v2", "v3"]);
//! let incidence = HashMap::from([
//!     ("e1", Endpoints::new("v1", "v2")),
//!     ("e2", Endpoints::new("v1", "v1")),
//! ]);
//! let graph = Graph::new(vertices, incidence).unwrap();
//!
//! assert!(graph.is_loop(&"e2").unwrap());
//! assert_eq!(graph.incident(&"v1").unwrap(), HashSet::from(["e1", "e2"]));
//! assert_eq!(graph.open_neighborhood(&"v1").unwrap(), HashSet::from(["v2"]));
//! ```

pub mod builder;
pub mod endpoints;
pub mod graph;
pub mod indexing;
pub mod neighborhood;
#[cfg(feature = "serde")]
mod serde_impl;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use endpoints::Endpoints;
pub use graph::Graph;
pub use indexing::IndexMap;
pub use mg_core::{ElementKind, Label, MgError, MgResult, ValidationError};
