//! mg-core: shared foundation for the multigraph crates.
//!
//! Contains:
//! - label (the `Label` bound for vertex/edge identifiers + element kinds)
//! - ids (compact dense indices for vertices and edges)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod label;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MgError, MgResult, ValidationError};
pub use ids::*;
pub use label::{ElementKind, Label};
