use thiserror::Error;

use crate::label::ElementKind;

pub type MgResult<T> = Result<T, MgError>;

/// A graph could not be constructed because its inputs break an invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    #[error("Label {label} is used both as a vertex and as an edge")]
    Overlap { label: String },

    #[error("Edge {edge} has {count} endpoints (expected 2)")]
    WrongArity { edge: String, count: usize },

    #[error("Edge {edge} refers to non-existent vertex {vertex}")]
    DanglingEndpoint { edge: String, vertex: String },

    #[error("Edge {edge} is defined more than once")]
    DuplicateEdge { edge: String },
}

/// `IndexOob` carries a `&'static str`, so errors are serialize-only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MgError {
    #[error("Invalid graph: {0}")]
    Validation(#[from] ValidationError),

    #[error("{label} is neither a vertex nor an edge")]
    NotFound { label: String },

    #[error("{label}: expected {expected}, found {actual}")]
    WrongKind {
        label: String,
        expected: ElementKind,
        actual: ElementKind,
    },

    #[error("Index out of bounds: {what} (len={len})")]
    IndexOob { what: &'static str, len: usize },
}

impl MgError {
    /// The validation failure behind this error, if construction failed.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            MgError::Validation(err) => Some(err),
            _ => None,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn validation_error_round_trips() {
        let err = ValidationError::DanglingEndpoint {
            edge: "\"e1\"".into(),
            vertex: "\"v9\"".into(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn wrong_kind_serializes_lowercase_kinds() {
        let err = MgError::WrongKind {
            label: "v1".into(),
            expected: ElementKind::Edge,
            actual: ElementKind::Vertex,
        };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["WrongKind"]["expected"], "edge");
        assert_eq!(value["WrongKind"]["actual"], "vertex");
    }
}
