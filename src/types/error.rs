//! Error types for the proper-graph library.

use thiserror::Error;

/// All errors that can occur in the proper-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Weighted graph given a NaN weight.
    #[error("Edge weight must be a number, got {0}")]
    Weight(f64),

    /// Weighted graph given an edge without a weight.
    #[error("Weighted graph requires an edge weight")]
    MissingWeight,

    /// Node value not present in the registry.
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// A negative-weight cycle is reachable from the path source.
    #[error("Negative-weight cycle reachable from node {0}")]
    NegativeCycle(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph document.
    #[error("Invalid graph document: {0}")]
    Document(#[from] serde_json::Error),
}

impl GraphError {
    /// Build a `NodeNotFound` from any printable value.
    pub fn not_found<Q: std::fmt::Debug + ?Sized>(value: &Q) -> Self {
        Self::NodeNotFound(format!("{:?}", value))
    }

    /// Whether this is a weight validation failure.
    pub fn is_weight_error(&self) -> bool {
        matches!(self, Self::Weight(_) | Self::MissingWeight)
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
