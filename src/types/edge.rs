//! Edge records and the key they are bucketed under.

use serde::Serialize;

use super::error::{GraphError, GraphResult};
use super::node::NodeId;

/// Order-dependent bucketing key for an edge: `(a, b)` and `(b, a)` differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub from: NodeId,
    pub to: NodeId,
}

impl PairKey {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    /// The key of the same pair read the other way round.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// One stored edge between two arena nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Origin node.
    pub from: NodeId,
    /// Destination node.
    pub to: NodeId,
    /// Present only on weighted graphs.
    pub weight: Option<f64>,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: Option<f64>) -> Self {
        Self { from, to, weight }
    }

    pub fn key(&self) -> PairKey {
        PairKey::new(self.from, self.to)
    }

    /// Whether this record connects exactly `from -> to`.
    pub fn joins(&self, from: NodeId, to: NodeId) -> bool {
        self.from == from && self.to == to
    }

    /// Weight used by relaxation; unweighted edges count as one hop.
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

/// An edge described by its endpoint values, as handed out to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView<V> {
    pub from: V,
    pub to: V,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Check a weight for a graph with the given `weighted` flag.
///
/// Unweighted graphs drop whatever was passed. Weighted graphs need a
/// non-NaN number; infinities are accepted.
pub fn validate_weight(weighted: bool, weight: Option<f64>) -> GraphResult<Option<f64>> {
    if !weighted {
        return Ok(None);
    }
    match weight {
        None => Err(GraphError::MissingWeight),
        Some(w) if w.is_nan() => Err(GraphError::Weight(w)),
        Some(w) => Ok(Some(w)),
    }
}
