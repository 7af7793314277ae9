//! Graph construction settings.

use serde::{Deserialize, Serialize};

/// Flags fixed at construction time for a [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Edges are one-way (`a -> b` does not imply `b -> a`).
    pub directed: bool,
    /// Edges carry a numeric weight and shortest paths minimise total weight.
    pub weighted: bool,
}

impl GraphConfig {
    /// Undirected, unweighted.
    pub fn undirected() -> Self {
        Self::default()
    }

    /// Directed, unweighted.
    pub fn directed() -> Self {
        Self {
            directed: true,
            weighted: false,
        }
    }

    /// Same directedness, weighted edges.
    pub fn weighted(self) -> Self {
        Self {
            weighted: true,
            ..self
        }
    }
}
