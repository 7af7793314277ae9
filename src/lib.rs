//! proper-graph — in-memory graph with traversal and shortest paths.
//!
//! Graphs are directed or undirected, weighted or unweighted, fixed at
//! construction by a [`GraphConfig`]. Unweighted shortest paths use BFS;
//! weighted ones use edge relaxation, which accepts negative weights and
//! reports negative cycles as [`GraphError::NegativeCycle`].

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{PathFinder, ShortestPath};
pub use graph::{Bfs, EdgeStore, Graph, GraphBuilder, Visit};
pub use types::{
    Edge, EdgeView, GraphConfig, GraphError, GraphResult, Node, NodeId, PairKey,
};
