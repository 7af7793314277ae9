//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod edge_store;
pub mod proper_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use edge_store::EdgeStore;
pub use proper_graph::Graph;
pub use traversal::{Bfs, Visit};
