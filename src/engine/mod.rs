//! High-level queries over a graph.

pub mod path;

pub use path::{PathFinder, ShortestPath};
