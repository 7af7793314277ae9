//! Command-line support: graph documents and the `pgraph` commands.

pub mod commands;
pub mod document;

pub use document::{DocumentEdge, GraphDocument};
