//! All data types for the proper-graph library.

pub mod config;
pub mod edge;
pub mod error;
pub mod node;

pub use config::GraphConfig;
pub use edge::{validate_weight, Edge, EdgeView, PairKey};
pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};
