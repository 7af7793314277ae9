//! JSON graph descriptions read by the CLI.
//!
//! ```json
//! {
//!   "directed": true,
//!   "weighted": true,
//!   "nodes": ["a", "b"],
//!   "edges": [{ "from": "a", "to": "b", "weight": 2.5 }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, GraphBuilder};
use crate::types::{GraphConfig, GraphResult};

/// One edge line of a graph document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEdge {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// A whole graph as written on disk by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(flatten)]
    pub config: GraphConfig,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<DocumentEdge>,
}

impl GraphDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a document file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Replay the document into a graph. Edge endpoints must be listed in
    /// `nodes`.
    pub fn into_graph(self) -> GraphResult<Graph<String>> {
        let mut builder: GraphBuilder<String> = GraphBuilder::with_config(self.config);
        builder.nodes(self.nodes);
        for edge in self.edges {
            match edge.weight {
                Some(weight) => builder.link_weighted(edge.from, edge.to, weight),
                None => builder.link(edge.from, edge.to),
            };
        }
        builder.build()
    }
}

/// Read a document file straight into a graph.
pub fn load_graph(path: &Path) -> GraphResult<Graph<String>> {
    let graph = GraphDocument::read_from_file(path)?.into_graph()?;
    log::debug!(
        "Loaded {} with {} nodes and {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
