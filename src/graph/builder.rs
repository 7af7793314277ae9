//! Fluent API for building Graph instances.

use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{GraphConfig, GraphResult};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes and edges are replayed in the order they were declared, so edge
/// declaration order becomes adjacency (and traversal) order.
pub struct GraphBuilder<V> {
    config: GraphConfig,
    nodes: Vec<V>,
    edges: Vec<(V, V, Option<f64>)>,
}

impl<V> GraphBuilder<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Create a new builder for an undirected, unweighted graph.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new builder with explicit settings.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Make the graph directed.
    pub fn directed(&mut self) -> &mut Self {
        self.config.directed = true;
        self
    }

    /// Make the graph weighted.
    pub fn weighted(&mut self) -> &mut Self {
        self.config.weighted = true;
        self
    }

    /// Declare a node.
    pub fn node(&mut self, value: impl Into<V>) -> &mut Self {
        self.nodes.push(value.into());
        self
    }

    /// Declare several nodes.
    pub fn nodes<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<V>,
    {
        self.nodes.extend(values.into_iter().map(Into::into));
        self
    }

    /// Declare an unweighted edge.
    pub fn link(&mut self, from: impl Into<V>, to: impl Into<V>) -> &mut Self {
        self.edges.push((from.into(), to.into(), None));
        self
    }

    /// Declare a weighted edge.
    pub fn link_weighted(&mut self, from: impl Into<V>, to: impl Into<V>, weight: f64) -> &mut Self {
        self.edges.push((from.into(), to.into(), Some(weight)));
        self
    }

    /// Build the final Graph.
    ///
    /// Fails on the first edge that names an undeclared node or carries an
    /// invalid weight.
    pub fn build(self) -> GraphResult<Graph<V>> {
        let mut graph = Graph::new(self.config);
        for value in self.nodes {
            graph.add_node(value);
        }
        for (from, to, weight) in &self.edges {
            graph.insert_edge(from, to, *weight)?;
        }
        Ok(graph)
    }
}

impl<V> Default for GraphBuilder<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
