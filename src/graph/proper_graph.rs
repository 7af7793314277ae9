//! Core graph structure: node arena + edge buckets kept in lockstep.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::engine::{PathFinder, ShortestPath};
use crate::types::{
    validate_weight, EdgeView, GraphConfig, GraphError, GraphResult, Node, NodeId,
};

use super::edge_store::EdgeStore;
use super::traversal::Bfs;

/// In-memory graph over node values of type `V`.
///
/// Nodes live in an arena indexed by [`NodeId`]; adjacency lists and edge
/// records only ever hold ids. Every edge in the [`EdgeStore`] is mirrored in
/// the adjacency of both endpoints and the two are updated together.
///
/// Removing a node frees its slot for the next `add_node`, so the arena is
/// bounded by the peak node count rather than the number of insertions.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    config: GraphConfig,
    slots: Vec<Slot<V>>,
    /// Indices of empty slots, reused last-freed first.
    free: Vec<usize>,
    /// Registry: value -> arena id.
    index: HashMap<V, NodeId>,
    edges: EdgeStore,
}

/// One arena cell. `generation` counts how often the cell has been freed.
#[derive(Debug, Clone)]
struct Slot<V> {
    generation: u32,
    node: Option<Node<V>>,
}

impl<V> Default for Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Create a new empty graph.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            edges: EdgeStore::new(config.directed),
        }
    }

    /// Shorthand for an undirected, unweighted graph.
    pub fn undirected() -> Self {
        Self::new(GraphConfig::undirected())
    }

    /// Shorthand for a directed, unweighted graph.
    pub fn directed() -> Self {
        Self::new(GraphConfig::directed())
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Number of stored edge records.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Arena id of a value, if registered.
    pub fn id_of<Q>(&self, value: &Q) -> Option<NodeId>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(value).copied()
    }

    /// The value stored at an arena id.
    pub fn value_of(&self, id: NodeId) -> Option<&V> {
        self.node_by_id(id).map(Node::value)
    }

    /// Look up a node by arena id.
    pub fn node_by_id(&self, id: NodeId) -> Option<&Node<V>> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
    }

    /// Look up a node by value.
    pub fn node<Q>(&self, value: &Q) -> Option<&Node<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.id_of(value).and_then(|id| self.node_by_id(id))
    }

    /// Registered values in arena order: insertion order, except that a node
    /// added after a removal takes the freed slot.
    pub fn nodes(&self) -> impl Iterator<Item = &V> + '_ {
        self.slots
            .iter()
            .filter_map(|slot| slot.node.as_ref())
            .map(Node::value)
    }

    /// All edges as value pairs, in bucket insertion order.
    pub fn edges(&self) -> Vec<EdgeView<V>> {
        self.edges
            .all()
            .filter_map(|edge| {
                Some(EdgeView {
                    from: self.value_of(edge.from)?.clone(),
                    to: self.value_of(edge.to)?.clone(),
                    weight: edge.weight,
                })
            })
            .collect()
    }

    pub(crate) fn edge_store(&self) -> &EdgeStore {
        &self.edges
    }

    /// Register a node. Re-adding an existing value keeps the node and its
    /// edges untouched and returns `false`.
    pub fn add_node(&mut self, value: impl Into<V>) -> bool {
        let value = value.into();
        if self.index.contains_key(&value) {
            debug!("Node {:?} already registered", value);
            return false;
        }

        let node = Some(Node::new(value.clone()));
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = node;
                NodeId::new(index, slot.generation)
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node,
                });
                NodeId::from(self.slots.len() - 1)
            }
        };
        debug!("Added node {:?} as {}", value, id);
        self.index.insert(value, id);
        true
    }

    /// Remove a node and every edge incident to it, in both directions.
    ///
    /// Returns `false` if the value was not registered.
    pub fn remove_node<Q>(&mut self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let Some(id) = self.index.remove(value) else {
            return false;
        };
        let Some(slot) = self.slots.get_mut(id.index()) else {
            return false;
        };
        let Some(node) = slot.node.take() else {
            return false;
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index());

        for neighbor in node.adjacent() {
            self.edges.remove(id, neighbor);
            self.edges.remove(neighbor, id);
            if let Some(other) = self.node_mut(neighbor) {
                other.remove_outgoing(id);
                other.remove_incoming(id);
            }
        }

        debug!(
            "Removed node {:?} with {} adjacency entries",
            value,
            node.degree()
        );
        true
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    /// Add an edge to an unweighted graph.
    pub fn add_edge<Q>(&mut self, from: &Q, to: &Q) -> GraphResult<()>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.insert_edge(from, to, None)
    }

    /// Add an edge carrying a weight.
    pub fn add_weighted_edge<Q>(&mut self, from: &Q, to: &Q, weight: f64) -> GraphResult<()>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.insert_edge(from, to, Some(weight))
    }

    /// Add an edge between two registered nodes.
    ///
    /// Weighted graphs require a non-NaN weight; unweighted graphs ignore it.
    /// Parallel edges are kept.
    pub fn insert_edge<Q>(&mut self, from: &Q, to: &Q, weight: Option<f64>) -> GraphResult<()>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let weight = validate_weight(self.config.weighted, weight)?;
        let from_id = self.require(from)?;
        let to_id = self.require(to)?;

        self.edges.add(from_id, to_id, weight);

        if let Some(node) = self.node_mut(from_id) {
            node.add_outgoing(to_id);
        }
        if self.config.directed {
            if let Some(node) = self.node_mut(to_id) {
                node.add_incoming(from_id);
            }
        } else if from_id != to_id {
            if let Some(node) = self.node_mut(to_id) {
                node.add_outgoing(from_id);
            }
        }

        debug!("Added edge {:?} -> {:?} (weight {:?})", from, to, weight);
        Ok(())
    }

    /// Remove every edge `from -> to` (both orientations when undirected).
    ///
    /// Returns whether anything was removed.
    pub fn remove_edge<Q>(&mut self, from: &Q, to: &Q) -> GraphResult<bool>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let from_id = self.require(from)?;
        let to_id = self.require(to)?;

        if !self.edges.remove(from_id, to_id) {
            return Ok(false);
        }

        let directed = self.config.directed;
        if let Some(node) = self.node_mut(from_id) {
            node.remove_outgoing(to_id);
        }
        if let Some(node) = self.node_mut(to_id) {
            if directed {
                node.remove_incoming(from_id);
            } else {
                node.remove_outgoing(from_id);
            }
        }

        debug!("Removed edge {:?} -> {:?}", from, to);
        Ok(true)
    }

    /// Whether an edge `from -> to` exists. Unknown values yield `false`.
    pub fn contains_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.id_of(from), self.id_of(to)) {
            (Some(from), Some(to)) => self.edges.contains(from, to),
            _ => false,
        }
    }

    /// Values of nodes with an edge into `value`.
    pub fn incoming_nodes<Q>(&self, value: &Q) -> GraphResult<Vec<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let node = self.lookup(value)?;
        Ok(self.values(node.incoming()))
    }

    /// Values of nodes `value` has an edge to.
    pub fn outgoing_nodes<Q>(&self, value: &Q) -> GraphResult<Vec<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let node = self.lookup(value)?;
        Ok(self.values(node.outgoing()))
    }

    /// Outgoing and incoming neighbors, each listed once.
    pub fn adjacent_nodes<Q>(&self, value: &Q) -> GraphResult<Vec<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let node = self.lookup(value)?;
        Ok(self.values(&node.adjacent()))
    }

    /// Whether a path exists between the two nodes.
    ///
    /// Directed graphs accept a path in either direction: `from -> to` or
    /// `to -> from`.
    pub fn are_connected<Q>(&self, from: &Q, to: &Q) -> GraphResult<bool>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let from_id = self.require(from)?;
        let to_id = self.require(to)?;

        Ok(self.reaches(from_id, to_id)
            || (self.config.directed && self.reaches(to_id, from_id)))
    }

    /// Lazy breadth-first walk from `from`, following outgoing edges.
    pub fn bfs<Q>(&self, from: &Q) -> GraphResult<Bfs<'_, V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let start = self.require(from)?;
        Ok(Bfs::new(self, start))
    }

    /// Alias of [`Graph::bfs`].
    pub fn iterate_from<Q>(&self, from: &Q) -> GraphResult<Bfs<'_, V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.bfs(from)
    }

    /// Shortest path from `from` to `to`; empty with no length if unreachable.
    pub fn shortest_path<Q>(&self, from: &Q, to: &Q) -> GraphResult<ShortestPath<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        PathFinder::new(self).shortest_path(from, to)
    }

    pub(crate) fn require<Q>(&self, value: &Q) -> GraphResult<NodeId>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.id_of(value)
            .ok_or_else(|| GraphError::not_found(value))
    }

    pub(crate) fn values(&self, ids: &[NodeId]) -> Vec<V> {
        ids.iter()
            .filter_map(|&id| self.value_of(id).cloned())
            .collect()
    }

    fn lookup<Q>(&self, value: &Q) -> GraphResult<&Node<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.node(value).ok_or_else(|| GraphError::not_found(value))
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<V>> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
    }

    fn reaches(&self, from: NodeId, to: NodeId) -> bool {
        Bfs::new(self, from).any_visit(|visit| visit.node == to)
    }
}
