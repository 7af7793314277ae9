//! Vertices and their adjacency lists.

use std::fmt;

/// Arena handle of a node inside one graph.
///
/// Slots freed by node removal are reused, but each reuse bumps the slot's
/// generation, so a stale id never resolves to the newer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Position of this node's slot in the arena.
    pub fn index(self) -> usize {
        self.index
    }

    /// How many times the slot had been freed when this id was issued.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self::new(index, 0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generation == 0 {
            write!(f, "#{}", self.index)
        } else {
            write!(f, "#{}v{}", self.index, self.generation)
        }
    }
}

/// A vertex: its identity value plus ordered adjacency.
///
/// Adjacency keeps insertion order and does not deduplicate, so parallel
/// edges show up as repeated entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<V> {
    value: V,
    outgoing: Vec<NodeId>,
    incoming: Vec<NodeId>,
}

impl<V> Node<V> {
    /// Create a node with no neighbors.
    pub fn new(value: V) -> Self {
        Self {
            value,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// The identity value of this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Append a neighbor reached by an outgoing edge.
    pub fn add_outgoing(&mut self, other: NodeId) {
        self.outgoing.push(other);
    }

    /// Append a neighbor that points at this node (directed graphs only).
    pub fn add_incoming(&mut self, other: NodeId) {
        self.incoming.push(other);
    }

    /// Outgoing neighbors in insertion order.
    pub fn outgoing(&self) -> &[NodeId] {
        &self.outgoing
    }

    /// Incoming neighbors in insertion order.
    pub fn incoming(&self) -> &[NodeId] {
        &self.incoming
    }

    /// Outgoing followed by incoming neighbors, each neighbor listed once.
    pub fn adjacent(&self) -> Vec<NodeId> {
        let mut seen = Vec::with_capacity(self.outgoing.len() + self.incoming.len());
        for &id in self.outgoing.iter().chain(self.incoming.iter()) {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        seen
    }

    /// Total adjacency entries, counting parallel edges.
    pub fn degree(&self) -> usize {
        self.outgoing.len() + self.incoming.len()
    }

    /// Drop every outgoing entry for `other`, returning how many were dropped.
    pub(crate) fn remove_outgoing(&mut self, other: NodeId) -> usize {
        let before = self.outgoing.len();
        self.outgoing.retain(|&id| id != other);
        before - self.outgoing.len()
    }

    /// Drop every incoming entry for `other`, returning how many were dropped.
    pub(crate) fn remove_incoming(&mut self, other: NodeId) -> usize {
        let before = self.incoming.len();
        self.incoming.retain(|&id| id != other);
        before - self.incoming.len()
    }
}
