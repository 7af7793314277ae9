//! Lazy breadth-first traversal.

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::types::NodeId;

use super::Graph;

/// One dequeued node together with the node that first discovered it.
///
/// `parent` is `None` only for the start node. It lives as long as the
/// traversal and is never written back into the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub node: NodeId,
    pub parent: Option<NodeId>,
}

/// Breadth-first cursor over a [`Graph`], following outgoing edges only.
///
/// Holds a FIFO queue of discovered nodes and the visited set. A node may be
/// queued more than once; later copies are skipped when dequeued, so each
/// node is yielded exactly once and siblings come out in edge insertion
/// order. Single pass: ask the graph for a new cursor to walk again.
pub struct Bfs<'g, V> {
    graph: &'g Graph<V>,
    queue: VecDeque<Visit>,
    visited: HashSet<NodeId>,
}

impl<'g, V> Bfs<'g, V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub(crate) fn new(graph: &'g Graph<V>, start: NodeId) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(Visit {
            node: start,
            parent: None,
        });
        Self {
            graph,
            queue,
            visited: HashSet::new(),
        }
    }

    /// Advance one node, reporting which node discovered it.
    pub fn next_visit(&mut self) -> Option<Visit> {
        while let Some(visit) = self.queue.pop_front() {
            if !self.visited.insert(visit.node) {
                continue;
            }

            if let Some(node) = self.graph.node_by_id(visit.node) {
                for &next in node.outgoing() {
                    if !self.visited.contains(&next) {
                        self.queue.push_back(Visit {
                            node: next,
                            parent: Some(visit.node),
                        });
                    }
                }
            }
            return Some(visit);
        }
        None
    }

    /// Pull visits until one matches, stopping the walk there.
    pub fn any_visit(&mut self, mut pred: impl FnMut(&Visit) -> bool) -> bool {
        while let Some(visit) = self.next_visit() {
            if pred(&visit) {
                return true;
            }
        }
        false
    }

    /// Nodes yielded so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

impl<'g, V> Iterator for Bfs<'g, V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            let visit = self.next_visit()?;
            if let Some(value) = graph.value_of(visit.node) {
                return Some(value);
            }
        }
    }
}

impl<V> FusedIterator for Bfs<'_, V> where V: Clone + Eq + Hash + Debug {}
