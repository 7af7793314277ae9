//! Shortest paths: BFS for unweighted graphs, edge relaxation for weighted ones.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace, warn};
use serde::Serialize;

use crate::graph::{Bfs, Graph};
use crate::types::{GraphError, GraphResult, NodeId};

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<V> {
    /// Node values from source to target inclusive. Empty when unreachable.
    pub nodes: Vec<V>,
    /// Hop count (unweighted) or total weight (weighted). `None` when unreachable.
    pub length: Option<f64>,
}

impl<V> ShortestPath<V> {
    /// The "no path" result.
    pub fn unreachable() -> Self {
        Self {
            nodes: Vec::new(),
            length: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.length.is_some()
    }
}

/// Shortest-path computation over one graph.
pub struct PathFinder<'g, V> {
    graph: &'g Graph<V>,
}

impl<'g, V> PathFinder<'g, V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new(graph: &'g Graph<V>) -> Self {
        Self { graph }
    }

    /// Shortest path from `from` to `to`.
    ///
    /// Weighted graphs fail with [`GraphError::NegativeCycle`] when a
    /// negative-weight cycle is reachable from `from`.
    pub fn shortest_path<Q>(&self, from: &Q, to: &Q) -> GraphResult<ShortestPath<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let source = self.graph.require(from)?;
        let target = self.graph.require(to)?;

        let path = if self.graph.is_weighted() {
            self.relaxation(source, target)?
        } else {
            self.breadth_first(source, target)
        };
        debug!("Shortest path {:?} -> {:?}: {:?}", from, to, path.length);
        Ok(path)
    }

    /// Fewest hops, found by walking BFS discovery parents back from `target`.
    fn breadth_first(&self, source: NodeId, target: NodeId) -> ShortestPath<V> {
        let mut parents: HashMap<NodeId, Option<NodeId>> = HashMap::new();
        let mut bfs = Bfs::new(self.graph, source);

        while let Some(visit) = bfs.next_visit() {
            parents.insert(visit.node, visit.parent);
            if visit.node != target {
                continue;
            }

            let mut ids = vec![target];
            let mut current = target;
            while let Some(&Some(parent)) = parents.get(&current) {
                ids.push(parent);
                current = parent;
            }
            ids.reverse();

            let length = (ids.len() - 1) as f64;
            return ShortestPath {
                nodes: self.graph.values(&ids),
                length: Some(length),
            };
        }

        ShortestPath::unreachable()
    }

    /// Minimum total weight via Bellman-Ford relaxation.
    ///
    /// Runs at most |V| rounds over every edge. A round that changes nothing
    /// ends early; a change in round |V| means a negative cycle.
    fn relaxation(&self, source: NodeId, target: NodeId) -> GraphResult<ShortestPath<V>> {
        let rounds = self.graph.node_count();
        let directed = self.graph.is_directed();

        let mut distance: HashMap<NodeId, f64> = HashMap::from([(source, 0.0)]);
        let mut predecessor: HashMap<NodeId, NodeId> = HashMap::new();

        for round in 1..=rounds {
            let mut improved = false;
            for edge in self.graph.edge_store().all() {
                let weight = edge.cost();
                improved |= relax(&mut distance, &mut predecessor, edge.from, edge.to, weight);
                if !directed && edge.from != edge.to {
                    improved |= relax(&mut distance, &mut predecessor, edge.to, edge.from, weight);
                }
            }
            trace!("Relaxation round {}/{}: improved={}", round, rounds, improved);

            if !improved {
                break;
            }
            if round == rounds {
                return Err(self.negative_cycle(source));
            }
        }

        if distance.values().any(|d| !d.is_finite()) && self.saturated_cycle(source) {
            return Err(self.negative_cycle(source));
        }

        let Some(&length) = distance.get(&target) else {
            return Ok(ShortestPath::unreachable());
        };

        let mut ids = vec![target];
        let mut current = target;
        while current != source {
            // Without a negative cycle the predecessor chain is a tree rooted
            // at `source`, so it is at most |V| long.
            if ids.len() > rounds {
                return Err(self.negative_cycle(source));
            }
            let Some(&prev) = predecessor.get(&current) else {
                break;
            };
            ids.push(prev);
            current = prev;
        }
        ids.reverse();

        Ok(ShortestPath {
            nodes: self.graph.values(&ids),
            length: Some(length),
        })
    }

    /// Cycle check for graphs whose distances hit an infinity.
    ///
    /// `-inf + w` and `inf + w` never improve on themselves, so the main
    /// rounds can go quiet with a negative cycle still reachable. Every node
    /// reachable from `source` restarts at zero and is relaxed over finite
    /// weights only; a change in round |V| is a finite negative cycle. A
    /// `-inf` edge whose head leads back to its tail closes a cycle of
    /// weight `-inf`.
    fn saturated_cycle(&self, source: NodeId) -> bool {
        let rounds = self.graph.node_count();
        let directed = self.graph.is_directed();
        let reachable = self.reachable(source);
        let edges = self.graph.edge_store();

        let mut distance: HashMap<NodeId, f64> =
            reachable.iter().map(|&id| (id, 0.0)).collect();
        let mut predecessor = HashMap::new();

        for round in 1..=rounds {
            let mut improved = false;
            for edge in edges.all().filter(|e| e.cost().is_finite()) {
                let weight = edge.cost();
                improved |= relax(&mut distance, &mut predecessor, edge.from, edge.to, weight);
                if !directed && edge.from != edge.to {
                    improved |= relax(&mut distance, &mut predecessor, edge.to, edge.from, weight);
                }
            }
            if !improved {
                break;
            }
            if round == rounds {
                trace!("Finite negative cycle behind an infinite distance");
                return true;
            }
        }

        edges
            .all()
            .filter(|e| e.cost() == f64::NEG_INFINITY && reachable.contains(&e.from))
            .any(|e| self.reachable(e.to).contains(&e.from))
    }

    /// Ids reachable from `start` along outgoing adjacency, `start` included.
    fn reachable(&self, start: NodeId) -> HashSet<NodeId> {
        let mut seen = HashSet::new();
        let mut bfs = Bfs::new(self.graph, start);
        while let Some(visit) = bfs.next_visit() {
            seen.insert(visit.node);
        }
        seen
    }

    fn negative_cycle(&self, source: NodeId) -> GraphError {
        let value = self
            .graph
            .value_of(source)
            .map(|v| format!("{:?}", v))
            .unwrap_or_else(|| source.to_string());
        warn!("Negative-weight cycle reachable from {}", value);
        GraphError::NegativeCycle(value)
    }
}

/// `distance[to] = min(distance[to], distance[from] + weight)`.
///
/// Unreached nodes have no distance. Sums that come out NaN (`-inf + inf`)
/// never relax.
fn relax(
    distance: &mut HashMap<NodeId, f64>,
    predecessor: &mut HashMap<NodeId, NodeId>,
    from: NodeId,
    to: NodeId,
    weight: f64,
) -> bool {
    let Some(&base) = distance.get(&from) else {
        return false;
    };
    let candidate = base + weight;
    if candidate.is_nan() {
        return false;
    }
    if let Some(&current) = distance.get(&to) {
        if candidate >= current {
            return false;
        }
    }
    distance.insert(to, candidate);
    predecessor.insert(to, from);
    true
}
