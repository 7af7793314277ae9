//! Edge multimap bucketed by endpoint pair.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::types::{Edge, NodeId, PairKey};

/// Edges grouped by their order-dependent [`PairKey`].
///
/// Undirected stores keep each edge once, under the key it was added with,
/// and answer lookups for either orientation by also probing the reversed key.
#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    directed: bool,
    buckets: HashMap<PairKey, Vec<Edge>>,
    /// Bucket keys in first-insertion order, so `all()` is deterministic.
    order: Vec<PairKey>,
    len: usize,
}

impl EdgeStore {
    /// Create an empty store.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    /// Whether lookups distinguish `(a, b)` from `(b, a)`.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Insert a record. Parallel records for the same pair are kept.
    pub fn add(&mut self, from: NodeId, to: NodeId, weight: Option<f64>) {
        let edge = Edge::new(from, to, weight);
        let key = edge.key();
        match self.buckets.entry(key) {
            Entry::Occupied(mut bucket) => bucket.get_mut().push(edge),
            Entry::Vacant(slot) => {
                self.order.push(key);
                slot.insert(vec![edge]);
            }
        }
        self.len += 1;
    }

    /// Whether an edge `from -> to` exists (either orientation when undirected).
    pub fn contains(&self, from: NodeId, to: NodeId) -> bool {
        if self.bucket_has(PairKey::new(from, to), from, to) {
            return true;
        }
        !self.directed && self.bucket_has(PairKey::new(to, from), to, from)
    }

    /// Remove every record for the pair; undirected stores drop both orientations.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, from: NodeId, to: NodeId) -> bool {
        let mut removed = self.drain_bucket(PairKey::new(from, to), from, to);
        if !self.directed && from != to {
            removed += self.drain_bucket(PairKey::new(to, from), to, from);
        }
        removed > 0
    }

    /// Weights of every record joining the pair, in insertion order.
    pub fn weights(&self, from: NodeId, to: NodeId) -> Vec<Option<f64>> {
        let mut keys = vec![PairKey::new(from, to)];
        if !self.directed && from != to {
            keys.push(PairKey::new(to, from));
        }
        keys.iter()
            .filter_map(|key| self.buckets.get(key))
            .flatten()
            .map(|edge| edge.weight)
            .collect()
    }

    /// Every record exactly once, bucket by bucket.
    pub fn all(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.buckets.get(key))
            .flatten()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket_has(&self, key: PairKey, from: NodeId, to: NodeId) -> bool {
        self.buckets
            .get(&key)
            .is_some_and(|bucket| bucket.iter().any(|e| e.joins(from, to)))
    }

    fn drain_bucket(&mut self, key: PairKey, from: NodeId, to: NodeId) -> usize {
        let Some(bucket) = self.buckets.get_mut(&key) else {
            return 0;
        };
        let before = bucket.len();
        bucket.retain(|e| !e.joins(from, to));
        let removed = before - bucket.len();

        if bucket.is_empty() {
            self.buckets.remove(&key);
            self.order.retain(|k| *k != key);
        }
        self.len -= removed;
        removed
    }
}
