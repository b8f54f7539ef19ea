//! Canonical undirected edges

use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

/// An unordered pair of distinct vertex indices, stored as (min, max)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge(usize, usize);

impl Edge {
    /// Canonicalize a pair; `None` for a self-loop
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Edge(a, b)),
            std::cmp::Ordering::Greater => Some(Edge(b, a)),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Smaller endpoint
    pub fn lo(&self) -> usize {
        self.0
    }

    /// Larger endpoint
    pub fn hi(&self) -> usize {
        self.1
    }

    /// Both endpoints, smaller first
    pub fn endpoints(&self) -> (usize, usize) {
        (self.0, self.1)
    }
}

/// Deduplicated edge collection with deterministic ascending iteration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeSet {
    edges: BTreeSet<Edge>,
}

impl EdgeSet {
    /// Create an empty set
    pub fn new() -> Self {
        EdgeSet {
            edges: BTreeSet::new(),
        }
    }

    /// Insert the canonical form of `(a, b)`.
    ///
    /// Returns `false` when the pair is a self-loop or already present.
    pub fn insert(&mut self, a: usize, b: usize) -> bool {
        match Edge::new(a, b) {
            Some(edge) => self.edges.insert(edge),
            None => false,
        }
    }

    /// Whether the unordered pair is present
    pub fn contains(&self, a: usize, b: usize) -> bool {
        Edge::new(a, b).is_some_and(|edge| self.edges.contains(&edge))
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the set holds no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in ascending canonical order
    pub fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }
}

impl FromIterator<(usize, usize)> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut set = EdgeSet::new();
        for (a, b) in iter {
            set.insert(a, b);
        }
        set
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = std::collections::btree_set::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_edge() {
        assert_eq!(Edge::new(5, 2), Edge::new(2, 5));
        assert_eq!(Edge::new(5, 2).map(|e| e.endpoints()), Some((2, 5)));
        assert!(Edge::new(3, 3).is_none());
    }

    #[test]
    fn test_edge_set_dedup() {
        let mut set = EdgeSet::new();
        assert!(set.insert(0, 1));
        assert!(!set.insert(1, 0));
        assert!(!set.insert(4, 4));
        assert!(set.insert(2, 1));

        assert_eq!(set.len(), 2);
        assert!(set.contains(1, 0));
        assert!(!set.contains(0, 2));

        let order: Vec<_> = set.iter().map(|e| e.endpoints()).collect();
        assert_eq!(order, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_from_pairs() {
        let set: EdgeSet = vec![(3, 1), (1, 3), (2, 2), (0, 3)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
