//! The graph under construction: vertex registry plus edge set

use super::{EdgeSet, LatticePoint};
use serde::{Serialize, Deserialize};
use std::collections::HashMap;

/// How motif center points are registered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupMode {
    /// Ring points are deduplicated, centers are always appended.
    ///
    /// Yields the same vertex positions and the same coordinate-level
    /// edges as previously generated graphs. Vertex numbering past the
    /// first motif follows the ascending frontier order, and stitch links
    /// that would be self-loops or duplicates are not written.
    #[default]
    Legacy,
    /// Every point goes through the same coordinate lookup
    Unified,
}

/// Append-only vertex registry and deduplicated edge set on the lattice
#[derive(Clone, Debug, Default)]
pub struct MeshBuilder {
    /// Vertex positions in insertion order
    positions: Vec<LatticePoint>,
    /// First vertex registered at each coordinate
    lookup: HashMap<LatticePoint, usize>,
    edges: EdgeSet,
    dedup: DedupMode,
}

impl MeshBuilder {
    /// Create an empty builder
    pub fn new(dedup: DedupMode) -> Self {
        MeshBuilder {
            dedup,
            ..Default::default()
        }
    }

    /// Index of the first vertex at `point`, appending it if none exists
    pub fn intern(&mut self, point: LatticePoint) -> usize {
        match self.lookup.get(&point) {
            Some(&index) => index,
            None => self.push(point),
        }
    }

    /// Append a vertex without a dedup check.
    ///
    /// The lookup keeps pointing at the earliest vertex for the coordinate.
    pub fn push(&mut self, point: LatticePoint) -> usize {
        let index = self.positions.len();
        self.positions.push(point);
        self.lookup.entry(point).or_insert(index);
        index
    }

    /// Register a motif center according to the dedup mode.
    ///
    /// Returns the index spokes should attach to, which in legacy mode is
    /// the earliest vertex at that coordinate even though a new one is
    /// always appended.
    pub fn insert_center(&mut self, point: LatticePoint) -> usize {
        match self.dedup {
            DedupMode::Legacy => {
                self.push(point);
                self.lookup[&point]
            }
            DedupMode::Unified => self.intern(point),
        }
    }

    /// Add the canonical edge `(a, b)`; `false` if it was a duplicate or self-loop
    pub fn connect(&mut self, a: usize, b: usize) -> bool {
        self.edges.insert(a, b)
    }

    /// Vertex positions in insertion order
    pub fn positions(&self) -> &[LatticePoint] {
        &self.positions
    }

    /// Edges added so far
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Number of vertices
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Number of edges
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Consume the builder into positions and edges
    pub fn into_parts(self) -> (Vec<LatticePoint>, EdgeSet) {
        (self.positions, self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_reuses_index() {
        let mut mesh = MeshBuilder::new(DedupMode::Legacy);
        let a = mesh.intern(LatticePoint::new(1, 2));
        let b = mesh.intern(LatticePoint::new(3, 4));
        let c = mesh.intern(LatticePoint::new(1, 2));

        assert_eq!((a, b, c), (0, 1, 0));
        assert_eq!(mesh.num_vertices(), 2);
    }

    #[test]
    fn test_legacy_center_always_appends() {
        let mut mesh = MeshBuilder::new(DedupMode::Legacy);
        let p = LatticePoint::new(0, 0);
        let first = mesh.insert_center(p);
        let second = mesh.insert_center(p);

        assert_eq!(mesh.num_vertices(), 2);
        // Later duplicates resolve to the earliest vertex at the coordinate
        assert_eq!(first, 0);
        assert_eq!(second, 0);
    }

    #[test]
    fn test_unified_center_dedups() {
        let mut mesh = MeshBuilder::new(DedupMode::Unified);
        let p = LatticePoint::new(0, 0);
        assert_eq!(mesh.insert_center(p), 0);
        assert_eq!(mesh.insert_center(p), 0);
        assert_eq!(mesh.num_vertices(), 1);
    }

    #[test]
    fn test_connect() {
        let mut mesh = MeshBuilder::new(DedupMode::Legacy);
        let a = mesh.intern(LatticePoint::new(0, 0));
        let b = mesh.intern(LatticePoint::new(1, 0));

        assert!(mesh.connect(a, b));
        assert!(!mesh.connect(b, a));
        assert!(!mesh.connect(a, a));
        assert_eq!(mesh.num_edges(), 1);
    }
}
