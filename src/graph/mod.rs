//! Finished graphs in normalized coordinates

mod boundary;
mod stats;

use crate::mesh::EdgeSet;
use serde::{Serialize, Deserialize};

pub use boundary::{find_extremes, stitch, Extremes, EAST_POLE, NORTH_POLE, SOUTH_POLE};
pub use stats::DegreeSummary;

/// A vertex position in normalized coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate, east positive
    pub x: f64,
    /// Vertical coordinate, north positive
    pub y: f64,
}

impl Position {
    /// Create a position
    pub const fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Position { x, y }
    }
}

/// Simple undirected graph with positioned vertices
///
/// Vertex indices are insertion order and never change.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    positions: Vec<Position>,
    edges: EdgeSet,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from positions and an edge set
    pub fn from_parts(positions: Vec<Position>, edges: EdgeSet) -> Self {
        Graph { positions, edges }
    }

    /// Append a vertex and return its index
    pub fn add_vertex(&mut self, position: Position) -> usize {
        self.positions.push(position);
        self.positions.len() - 1
    }

    /// Add the canonical edge `(a, b)`; `false` if it was a duplicate or self-loop
    pub fn connect(&mut self, a: usize, b: usize) -> bool {
        self.edges.insert(a, b)
    }

    /// Number of vertices
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Number of edges
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Position of a vertex
    pub fn position(&self, vertex: usize) -> Option<Position> {
        self.positions.get(vertex).copied()
    }

    /// All positions in index order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// All edges in ascending canonical order
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Whether `a` and `b` are adjacent
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edges.contains(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_building() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(Position::new(0.0, 0.0));
        let b = graph.add_vertex(Position::new(1.0, 0.0));

        assert_eq!((a, b), (0, 1));
        assert!(graph.connect(b, a));
        assert!(!graph.connect(a, b));
        assert!(graph.has_edge(0, 1));
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.position(1), Some(Position::new(1.0, 0.0)));
        assert_eq!(graph.position(2), None);
    }
}
