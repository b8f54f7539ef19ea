//! The solver's plain-text graph format
//!
//! ```text
//! Cops: <int>
//! Robbers: <int>
//! Max turn: <int>
//! Vertices: <N>
//! <x> <y>        (N lines, fixed precision)
//! Edges: <M>
//! <i> <j>        (M lines, 0-based indices)
//! ```

mod writer;
mod reader;

use crate::graph::Graph;
use serde::{Serialize, Deserialize};

pub use writer::write_graph;
pub use reader::parse_graph;

/// Decimal digits used for procedurally generated graphs
pub const GENERATED_PRECISION: usize = 3;
/// Decimal digits used for digitized maps
pub const DIGITIZED_PRECISION: usize = 5;

/// Game parameters written above the graph
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHeader {
    /// Number of cops
    pub cops: usize,
    /// Number of robbers
    pub robbers: usize,
    /// Turn budget
    pub max_turn: usize,
}

impl GameHeader {
    /// Header with the default turn budget for a graph of `num_vertices`
    pub fn new(cops: usize, robbers: usize, num_vertices: usize) -> Self {
        GameHeader {
            cops,
            robbers,
            max_turn: default_max_turn(robbers, num_vertices),
        }
    }

    /// Replace the turn budget when an override is given
    pub fn with_max_turn(mut self, max_turn: Option<usize>) -> Self {
        if let Some(turns) = max_turn {
            self.max_turn = turns;
        }
        self
    }
}

/// `2 * robbers * floor(sqrt(num_vertices))`, saturating at `usize::MAX`
pub fn default_max_turn(robbers: usize, num_vertices: usize) -> usize {
    robbers.saturating_mul(2).saturating_mul(num_vertices.isqrt())
}

/// A graph together with its header and coordinate precision
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    /// Game parameters
    pub header: GameHeader,
    /// Vertices and edges
    pub graph: Graph,
    /// Digits after the decimal point for coordinates
    pub precision: usize,
}

impl GraphFile {
    /// Bundle a header, graph and precision
    pub fn new(header: GameHeader, graph: Graph, precision: usize) -> Self {
        GraphFile {
            header,
            graph,
            precision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_turn_floors_root() {
        assert_eq!(default_max_turn(1, 15), 6);
        assert_eq!(default_max_turn(1, 16), 8);
        assert_eq!(default_max_turn(1, 99), 18);
        assert_eq!(default_max_turn(1, 1_000_001), 2000);
    }

    #[test]
    fn test_max_turn_extremes_do_not_overflow() {
        let root = usize::MAX.isqrt();
        assert_eq!(default_max_turn(1, usize::MAX), 2 * root);
        assert_eq!(default_max_turn(usize::MAX, 16), usize::MAX);
    }

    #[test]
    fn test_default_max_turn() {
        assert_eq!(default_max_turn(3, 10), 18);
        assert_eq!(default_max_turn(3, 100), 60);
        assert_eq!(default_max_turn(1, 0), 0);
    }

    #[test]
    fn test_max_turn_override() {
        let header = GameHeader::new(3, 3, 10).with_max_turn(Some(100));
        assert_eq!(header.max_turn, 100);

        let header = GameHeader::new(3, 3, 10).with_max_turn(None);
        assert_eq!(header.max_turn, 18);
    }
}
