//! Degree statistics and exports for downstream tooling

use super::{Graph, Position};
use ndarray::Array2;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Serialize, Deserialize};

/// Summary of the degree distribution
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DegreeSummary {
    /// Smallest degree
    pub min: usize,
    /// Largest degree
    pub max: usize,
    /// Mean degree
    pub mean: f64,
    /// Vertices with no incident edge
    pub isolated: usize,
}

impl Graph {
    /// Degree of every vertex, in index order
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.num_vertices()];
        for edge in self.edges() {
            let (a, b) = edge.endpoints();
            if b < degrees.len() {
                degrees[a] += 1;
                degrees[b] += 1;
            }
        }
        degrees
    }

    /// Min, max and mean degree; `None` for an empty graph
    pub fn degree_summary(&self) -> Option<DegreeSummary> {
        let degrees = self.degrees();
        let min = *degrees.iter().min()?;
        let max = *degrees.iter().max()?;
        let mean = degrees.iter().sum::<usize>() as f64 / degrees.len() as f64;
        let isolated = degrees.iter().filter(|&&d| d == 0).count();

        Some(DegreeSummary {
            min,
            max,
            mean,
            isolated,
        })
    }

    /// Neighbour lists, each ascending
    pub fn adjacency_list(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.num_vertices()];
        for edge in self.edges() {
            let (a, b) = edge.endpoints();
            if b < adj.len() {
                adj[a].push(b);
                adj[b].push(a);
            }
        }
        for neighbours in &mut adj {
            neighbours.sort_unstable();
        }
        adj
    }

    /// Dense symmetric 0/1 adjacency matrix
    pub fn adjacency_matrix(&self) -> Array2<u8> {
        let n = self.num_vertices();
        let mut adj = Array2::zeros((n, n));

        for edge in self.edges() {
            let (a, b) = edge.endpoints();
            if b < n {
                adj[[a, b]] = 1;
                adj[[b, a]] = 1;
            }
        }

        adj
    }

    /// Convert to a petgraph undirected graph with positions as node weights
    pub fn to_petgraph(&self) -> UnGraph<Position, ()> {
        let mut out = UnGraph::with_capacity(self.num_vertices(), self.num_edges());
        for &p in self.positions() {
            out.add_node(p);
        }
        for edge in self.edges() {
            let (a, b) = edge.endpoints();
            if b < self.num_vertices() {
                out.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::EdgeSet;

    fn path_graph() -> Graph {
        let positions = (0..4).map(|i| Position::new(i as f64, 0.0)).collect();
        let edges: EdgeSet = vec![(0, 1), (1, 2)].into_iter().collect();
        Graph::from_parts(positions, edges)
    }

    #[test]
    fn test_degrees() {
        let graph = path_graph();
        assert_eq!(graph.degrees(), vec![1, 2, 1, 0]);

        let summary = graph.degree_summary().unwrap();
        assert_eq!(summary.min, 0);
        assert_eq!(summary.max, 2);
        assert_eq!(summary.mean, 1.0);
        assert_eq!(summary.isolated, 1);
    }

    #[test]
    fn test_empty_summary() {
        assert!(Graph::new().degree_summary().is_none());
    }

    #[test]
    fn test_adjacency() {
        let graph = path_graph();
        let adj = graph.adjacency_matrix();
        assert_eq!(adj[[0, 1]], 1);
        assert_eq!(adj[[1, 0]], 1);
        assert_eq!(adj[[0, 2]], 0);
        assert_eq!(graph.adjacency_list()[1], vec![0, 2]);
    }

    #[test]
    fn test_petgraph_export() {
        let graph = path_graph();
        let pg = graph.to_petgraph();
        assert_eq!(pg.node_count(), 4);
        assert_eq!(pg.edge_count(), 2);
        assert!(pg.find_edge(NodeIndex::new(2), NodeIndex::new(1)).is_some());
        assert_eq!(pg[NodeIndex::new(3)], Position::new(3.0, 0.0));
    }
}
