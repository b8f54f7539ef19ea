//! Boundary stitching: pole and east anchors

use super::{Graph, Position};
use crate::mesh::GrownMesh;
use tracing::debug;

/// North anchor, linked to the first motif's upper-left corner
pub const NORTH_POLE: Position = Position::new(0.0, 0.8);
/// South anchor, linked to the first motif's lower-left corner
pub const SOUTH_POLE: Position = Position::new(0.0, -0.8);
/// East anchor, linked to the easternmost vertices
pub const EAST_POLE: Position = Position::new(1.0, 0.0);

/// Extremal vertex indices under the tie-broken orderings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extremes {
    /// Max y, then min x
    pub highest: usize,
    /// Min y, then min x
    pub lowest: usize,
    /// Max x, then max y
    pub east_high: usize,
    /// Max x, then min y
    pub east_low: usize,
}

/// Find the four extremal vertices in one pass.
///
/// Every running winner starts at index 0 and is replaced only by a strictly
/// better vertex, so the earliest index wins exact ties.
pub fn find_extremes(positions: &[Position]) -> Option<Extremes> {
    let first = positions.first()?;
    let mut best = [*first; 4];
    let mut ext = Extremes {
        highest: 0,
        lowest: 0,
        east_high: 0,
        east_low: 0,
    };

    for (i, p) in positions.iter().enumerate().skip(1) {
        let [high, low, east_high, east_low] = &mut best;
        if p.y > high.y || (p.y == high.y && p.x < high.x) {
            *high = *p;
            ext.highest = i;
        }
        if p.y < low.y || (p.y == low.y && p.x < low.x) {
            *low = *p;
            ext.lowest = i;
        }
        if p.x > east_high.x || (p.x == east_high.x && p.y > east_high.y) {
            *east_high = *p;
            ext.east_high = i;
        }
        if p.x > east_low.x || (p.x == east_low.x && p.y < east_low.y) {
            *east_low = *p;
            ext.east_low = i;
        }
    }

    Some(ext)
}

/// Rescale a grown mesh and close its boundary with three anchors.
///
/// The poles are appended before the extremal scan, so a pole can itself be
/// the highest or lowest vertex; the resulting self-loop is dropped, as is
/// any link that duplicates an existing edge.
pub fn stitch(grown: GrownMesh) -> Graph {
    let ring = grown.anchors.ring;
    let (lattice, edges) = grown.mesh.into_parts();
    let positions = lattice.iter().map(|p| Position::from(p.normalized())).collect();
    let mut graph = Graph::from_parts(positions, edges);

    let north = graph.add_vertex(NORTH_POLE);
    let south = graph.add_vertex(SOUTH_POLE);
    link(&mut graph, "north anchor", ring[1], north);
    link(&mut graph, "south anchor", ring[5], south);

    if let Some(ext) = find_extremes(graph.positions()) {
        link(&mut graph, "highest", ext.highest, north);
        link(&mut graph, "lowest", ext.lowest, south);

        let east = graph.add_vertex(EAST_POLE);
        link(&mut graph, "east high", ext.east_high, east);
        link(&mut graph, "east low", ext.east_low, east);
    }

    graph
}

fn link(graph: &mut Graph, role: &str, from: usize, to: usize) {
    if !graph.connect(from, to) {
        debug!(role, from, to, "stitch link absorbed");
    }
}
