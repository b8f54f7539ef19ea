//! Level-by-level growth of the motif tiling

use super::{build_motif, round_even, DedupMode, LatticePoint, MeshBuilder, Motif, LATTICE_SCALE};
use crate::{GraphGenError, Result};
use std::collections::BTreeSet;
use tracing::debug;

/// Lattice mesh after all subdivision levels, before stitching
#[derive(Clone, Debug)]
pub struct GrownMesh {
    /// Vertices and edges on the lattice
    pub mesh: MeshBuilder,
    /// The very first motif, whose ring anchors the poles
    pub anchors: Motif,
}

/// Motif spacing for a given order.
///
/// The same value is used at every level of a build; it depends only on the
/// total number of levels.
pub fn spacing_for_order(order: usize) -> i64 {
    let span = (2 * LATTICE_SCALE) as f64;
    round_even(span / (0.25 + 3.0 * order as f64 / 4.0) * 0.9)
}

/// Grow a mesh over `order` subdivision levels from the seed `(-L, 0)`.
///
/// Each level expands every frontier point into a motif and collects the
/// motifs' outward points as the next frontier. Frontier points are visited
/// in ascending coordinate order, so output is fully deterministic.
pub fn grow(order: usize, dedup: DedupMode) -> Result<GrownMesh> {
    if order == 0 {
        return Err(GraphGenError::InvalidArgument(
            "order must be at least 1".to_string()
        ));
    }

    let spacing = spacing_for_order(order);
    let mut mesh = MeshBuilder::new(dedup);
    let mut frontier = BTreeSet::from([LatticePoint::new(-LATTICE_SCALE, 0)]);
    let mut anchors = None;

    for level in 1..=order {
        let mut next = BTreeSet::new();
        for &seed in &frontier {
            let motif = build_motif(seed, spacing, &mut mesh);
            anchors.get_or_insert(motif);
            next.insert(motif.outward.0);
            next.insert(motif.outward.1);
        }
        debug!(
            level,
            motifs = frontier.len(),
            vertices = mesh.num_vertices(),
            edges = mesh.num_edges(),
            "grew level"
        );
        frontier = next;
    }

    let anchors = anchors.ok_or_else(|| {
        GraphGenError::InvalidArgument("growth produced no motif".to_string())
    })?;

    Ok(GrownMesh {
        mesh,
        anchors,
    })
}
