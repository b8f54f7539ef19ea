//! One hexagon-plus-center motif

use super::{round_even, LatticePoint, MeshBuilder};
use std::f64::consts::PI;

/// Vertices produced by one motif and the seeds it hands to the next level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motif {
    /// Ring vertex indices in construction order, starting at the seed
    pub ring: [usize; 6],
    /// Vertex the spokes attach to
    pub center: usize,
    /// Second and fifth ring points (upper-right and lower-right)
    pub outward: (LatticePoint, LatticePoint),
}

/// Vertical ring offset for a spacing, `round(0.9 * d / 2 * sin 60°)`
pub fn motif_height(spacing: i64) -> i64 {
    round_even(0.9 * spacing as f64 / 2.0 * (PI / 3.0).sin())
}

/// Build one motif whose leftmost corner is `seed`.
///
/// Ring points reuse any vertex already registered at the same lattice
/// coordinate. Ring and spoke edges are merged into the build-wide edge set.
pub fn build_motif(seed: LatticePoint, spacing: i64, mesh: &mut MeshBuilder) -> Motif {
    debug_assert!(spacing > 0, "spacing must be positive");

    let height = motif_height(spacing);
    let quarter = round_even(spacing as f64 / 4.0);
    let three_quarters = round_even((3 * spacing) as f64 / 4.0);

    let points = [
        seed,
        seed.offset(quarter, height),
        seed.offset(three_quarters, height),
        seed.offset(spacing, 0),
        seed.offset(three_quarters, -height),
        seed.offset(quarter, -height),
    ];
    // d/2 is exact in half steps
    let center_point = seed.offset_half(spacing, 0);

    let mut ring = [0; 6];
    for (slot, point) in ring.iter_mut().zip(points) {
        *slot = mesh.intern(point);
    }
    let center = mesh.insert_center(center_point);

    for i in 0..ring.len() {
        mesh.connect(ring[i], ring[(i + 1) % 6]);
        mesh.connect(ring[i], center);
    }

    Motif {
        ring,
        center,
        outward: (points[2], points[4]),
    }
}
