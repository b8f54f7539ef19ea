//! Integer-lattice mesh construction

mod edge;
mod builder;
mod motif;
mod grower;

use serde::{Serialize, Deserialize};

pub use edge::{Edge, EdgeSet};
pub use builder::{MeshBuilder, DedupMode};
pub use motif::{build_motif, motif_height, Motif};
pub use grower::{grow, spacing_for_order, GrownMesh};

/// Lattice units per normalized unit
pub const LATTICE_SCALE: i64 = 1000;

/// Points are stored in half steps so motif centers stay integral
const HALF_STEPS: i64 = 2;

/// A point on the construction lattice
///
/// Coordinates are kept as integers so that two motifs sharing a boundary
/// point compute it identically and deduplicate exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LatticePoint {
    x: i64,
    y: i64,
}

impl LatticePoint {
    /// Point at whole lattice units
    pub fn new(x: i64, y: i64) -> Self {
        LatticePoint {
            x: x * HALF_STEPS,
            y: y * HALF_STEPS,
        }
    }

    /// Shift by whole lattice units
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        LatticePoint {
            x: self.x + dx * HALF_STEPS,
            y: self.y + dy * HALF_STEPS,
        }
    }

    /// Shift by half lattice units
    pub fn offset_half(self, dx: i64, dy: i64) -> Self {
        LatticePoint {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Coordinates in half steps
    pub fn half_steps(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Coordinates divided by [`LATTICE_SCALE`]
    pub fn normalized(&self) -> (f64, f64) {
        let scale = (LATTICE_SCALE * HALF_STEPS) as f64;
        (self.x as f64 / scale, self.y as f64 / scale)
    }
}

/// Round half to even, the rounding used for every lattice offset
pub(crate) fn round_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_step_offsets() {
        let p = LatticePoint::new(-1000, 0);
        assert_eq!(p.half_steps(), (-2000, 0));
        assert_eq!(p.offset(3, -4).half_steps(), (-1994, -8));
        assert_eq!(p.offset_half(1, 0).half_steps(), (-1999, 0));
    }

    #[test]
    fn test_normalized() {
        assert_eq!(LatticePoint::new(-1000, 0).normalized(), (-1.0, 0.0));
        assert_eq!(LatticePoint::new(350, 701).normalized(), (0.35, 0.701));
        assert_eq!(LatticePoint::new(0, 0).offset_half(1, 0).normalized(), (0.0005, 0.0));
    }

    #[test]
    fn test_round_even() {
        assert_eq!(round_even(2.5), 2);
        assert_eq!(round_even(3.5), 4);
        assert_eq!(round_even(-2.5), -2);
        assert_eq!(round_even(701.49), 701);
    }
}
