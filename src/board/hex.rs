//! Axial hex coordinates.
//!
//! A cell is addressed by `(q, r)`; the implicit third axis is `s = -q - r`.
//! Coordinates are plain values: moves change occupancy, never coordinates.

use serde::{Deserialize, Serialize};

/// Unit steps along the six hex axes, in the fixed order used for move
/// generation: up, down, left, right, up-right, down-left.
pub const AXES: [(i32, i32); 6] = [(0, -1), (0, 1), (-1, 0), (1, 0), (1, -1), (-1, 1)];

/// An axial hex coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Hex { q, r }
    }

    /// The cube coordinate `s = -q - r`.
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Returns the cell `distance` steps away along axis `axis` (index into [`AXES`]).
    pub const fn along(self, axis: usize, distance: i32) -> Hex {
        let (dq, dr) = AXES[axis];
        Hex {
            q: self.q + dq * distance,
            r: self.r + dr * distance,
        }
    }

    /// Hex (cube) distance: `(|Δq| + |Δr| + |Δs|) / 2`.
    pub fn distance(self, other: Hex) -> u32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        let ds = self.s() - other.s();
        ((dq.abs() + dr.abs() + ds.abs()) / 2) as u32
    }

    /// Point reflection through the board centre.
    pub const fn reflected(self) -> Hex {
        Hex {
            q: -self.q,
            r: -self.r,
        }
    }

    /// Projects the cell centre to pixel space (pointy-top layout, origin at
    /// the board centre). Display only.
    pub fn to_pixel(self, cell_radius: f64) -> (f64, f64) {
        let q = self.q as f64;
        let r = self.r as f64;
        let x = cell_radius * 3f64.sqrt() * (q + r / 2.0);
        let y = cell_radius * 1.5 * r;
        (x, y)
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}
