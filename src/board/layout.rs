//! Hex-diamond cell layout.
//!
//! The playable area for radius `R` is every axial coordinate with
//! `|q| <= R`, `|q + r| <= R` and `|r| <= 2R`: a central hexagon with a
//! triangular apex above and below. Cells are numbered row by row (top to
//! bottom, left to right) so board state can live in a flat array.

use serde::{Deserialize, Serialize};

use super::hex::Hex;

/// Largest supported radius. Keeps the flat index comfortably small.
pub const MAX_RADIUS: u8 = 16;

/// Errors raised while building a layout or an initial position.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("board radius must be at least 1")]
    ZeroRadius,

    #[error("board radius {0} exceeds the maximum of {MAX_RADIUS}")]
    RadiusTooLarge(u8),

    #[error("apex depth {depth} must be between 1 and the radius {radius}")]
    InvalidApexDepth { depth: u8, radius: u8 },

    #[error("the two sides must have distinct identifiers")]
    SameSides,
}

/// Board-size configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Radius of the central hexagon.
    pub radius: u8,
    /// Number of apex rows filled with pieces at the start (and forming the
    /// opposing side's goal region).
    pub apex_depth: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            radius: 4,
            apex_depth: 4,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.radius == 0 {
            return Err(LayoutError::ZeroRadius);
        }
        if self.radius > MAX_RADIUS {
            return Err(LayoutError::RadiusTooLarge(self.radius));
        }
        if self.apex_depth == 0 || self.apex_depth > self.radius {
            return Err(LayoutError::InvalidApexDepth {
                depth: self.apex_depth,
                radius: self.radius,
            });
        }
        Ok(())
    }

    /// Number of cells in one apex region: `depth` rows of widths 1..=depth.
    pub fn pieces_per_side(&self) -> usize {
        let d = self.apex_depth as usize;
        d * (d + 1) / 2
    }
}

/// The fixed cell universe of a board, with a precomputed linear index.
#[derive(Debug, PartialEq, Eq)]
pub struct Layout {
    config: BoardConfig,
    cells: Vec<Hex>,
    /// Flat index of the first cell of each row, rows ordered by `r` ascending.
    row_start: Vec<usize>,
}

impl Layout {
    pub fn new(config: BoardConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        let radius = config.radius as i32;

        let mut cells = Vec::new();
        let mut row_start = Vec::with_capacity((4 * radius + 1) as usize);
        for r in -2 * radius..=2 * radius {
            row_start.push(cells.len());
            let (q_min, q_max) = row_bounds(radius, r);
            for q in q_min..=q_max {
                cells.push(Hex::new(q, r));
            }
        }

        Ok(Layout {
            config,
            cells,
            row_start,
        })
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn radius(&self) -> i32 {
        self.config.radius as i32
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Hex] {
        &self.cells
    }

    /// The cell at a flat index.
    pub fn hex(&self, index: usize) -> Hex {
        self.cells[index]
    }

    /// Flat index of a coordinate, or `None` if it lies outside the board.
    #[inline]
    pub fn index(&self, hex: Hex) -> Option<usize> {
        let radius = self.radius();
        if hex.r < -2 * radius || hex.r > 2 * radius {
            return None;
        }
        let (q_min, q_max) = row_bounds(radius, hex.r);
        if hex.q < q_min || hex.q > q_max {
            return None;
        }
        let row = (hex.r + 2 * radius) as usize;
        Some(self.row_start[row] + (hex.q - q_min) as usize)
    }

    #[inline]
    pub fn contains(&self, hex: Hex) -> bool {
        self.index(hex).is_some()
    }

    /// Cells of the top apex rows (`r <= -2R + depth - 1`).
    pub fn top_apex(&self) -> Vec<Hex> {
        let last_row = -2 * self.radius() + self.config.apex_depth as i32 - 1;
        self.cells.iter().copied().filter(|h| h.r <= last_row).collect()
    }

    /// Cells of the bottom apex rows, the point reflection of [`Layout::top_apex`].
    pub fn bottom_apex(&self) -> Vec<Hex> {
        let first_row = 2 * self.radius() - self.config.apex_depth as i32 + 1;
        self.cells.iter().copied().filter(|h| h.r >= first_row).collect()
    }
}

/// Inclusive `q` range of row `r`.
fn row_bounds(radius: i32, r: i32) -> (i32, i32) {
    ((-radius).max(-r - radius), radius.min(-r + radius))
}
