//! Line collapse - the single merge primitive behind every move.
//!
//! A move in any direction is a leftward collapse of each row of a re-oriented
//! board (see [`crate::board::Board::orient_for`]). Collapsing a line:
//!
//! 1. drops the empty cells, keeping tile order
//! 2. walks the remaining tiles once; two equal neighbours become one tile of
//!    twice the value, and the merged tile takes no further part in this pass
//! 3. pads with empty cells back to the original length
//!
//! The function is pure: the points scored are returned, not applied.

use crate::types::Cell;

/// Result of collapsing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapse {
    /// The collapsed line, same length as the input
    pub cells: Vec<Cell>,
    /// Sum of the values of all tiles produced by merges
    pub points: u64,
}

impl Collapse {
    /// Whether the collapse moved or merged anything.
    pub fn changed(&self, before: &[Cell]) -> bool {
        self.cells.as_slice() != before
    }
}

/// Collapse `line` toward index 0.
///
/// # Examples
///
/// ```
/// use tui_2048_core::collapse_line;
/// use tui_2048_core::types::Tile;
///
/// let two = Tile::new(2);
/// let out = collapse_line(&[two, two, two, two]);
/// assert_eq!(out.cells, vec![Tile::new(4), Tile::new(4), None, None]);
/// assert_eq!(out.points, 8);
/// ```
pub fn collapse_line(line: &[Cell]) -> Collapse {
    let mut cells = Vec::with_capacity(line.len());
    let mut points = 0u64;
    let mut tiles = line.iter().flatten().copied().peekable();

    while let Some(tile) = tiles.next() {
        match tiles.peek() {
            Some(next) if next.value() == tile.value() => {
                // Consume the right-hand partner; the merged tile is pushed
                // and never compared again.
                tiles.next();
                let merged = tile.doubled();
                points = points.saturating_add(merged.value());
                cells.push(Some(merged));
            }
            _ => cells.push(Some(tile)),
        }
    }

    cells.resize(line.len(), None);
    Collapse { cells, points }
}
