//! Board module - manages the game grid
//!
//! The board is a square `size x size` grid where each cell is empty or holds a tile.
//! Cells are stored in a flat row-major vector; `(row, col)` are both zero-based.
//!
//! Moves in every direction are reduced to "collapse each row leftward" by
//! re-orienting the board first. The orientation primitives live here:
//!
//! - [`Board::reverse_rows`]: mirror every row (used for `Right`)
//! - [`Board::rotate_right`]: column `j` read top-to-bottom becomes row `j`, then the rows are reversed
//! - [`Board::rotate_left`]: column `j` read bottom-to-top becomes row `j`
//!
//! `rotate_left` and `rotate_right` undo each other for every size.

use std::fmt;

use crate::types::{Cell, Direction, Tile};

/// The game board - a square grid using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat vector of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of `size x size` cells
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from rows of cells.
    ///
    /// Returns `None` unless the rows form a square.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return None;
            }
            cells.extend_from_slice(row);
        }
        Some(Self { size, cells })
    }

    /// Build a board from raw values, where `0` marks an empty cell.
    ///
    /// Returns `None` if the rows are not square or a value is not a valid tile.
    pub fn from_values<R: AsRef<[u64]>>(rows: &[R]) -> Option<Self> {
        let mut cell_rows = Vec::with_capacity(rows.len());
        for row in rows {
            let mut cells = Vec::with_capacity(row.as_ref().len());
            for &v in row.as_ref() {
                if v == 0 {
                    cells.push(None);
                } else {
                    cells.push(Some(Tile::new(v)?));
                }
            }
            cell_rows.push(cells);
        }
        Self::from_rows(&cell_rows)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at `(row, col)`.
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`.
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Borrow one row as a slice
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        Some(&self.cells[start..start + self.size])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.size.max(1))
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Cell]> {
        self.cells.chunks_exact_mut(self.size.max(1))
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty positions in row-major scan order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Mirror every row left-to-right
    pub fn reverse_rows(&self) -> Board {
        let mut out = self.clone();
        for row in out.rows_mut() {
            row.reverse();
        }
        out
    }

    /// Column `j` read bottom-to-top becomes row `j`.
    pub fn rotate_left(&self) -> Board {
        let n = self.size;
        let mut out = Board::new(n);
        for j in 0..n {
            for c in 0..n {
                out.cells[j * n + c] = self.cells[(n - 1 - c) * n + j];
            }
        }
        out
    }

    /// Column `j` read top-to-bottom becomes row `j`, then the row order is reversed.
    pub fn rotate_right(&self) -> Board {
        let n = self.size;
        let mut out = Board::new(n);
        for r in 0..n {
            for c in 0..n {
                out.cells[r * n + c] = self.cells[c * n + (n - 1 - r)];
            }
        }
        out
    }

    /// Re-orient so that a move in `direction` becomes a leftward collapse.
    pub fn orient_for(&self, direction: Direction) -> Board {
        match direction {
            Direction::Left => self.clone(),
            Direction::Right => self.reverse_rows(),
            Direction::Up => self.rotate_right(),
            Direction::Down => self.rotate_left(),
        }
    }

    /// Inverse of [`Board::orient_for`].
    pub fn unorient_for(&self, direction: Direction) -> Board {
        match direction {
            Direction::Left => self.clone(),
            Direction::Right => self.reverse_rows(),
            Direction::Up => self.rotate_left(),
            Direction::Down => self.rotate_right(),
        }
    }

    /// Write tile values into `out` (row-major, `None` for empty).
    ///
    /// Reuses the vector's allocation.
    pub fn write_values(&self, out: &mut Vec<Option<u64>>) {
        out.clear();
        out.extend(self.cells.iter().map(|cell| cell.map(|t| t.value())));
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                match cell {
                    Some(tile) => write!(f, "{:>6}", tile.value())?,
                    None => write!(f, "{:>6}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
