//! Read-only view of a game for presentation layers.
//!
//! Renderers never touch `GameState` directly; the host takes a snapshot after
//! each move and hands it over.

use serde::Serialize;

/// One cell as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub value: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major tile values, `None` for empty cells
    pub cells: Vec<Option<u64>>,
    pub score: u64,
    pub best: u64,
    pub moves: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = 0;
        self.cells.clear();
        self.score = 0;
        self.best = 0;
        self.moves = 0;
        self.episode_id = 0;
    }

    /// Tile value at `(row, col)`; `None` when empty or out of bounds.
    pub fn value_at(&self, row: usize, col: usize) -> Option<u64> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied().flatten()
    }

    /// Every cell in row-major order.
    pub fn cells_iter(&self) -> impl Iterator<Item = CellView> + '_ {
        let size = self.size.max(1);
        self.cells.iter().enumerate().map(move |(i, &value)| CellView {
            row: i / size,
            col: i % size,
            value,
        })
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|v| v.is_some()).count()
    }

    pub fn max_value(&self) -> Option<u64> {
        self.cells.iter().flatten().copied().max()
    }
}
