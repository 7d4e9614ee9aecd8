//! Game state module - manages the complete game state
//!
//! This module ties together the board, line collapse, tile placement and scoring.
//! A move is applied in three steps:
//!
//! 1. re-orient the board so the move becomes "collapse every row leftward"
//! 2. collapse each row independently, summing merge points
//! 3. restore the original orientation
//!
//! If any row changed, exactly one new tile is spawned afterwards. A move that
//! changes nothing leaves the board, score and move counter untouched.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::line::collapse_line;
use crate::rng::TileRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, Tile, INITIAL_TILES};

/// What a single move did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// At least one row slid or merged
    pub changed: bool,
    /// Points scored by merges during this move
    pub points: u64,
    /// Position of the tile spawned after the move
    pub spawned: Option<(usize, usize)>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u64,
    /// Highest score seen by this instance, kept across restarts
    best: u64,
    rng: TileRng,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Board-changing moves in the current episode.
    moves: u32,
}

impl GameState {
    /// Create a new game with two starting tiles.
    ///
    /// Fails if `size` is 0.
    pub fn new(size: usize, seed: u64) -> Result<Self, GameError> {
        let mut state = Self::from_board(Board::new(size), seed)?;
        state.populate();
        info!(size, seed, "new game");
        Ok(state)
    }

    pub fn with_config(config: &GameConfig) -> Result<Self, GameError> {
        Self::new(config.size, config.resolve_seed())
    }

    /// Resume from an existing board without spawning anything.
    pub fn from_board(board: Board, seed: u64) -> Result<Self, GameError> {
        if board.size() == 0 {
            return Err(GameError::InvalidSize(0));
        }
        Ok(Self {
            board,
            score: 0,
            best: 0,
            rng: TileRng::new(seed),
            episode_id: 0,
            moves: 0,
        })
    }

    fn populate(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Place a 2 on a uniformly chosen empty cell.
    ///
    /// Does nothing and returns `None` when the board is full.
    pub fn spawn_tile(&mut self) -> Option<(usize, usize)> {
        let empty = self.board.empty_cells();
        let Some(i) = self.rng.pick(empty.len()) else {
            debug!("board full, no tile spawned");
            return None;
        };
        let (row, col) = empty[i];
        self.board.set(row, col, Some(Tile::SPAWN));
        trace!(row, col, "spawned tile");
        Some((row, col))
    }

    /// Slide and merge every tile toward `direction`.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let mut canonical = self.board.orient_for(direction);
        let mut changed = false;
        let mut points = 0u64;

        for row in canonical.rows_mut() {
            let collapse = collapse_line(row);
            if collapse.changed(row) {
                changed = true;
                row.copy_from_slice(&collapse.cells);
            }
            points = points.saturating_add(collapse.points);
        }

        self.board = canonical.unorient_for(direction);
        self.score = self.score.saturating_add(points);

        let spawned = if changed {
            self.moves = self.moves.wrapping_add(1);
            self.spawn_tile()
        } else {
            None
        };

        if self.score > self.best {
            self.best = self.score;
        }

        debug!(
            direction = direction.as_str(),
            changed,
            points,
            score = self.score,
            "applied move"
        );

        MoveOutcome {
            changed,
            points,
            spawned,
        }
    }

    /// Apply a game action. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).changed,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Apply a textual command such as `"left"` or `"ArrowUp"`.
    ///
    /// Unknown tokens are ignored and return false.
    pub fn apply_command(&mut self, token: &str) -> bool {
        match GameAction::from_str(token) {
            Some(action) => self.apply_action(action),
            None => {
                trace!(token, "ignored unknown command");
                false
            }
        }
    }

    /// Start a fresh board of the same size. `best` survives.
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.populate();
        info!(episode_id = self.episode_id, best = self.best, "restarted");
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.board.size();
        self.board.write_values(&mut out.cells);
        out.score = self.score;
        out.best = self.best;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
