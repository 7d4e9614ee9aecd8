//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic attached, making them usable in
//! any context (core engine, terminal rendering, input mapping).
//!
//! # Board
//!
//! The board is a square grid whose dimension is fixed when a game is created:
//!
//! - **Default size**: 4x4
//! - **Indexing**: row-major, `(row, col)` both zero-based
//! - **Cells**: `None` for empty, `Some(Tile)` for an occupied cell
//!
//! # Tiles
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 4 | Board dimension when none is configured |
//! | `SPAWN_VALUE` | 2 | Value of every spawned tile |
//! | `INITIAL_TILES` | 2 | Tiles placed when a game starts |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Tile};
//!
//! // Parse a direction token (case-insensitive)
//! assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("ArrowUp"), Some(Direction::Up));
//! assert_eq!(Direction::from_str("sideways"), None);
//!
//! // Actions wrap directions
//! let action = GameAction::from_str("down").unwrap();
//! assert_eq!(action.direction(), Some(Direction::Down));
//!
//! // Tiles are always powers of two
//! assert_eq!(Tile::new(8).map(|t| t.value()), Some(8));
//! assert_eq!(Tile::new(6), None);
//! ```

use serde::Serialize;

/// Board dimension used when no size is configured (4x4)
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Value of every newly spawned tile.
///
/// Only 2s are ever spawned; there is no weighted chance of a 4.
pub const SPAWN_VALUE: u64 = 2;

/// Number of tiles placed on a fresh board
pub const INITIAL_TILES: usize = 2;

/// The four move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order they are usually listed in help text.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse a direction token (case-insensitive)
    ///
    /// Accepts plain names and browser-style arrow key names.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("ARROWDOWN"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str(""), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "arrowleft" => Some(Direction::Left),
            "right" | "arrowright" => Some(Direction::Right),
            "up" | "arrowup" => Some(Direction::Up),
            "down" | "arrowdown" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Commands accepted by the game state.
///
/// These are produced by the input layer and consumed by `GameState::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Slide and merge every tile in the given direction
    Move(Direction),
    /// Start a fresh board, keeping the best score
    Restart,
}

impl GameAction {
    /// Parse an action token.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(direction) => direction.as_str(),
            GameAction::Restart => "restart",
        }
    }

    /// The direction carried by a move action.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::Move(direction) => Some(*direction),
            GameAction::Restart => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(direction: Direction) -> Self {
        GameAction::Move(direction)
    }
}

/// A numbered tile.
///
/// The value is always a power of two and at least 2. Outside code can read
/// the value but only the merge step produces a larger tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tile(u64);

impl Tile {
    /// The tile placed by every spawn.
    pub const SPAWN: Tile = Tile(SPAWN_VALUE);

    /// Build a tile from a raw value.
    ///
    /// Returns `None` unless `value` is a power of two no smaller than 2.
    pub fn new(value: u64) -> Option<Self> {
        if value >= 2 && value.is_power_of_two() {
            Some(Tile(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The tile produced by merging two tiles of this value.
    ///
    /// Saturates at the largest representable power of two.
    pub fn doubled(&self) -> Tile {
        match self.0.checked_mul(2) {
            Some(v) => Tile(v),
            None => *self,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Cell holding a tile
pub type Cell = Option<Tile>;
