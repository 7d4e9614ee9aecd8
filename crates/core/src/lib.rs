//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for the 2048
//! sliding-tile puzzle. It has **no dependencies** on terminal I/O or input
//! handling, which makes it:
//!
//! - **Deterministic**: Same seed and same moves produce the same game
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Any presentation layer can drive it through snapshots
//!
//! # Module Structure
//!
//! - [`board`]: square grid with the reflection/rotation primitives
//! - [`line`]: the line collapse that every move reduces to
//! - [`game_state`]: score, best, tile spawning, move application
//! - [`rng`]: seedable uniform tile placement
//! - [`snapshot`]: read-only view handed to renderers
//! - [`config`]: environment configuration
//! - [`error`]: construction errors
//!
//! # Game Rules
//!
//! - A move slides every tile as far as possible in one direction
//! - Two equal tiles meeting in the move merge into one of twice the value;
//!   a merged tile does not merge again in the same move
//! - Each merge adds the merged value to the score
//! - A move that changes the board spawns one new 2 on a random empty cell;
//!   a move that changes nothing spawns nothing
//! - There is no win or loss detection
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_core::types::Direction;
//!
//! let mut game = GameState::new(4, 12345).unwrap();
//! assert_eq!(game.board().tile_count(), 2);
//!
//! let outcome = game.apply_move(Direction::Left);
//! assert!(game.best() >= game.score());
//! if outcome.changed {
//!     assert!(outcome.spawned.is_some());
//! }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::GameError;
pub use game_state::{GameState, MoveOutcome};
pub use line::{collapse_line, Collapse};
pub use rng::TileRng;
pub use snapshot::{CellView, GameSnapshot};
