//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` free of any presentation concern
//! - Lay out a snapshot purely ([`GameView`]) so it can be unit-tested
//! - Only push changed cells to the terminal ([`TerminalRenderer`])

pub mod fb;
pub mod game_view;
pub mod presenter;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport};
pub use presenter::Presenter;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
