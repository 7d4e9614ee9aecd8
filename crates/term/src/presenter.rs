//! Presenter: the boundary between the game and the terminal.
//!
//! The host hands a snapshot over after every move; the presenter lays it out
//! with a [`GameView`] and flushes the result through a [`TerminalRenderer`].
//! The framebuffer is kept between frames so steady-state presents do not
//! reallocate.

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct Presenter {
    view: GameView,
    renderer: TerminalRenderer,
    frame: FrameBuffer,
}

impl Presenter {
    pub fn new(view: GameView) -> Self {
        Self {
            view,
            renderer: TerminalRenderer::new(),
            frame: FrameBuffer::new(0, 0),
        }
    }

    /// Switch the terminal into game mode (raw, alternate screen).
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Drop the diff baseline; the next present redraws everything.
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }

    pub fn present(&mut self, snap: &GameSnapshot, viewport: Viewport) -> Result<()> {
        self.view.render_into(snap, viewport, &mut self.frame);
        self.renderer.draw(&self.frame)
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(GameView::default())
    }
}
