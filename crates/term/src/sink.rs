//! [`RenderSink`] backed by the real terminal.

use std::time::Instant;

use anyhow::Result;

use crate::core::{FrameSnapshot, RenderSink};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::render_throttle::RenderThrottle;
use crate::renderer::TerminalRenderer;

/// Redraw interval for an unchanged game-over screen.
pub const STATIC_REDRAW_MS: u64 = 250;

/// Fallback when the terminal size cannot be queried.
const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

pub struct TerminalSink {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    throttle: RenderThrottle,
    viewport: Viewport,
    started: Instant,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(FALLBACK_VIEWPORT.width, FALLBACK_VIEWPORT.height),
            throttle: RenderThrottle::new(STATIC_REDRAW_MS),
            viewport: FALLBACK_VIEWPORT,
            started: Instant::now(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.throttle.reset();
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn draw(&mut self, frame: &FrameSnapshot) -> Result<()> {
        let viewport = crossterm::terminal::size()
            .map(|(w, h)| Viewport::new(w, h))
            .unwrap_or(FALLBACK_VIEWPORT);
        if viewport != self.viewport {
            self.viewport = viewport;
            self.renderer.invalidate();
            self.throttle.reset();
        }

        let now_ms = self.started.elapsed().as_millis() as u64;
        if !self.throttle.should_draw(now_ms, frame) {
            return Ok(());
        }

        self.view.render_into(frame, self.viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for TerminalSink {
    fn draw_frame(&mut self, frame: &FrameSnapshot) -> Result<()> {
        self.draw(frame)
    }

    fn draw_game_over(&mut self, frame: &FrameSnapshot) -> Result<()> {
        self.draw(frame)
    }
}
