//! GameView: maps a [`FrameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! World pixels are scaled onto a road area that fills the viewport height;
//! the width follows the world aspect ratio, doubled horizontally because
//! terminal glyphs are about twice as tall as they are wide.

use crate::core::{FrameSnapshot, Rect, SpriteKind};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GamePhase;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BG: Rgb = Rgb::new(20, 20, 20);
const ROAD: Rgb = Rgb::new(50, 50, 50);
const LANE_LINE: Rgb = Rgb::new(80, 80, 80);
const DASH: Rgb = Rgb::new(255, 255, 255);
const CAR: Rgb = Rgb::new(0, 200, 0);
const ENEMY: Rgb = Rgb::new(200, 0, 0);
const TEXT: Rgb = Rgb::new(255, 255, 255);
const ALERT: Rgb = Rgb::new(255, 0, 0);

/// Center-line dash pattern, in world pixels.
const DASH_PX: f32 = 30.0;
const GAP_PX: f32 = 20.0;

/// Narrowest side panel worth drawing.
const MIN_PANEL_W: u16 = 12;

/// Where the road lands on screen for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadLayout {
    /// Top-left corner of the border.
    pub origin_x: u16,
    pub origin_y: u16,
    /// Road interior size in cells.
    pub cols: u16,
    pub rows: u16,
    /// World pixels per cell.
    pub px_per_col: f32,
    pub px_per_row: f32,
}

impl RoadLayout {
    pub fn frame_w(&self) -> u16 {
        self.cols + 2
    }

    pub fn frame_h(&self) -> u16 {
        self.rows + 2
    }

    /// Half-open cell range covered by the world span `[lo, hi)`.
    fn span(lo: f32, hi: f32, px: f32, limit: u16) -> Option<(u16, u16)> {
        let start = (lo / px).floor().max(0.0);
        let end = (hi / px).ceil().min(limit as f32);
        if start >= end {
            return None;
        }
        Some((start as u16, end as u16))
    }

    fn col_of(&self, x: f32) -> Option<u16> {
        let c = (x / self.px_per_col).floor();
        if c < 0.0 || c >= self.cols as f32 {
            return None;
        }
        Some(c as u16)
    }

    /// World x at the middle of column `col`.
    fn col_center(&self, col: u16) -> f32 {
        (col as f32 + 0.5) * self.px_per_col
    }

    fn row_center(&self, row: u16) -> f32 {
        (row as f32 + 0.5) * self.px_per_row
    }
}

/// A lightweight terminal renderer for the road.
pub struct GameView {
    /// Terminal glyph height / width.
    glyph_aspect: f32,
}

impl Default for GameView {
    fn default() -> Self {
        Self { glyph_aspect: 2.0 }
    }
}

impl GameView {
    pub fn new(glyph_aspect: f32) -> Self {
        Self {
            glyph_aspect: glyph_aspect.max(0.1),
        }
    }

    /// Fit the world into `viewport`, centered horizontally, anchored at the
    /// top.
    pub fn layout(&self, snap: &FrameSnapshot, viewport: Viewport) -> RoadLayout {
        let rows = viewport.height.saturating_sub(2).max(1);
        let wanted_cols =
            (rows as f32 * snap.world_width / snap.world_height * self.glyph_aspect).round();
        let cols = (wanted_cols as u16)
            .min(viewport.width.saturating_sub(2))
            .max(1);

        RoadLayout {
            origin_x: viewport.width.saturating_sub(cols + 2) / 2,
            origin_y: 0,
            cols,
            rows,
            px_per_col: snap.world_width / cols as f32,
            px_per_row: snap.world_height / rows as f32,
        }
    }

    /// Render a running frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &FrameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, Rgb::new(0, 0, 0)).cell(' '));

        let layout = self.layout(snap, viewport);
        self.draw_road(fb, snap, &layout);

        for obstacle in &snap.obstacles {
            self.draw_sprite(fb, &layout, &obstacle.rect, obstacle.kind);
        }
        if let Some(player) = snap.player {
            self.draw_sprite(fb, &layout, &player.rect, player.kind);
        }

        self.draw_border(fb, &layout);
        self.draw_hud(fb, snap, viewport, &layout);

        if snap.phase == GamePhase::GameOver {
            self.draw_game_over(fb, &layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &FrameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_road(&self, fb: &mut FrameBuffer, snap: &FrameSnapshot, layout: &RoadLayout) {
        let padding = snap.lanes.padding();
        let road_lo = padding;
        let road_hi = snap.world_width - padding;

        let divider_cols = {
            let mut cols = [u16::MAX; crate::types::MAX_LANES];
            for (slot, x) in cols.iter_mut().zip(snap.lanes.divider_xs()) {
                if let Some(c) = layout.col_of(x) {
                    *slot = c;
                }
            }
            cols
        };
        let dash_col = layout.col_of(snap.world_width / 2.0);
        let period = DASH_PX + GAP_PX;

        for col in 0..layout.cols {
            let x = layout.col_center(col);
            let on_road = x >= road_lo && x < road_hi;
            let bg = if on_road { ROAD } else { BG };
            let is_divider = on_road && divider_cols.contains(&col);

            for row in 0..layout.rows {
                let (ch, style) = if Some(col) == dash_col && on_road {
                    let y = layout.row_center(row);
                    if (y + snap.road_offset).rem_euclid(period) < DASH_PX {
                        ('┃', CellStyle::new(DASH, bg).bold())
                    } else if is_divider {
                        ('│', CellStyle::new(LANE_LINE, bg))
                    } else {
                        (' ', CellStyle::new(TEXT, bg))
                    }
                } else if is_divider {
                    ('│', CellStyle::new(LANE_LINE, bg))
                } else {
                    (' ', CellStyle::new(TEXT, bg))
                };
                fb.put_char(layout.origin_x + 1 + col, layout.origin_y + 1 + row, ch, style);
            }
        }
    }

    fn draw_sprite(&self, fb: &mut FrameBuffer, layout: &RoadLayout, rect: &Rect, kind: SpriteKind) {
        let fg = match kind {
            SpriteKind::Player => CAR,
            SpriteKind::Obstacle => ENEMY,
        };
        let Some((c0, c1)) = RoadLayout::span(rect.left(), rect.right(), layout.px_per_col, layout.cols)
        else {
            return;
        };
        let Some((r0, r1)) = RoadLayout::span(rect.top(), rect.bottom(), layout.px_per_row, layout.rows)
        else {
            return;
        };

        let style = CellStyle::new(fg, ROAD).bold();
        fb.fill_rect(
            layout.origin_x + 1 + c0,
            layout.origin_y + 1 + r0,
            c1 - c0,
            r1 - r0,
            '█',
            style,
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &RoadLayout) {
        let (x, y, w, h) = (layout.origin_x, layout.origin_y, layout.frame_w(), layout.frame_h());
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Side panel when there is room for one, otherwise the score is drawn
    /// in the top-left corner of the road.
    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &FrameSnapshot, viewport: Viewport, layout: &RoadLayout) {
        let panel_x = layout
            .origin_x
            .saturating_add(layout.frame_w())
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_W {
            let text = CellStyle::new(TEXT, BG).bold();
            let x = fb.put_str(layout.origin_x + 1, layout.origin_y + 1, "Score: ", text);
            fb.put_u32(x, layout.origin_y + 1, snap.score, text);
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = value.dim();

        let mut y = layout.origin_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_tenths(panel_x, y, snap.speed, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LANE", label);
        y = y.saturating_add(1);
        let cx = fb.put_u32(panel_x, y, snap.player_lane as u32 + 1, value);
        let cx = fb.put_str(cx, y, "/", value);
        fb.put_u32(cx, y, snap.lanes.len() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "RUN", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.episode_id + 1, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "←/→ steer", dim);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "r restart", dim);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "q quit", dim);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: &RoadLayout) {
        let mid_y = layout.origin_y.saturating_add(layout.frame_h() / 2);
        self.put_centered(
            fb,
            layout,
            mid_y.saturating_sub(1),
            "GAME OVER",
            CellStyle::new(ALERT, Rgb::new(0, 0, 0)).bold(),
        );
        self.put_centered(
            fb,
            layout,
            mid_y.saturating_add(1),
            "Press R to Restart",
            CellStyle::new(TEXT, Rgb::new(0, 0, 0)),
        );
    }

    fn put_centered(&self, fb: &mut FrameBuffer, layout: &RoadLayout, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = layout
            .origin_x
            .saturating_add(layout.frame_w().saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

