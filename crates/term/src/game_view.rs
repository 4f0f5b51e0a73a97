//! GameView: draws a [`FieldSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O. The field dimensions come from the snapshot, so any
//! configured size renders without changes here.

use crate::core::{Catalog, FieldObserver, FieldSnapshot, Figure, GameStatus};
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::NamedColor;

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_MIN_WIDTH: u16 = 10;

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

/// Numbers shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub score: u32,
    pub rows: u32,
    /// Current descent interval in milliseconds
    pub interval_ms: u32,
}

/// Latest field state, kept current by feeding it field events.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub snapshot: FieldSnapshot,
    pub next: Option<Figure>,
    pub dirty: bool,
}

impl FieldObserver for ViewState {
    fn on_field_changed(&mut self, snapshot: &FieldSnapshot) {
        self.snapshot.clone_from(snapshot);
        self.dirty = true;
    }

    fn on_next_figure_changed(&mut self, figure: &Figure) {
        self.next = Some(figure.clone());
        self.dirty = true;
    }

    fn on_top_row_filled(&mut self) {
        self.snapshot.status = GameStatus::GameOver;
        self.dirty = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub struct GameView {
    catalog: &'static Catalog,
    /// Terminal columns per field cell.
    cell_w: u16,
    /// Terminal rows per field cell.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares a cell on common terminal fonts.
        Self::new(Catalog::standard(), 2, 1)
    }
}

impl GameView {
    pub fn new(catalog: &'static Catalog, cell_w: u16, cell_h: u16) -> Self {
        Self {
            catalog,
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &ViewState, hud: Hud, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let snap = &state.snapshot;
        let inner_w = snap.width.saturating_mul(self.cell_w);
        let inner_h = snap.height.saturating_mul(self.cell_h);
        let frame_w = inner_w.saturating_add(2);
        let frame_h = inner_h.saturating_add(2);

        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        fb.fill_rect(origin_x + 1, origin_y + 1, inner_w, inner_h, ' ', CellStyle::new(PLAY_BG, PLAY_BG));
        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.content_at(x, y) {
                    0 => self.fill_cell(fb, origin_x, origin_y, x, y, '·', empty),
                    content => {
                        let style = self.block_style(content);
                        self.fill_cell(fb, origin_x, origin_y, x, y, '█', style);
                    }
                }
            }
        }

        for cell in snap.figure_cells() {
            if cell.x() < 0 || cell.y() < 0 {
                continue;
            }
            let style = self.block_style(cell.content()).bold();
            self.fill_cell(fb, origin_x, origin_y, cell.x() as u16, cell.y() as u16, '█', style);
        }

        let next = state.next.as_ref().or(snap.next.as_ref());
        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        self.draw_panel(fb, panel_x, origin_y, hud, next);

        let overlay = match snap.status {
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::GameOver => Some("GAME OVER"),
            GameStatus::Playing => None,
        };
        if let Some(text) = overlay {
            let text_w = text.chars().count() as u16;
            let x = origin_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            let y = origin_y.saturating_add(frame_h / 2);
            let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
            fb.put_str(x, y, text, style);
        }
    }

    /// Allocating variant of [`GameView::render_into`].
    pub fn render(&self, state: &ViewState, hud: Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, hud, viewport, &mut fb);
        fb
    }

    fn block_style(&self, content: u8) -> CellStyle {
        CellStyle::new(named_to_rgb(self.catalog.color_for(content)), PLAY_BG)
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin_x + 1 + x * self.cell_w;
        let py = origin_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, x: u16, y: u16, hud: Hud, next: Option<&Figure>) {
        if x >= fb.width() || fb.width() - x < PANEL_MIN_WIDTH {
            return;
        }
        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut row = y;
        for (name, number) in [("SCORE", hud.score), ("ROWS", hud.rows), ("SPEED", hud.interval_ms)] {
            fb.put_str(x, row, name, label);
            fb.put_u32(x, row + 1, number, value);
            row = row.saturating_add(3);
        }

        fb.put_str(x, row, "NEXT", label);
        row = row.saturating_add(1);
        let Some(figure) = next else {
            fb.put_str(x, row, "-", value);
            return;
        };
        let style = self.block_style(figure.kind().content());
        for (dy, line) in figure.matrix().iter().enumerate() {
            for (dx, &content) in line.iter().enumerate() {
                if content != 0 {
                    let px = x + dx as u16 * self.cell_w;
                    fb.fill_rect(px, row + dy as u16, self.cell_w, 1, '█', style);
                }
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for dx in x + 1..right {
        fb.put_char(dx, y, '─', style);
        fb.put_char(dx, bottom, '─', style);
    }
    for dy in y + 1..bottom {
        fb.put_char(x, dy, '│', style);
        fb.put_char(right, dy, '│', style);
    }
}

/// Terminal color for a catalog color name.
pub fn named_to_rgb(color: NamedColor) -> Rgb {
    match color {
        NamedColor::Black => Rgb::new(0, 0, 0),
        NamedColor::Red => Rgb::new(220, 80, 80),
        NamedColor::Blue => Rgb::new(80, 120, 220),
        NamedColor::Purple => Rgb::new(200, 120, 220),
        NamedColor::Yellow => Rgb::new(240, 220, 80),
        NamedColor::Green => Rgb::new(100, 220, 120),
        NamedColor::Cyan => Rgb::new(80, 220, 220),
        NamedColor::Orange => Rgb::new(255, 165, 0),
        NamedColor::DarkBlue => Rgb::new(20, 30, 110),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_color_is_distinct() {
        let colors = [
            NamedColor::Black,
            NamedColor::Red,
            NamedColor::Blue,
            NamedColor::Purple,
            NamedColor::Yellow,
            NamedColor::Green,
            NamedColor::Cyan,
            NamedColor::Orange,
            NamedColor::DarkBlue,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(named_to_rgb(*a), named_to_rgb(*b));
            }
        }
    }

    #[test]
    fn view_state_tracks_game_over() {
        let mut state = ViewState::default();
        state.on_top_row_filled();
        assert_eq!(state.snapshot.status, GameStatus::GameOver);
        assert!(state.dirty);
    }
}
