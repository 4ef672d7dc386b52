//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. The engine never draws; this is
//! the render collaborator consuming the read-only snapshot surface.

use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Snapshot-to-framebuffer renderer.
pub struct GameView {
    /// Board cell width in terminal columns (2 compensates for glyph aspect).
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

/// Side length of the look-ahead preview box, in board cells.
const PREVIEW_CELLS: u16 = 4;

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render one frame.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = u16::from(BOARD_WIDTH) * self.cell_w;
        let frame_w = board_px_w + 2;
        let frame_h = u16::from(BOARD_HEIGHT) + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);
        self.draw_board(&mut fb, snap, start_x, start_y);

        if let Some(active) = snap.active.as_ref() {
            self.draw_piece(&mut fb, active, start_x, start_y);
        }

        self.draw_panel(&mut fb, snap, start_x + frame_w + 2, start_y);

        match snap.phase {
            Phase::Idle => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER")
            }
            Phase::Paused => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED")
            }
            Phase::Over => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            Phase::Running => {}
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
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

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, start_y: u16) {
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                match color_for_id(id) {
                    Some(fg) => {
                        self.fill_cell(fb, start_x, start_y, x as u16, y as u16, '█', fg)
                    }
                    None => self.fill_cell(
                        fb,
                        start_x,
                        start_y,
                        x as u16,
                        y as u16,
                        '·',
                        Rgb::new(60, 60, 70),
                    ),
                }
            }
        }
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, piece: &ActiveSnapshot, start_x: u16, start_y: u16) {
        let fg = piece_color(piece.kind);
        for (row, col) in piece.shape.iter_filled() {
            let x = piece.x + col as i8;
            let y = piece.y + row as i8;
            // Spawn rows above the board are simply not drawn.
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.fill_cell(fb, start_x, start_y, x as u16, y as u16, '█', fg);
            }
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        fg: Rgb,
    ) {
        let style = CellStyle {
            fg,
            bg: Rgb::new(20, 20, 28),
            bold: true,
        };
        let px = start_x + 1 + cell_x * self.cell_w;
        fb.fill_rect(px, start_y + 1 + cell_y, self.cell_w, 1, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, panel_x: u16, start_y: u16) {
        if panel_x >= fb.width() {
            return;
        }
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let mut y = start_y;
        for (name, amount) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &amount.to_string(), value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, snap.next.as_ref(), panel_x, y + 1);
    }

    /// Look-ahead preview: the shape centered in a 4x4 cell box.
    fn draw_preview(&self, fb: &mut FrameBuffer, next: Option<&ActiveSnapshot>, x: u16, y: u16) {
        let empty = CellStyle {
            fg: Rgb::new(60, 60, 70),
            bg: Rgb::new(20, 20, 28),
            bold: false,
        };
        for cy in 0..PREVIEW_CELLS {
            for cx in 0..PREVIEW_CELLS * self.cell_w {
                fb.put_char(x + cx, y + cy, ' ', empty);
            }
        }
        let Some(piece) = next else {
            return;
        };
        let n = piece.shape.size() as u16;
        let off_x = (PREVIEW_CELLS - n) / 2;
        let off_y = (PREVIEW_CELLS - n) / 2;
        let style = CellStyle {
            fg: piece_color(piece.kind),
            bg: Rgb::new(20, 20, 28),
            bold: true,
        };
        for (row, col) in piece.shape.iter_filled() {
            let px = x + (off_x + col as u16) * self.cell_w;
            let py = y + off_y + row as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y + frame_h / 2;
        let text_w = text.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Side panel width in terminal columns.
const PANEL_W: u16 = 14;

/// Catalog palette, matching the kind order exported by snapshots.
fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::J => Rgb::new(60, 60, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::T => Rgb::new(160, 0, 160),
        PieceKind::Z => Rgb::new(255, 0, 0),
    }
}

fn color_for_id(id: u8) -> Option<Rgb> {
    if id == 0 || id as usize > PieceKind::ALL.len() {
        return None;
    }
    Some(piece_color(PieceKind::ALL[id as usize - 1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;

    fn frame(session: &Session) -> FrameBuffer {
        GameView::default().render(&session.snapshot(), Viewport::new(80, 30))
    }

    fn contains_text(fb: &FrameBuffer, text: &str) -> bool {
        for y in 0..fb.height() {
            let row: String = (0..fb.width())
                .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
                .collect();
            if row.contains(text) {
                return true;
            }
        }
        false
    }

    #[test]
    fn idle_frame_shows_start_hint() {
        let session = Session::new(5);
        let fb = frame(&session);
        assert!(contains_text(&fb, "PRESS ENTER"));
        assert!(contains_text(&fb, "SCORE"));
        assert!(contains_text(&fb, "NEXT"));
    }

    #[test]
    fn paused_frame_shows_overlay() {
        let mut session = Session::new(5);
        session.start();
        session.toggle_pause();
        assert!(contains_text(&frame(&session), "PAUSED"));
    }

    #[test]
    fn running_frame_draws_active_piece() {
        let mut session = Session::new(5);
        session.start();
        let fb = frame(&session);
        let blocks = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).map(|c| c.ch) == Some('█'))
            .count();
        // Active piece (4 cells) plus preview (4 cells), cell_w columns each.
        assert_eq!(blocks, 8 * 2);
    }

    #[test]
    fn color_ids_map_back_to_catalog() {
        assert_eq!(color_for_id(0), None);
        assert_eq!(color_for_id(8), None);
        assert_eq!(color_for_id(1), Some(piece_color(PieceKind::I)));
        assert_eq!(color_for_id(7), Some(piece_color(PieceKind::Z)));
    }
}
