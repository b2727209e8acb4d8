//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub const START_MESSAGE: &str = "PRESS R TO START";
pub const PAUSED_MESSAGE: &str = "PAUSED - PRESS P";
pub const GAME_OVER_MESSAGE: &str = "GAME OVER - PRESS R";

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Status line for the current lifecycle state, if any.
pub fn status_message(snap: &GameSnapshot) -> Option<&'static str> {
    if snap.game_over {
        Some(GAME_OVER_MESSAGE)
    } else if snap.paused {
        Some(PAUSED_MESSAGE)
    } else if !snap.running {
        Some(START_MESSAGE)
    } else {
        None
    }
}

/// Terminal palette for a piece color tag.
pub fn color_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Cyan => Rgb::new(80, 220, 220),
        PieceColor::Yellow => Rgb::new(240, 220, 80),
        PieceColor::Purple => Rgb::new(200, 120, 220),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Red => Rgb::new(220, 80, 80),
        PieceColor::Blue => Rgb::new(80, 120, 220),
        PieceColor::Orange => Rgb::new(255, 165, 0),
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Where the board frame lands in the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        fb.fill_rect(frame.x + 1, frame.y + 1, w - 2, h - 2, ' ', CellStyle::new(WELL_BG, WELL_BG));
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                match PieceKind::from_code(code) {
                    Some(kind) => self.draw_block(fb, frame, x as i8, y as i8, kind.color(), false),
                    None => self.fill_cell(
                        fb,
                        frame,
                        x as i8,
                        y as i8,
                        '·',
                        CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim(),
                    ),
                }
            }
        }

        // The active piece is hidden while paused.
        if let Some(active) = snap.active.filter(|_| !snap.paused) {
            if let Some(ghost_y) = snap.ghost_y.filter(|&gy| gy != active.y) {
                let ghost = CellStyle::new(Rgb::new(140, 140, 140), WELL_BG).dim();
                for (dx, dy) in active.shape.filled_cells() {
                    self.fill_cell(fb, frame, active.x + dx, ghost_y + dy, '░', ghost);
                }
            }
            for (dx, dy) in active.shape.filled_cells() {
                self.draw_block(fb, frame, active.x + dx, active.y + dy, active.kind.color(), true);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        // Settings line under the well.
        let settings = CellStyle::new(Rgb::new(150, 150, 160), PANEL_BG);
        let mut x = fb.put_str(frame.x, frame.y + h, "NEXT ", settings);
        x = fb.put_u32(x, frame.y + h, snap.preview_count as u32, settings);
        x = fb.put_str(x, frame.y + h, if snap.show_ghost { " GHOST ON" } else { " GHOST OFF" }, settings);
        fb.put_str(x, frame.y + h, if snap.advanced_mode { " ADV" } else { " CLASSIC" }, settings);

        if let Some(text) = status_message(snap) {
            draw_overlay_text(fb, frame, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, color: PieceColor, bold: bool) {
        let mut style = CellStyle::new(color_rgb(color), WELL_BG);
        style.bold = bold;
        self.fill_cell(fb, frame, x, y, '█', style);
    }

    /// Paint board cell `(x, y)`; cells off the board (spawn buffer) are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = frame.x + 1 + (x as u16) * self.cell_w;
        let py = frame.y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, v, width) in [
            ("SCORE", snap.score, 6),
            ("LINES", snap.lines, 3),
            ("LEVEL", snap.level, 2),
        ] {
            let x = fb.put_str(panel_x, y, name, label);
            fb.put_u32_padded(x + 1, y, v, width, value);
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);

        if snap.advanced_mode {
            fb.put_str(panel_x, y, "HOLD", label);
            if !snap.can_hold {
                fb.put_str(panel_x + 5, y, "(used)", value.dim());
            }
            y = y.saturating_add(1);
            match snap.hold {
                Some(piece) => {
                    y = y.saturating_add(draw_mini_piece(fb, panel_x, y, &piece, !snap.can_hold));
                }
                None => {
                    fb.put_str(panel_x, y, "-", value);
                    y = y.saturating_add(1);
                }
            }
            y = y.saturating_add(1);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        for piece in snap.next_pieces() {
            if y >= viewport.height {
                break;
            }
            y = y.saturating_add(draw_mini_piece(fb, panel_x, y, piece, false));
            y = y.saturating_add(1);
        }
    }
}

/// Draw `piece`'s shape at 2 columns per cell; returns the rows used.
fn draw_mini_piece(fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece, dim: bool) -> u16 {
    let mut style = CellStyle::new(color_rgb(piece.color()), PANEL_BG);
    style.dim = dim;
    draw_mini_shape(fb, x, y, piece.shape(), style)
}

fn draw_mini_shape(fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape, style: CellStyle) -> u16 {
    for (dx, dy) in shape.filled_cells() {
        let px = x + (dx as u16) * 2;
        let py = y + dy as u16;
        fb.put_str(px, py, "██", style);
    }
    shape.rows() as u16
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

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

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let mid_y = frame.y.saturating_add(frame.h / 2);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, mid_y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{create_piece, ActiveSnapshot};

    fn running_snapshot() -> GameSnapshot {
        GameSnapshot {
            running: true,
            preview_count: 1,
            next: [Some(create_piece(PieceKind::O)), None, None, None, None],
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn test_status_message_priority() {
        let mut snap = GameSnapshot::default();
        assert_eq!(status_message(&snap), Some(START_MESSAGE));
        snap.running = true;
        assert_eq!(status_message(&snap), None);
        snap.paused = true;
        assert_eq!(status_message(&snap), Some(PAUSED_MESSAGE));
        snap.game_over = true;
        assert_eq!(status_message(&snap), Some(GAME_OVER_MESSAGE));
    }

    #[test]
    fn test_spawn_buffer_cells_are_not_drawn() {
        let mut snap = running_snapshot();
        let shape = *create_piece(PieceKind::T).shape();
        snap.active = Some(ActiveSnapshot {
            kind: PieceKind::T,
            shape,
            x: 3,
            y: -1,
        });
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        // Only the bottom row of the T is on the board: columns 3..6 of row 0.
        assert_eq!(fb.get(1 + 3 * 2, 1).unwrap().ch, '█');
        assert_eq!(fb.get(1 + 5 * 2 + 1, 1).unwrap().ch, '█');
        assert_eq!(fb.get(1 + 6 * 2, 1).unwrap().ch, '·');
    }

    #[test]
    fn test_mini_shape_uses_two_columns_per_cell() {
        let mut fb = FrameBuffer::new(8, 2);
        let rows = draw_mini_piece(&mut fb, 0, 0, &create_piece(PieceKind::T), false);
        assert_eq!(rows, 2);
        assert_eq!(fb.row_text(0), "  ██    ");
        assert_eq!(fb.row_text(1), "██████  ");
    }
}
