//! Composes the game state into a framebuffer.
//!
//! The playfield is drawn with two terminal columns per board cell so
//! blocks come out roughly square. A side panel shows the score, the
//! next piece, and the key help.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, BOARD_COLS, BOARD_ROWS};

const CELL_W: u16 = 2;
const FIELD_W: u16 = BOARD_COLS as u16 * CELL_W;
const FIELD_H: u16 = BOARD_ROWS as u16;
const PANEL_W: u16 = 18;

/// Total framebuffer size needed for the view, borders included.
pub const VIEW_W: u16 = FIELD_W + 2 + PANEL_W;
pub const VIEW_H: u16 = FIELD_H + 2;

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::S => Rgb::new(50, 205, 50),
        PieceKind::Z => Rgb::new(255, 0, 0),
        PieceKind::T => Rgb::new(160, 32, 240),
        PieceKind::I => Rgb::new(0, 255, 255),
    }
}

fn block_style(kind: PieceKind) -> CellStyle {
    CellStyle {
        fg: Rgb::new(0, 0, 0),
        bg: kind_color(kind),
        bold: false,
        dim: false,
    }
}

fn border_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(120, 120, 120),
        ..CellStyle::default()
    }
}

fn text_style() -> CellStyle {
    CellStyle::default()
}

pub struct GameView;

impl GameView {
    /// Renders the whole scene into `fb`. The buffer should be at least
    /// VIEW_W x VIEW_H; anything outside is clipped.
    pub fn render(game: &GameState, fb: &mut FrameBuffer) {
        fb.fill_rect(0, 0, fb.width(), fb.height(), ' ', CellStyle::default());

        Self::draw_border(fb);
        Self::draw_board(game, fb);
        if let Some(piece) = game.current() {
            for (x, y) in piece.iter_cells() {
                if y >= 0 {
                    Self::draw_block(fb, x as u16, y as u16, block_style(piece.kind));
                }
            }
        }
        Self::draw_panel(game, fb);
        Self::draw_overlay(game, fb);
    }

    fn draw_border(fb: &mut FrameBuffer) {
        let style = border_style();
        for x in 0..FIELD_W + 2 {
            fb.put_char(x, 0, '─', style);
            fb.put_char(x, FIELD_H + 1, '─', style);
        }
        for y in 0..FIELD_H + 2 {
            fb.put_char(0, y, '│', style);
            fb.put_char(FIELD_W + 1, y, '│', style);
        }
        fb.put_char(0, 0, '┌', style);
        fb.put_char(FIELD_W + 1, 0, '┐', style);
        fb.put_char(0, FIELD_H + 1, '└', style);
        fb.put_char(FIELD_W + 1, FIELD_H + 1, '┘', style);
    }

    fn draw_board(game: &GameState, fb: &mut FrameBuffer) {
        for y in 0..BOARD_ROWS {
            for x in 0..BOARD_COLS {
                if let Some(Some(kind)) = game.board().get(x as i8, y as i8) {
                    Self::draw_block(fb, x as u16, y as u16, block_style(kind));
                }
            }
        }
    }

    // Board coordinates, not screen coordinates.
    fn draw_block(fb: &mut FrameBuffer, bx: u16, by: u16, style: CellStyle) {
        let sx = 1 + bx * CELL_W;
        let sy = 1 + by;
        fb.put_char(sx, sy, ' ', style);
        fb.put_char(sx + 1, sy, ' ', style);
    }

    fn draw_panel(game: &GameState, fb: &mut FrameBuffer) {
        let px = FIELD_W + 4;
        let style = text_style();

        fb.put_str(px, 1, "SCORE", style);
        fb.put_str(px, 2, &game.score().to_string(), style);

        fb.put_str(px, 4, "NEXT", style);
        if let Some(next) = game.next_preview() {
            let shape = next.shape;
            let n = shape.size() as u16;
            for y in 0..n {
                for x in 0..n {
                    if shape.occupied(x as u8, y as u8) {
                        let sx = px + x * CELL_W;
                        fb.put_char(sx, 5 + y, ' ', block_style(next.kind));
                        fb.put_char(sx + 1, 5 + y, ' ', block_style(next.kind));
                    }
                }
            }
        }

        let dim = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        fb.put_str(px, 12, "←/→  move", dim);
        fb.put_str(px, 13, "↑    rotate", dim);
        fb.put_str(px, 14, "z    rotate ccw", dim);
        fb.put_str(px, 15, "↓    drop", dim);
        fb.put_str(px, 16, "r    restart", dim);
        fb.put_str(px, 17, "q    quit", dim);
    }

    fn draw_overlay(game: &GameState, fb: &mut FrameBuffer) {
        let msg = match game.phase() {
            Phase::NotStarted => "PRESS R TO START",
            Phase::GameOver => "GAME OVER",
            Phase::Running => return,
        };
        let style = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let cx = (FIELD_W + 2).saturating_sub(msg.len() as u16) / 2;
        let cy = FIELD_H / 2;
        fb.put_str(cx, cy, msg, style);
        if game.phase() == Phase::GameOver {
            let score_line = format!("SCORE {}", game.score());
            let sx = (FIELD_W + 2).saturating_sub(score_line.len() as u16) / 2;
            fb.put_str(sx, cy + 1, &score_line, style);
        }
    }
}
