//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The view owns the board geometry: it receives the core's draw calls through
//! [`BoardPainter`], turns board squares into terminal cells, and answers the
//! reverse question for mouse input with [`GameView::square_at`].

use crate::core::{BoardPainter, GameState, Highlight};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, Piece, PieceKind, Square, BOARD_SIZE};

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

const LIGHT_SQUARE: Rgb = Rgb::new(242, 225, 172);
const DARK_SQUARE: Rgb = Rgb::new(150, 100, 60);
const PIECE_FG: Rgb = Rgb::new(15, 15, 15);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Largest square size, in cells, along either axis.
pub const MAX_CELL_SIZE: u16 = 16;

/// Tint color and opacity layered over a square for each highlight.
fn highlight_tint(highlight: Highlight) -> Option<(Rgb, f32)> {
    match highlight {
        Highlight::LightSquare | Highlight::DarkSquare => None,
        Highlight::LastMove => Some((Rgb::new(205, 210, 106), 0.45)),
        Highlight::Selected => Some((Rgb::new(90, 160, 255), 0.55)),
        Highlight::MoveTarget => Some((Rgb::new(90, 200, 90), 0.35)),
        Highlight::CaptureTarget => Some((Rgb::new(220, 60, 60), 0.5)),
        Highlight::Check => Some((Rgb::new(255, 0, 0), 0.6)),
    }
}

/// Unicode glyph for a piece. White uses the outlined set, black the filled one.
pub fn piece_glyph(kind: PieceKind, color: Color) -> char {
    match (color, kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}

/// Screen placement of the board frame for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the chess board.
pub struct GameView {
    /// Square width in terminal columns.
    cell_w: u16,
    /// Square height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps squares roughly square with typical glyph aspect ratios.
        Self {
            cell_w: 4,
            cell_h: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Sizes are clamped to `1..=MAX_CELL_SIZE`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_SIZE as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (BOARD_SIZE as u16).saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    /// Board square under the terminal cell `(column, row)`, if any.
    pub fn square_at(&self, viewport: Viewport, column: u16, row: u16) -> Option<Square> {
        let frame = self.frame(viewport);
        let left = frame.x + 1;
        let top = frame.y + 1;
        if column < left || row < top {
            return None;
        }
        let file = (column - left) / self.cell_w;
        let rank = (row - top) / self.cell_h;
        if file >= BOARD_SIZE as u16 || rank >= BOARD_SIZE as u16 {
            return None;
        }
        Some(Square::new(file as i8, rank as i8))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(viewport);
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: PANEL_BG,
            bold: false,
            dim: false,
        };
        self.draw_border(fb, frame, border);
        self.draw_coordinates(fb, frame, border);

        let mut painter = FramePainter {
            fb: &mut *fb,
            view: self,
            left: frame.x + 1,
            top: frame.y + 1,
        };
        state.paint(&mut painter);

        self.draw_side_panel(fb, state, viewport, frame);

        if let Some(outcome) = state.outcome() {
            let headline = match outcome.winner() {
                Some(Color::White) => "CHECKMATE - WHITE WINS",
                Some(Color::Black) => "CHECKMATE - BLACK WINS",
                None => "STALEMATE",
            };
            self.draw_overlay_text(fb, frame, 0, headline);
            self.draw_overlay_text(fb, frame, 1, "click to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
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

    /// File letters along the bottom edge, rank digits along the left edge.
    fn draw_coordinates(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let label = CellStyle { dim: true, ..style };
        for i in 0..BOARD_SIZE as u16 {
            let file_x = frame.x + 1 + i * self.cell_w + self.cell_w / 2;
            fb.put_char(file_x, frame.y + frame.h - 1, (b'a' + i as u8) as char, label);

            let rank_y = frame.y + 1 + i * self.cell_h + (self.cell_h - 1) / 2;
            fb.put_char(frame.x, rank_y, (b'8' - i as u8) as char, label);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: PANEL_BG,
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: PANEL_BG,
            bold: false,
            dim: false,
        };
        let alert = CellStyle {
            fg: Rgb::new(255, 80, 80),
            bg: PANEL_BG,
            bold: true,
            dim: false,
        };

        let mut y = frame.y;
        fb.put_str(panel_x, y, "TURN", label);
        y = y.saturating_add(1);
        let turn = match state.active_color() {
            Color::White => "WHITE",
            Color::Black => "BLACK",
        };
        fb.put_str(panel_x, y, turn, value);
        if state.in_check() {
            fb.put_str(panel_x + 6, y, "CHECK", alert);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SELECTED", label);
        y = y.saturating_add(1);
        match state.selected() {
            Some(sq) => fb.put_str(panel_x, y, &sq.name(), value),
            None => fb.put_str(panel_x, y, "-", value),
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PLY", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.ply(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TAKEN", label);
        for color in [Color::White, Color::Black] {
            y = y.saturating_add(1);
            let mut x = panel_x;
            for piece in state.captured(color) {
                if x >= viewport.width {
                    break;
                }
                fb.put_char(x, y, piece_glyph(piece.kind, piece.color), value);
                x += 1;
            }
        }
        y = y.saturating_add(2);

        if y < viewport.height {
            let dim = CellStyle { dim: true, ..value };
            fb.put_str(panel_x, y, "r restart", dim);
            fb.put_str(panel_x, y.saturating_add(1), "esc deselect", dim);
            fb.put_str(panel_x, y.saturating_add(2), "q quit", dim);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, line: u16, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: PANEL_BG,
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Receives the core's draw calls for one frame.
struct FramePainter<'a> {
    fb: &'a mut FrameBuffer,
    view: &'a GameView,
    left: u16,
    top: u16,
}

impl FramePainter<'_> {
    fn origin(&self, square: Square) -> (u16, u16) {
        (
            self.left + square.file as u16 * self.view.cell_w,
            self.top + square.rank as u16 * self.view.cell_h,
        )
    }

    fn center(&self, square: Square) -> (u16, u16) {
        let (x, y) = self.origin(square);
        (x + self.view.cell_w / 2, y + (self.view.cell_h - 1) / 2)
    }
}

impl BoardPainter for FramePainter<'_> {
    fn fill_square(&mut self, square: Square, highlight: Highlight) {
        if !square.is_on_board() {
            return;
        }
        let (x, y) = self.origin(square);
        let (w, h) = (self.view.cell_w, self.view.cell_h);

        match highlight_tint(highlight) {
            None => {
                let bg = if highlight == Highlight::LightSquare {
                    LIGHT_SQUARE
                } else {
                    DARK_SQUARE
                };
                let style = CellStyle {
                    fg: PIECE_FG,
                    bg,
                    bold: false,
                    dim: false,
                };
                self.fb.fill_rect(x, y, w, h, ' ', style);
            }
            Some((tint, alpha)) => {
                let base = self.fb.get(x, y).map(|c| c.style.bg).unwrap_or_default();
                self.fb.tint_rect(x, y, w, h, base.blend(tint, alpha));
                if highlight == Highlight::MoveTarget {
                    let (cx, cy) = self.center(square);
                    if let Some(mut cell) = self.fb.get(cx, cy) {
                        cell.ch = '•';
                        self.fb.set(cx, cy, cell);
                    }
                }
            }
        }
    }

    fn draw_piece(&mut self, piece: &Piece) {
        if !piece.square.is_on_board() {
            return;
        }
        let (cx, cy) = self.center(piece.square);
        let Some(mut cell) = self.fb.get(cx, cy) else {
            return;
        };
        cell.ch = piece_glyph(piece.kind, piece.color);
        cell.style.fg = PIECE_FG;
        cell.style.bold = true;
        self.fb.set(cx, cy, cell);
    }
}
