//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{display_width, CellStyle, FrameBuffer, Rgb};
use crate::labels::Labels;
use crate::types::{Cell, Locale, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(17, 24, 39);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const SETTLED_FG: Rgb = Rgb::new(96, 165, 250);
const ACCENT_FG: Rgb = Rgb::new(34, 211, 238);

/// Gap in columns between the board frame and the side panel.
const PANEL_GAP: u16 = 2;

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

/// A lightweight terminal renderer for the widget.
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
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Placement of the board frame inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        locale: Locale,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell {
            ch: ' ',
            style: CellStyle::default(),
        });

        let (frame_w, frame_h) = self.frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        self.draw_border(fb, frame, CellStyle::fg(Rgb::new(200, 200, 200), SCREEN_BG));

        let falling_kind = snap.active.map(|a| a.kind);
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match Cell::from_marker(snap.board[y as usize][x as usize]) {
                    Some(Cell::Settled) => {
                        let style = CellStyle::fg(SETTLED_FG, BOARD_BG).bold();
                        self.fill_cell_rect(fb, frame, x, y, '█', style);
                    }
                    Some(Cell::Falling) => {
                        let fg = falling_kind.map(piece_color).unwrap_or(SETTLED_FG);
                        let style = CellStyle::fg(fg, BOARD_BG).bold();
                        self.fill_cell_rect(fb, frame, x, y, '█', style);
                    }
                    _ => {
                        let style = CellStyle::fg(Rgb::new(75, 85, 99), BOARD_BG).dim();
                        self.fill_cell_rect(fb, frame, x, y, '·', style);
                    }
                }
            }
        }

        let labels = Labels::for_locale(locale);
        self.draw_side_panel(fb, snap, labels, locale, frame);

        match snap.phase {
            Phase::NotStarted => self.draw_overlay_text(fb, frame, labels.start_game),
            Phase::Paused => self.draw_overlay_text(fb, frame, labels.paused),
            Phase::GameOver => self.draw_overlay_text(fb, frame, labels.game_over),
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, locale: Locale, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, locale, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
        if f.w < 2 || f.h < 2 {
            return;
        }

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(f.x + f.w - 1, f.y, '┐', style);
        fb.put_char(f.x, f.y + f.h - 1, '└', style);
        fb.put_char(f.x + f.w - 1, f.y + f.h - 1, '┘', style);

        for dx in 1..f.w - 1 {
            fb.put_char(f.x + dx, f.y, '─', style);
            fb.put_char(f.x + dx, f.y + f.h - 1, '─', style);
        }
        for dy in 1..f.h - 1 {
            fb.put_char(f.x, f.y + dy, '│', style);
            fb.put_char(f.x + f.w - 1, f.y + dy, '│', style);
        }
    }

    fn fill_cell_rect(&self, fb: &mut FrameBuffer, f: Frame, cell_x: u16, cell_y: u16, ch: char, style: CellStyle) {
        let px = f.x + 1 + cell_x * self.cell_w;
        let py = f.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        labels: &Labels,
        locale: Locale,
        f: Frame,
    ) {
        let lines = panel_lines(snap, labels, locale);
        let heading = CellStyle::fg(ACCENT_FG, SCREEN_BG).bold();
        let text = CellStyle::default();

        // LTR panels sit right of the board; RTL panels sit left, right-aligned.
        let rtl = locale.is_rtl();
        let anchor = if rtl {
            match f.x.checked_sub(PANEL_GAP + 1) {
                Some(right) => right,
                None => return,
            }
        } else {
            let left = f.x.saturating_add(f.w).saturating_add(PANEL_GAP);
            if left >= fb.width() {
                return;
            }
            left
        };

        for (i, (line, is_heading)) in lines.iter().enumerate() {
            let y = f.y.saturating_add(i as u16);
            if y >= fb.height() {
                break;
            }
            let style = if *is_heading { heading } else { text };
            if rtl {
                fb.put_str_right(anchor, y, line, style);
            } else {
                fb.put_str(anchor, y, line, style);
            }
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, f: Frame, text: &str) {
        let mid_y = f.y.saturating_add(f.h / 2);
        let text_w = display_width(text);
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        let style = CellStyle::fg(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Side panel text, top to bottom, with a heading flag per line.
fn panel_lines(snap: &GameSnapshot, labels: &Labels, locale: Locale) -> Vec<(String, bool)> {
    let mut lines = vec![
        (labels.title.to_string(), true),
        (String::new(), false),
        (format!("{}: {}", labels.score, snap.score), false),
        (String::new(), false),
    ];

    match snap.phase {
        Phase::NotStarted => lines.push((labels.start_game.to_string(), true)),
        Phase::Paused => {
            lines.push((labels.paused.to_string(), true));
            lines.push((labels.resume.to_string(), false));
        }
        Phase::GameOver => {
            lines.push((labels.game_over.to_string(), true));
            lines.push((labels.play_again.to_string(), false));
        }
        Phase::Running => {}
    }
    lines.push((String::new(), false));

    let arrows = if locale.is_rtl() { "→ ←" } else { "← →" };
    lines.push((format!("{}:", labels.controls), true));
    lines.push((format!("{} {}", arrows, labels.move_piece), false));
    lines.push((format!("↓ {}", labels.soft_drop), false));
    lines.push((format!("Space: {}", labels.hard_drop), false));
    lines.push((format!("P: {}", labels.pause), false));
    lines.push((format!("R: {}", labels.restart), false));
    lines.push((format!("Q: {}", labels.quit), false));
    lines
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(34, 211, 238),
        PieceKind::O => Rgb::new(250, 204, 21),
        PieceKind::T => Rgb::new(192, 132, 252),
        PieceKind::L => Rgb::new(251, 146, 60),
    }
}
