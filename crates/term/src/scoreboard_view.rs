//! ScoreboardView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{PlayerSnapshot, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PlayerStatus;

const RED: Rgb = Rgb::new(227, 41, 46);
const GREEN: Rgb = Rgb::new(48, 159, 106);
const CREAM: Rgb = Rgb::new(249, 223, 188);
const GRAY: Rgb = Rgb::new(176, 176, 176);
const DEAD: Rgb = Rgb::new(117, 117, 117);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

const NAME_W: u16 = 18;
const STATUS_W: u16 = 6;
const PANEL_W: u16 = 24;

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

/// Prompt box drawn over the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay<'a> {
    pub title: &'a str,
    pub label: &'a str,
    pub input: &'a str,
    pub hint: &'a str,
}

/// Everything besides the snapshot that shows up on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState<'a> {
    /// Roster index under the cursor.
    pub selected: Option<usize>,
    /// Bottom status line.
    pub status: Option<&'a str>,
    pub overlay: Option<Overlay<'a>>,
}

/// Terminal renderer for the scoreboard.
#[derive(Debug, Clone, Copy)]
pub struct ScoreboardView {
    show_help: bool,
}

impl Default for ScoreboardView {
    fn default() -> Self {
        Self { show_help: true }
    }
}

impl ScoreboardView {
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Inner width of the player table for a given threshold.
    pub fn table_width(threshold: u8) -> u16 {
        // cursor + number + name + pips + status, with gaps
        2 + 2 + 2 + NAME_W + 1 + (threshold.max(5) as u16) + 2 + STATUS_W + 1
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        ui: &ViewState<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let inner_w = Self::table_width(snap.threshold);
        let frame_w = inner_w + 2;
        let banner_h: u16 = if snap.winner.is_some() { 2 } else { 0 };
        let rows_h = (snap.players.len() as u16).max(1);
        let frame_h = 2 + banner_h + rows_h;

        let with_panel = self.show_help && viewport.width >= frame_w + 2 + PANEL_W;
        let total_w = if with_panel { frame_w + 2 + PANEL_W } else { frame_w };
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y: u16 = 2;

        self.draw_header(fb, snap, viewport);

        let border = CellStyle::new(RED, BLACK);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let mut y = start_y + 1;
        if let Some(winner) = snap.winner.as_deref() {
            self.draw_winner(fb, start_x + 1, y, inner_w, winner);
            y += banner_h;
        }

        if snap.players.is_empty() {
            let hint = CellStyle::new(CREAM, BLACK).dim();
            fb.put_str_max(start_x + 2, y, "No players yet. Press 'a' to add one.", inner_w - 2, hint);
        }

        for (row, &index) in snap.display_order().iter().enumerate() {
            let player = &snap.players[index];
            let selected = ui.selected == Some(index);
            self.draw_player_row(fb, start_x + 1, y, inner_w, row, player, snap.threshold, selected);
            y += 1;
        }

        if with_panel {
            self.draw_side_panel(fb, snap, start_x + frame_w + 2, start_y, viewport);
        }

        if let Some(status) = ui.status {
            let style = CellStyle::new(CREAM, BLACK);
            let y = viewport.height.saturating_sub(1);
            fb.put_str(1, y, status, style);
        }

        if let Some(overlay) = ui.overlay {
            self.draw_overlay(fb, &overlay, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, ui: &ViewState<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, ui, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, viewport: Viewport) {
        let bar = CellStyle::new(WHITE, RED).bold();
        fb.fill_rect(0, 0, viewport.width, 1, ' ', bar);
        fb.put_str(1, 0, "KILLER DARTS", bar);

        let label = "ROUND ";
        let digits = digit_count(snap.round);
        let x = viewport.width.saturating_sub(label.len() as u16 + digits + 1);
        let x = fb.put_str(x, 0, label, bar);
        fb.put_u32(x, 0, snap.round, bar);
    }

    fn draw_winner(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, winner: &str) {
        let style = CellStyle::new(BLACK, CREAM).bold();
        fb.fill_rect(x, y, w, 1, ' ', style);
        let cx = fb.put_str(x + 1, y, "WINNER: ", style);
        fb.put_str_max(cx, y, winner, w.saturating_sub(cx - x + 1), style);

        let hint = CellStyle::new(CREAM, BLACK).dim();
        fb.put_str_max(x + 1, y + 1, "g: start new game", w - 1, hint);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_player_row(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        row: usize,
        player: &PlayerSnapshot,
        threshold: u8,
        selected: bool,
    ) {
        let (fg, bg) = row_colors(player.status, row);
        let style = CellStyle::new(fg, bg);
        fb.fill_rect(x, y, w, 1, ' ', style);

        let mut cx = x;
        if selected {
            fb.put_char(cx, y, '▶', style.bold());
        }
        cx += 2;

        if player.number < 10 {
            cx += 1;
        }
        fb.put_u32(cx, y, player.number as u32, style.bold());
        cx = x + 6;

        fb.put_str_max(cx, y, &player.name, NAME_W, CellStyle { bold: selected, ..style });
        cx += NAME_W + 1;

        let pip_style = match player.status {
            PlayerStatus::Killer => CellStyle::new(RED, bg).bold(),
            _ => style,
        };
        for i in 0..threshold.max(1) {
            let ch = if i < player.score { '●' } else { '○' };
            fb.put_char(cx + i as u16, y, ch, pip_style);
        }
        cx += (threshold.max(5) as u16) + 2;

        fb.put_str_max(cx, y, player.status.label(), STATUS_W, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        x: u16,
        start_y: u16,
        viewport: Viewport,
    ) {
        let label = CellStyle::new(CREAM, BLACK).bold();
        let value = CellStyle::new(WHITE, BLACK);
        let dim = value.dim();

        let mut y = start_y;
        for (name, v) in [
            ("PLAYERS ", snap.players.len() as u32),
            ("ALIVE   ", snap.alive as u32),
            ("KILLERS ", snap.killers as u32),
            ("TARGET  ", snap.threshold as u32),
        ] {
            let cx = fb.put_str(x, y, name, label);
            fb.put_u32(cx, y, v, value);
            y += 1;
        }

        y += 1;
        for line in HELP_LINES {
            if y >= viewport.height.saturating_sub(1) {
                break;
            }
            fb.put_str_max(x, y, line, PANEL_W, dim);
            y += 1;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, overlay: &Overlay<'_>, viewport: Viewport) {
        let w = (viewport.width.saturating_sub(4)).min(44);
        let h: u16 = 6;
        if w < 12 || viewport.height < h {
            return;
        }
        let x = (viewport.width - w) / 2;
        let y = (viewport.height - h) / 2;

        let body = CellStyle::new(BLACK, CREAM);
        fb.fill_rect(x, y, w, h, ' ', body);
        draw_border(fb, x, y, w, h, CellStyle::new(RED, CREAM));

        let title_x = x + (w.saturating_sub(overlay.title.chars().count() as u16 + 2)) / 2;
        fb.put_str(title_x, y, " ", body);
        let tx = fb.put_str(title_x + 1, y, overlay.title, body.bold());
        fb.put_char(tx, y, ' ', body);

        let cx = fb.put_str_max(x + 2, y + 2, overlay.label, w - 4, body.bold());
        let cx = fb.put_str(cx, y + 2, ": ", body);
        let avail = (x + w - 2).saturating_sub(cx);
        let end = fb.put_str_max(cx, y + 2, overlay.input, avail, body);
        if end < x + w - 2 {
            fb.put_char(end, y + 2, '_', body.bold());
        }

        fb.put_str_max(x + 2, y + 4, overlay.hint, w - 4, body.dim());
    }
}

const HELP_LINES: [&str; 10] = [
    "↑↓    select",
    "→ +   hit",
    "← -   miss",
    "a     add player",
    "e     rename",
    "#     renumber",
    "x     remove",
    "g     new game",
    "R     reset all",
    "q     quit",
];

fn row_colors(status: PlayerStatus, row: usize) -> (Rgb, Rgb) {
    match status {
        PlayerStatus::Killer => (WHITE, GREEN),
        PlayerStatus::Eliminated => (WHITE, DEAD),
        PlayerStatus::Active if row % 2 == 0 => (BLACK, CREAM),
        PlayerStatus::Active => (BLACK, GRAY),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '╭', style);
    fb.put_char(x + w - 1, y, '╮', style);
    fb.put_char(x, y + h - 1, '╰', style);
    fb.put_char(x + w - 1, y + h - 1, '╯', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(12345), 5);
    }

    #[test]
    fn test_row_colors_follow_status() {
        assert_eq!(row_colors(PlayerStatus::Killer, 3), (WHITE, GREEN));
        assert_eq!(row_colors(PlayerStatus::Eliminated, 0), (WHITE, DEAD));
        assert_eq!(row_colors(PlayerStatus::Active, 0).1, CREAM);
        assert_eq!(row_colors(PlayerStatus::Active, 1).1, GRAY);
    }

    #[test]
    fn test_table_width_grows_with_threshold() {
        assert_eq!(ScoreboardView::table_width(3), ScoreboardView::table_width(5));
        assert!(ScoreboardView::table_width(10) > ScoreboardView::table_width(5));
    }
}
