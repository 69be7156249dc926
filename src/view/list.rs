//! Connection list widget.
//!
//! Draws the visible slice of the filtered results, shifted left by the
//! horizontal scroll offset, with the marked line highlighted across the
//! full row.

use super::renderable::Renderable;
use super::styles::ScreenStyles;
use crate::state::{AppState, ResultLine};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthChar;

/// The scrollable list of connections.
pub struct ConnectionList<'a> {
    lines: &'a [ResultLine],
    x_offset: usize,
    marker_line: Option<usize>,
    styles: &'a ScreenStyles,
}

impl<'a> ConnectionList<'a> {
    /// List showing the current viewport of `state`.
    pub fn new(state: &'a AppState, styles: &'a ScreenStyles) -> Self {
        Self {
            lines: state.visible_lines(),
            x_offset: state.viewport().x_offset(),
            marker_line: state.selected_id().map(|_| state.marker_line()),
            styles,
        }
    }
}

impl Renderable for ConnectionList<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let width = usize::from(area.width);
        for (index, (row, line)) in area.rows().zip(self.lines).enumerate() {
            let style = if self.marker_line == Some(index) {
                buf.set_style(row, self.styles.marker);
                self.styles.marker
            } else {
                Style::default()
            };
            let text = slice_columns(&line.text, self.x_offset, width);
            buf.set_stringn(row.x, row.y, text, width, style);
        }
    }
}

/// Cut `width` display columns out of `text`, starting at column `skip`.
///
/// A double-width character cut in half by the left edge becomes a space so
/// the rest of the line stays aligned.
pub fn slice_columns(text: &str, skip: usize, width: usize) -> String {
    let mut out = String::new();
    let mut column = 0;
    let mut used = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if column < skip {
            column += ch_width;
            if column > skip {
                let visible = (column - skip).min(width - used);
                out.extend(std::iter::repeat_n(' ', visible));
                used += visible;
            }
            continue;
        }
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
        column += ch_width;
    }

    out
}
