//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by Ctrl+h, dismissed by Esc or Ctrl+h.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::renderable::Renderable;
use super::styles::ScreenStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Shortcut sections: header, then (keys, description) rows.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Scrolling",
        &[
            ("↑/↓", "Scroll one line"),
            ("←/→", "Scroll a third of the width"),
            ("PgUp/PgDn", "Scroll one page"),
            ("Home/End", "First / last page"),
        ],
    ),
    (
        "Marker",
        &[
            ("Shift+↑/↓", "Move the marker"),
            ("Shift+←", "Marker to top of display"),
            ("Shift+→", "Marker to bottom of display"),
        ],
    ),
    (
        "Selecting",
        &[
            ("Tab", "Switch between Conn # and Filter:"),
            ("Enter", "Connect to Conn # or the marked line"),
            ("Backspace", "Delete last character"),
        ],
    ),
    (
        "Sorting",
        &[
            ("F1 or !", "Sort by number"),
            ("F2 or @", "Sort by name"),
            ("F3 or #", "Sort by user@address"),
            ("F4 or $", "Sort by comment"),
        ],
    ),
    (
        "Application",
        &[("Ctrl+h", "Toggle this help"), ("Ctrl+q/Ctrl+c", "Quit")],
    ),
];

/// Width of the key column.
const KEY_COLUMN: usize = 16;

/// Centered overlay listing every binding.
pub struct HelpOverlay<'a> {
    styles: &'a ScreenStyles,
}

impl<'a> HelpOverlay<'a> {
    /// Overlay using `styles`.
    pub fn new(styles: &'a ScreenStyles) -> Self {
        Self { styles }
    }

    /// Build the help content lines grouped by category.
    fn content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (index, (section, rows)) in SECTIONS.iter().enumerate() {
            if index > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(*section, self.styles.overlay_section)));
            for (keys, description) in rows.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<KEY_COLUMN$}"), self.styles.overlay_key),
                    Span::raw(*description),
                ]));
            }
        }
        lines
    }
}

impl Renderable for HelpOverlay<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

        Clear.render(popup_area, buf);

        Paragraph::new(self.content())
            .block(
                Block::default()
                    .title(" Keyboard Shortcuts ")
                    .borders(Borders::ALL)
                    .border_style(self.styles.overlay_border),
            )
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Left)
            .render(popup_area, buf);

        let hint_area = Rect {
            x: popup_area.x,
            y: popup_area.bottom().saturating_sub(1),
            width: popup_area.width,
            height: 1,
        };
        Paragraph::new(Line::from(Span::styled(
            " Press Esc or Ctrl+h to close ",
            Style::default().add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center)
        .render(hint_area, buf);
    }
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}
