//! Screen layout and the per-frame draw pass.
//!
//! Pure layout logic: splits the frame into the connection list, the input
//! row, a blank row and the help bar, then hands each area to its widget.

use super::constants::{FOOTER_HEIGHT, INPUT_GAP, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use super::help::HelpOverlay;
use super::input_bar::{chrome_width, HelpBar, InputBox};
use super::list::ConnectionList;
use super::renderable::{render_all, Renderable};
use super::styles::ScreenStyles;
use crate::state::text_input::CONNECTION_INPUT_CAPACITY;
use crate::state::{AppState, InputField};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    Frame,
};

/// Areas of every widget for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Connection list.
    pub list: Rect,
    /// `Conn #` box.
    pub connection_input: Rect,
    /// `Filter:` box.
    pub filter_input: Rect,
    /// Bottom help bar.
    pub help_bar: Rect,
}

impl ScreenLayout {
    /// Split `area` into the screen regions.
    pub fn new(area: Rect) -> Self {
        let [list, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);
        let [input_row, _blank, help_bar] = Layout::vertical([Constraint::Length(1); 3]).areas(footer);

        let connection_width =
            u16::try_from(chrome_width(InputField::Connection) + CONNECTION_INPUT_CAPACITY)
                .unwrap_or(u16::MAX);
        let [connection_input, _gap, filter_input] = Layout::horizontal([
            Constraint::Length(connection_width),
            Constraint::Length(INPUT_GAP),
            Constraint::Min(0),
        ])
        .areas(input_row);

        Self {
            list,
            connection_input,
            filter_input,
            help_bar,
        }
    }

    /// Rows available to the connection list.
    pub fn text_lines(&self) -> usize {
        usize::from(self.list.height)
    }

    /// Columns available to the connection list.
    pub fn text_width(&self) -> usize {
        usize::from(self.list.width)
    }

    /// Characters the `Filter:` box can hold on this screen.
    pub fn filter_capacity(&self) -> usize {
        usize::from(self.filter_input.width).saturating_sub(chrome_width(InputField::Filter))
    }

    /// Area of the box for `field`.
    pub fn input_area(&self, field: InputField) -> Rect {
        match field {
            InputField::Connection => self.connection_input,
            InputField::Filter => self.filter_input,
        }
    }
}

/// Whether a `width` x `height` terminal can show the browser.
pub fn fits(width: u16, height: u16) -> bool {
    width >= MIN_TERMINAL_WIDTH && height >= MIN_TERMINAL_HEIGHT
}

/// Shown instead of the browser while the terminal is below the minimum.
struct SizeNotice;

impl Renderable for SizeNotice {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let message = format!(
            "Terminal too small ({}x{}), need {MIN_TERMINAL_WIDTH}x{MIN_TERMINAL_HEIGHT}",
            area.width, area.height
        );
        buf.set_stringn(area.x, area.y, message, usize::from(area.width), Style::default());
    }
}

/// Draw the whole screen for `state`.
pub fn render_screen(frame: &mut Frame, state: &AppState, styles: &ScreenStyles) {
    let area = frame.area();
    if !fits(area.width, area.height) {
        render_all(&[(area, &SizeNotice as &dyn Renderable)], frame.buffer_mut());
        return;
    }

    let layout = ScreenLayout::new(area);
    let focus = state.focus();

    let list = ConnectionList::new(state, styles);
    let connection = InputBox::new(
        InputField::Connection,
        state.input(InputField::Connection),
        focus == InputField::Connection,
        styles,
    );
    let filter = InputBox::new(
        InputField::Filter,
        state.input(InputField::Filter),
        focus == InputField::Filter,
        styles,
    );
    let help_bar = HelpBar::new(styles);

    let widgets: [(Rect, &dyn Renderable); 4] = [
        (layout.list, &list),
        (layout.connection_input, &connection),
        (layout.filter_input, &filter),
        (layout.help_bar, &help_bar),
    ];
    render_all(&widgets, frame.buffer_mut());

    if state.help_visible {
        render_all(&[(area, &HelpOverlay::new(styles) as &dyn Renderable)], frame.buffer_mut());
        return;
    }

    let focused_box = match focus {
        InputField::Connection => &connection,
        InputField::Filter => &filter,
    };
    frame.set_cursor_position(focused_box.cursor_position(layout.input_area(focus)));
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
