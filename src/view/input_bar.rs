//! Input row and help bar widgets.

use super::constants::HELP_BAR_TEXT;
use super::renderable::Renderable;
use super::styles::ScreenStyles;
use crate::state::{InputField, TextInput};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns one input box needs besides its text: label, space, cursor cell.
pub fn chrome_width(field: InputField) -> usize {
    field.label().width() + 2
}

/// One labelled text field, e.g. `Conn # 12`.
pub struct InputBox<'a> {
    field: InputField,
    input: &'a TextInput,
    focused: bool,
    styles: &'a ScreenStyles,
}

impl<'a> InputBox<'a> {
    /// Box for `field` showing `input`.
    pub fn new(
        field: InputField,
        input: &'a TextInput,
        focused: bool,
        styles: &'a ScreenStyles,
    ) -> Self {
        Self {
            field,
            input,
            focused,
            styles,
        }
    }

    /// Text start column within `area`.
    fn text_x(&self, area: Rect) -> u16 {
        let offset = u16::try_from(self.field.label().width() + 1).unwrap_or(u16::MAX);
        area.x.saturating_add(offset)
    }

    /// The tail of the text that fits in `room` columns.
    fn visible_text(&self, room: usize) -> &str {
        let text = self.input.text();
        let mut width = 0;
        let mut start = text.len();
        for (index, ch) in text.char_indices().rev() {
            width += ch.width().unwrap_or(0);
            if width > room {
                break;
            }
            start = index;
        }
        &text[start..]
    }

    /// Terminal cursor position just after the typed text.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let room = usize::from(area.right().saturating_sub(self.text_x(area))).saturating_sub(1);
        let typed = u16::try_from(self.visible_text(room).width()).unwrap_or(u16::MAX);
        let x = self
            .text_x(area)
            .saturating_add(typed)
            .min(area.right().saturating_sub(1));
        Position::new(x, area.y)
    }
}

impl Renderable for InputBox<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            self.styles.focused_label
        } else {
            self.styles.label
        };
        let width = usize::from(area.width);
        buf.set_stringn(area.x, area.y, self.field.label(), width, label_style);

        let text_x = self.text_x(area);
        if text_x >= area.right() {
            return;
        }
        let room = usize::from(area.right() - text_x);
        let field_area = Rect::new(text_x, area.y, area.right() - text_x, 1);
        buf.set_style(field_area, self.styles.input);
        buf.set_stringn(
            text_x,
            area.y,
            self.visible_text(room.saturating_sub(1)),
            room,
            self.styles.input,
        );
    }
}

/// Bottom row with the most common keys.
pub struct HelpBar<'a> {
    styles: &'a ScreenStyles,
}

impl<'a> HelpBar<'a> {
    /// Help bar using `styles`.
    pub fn new(styles: &'a ScreenStyles) -> Self {
        Self { styles }
    }
}

impl Renderable for HelpBar<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        buf.set_stringn(
            area.x,
            area.y,
            HELP_BAR_TEXT,
            usize::from(area.width),
            self.styles.help_bar,
        );
    }
}
