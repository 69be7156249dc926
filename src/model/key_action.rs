//! Domain-level keyboard actions independent of key bindings.

use crate::model::Column;

/// Abstract input events the browser reacts to.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`,
/// so sorting works the same whether it arrives as F1 or as `!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Text entry
    /// Append a character to the focused input field.
    Insert(char),
    /// Delete the last character of the focused input field. Default: Backspace
    DeleteBack,
    /// Move focus to the next input field. Default: Tab
    CycleFocus,
    /// Connect to the direct ID or the marked line. Default: Enter
    Commit,

    // List scrolling
    /// Scroll the list up one line. Default: ↑
    ScrollUp,
    /// Scroll the list down one line. Default: ↓
    ScrollDown,
    /// Scroll the list left by a third of the width. Default: ←
    ScrollLeft,
    /// Scroll the list right by a third of the width. Default: →
    ScrollRight,
    /// Scroll up one page. Default: Page Up
    PageUp,
    /// Scroll down one page. Default: Page Down
    PageDown,
    /// Jump to the first entry. Default: Home
    ScrollToTop,
    /// Jump to the last page. Default: End
    ScrollToBottom,

    // Marker
    /// Move the marker up within the display. Default: Shift+↑
    MarkerUp,
    /// Move the marker down within the display. Default: Shift+↓
    MarkerDown,
    /// Move the marker to the first displayed line. Default: Shift+←
    MarkerToTop,
    /// Move the marker to the last displayed line. Default: Shift+→
    MarkerToBottom,

    // Sorting
    /// Sort by a column, flipping the shared direction. Default: F1-F4, or !@#$ in Conn #
    SortBy(Column),

    // Application
    /// Toggle the key binding overlay. Default: Ctrl+h
    Help,
    /// Exit the application. Default: Ctrl+q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action still applies while the help overlay is open.
    pub fn allowed_during_help(self) -> bool {
        matches!(self, KeyAction::Help | KeyAction::Quit)
    }
}
