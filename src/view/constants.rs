//! Layout dimension constants for TUI rendering.

/// Narrowest terminal the browser starts in.
pub const MIN_TERMINAL_WIDTH: u16 = 60;

/// Shortest terminal the browser starts in.
pub const MIN_TERMINAL_HEIGHT: u16 = 15;

/// Rows below the connection list: input row, blank row, help bar.
pub const FOOTER_HEIGHT: u16 = 3;

/// Columns between the `Conn #` box and the `Filter:` box.
pub const INPUT_GAP: u16 = 2;

/// Text of the bottom help bar.
pub const HELP_BAR_TEXT: &str = "Arrows-Scroll  Enter-Select  ctrl-h-Help  ctrl-q-Quit";

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
