//! Screen styling.
//!
//! Colors follow the classic picker look: the marked line is white on red.
//! With colors disabled, emphasis falls back to text modifiers only.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Config with colors forced on or off.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ScreenStyles =====

/// Styles for every widget on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenStyles {
    /// Marked line in the connection list.
    pub marker: Style,
    /// Label of the focused input field.
    pub focused_label: Style,
    /// Label of an unfocused input field.
    pub label: Style,
    /// Typed text inside an input field.
    pub input: Style,
    /// Bottom help bar.
    pub help_bar: Style,
    /// Help overlay border and title.
    pub overlay_border: Style,
    /// Key column in the help overlay.
    pub overlay_key: Style,
    /// Section headers in the help overlay.
    pub overlay_section: Style,
}

impl ScreenStyles {
    /// Build styles honoring `config`.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                marker: Style::default().fg(Color::White).bg(Color::Red),
                focused_label: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                label: Style::default().fg(Color::Gray),
                input: Style::default().add_modifier(Modifier::UNDERLINED),
                help_bar: Style::default().fg(Color::DarkGray),
                overlay_border: Style::default().fg(Color::Cyan),
                overlay_key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                overlay_section: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                marker: Style::default().add_modifier(Modifier::REVERSED),
                focused_label: Style::default().add_modifier(Modifier::BOLD),
                label: Style::default(),
                input: Style::default().add_modifier(Modifier::UNDERLINED),
                help_bar: Style::default(),
                overlay_border: Style::default(),
                overlay_key: Style::default().add_modifier(Modifier::BOLD),
                overlay_section: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for ScreenStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
