//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod input_bar;
pub mod layout;
mod list;
pub mod renderable;
mod styles;

pub use help::HelpOverlay;
pub use input_bar::{HelpBar, InputBox};
pub use layout::{render_screen, ScreenLayout};
pub use list::{slice_columns, ConnectionList};
pub use renderable::{render_all, Renderable};
pub use styles::{ColorConfig, ScreenStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::launch::{Launch, LaunchError};
use crate::model::{KeyAction, Record};
use crate::state::{handle_action, ActionOutcome, AppState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Terminal below the minimum size at startup
    #[error(
        "Terminal is {width}x{height}, sshpick needs at least {}x{}",
        constants::MIN_TERMINAL_WIDTH,
        constants::MIN_TERMINAL_HEIGHT
    )]
    TerminalTooSmall {
        /// Columns available.
        width: u16,
        /// Rows available.
        height: u16,
    },

    /// Connection could not be started
    #[error("Launch failed: {0}")]
    Launch(#[from] LaunchError),
}

/// Settings the browser needs beyond the records themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiOptions {
    /// Program the record command is appended to.
    pub ssh_program: String,
    /// Exit once a connection ends instead of returning to the list.
    pub quit_after_connect: bool,
    /// Text typed into `Filter:` before the first frame.
    pub initial_filter: Option<String>,
    /// Color output setting.
    pub color: ColorConfig,
}

impl TuiOptions {
    /// Options from resolved configuration.
    pub fn from_config(
        config: &ResolvedConfig,
        initial_filter: Option<String>,
        color: ColorConfig,
    ) -> Self {
        Self {
            ssh_program: config.ssh_program.clone(),
            quit_after_connect: config.quit_after_connect,
            initial_filter,
            color,
        }
    }
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self::from_config(&ResolvedConfig::default(), None, ColorConfig::with_colors(true))
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: ScreenStyles,
    options: TuiOptions,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Checks the terminal size, then sets up raw mode with alternate screen.
    pub fn new(records: Vec<Record>, options: TuiOptions) -> Result<Self, TuiError> {
        let (width, height) = crossterm::terminal::size()?;
        if !layout::fits(width, height) {
            return Err(TuiError::TerminalTooSmall { width, height });
        }

        enter_terminal()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Self::with_terminal(terminal, records, options)
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits, or after a connection ends when
    /// `quit_after_connect` is set.
    pub fn run(&mut self) -> Result<(), TuiError> {
        loop {
            self.draw()?;

            match event::read()? {
                Event::Key(key) => match self.handle_key(key) {
                    ActionOutcome::Continue => {}
                    ActionOutcome::Quit => return Ok(()),
                    ActionOutcome::Connect(record) => {
                        if self.connect(&record)? {
                            return Ok(());
                        }
                    }
                },
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => {}
            }
        }
    }

    /// Leave the TUI, run the connection, then come back or finish.
    ///
    /// Returns true when the application should exit.
    fn connect(&mut self, record: &Record) -> Result<bool, TuiError> {
        let launch = Launch::new(&self.options.ssh_program, record.command());

        restore_terminal()?;
        println!("Connecting to {} ({})", record.name(), record.command());

        let outcome = launch.and_then(|launch| {
            println!("$ {}", launch.display());
            launch.run()
        });

        match outcome {
            Ok(status) if self.options.quit_after_connect => {
                info!(%status, "Exiting after connection");
                return Ok(true);
            }
            Ok(status) => println!("Connection to {} ended ({status})", record.name()),
            Err(err) if self.options.quit_after_connect => return Err(err.into()),
            Err(err) => {
                warn!(error = %err, "Connection failed");
                println!("Connection to {} failed: {err}", record.name());
            }
        }

        println!("Press Enter to return to sshpick");
        let _ = io::stdin().read_line(&mut String::new());

        enter_terminal()?;
        self.terminal.clear()?;
        let size = self.terminal.size()?;
        self.handle_resize(size.width, size.height);
        Ok(false)
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the application around an existing terminal.
    ///
    /// Geometry comes from the terminal size; the initial filter, if any, is
    /// applied before the first frame.
    pub fn with_terminal(
        terminal: Terminal<B>,
        records: Vec<Record>,
        options: TuiOptions,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let layout = ScreenLayout::new(Rect::new(0, 0, size.width, size.height));

        let mut app_state = AppState::new(records, layout.text_lines(), layout.text_width());
        app_state.set_filter_capacity(layout.filter_capacity());
        if let Some(filter) = &options.initial_filter {
            app_state.type_filter(filter);
        }

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: ScreenStyles::new(options.color),
            options,
        })
    }

    /// Current browser state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Underlying terminal, for buffer inspection.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    pub fn handle_key(&mut self, key: KeyEvent) -> ActionOutcome {
        if key.kind == KeyEventKind::Release {
            return ActionOutcome::Continue;
        }

        // Ctrl+C always quits, whatever the bindings say.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return ActionOutcome::Quit;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return ActionOutcome::Continue;
        }

        let Some(action) = self.key_bindings.resolve(self.app_state.focus(), key) else {
            return ActionOutcome::Continue;
        };
        if let KeyAction::SortBy(column) = action {
            debug!(?column, "Sort requested");
        }

        handle_action(&mut self.app_state, action)
    }

    /// Handle a terminal resize event
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        let layout = ScreenLayout::new(Rect::new(0, 0, width, height));
        self.app_state
            .set_geometry(layout.text_lines(), layout.text_width());
        self.app_state.set_filter_capacity(layout.filter_capacity());
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| render_screen(frame, state, styles))?;
        Ok(())
    }
}

/// Initialize and run the TUI over `records`
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(records: Vec<Record>, options: TuiOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(records, options)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Switch the terminal into raw mode on the alternate screen
fn enter_terminal() -> Result<(), TuiError> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    Ok(())
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen. Safe to call when the
/// terminal is already restored.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    io::stdout().execute(crossterm::cursor::Show)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
