//! Keyboard action dispatch.
//!
//! Pure function that transforms AppState in response to a resolved
//! [`KeyAction`]. Terminal side effects (leaving the TUI, spawning ssh) are
//! reported back through [`ActionOutcome`] and performed by the caller.

use crate::model::{KeyAction, Record};
use crate::state::AppState;
use tracing::debug;

/// What the event loop should do after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Keep running.
    Continue,
    /// Exit the application.
    Quit,
    /// Leave the TUI and connect to this record.
    Connect(Record),
}

/// Apply `action` to `state`.
///
/// While the help overlay is open only [`KeyAction::Help`] and
/// [`KeyAction::Quit`] take effect; everything else is dropped.
pub fn handle_action(state: &mut AppState, action: KeyAction) -> ActionOutcome {
    if state.help_visible && !action.allowed_during_help() {
        return ActionOutcome::Continue;
    }

    match action {
        KeyAction::Insert(ch) => {
            state.insert_char(ch);
        }
        KeyAction::DeleteBack => {
            state.delete_back();
        }
        KeyAction::CycleFocus => {
            state.cycle_focus();
        }
        KeyAction::Commit => {
            return match state.commit_target() {
                Some(record) => ActionOutcome::Connect(record.clone()),
                None => ActionOutcome::Continue,
            };
        }

        KeyAction::ScrollUp => state.scroll_vertical(-1),
        KeyAction::ScrollDown => state.scroll_vertical(1),
        KeyAction::ScrollLeft => state.scroll_left(),
        KeyAction::ScrollRight => state.scroll_right(),
        KeyAction::PageUp => state.page_up(),
        KeyAction::PageDown => state.page_down(),
        KeyAction::ScrollToTop => state.jump_home(),
        KeyAction::ScrollToBottom => state.jump_end(),

        KeyAction::MarkerUp => state.move_marker(-1),
        KeyAction::MarkerDown => state.move_marker(1),
        KeyAction::MarkerToTop => state.marker_to_top(),
        KeyAction::MarkerToBottom => state.marker_to_bottom(),

        KeyAction::SortBy(column) => {
            state.sort_by(column);
        }

        KeyAction::Help => {
            state.help_visible = !state.help_visible;
            debug!(visible = state.help_visible, "Toggled help overlay");
        }
        KeyAction::Quit => return ActionOutcome::Quit,
    }

    ActionOutcome::Continue
}
