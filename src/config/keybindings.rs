//! Keyboard bindings configuration.
//!
//! Lookup table keyed by `(InputField, KeyEvent)` for bindings that depend on
//! which field has focus, plus a global `KeyEvent` table. Unbound printable
//! characters fall through to [`KeyAction::Insert`].

use crate::model::{Column, KeyAction};
use crate::state::InputField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    global: HashMap<KeyEvent, KeyAction>,
    per_field: HashMap<(InputField, KeyEvent), KeyAction>,
}

impl KeyBindings {
    /// Look up the action for `key` while `field` has focus.
    ///
    /// Field bindings shadow global ones. A plain or shifted character with
    /// no binding resolves to `Insert`; whether the field accepts it is
    /// decided by the state.
    pub fn resolve(&self, field: InputField, key: KeyEvent) -> Option<KeyAction> {
        let key = normalize(key);
        if let Some(action) = self.per_field.get(&(field, key)) {
            return Some(*action);
        }
        if let Some(action) = self.global.get(&key) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(KeyAction::Insert(ch))
            }
            _ => None,
        }
    }

    /// Global action bound to `key`, ignoring focus and the `Insert` fallback.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.global.get(&normalize(key)).copied()
    }
}

/// Reduce `key` to the code and modifiers the tables are keyed on.
///
/// Terminals disagree on whether punctuation such as `!` carries SHIFT, so
/// SHIFT is dropped for every non-alphabetic character.
fn normalize(key: KeyEvent) -> KeyEvent {
    let mut modifiers = key.modifiers;
    if let KeyCode::Char(ch) = key.code {
        if !ch.is_alphabetic() {
            modifiers.remove(KeyModifiers::SHIFT);
        }
    }
    KeyEvent::new(key.code, modifiers)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut global = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            global.insert(KeyEvent::new(code, modifiers), action);
        };

        // Text entry
        bind(KeyCode::Backspace, KeyModifiers::NONE, KeyAction::DeleteBack);
        bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::CycleFocus);
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Commit);

        // List scrolling
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::ScrollLeft);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::ScrollRight);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Marker
        bind(KeyCode::Up, KeyModifiers::SHIFT, KeyAction::MarkerUp);
        bind(KeyCode::Down, KeyModifiers::SHIFT, KeyAction::MarkerDown);
        bind(KeyCode::Left, KeyModifiers::SHIFT, KeyAction::MarkerToTop);
        bind(KeyCode::Right, KeyModifiers::SHIFT, KeyAction::MarkerToBottom);

        // Sorting
        for column in Column::ALL {
            let function_key = u8::try_from(column.index() + 1).unwrap_or(1);
            bind(
                KeyCode::F(function_key),
                KeyModifiers::NONE,
                KeyAction::SortBy(column),
            );
        }

        // Application controls
        bind(KeyCode::Char('h'), KeyModifiers::CONTROL, KeyAction::Help);
        bind(KeyCode::Char('q'), KeyModifiers::CONTROL, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        // `!@#$` sort only where they cannot be typed as digits.
        let mut per_field = HashMap::new();
        for (ch, column) in ['!', '@', '#', '$'].into_iter().zip(Column::ALL) {
            per_field.insert(
                (
                    InputField::Connection,
                    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE),
                ),
                KeyAction::SortBy(column),
            );
        }

        Self { global, per_field }
    }
}
