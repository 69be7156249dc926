//! Browser engine state machine (pure).
//!
//! All state transitions are plain functions testable without a TUI.

pub mod action_handler;
pub mod app_state;
pub mod filter;
pub mod marker;
pub mod sort;
pub mod text_input;
pub mod viewport;

// Re-export for convenience
pub use action_handler::{handle_action, ActionOutcome};
pub use app_state::AppState;
pub use filter::{FilterTokens, LineCache, ResultLine};
pub use marker::Marker;
pub use sort::{SortController, SortDirection};
pub use text_input::{FocusRing, InputField, TextInput};
pub use viewport::Viewport;
