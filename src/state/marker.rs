//! Highlighted line within the visible slice (pure).
//!
//! The marker indexes the visible slice, not the full result list, and moves
//! independently of the viewport: scrolling never drags the marker and
//! moving the marker never scrolls.

use crate::model::RecordId;
use crate::state::filter::ResultLine;

/// Marker position and the record it currently resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marker {
    line: usize,
    selected: Option<RecordId>,
}

impl Marker {
    /// Index of the marked line within the visible slice.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Record under the marker after the last resolve.
    pub fn selected(&self) -> Option<RecordId> {
        self.selected
    }

    /// Pull the marker back onto the last visible line if it fell past it.
    ///
    /// A position that is still valid is kept as is.
    pub fn clamp(&mut self, visible_count: usize) {
        self.line = self.line.min(visible_count.saturating_sub(1));
    }

    /// Move by `delta` lines within `[0, visible_count - 1]`.
    pub fn move_by(&mut self, delta: isize, visible_count: usize) {
        let moved = if delta < 0 {
            self.line.saturating_sub(delta.unsigned_abs())
        } else {
            self.line.saturating_add(delta.unsigned_abs())
        };
        self.line = moved.min(visible_count.saturating_sub(1));
    }

    /// Jump to the first visible line.
    pub fn jump_to_top(&mut self) {
        self.line = 0;
    }

    /// Jump to the last visible line.
    pub fn jump_to_bottom(&mut self, visible_count: usize) {
        self.line = visible_count.saturating_sub(1);
    }

    /// Resolve the marked line of `visible` to its record.
    ///
    /// An empty slice resolves to no selection.
    pub fn resolve(&mut self, visible: &[ResultLine]) -> Option<RecordId> {
        self.selected = visible.get(self.line).map(|line| line.id);
        self.selected
    }
}
